//! Clients repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{is_unique_violation, AppError, AppResult},
    models::{
        client::{Client, CreateClient},
        registration::{group_client_trips, ClientTrip, ClientTripRow},
    },
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: Pool<Postgres>,
}

impl ClientsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check whether a client with this ID exists
    pub async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM client WHERE id_client = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Check whether a client with this PESEL exists
    pub async fn exists_by_pesel(&self, pesel: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM client WHERE pesel = $1)")
                .bind(pesel)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Get client by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(
            r#"
            SELECT id_client, first_name, last_name, email, telephone, pesel
            FROM client
            WHERE id_client = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NoSuchClient(id))
    }

    /// Insert a client and return its generated ID.
    /// The unique index on `pesel` catches duplicates that slip past the pre-check.
    pub async fn create(&self, data: &CreateClient) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO client (first_name, last_name, email, telephone, pesel)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id_client
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.telephone)
        .bind(&data.pesel)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::ClientAlreadyExists(data.pesel.clone())
            } else {
                AppError::Database(e)
            }
        })
    }

    /// Trips a client is registered for, with the countries each trip visits
    pub async fn list_trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>> {
        let rows = sqlx::query_as::<_, ClientTripRow>(
            r#"
            SELECT t.id_trip, t.name, t.description, t.date_from, t.date_to, t.max_people,
                   ct.registered_at, ct.payment_date,
                   co.id_country, co.name AS country_name
            FROM client_trip ct
            JOIN trip t ON t.id_trip = ct.id_trip
            LEFT JOIN country_trip ctr ON ctr.id_trip = t.id_trip
            LEFT JOIN country co ON co.id_country = ctr.id_country
            WHERE ct.id_client = $1
            ORDER BY t.date_from, t.id_trip, co.id_country
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(group_client_trips(client_id, rows))
    }
}
