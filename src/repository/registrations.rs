//! Client-trip registrations repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{is_unique_violation, AppError, AppResult},
    models::registration::Registration,
};

#[derive(Clone)]
pub struct RegistrationsRepository {
    pool: Pool<Postgres>,
}

impl RegistrationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the registration for a client/trip pair, if any
    pub async fn get(&self, client_id: i32, trip_id: i32) -> AppResult<Option<Registration>> {
        let row = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id_client, id_trip, registered_at, payment_date
            FROM client_trip
            WHERE id_client = $1 AND id_trip = $2
            "#,
        )
        .bind(client_id)
        .bind(trip_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Count registrations for a trip
    pub async fn count_for_trip(&self, trip_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM client_trip WHERE id_trip = $1")
            .bind(trip_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Register a client for a trip.
    ///
    /// Runs in one transaction holding a row lock on the trip, so concurrent
    /// registrations for the same trip are serialized between the capacity
    /// check and the insert. Checks, in order: trip exists, pair not yet
    /// registered, a spot is left. The caller validates the client.
    pub async fn register(
        &self,
        client_id: i32,
        trip_id: i32,
        registered_at: i32,
    ) -> AppResult<Registration> {
        let mut tx = self.pool.begin().await?;

        let max_people =
            sqlx::query_scalar::<_, i32>("SELECT max_people FROM trip WHERE id_trip = $1 FOR UPDATE")
                .bind(trip_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(AppError::NoSuchTrip(trip_id))?;

        let already_registered: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM client_trip WHERE id_client = $1 AND id_trip = $2)",
        )
        .bind(client_id)
        .bind(trip_id)
        .fetch_one(&mut *tx)
        .await?;

        if already_registered {
            return Err(AppError::AlreadyRegistered { client_id, trip_id });
        }

        let current: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM client_trip WHERE id_trip = $1")
            .bind(trip_id)
            .fetch_one(&mut *tx)
            .await?;

        if current >= max_people as i64 {
            tracing::info!(
                trip_id,
                client_id,
                current,
                max_people,
                "Registration refused, trip is full"
            );
            return Err(AppError::NoSpotsLeft(trip_id));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO client_trip (id_client, id_trip, registered_at, payment_date)
            VALUES ($1, $2, $3, NULL)
            "#,
        )
        .bind(client_id)
        .bind(trip_id)
        .bind(registered_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::AlreadyRegistered { client_id, trip_id }
            } else {
                AppError::Database(e)
            }
        })?;

        if result.rows_affected() != 1 {
            return Err(AppError::InsertFailed(format!(
                "registering client {} for trip {} affected {} rows",
                client_id,
                trip_id,
                result.rows_affected()
            )));
        }

        tx.commit().await?;

        Ok(Registration {
            client_id,
            trip_id,
            registered_at,
            payment_date: None,
        })
    }

    /// Delete a registration, returning whether a row was removed
    pub async fn delete(&self, client_id: i32, trip_id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM client_trip WHERE id_client = $1 AND id_trip = $2")
            .bind(client_id)
            .bind(trip_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
