//! Trips repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::trip::Trip};

#[derive(Clone)]
pub struct TripsRepository {
    pool: Pool<Postgres>,
}

impl TripsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check whether a trip with this ID exists
    pub async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM trip WHERE id_trip = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// List every trip
    pub async fn list(&self) -> AppResult<Vec<Trip>> {
        let rows = sqlx::query_as::<_, Trip>(
            "SELECT id_trip, name, description, date_from, date_to, max_people FROM trip ORDER BY id_trip",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
