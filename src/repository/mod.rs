//! Repository layer for database operations

pub mod clients;
pub mod registrations;
pub mod trips;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub clients: clients::ClientsRepository,
    pub trips: trips::TripsRepository,
    pub registrations: registrations::RegistrationsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            clients: clients::ClientsRepository::new(pool.clone()),
            trips: trips::TripsRepository::new(pool.clone()),
            registrations: registrations::RegistrationsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database, used by the readiness check
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
