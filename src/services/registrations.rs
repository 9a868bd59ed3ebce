//! Trip registration service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::registration::{encode_date, Registration},
    repository::Repository,
};

use super::clock::Clock;

#[derive(Clone)]
pub struct RegistrationsService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl RegistrationsService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Register a client for a trip, dated today and unpaid
    pub async fn register(&self, client_id: i32, trip_id: i32) -> AppResult<Registration> {
        if !self.repository.clients.exists_by_id(client_id).await? {
            return Err(AppError::NoSuchClient(client_id));
        }

        let registered_at = encode_date(self.clock.today());
        let result = self
            .repository
            .registrations
            .register(client_id, trip_id, registered_at)
            .await;

        if result.is_ok() {
            tracing::info!(client_id, trip_id, registered_at, "Client registered for trip");
        }

        result
    }

    /// Remove a registration; `false` when the pair was not registered
    pub async fn deregister(&self, client_id: i32, trip_id: i32) -> AppResult<bool> {
        let removed = self.repository.registrations.delete(client_id, trip_id).await?;
        if removed {
            tracing::info!(client_id, trip_id, "Client deregistered from trip");
        }
        Ok(removed)
    }

    pub async fn get(&self, client_id: i32, trip_id: i32) -> AppResult<Option<Registration>> {
        self.repository.registrations.get(client_id, trip_id).await
    }

    pub async fn count_for_trip(&self, trip_id: i32) -> AppResult<i64> {
        self.repository.registrations.count_for_trip(trip_id).await
    }
}
