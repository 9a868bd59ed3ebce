//! Business logic services

pub mod clients;
pub mod clock;
pub mod registrations;
pub mod trips;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub clients: clients::ClientsService,
    pub trips: trips::TripsService,
    pub registrations: registrations::RegistrationsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository and date source
    pub fn new(repository: Repository, clock: Arc<dyn clock::Clock>) -> Self {
        Self {
            clients: clients::ClientsService::new(repository.clone()),
            trips: trips::TripsService::new(repository.clone()),
            registrations: registrations::RegistrationsService::new(repository.clone(), clock),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        self.repository.ping().await
    }
}
