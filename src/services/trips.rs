//! Trip registry service

use crate::{error::AppResult, models::trip::Trip, repository::Repository};

#[derive(Clone)]
pub struct TripsService {
    repository: Repository,
}

impl TripsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        self.repository.trips.exists_by_id(id).await
    }

    pub async fn list(&self) -> AppResult<Vec<Trip>> {
        self.repository.trips.list().await
    }
}
