//! Client directory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        client::{Client, CreateClient},
        registration::ClientTrip,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        self.repository.clients.exists_by_id(id).await
    }

    pub async fn exists_by_pesel(&self, pesel: &str) -> AppResult<bool> {
        self.repository.clients.exists_by_pesel(pesel).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Client> {
        self.repository.clients.get_by_id(id).await
    }

    /// Create a client, refusing a PESEL that is already taken
    pub async fn create(&self, data: &CreateClient) -> AppResult<i32> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.clients.exists_by_pesel(&data.pesel).await? {
            return Err(AppError::ClientAlreadyExists(data.pesel.clone()));
        }

        let id = self.repository.clients.create(data).await?;
        tracing::info!(client_id = id, "Client created");
        Ok(id)
    }

    /// Trips the client is registered for
    pub async fn list_trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>> {
        if !self.repository.clients.exists_by_id(client_id).await? {
            return Err(AppError::NoSuchClient(client_id));
        }
        self.repository.clients.list_trips(client_id).await
    }
}
