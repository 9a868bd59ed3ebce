//! Client endpoints: creation, trip listing and trip registration

use axum::{
    extract::State,
    http::{header, StatusCode},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::{ApiJson, ApiPath};
use crate::{
    error::AppResult,
    models::{
        client::CreateClient,
        registration::{ClientTrip, Registration},
    },
};

/// Identity of a newly created client
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientResponse {
    pub client_id: i32,
}

/// Outcome of a deregistration
#[derive(Serialize, ToSchema)]
pub struct DeregisterResponse {
    /// False when the client was not registered for the trip
    pub removed: bool,
}

/// List the trips a client is registered for
#[utoipa::path(
    get,
    path = "/api/clients/{client_id}/trips",
    tag = "clients",
    params(("client_id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client's trips", body = Vec<ClientTrip>),
        (status = 404, description = "Client not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_client_trips(
    State(state): State<crate::AppState>,
    ApiPath(client_id): ApiPath<i32>,
) -> AppResult<Json<Vec<ClientTrip>>> {
    let trips = state.services.clients.list_trips(client_id).await?;
    Ok(Json(trips))
}

/// Create a client
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "clients",
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client created", body = CreateClientResponse),
        (status = 400, description = "Invalid input or PESEL already used", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_client(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateClient>,
) -> AppResult<(
    StatusCode,
    [(header::HeaderName, String); 1],
    Json<CreateClientResponse>,
)> {
    let client_id = state.services.clients.create(&data).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/clients/{}/trips", client_id))],
        Json(CreateClientResponse { client_id }),
    ))
}

/// Register a client for a trip
#[utoipa::path(
    put,
    path = "/api/clients/{client_id}/trips/{trip_id}",
    tag = "clients",
    params(
        ("client_id" = i32, Path, description = "Client ID"),
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Client registered", body = Registration),
        (status = 400, description = "Client already registered for this trip", body = crate::error::ErrorResponse),
        (status = 404, description = "Client or trip not found", body = crate::error::ErrorResponse),
        (status = 422, description = "No spots left on the trip", body = crate::error::ErrorResponse),
        (status = 500, description = "Registration was not stored", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_for_trip(
    State(state): State<crate::AppState>,
    ApiPath((client_id, trip_id)): ApiPath<(i32, i32)>,
) -> AppResult<Json<Registration>> {
    let registration = state
        .services
        .registrations
        .register(client_id, trip_id)
        .await?;
    Ok(Json(registration))
}

/// Remove a client's registration for a trip
#[utoipa::path(
    delete,
    path = "/api/clients/{client_id}/trips/{trip_id}",
    tag = "clients",
    params(
        ("client_id" = i32, Path, description = "Client ID"),
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Deregistration outcome", body = DeregisterResponse)
    )
)]
pub async fn deregister_from_trip(
    State(state): State<crate::AppState>,
    ApiPath((client_id, trip_id)): ApiPath<(i32, i32)>,
) -> AppResult<Json<DeregisterResponse>> {
    let removed = state
        .services
        .registrations
        .deregister(client_id, trip_id)
        .await?;
    Ok(Json(DeregisterResponse { removed }))
}
