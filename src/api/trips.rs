//! Trip endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::trip::Trip};

/// List all trips
#[utoipa::path(
    get,
    path = "/api/trips",
    tag = "trips",
    responses(
        (status = 200, description = "Every trip", body = Vec<Trip>)
    )
)]
pub async fn list_trips(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Trip>>> {
    let trips = state.services.trips.list().await?;
    Ok(Json(trips))
}
