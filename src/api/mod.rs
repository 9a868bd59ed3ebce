//! API handlers for the Travel REST endpoints

pub mod clients;
pub mod health;
pub mod openapi;
pub mod trips;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections are reported as [`AppError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose rejections are reported as [`AppError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Clients
        .route("/clients", post(clients::create_client))
        .route("/clients/:client_id/trips", get(clients::list_client_trips))
        .route(
            "/clients/:client_id/trips/:trip_id",
            put(clients::register_for_trip).delete(clients::deregister_from_trip),
        )
        // Trips
        .route("/trips", get(trips::list_trips));

    let status = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check));

    Router::new()
        .nest("/api", api)
        .merge(status)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
