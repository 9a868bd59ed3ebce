//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{clients, health, trips};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel API",
        version = "0.1.0",
        description = "Travel clients, trips and trip registrations"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Clients
        clients::list_client_trips,
        clients::create_client,
        clients::register_for_trip,
        clients::deregister_from_trip,
        // Trips
        trips::list_trips,
    ),
    components(
        schemas(
            // Clients
            crate::models::client::Client,
            crate::models::client::CreateClient,
            clients::CreateClientResponse,
            clients::DeregisterResponse,
            // Trips
            crate::models::trip::Trip,
            crate::models::trip::Country,
            // Registrations
            crate::models::registration::Registration,
            crate::models::registration::ClientTrip,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "clients", description = "Clients and their trip registrations"),
        (name = "trips", description = "Trip catalogue")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_registration_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/clients"));
        assert!(paths.contains_key("/api/clients/{client_id}/trips"));
        assert!(paths.contains_key("/api/clients/{client_id}/trips/{trip_id}"));
        assert!(paths.contains_key("/api/trips"));
    }
}
