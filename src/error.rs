//! Error types for the Travel API server

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    /// Any internal failure; the cause is only in the server log
    Failure = 1,
    NoSuchClient = 3,
    NoSuchTrip = 4,
    ClientAlreadyExists = 5,
    AlreadyRegistered = 6,
    NoSpotsLeft = 7,
    BadValue = 9,
    NoSuchRoute = 10,
}

/// Coarse classification of an [`AppError`], used to pick the transport outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    CapacityExceeded,
    InsertFailed,
    Validation,
    Unexpected,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Client with id {0} does not exist")]
    NoSuchClient(i32),

    #[error("Trip with id {0} does not exist")]
    NoSuchTrip(i32),

    #[error("Client already exists with such Pesel {0}")]
    ClientAlreadyExists(String),

    #[error("Client {client_id} is already registered for trip {trip_id}")]
    AlreadyRegistered { client_id: i32, trip_id: i32 },

    #[error("No available space for this trip left, id: {0}")]
    NoSpotsLeft(i32),

    /// The write completed without error but did not affect exactly one row
    #[error("Insert did not take effect: {0}")]
    InsertFailed(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A path segment did not parse, e.g. a non-numeric id
    #[error("No route matches: {0}")]
    NoSuchRoute(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NoSuchClient(_) | AppError::NoSuchTrip(_) | AppError::NoSuchRoute(_) => {
                ErrorKind::NotFound
            }
            AppError::ClientAlreadyExists(_) | AppError::AlreadyRegistered { .. } => {
                ErrorKind::Conflict
            }
            AppError::NoSpotsLeft(_) => ErrorKind::CapacityExceeded,
            AppError::InsertFailed(_) => ErrorKind::InsertFailed,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Database(_) => ErrorKind::Unexpected,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NoSuchClient(_) => ErrorCode::NoSuchClient,
            AppError::NoSuchTrip(_) => ErrorCode::NoSuchTrip,
            AppError::ClientAlreadyExists(_) => ErrorCode::ClientAlreadyExists,
            AppError::AlreadyRegistered { .. } => ErrorCode::AlreadyRegistered,
            AppError::NoSpotsLeft(_) => ErrorCode::NoSpotsLeft,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::NoSuchRoute(_) => ErrorCode::NoSuchRoute,
            AppError::InsertFailed(_) | AppError::Database(_) => ErrorCode::Failure,
        }
    }
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::CapacityExceeded => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::InsertFailed | ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Missing, null or mistyped body fields are validation failures
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Ids are integers; anything else matches no route
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NoSuchRoute(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let code = self.code();

        // Internal failures are logged in full and reported with one generic body
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal server error".to_string()
            }
            AppError::InsertFailed(msg) => {
                tracing::error!("Insert failed: {}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (kind.status(), body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// PostgreSQL unique constraint violation (SQLSTATE 23505)
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NoSuchClient(1).kind().status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NoSuchTrip(1).kind().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::ClientAlreadyExists("90010112345".into()).kind().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AlreadyRegistered { client_id: 1, trip_id: 2 }.kind().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NoSpotsLeft(2).kind().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Validation("pesel".into()).kind().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_insert_failed_is_indistinguishable_from_database_failure() {
        // Same status and same body: the boundary does not know why the row is missing.
        let insert = AppError::InsertFailed("0 rows".into()).into_response();
        let database = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(insert.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(insert.status(), database.status());

        let insert_body = insert.into_body().collect().await.unwrap().to_bytes();
        let database_body = database.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(insert_body, database_body);

        let json: serde_json::Value = serde_json::from_slice(&insert_body).unwrap();
        assert_eq!(json["error"], "Failure");
        assert_eq!(json["message"], "Internal server error");
    }

    #[test]
    fn test_unparsable_path_is_not_found() {
        assert_eq!(
            AppError::NoSuchRoute("abc".into()).kind().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::NoSpotsLeft(7).to_string(),
            "No available space for this trip left, id: 7"
        );
        assert_eq!(
            AppError::ClientAlreadyExists("123".into()).to_string(),
            "Client already exists with such Pesel 123"
        );
    }

    #[test]
    fn test_unique_violation_only_matches_database_errors() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }
}
