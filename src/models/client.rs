//! Client model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Client record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[sqlx(rename = "id_client")]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    /// National identity number, unique across clients
    pub pesel: String,
}

/// Create client request
///
/// Keys are camelCase; the PascalCase spelling is accepted as well.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    #[serde(alias = "FirstName")]
    #[validate(length(min = 1, max = 120, message = "FirstName must be 1-120 characters"))]
    pub first_name: String,
    #[serde(alias = "LastName")]
    #[validate(length(min = 1, max = 120, message = "LastName must be 1-120 characters"))]
    pub last_name: String,
    #[serde(alias = "Email")]
    #[validate(length(min = 1, max = 120, message = "Email must be 1-120 characters"))]
    pub email: String,
    #[serde(alias = "Telephone")]
    #[validate(length(min = 1, max = 120, message = "Telephone must be 1-120 characters"))]
    pub telephone: String,
    #[serde(alias = "Pesel")]
    #[validate(length(min = 1, max = 120, message = "Pesel must be 1-120 characters"))]
    pub pesel: String,
}
