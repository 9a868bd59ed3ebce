//! Trip and country models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Trip record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[sqlx(rename = "id_trip")]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    /// Maximum number of registered clients
    pub max_people: i32,
}

/// Country a trip visits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[sqlx(rename = "id_country")]
    pub id: i32,
    pub name: String,
}
