//! Shared helpers for database-backed tests.
//!
//! Every test receives a fresh database from `#[sqlx::test]` with the crate
//! migrations applied; trips and countries are seeded through these helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use travel_api::{
    api,
    models::client::CreateClient,
    repository::Repository,
    services::{clock::FixedClock, Services},
    AppState,
};

/// Date every registration is stamped with unless a test picks another clock
pub fn registration_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn services_on(pool: PgPool, today: NaiveDate) -> Services {
    Services::new(Repository::new(pool), Arc::new(FixedClock(today)))
}

pub fn services(pool: PgPool) -> Services {
    services_on(pool, registration_day())
}

/// Build the full application router on the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    api::create_router(AppState::new(services(pool)))
}

pub fn client_request(pesel: &str) -> CreateClient {
    CreateClient {
        first_name: "Anna".to_string(),
        last_name: "Nowak".to_string(),
        email: format!("anna.{}@example.com", pesel),
        telephone: "+48 500 600 700".to_string(),
        pesel: pesel.to_string(),
    }
}

pub async fn insert_trip(pool: &PgPool, name: &str, max_people: i32) -> i32 {
    let from = NaiveDate::from_ymd_opt(2024, 8, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let to = NaiveDate::from_ymd_opt(2024, 8, 14)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();

    sqlx::query_scalar(
        r#"
        INSERT INTO trip (name, description, date_from, date_to, max_people)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id_trip
        "#,
    )
    .bind(name)
    .bind(format!("{} description", name))
    .bind(from)
    .bind(to)
    .bind(max_people)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_country(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO country (name) VALUES ($1) RETURNING id_country")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_country(pool: &PgPool, country_id: i32, trip_id: i32) {
    sqlx::query("INSERT INTO country_trip (id_country, id_trip) VALUES ($1, $2)")
        .bind(country_id)
        .bind(trip_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Send a request with an optional JSON body through the router.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
