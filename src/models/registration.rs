//! Client-trip registration model and the client trip view

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::trip::Country;

/// Encode a date as the `YYYYMMDD` integer stored in `client_trip`
pub fn encode_date(date: NaiveDate) -> i32 {
    date.year() * 10_000 + date.month() as i32 * 100 + date.day() as i32
}

/// Registration row linking a client to a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[sqlx(rename = "id_client")]
    pub client_id: i32,
    #[sqlx(rename = "id_trip")]
    pub trip_id: i32,
    /// Registration date (YYYYMMDD)
    pub registered_at: i32,
    /// Payment date (YYYYMMDD), null until paid
    pub payment_date: Option<i32>,
}

/// Trip as seen by one registered client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientTrip {
    pub client_id: i32,
    pub trip_id: i32,
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub countries: Vec<Country>,
    pub registered_at: i32,
    pub payment_date: Option<i32>,
}

/// One row of the registration/trip/country join; a trip repeats once per country
#[derive(Debug, Clone, FromRow)]
pub struct ClientTripRow {
    pub id_trip: i32,
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub registered_at: i32,
    pub payment_date: Option<i32>,
    pub id_country: Option<i32>,
    pub country_name: Option<String>,
}

/// Fold join rows into one entry per trip, keeping first-seen order.
/// Rows without a country contribute no entry to `countries`.
pub fn group_client_trips(client_id: i32, rows: Vec<ClientTripRow>) -> Vec<ClientTrip> {
    let mut trips: IndexMap<i32, ClientTrip> = IndexMap::new();

    for row in rows {
        let entry = trips.entry(row.id_trip).or_insert_with(|| ClientTrip {
            client_id,
            trip_id: row.id_trip,
            name: row.name,
            description: row.description,
            date_from: row.date_from,
            date_to: row.date_to,
            max_people: row.max_people,
            countries: Vec::new(),
            registered_at: row.registered_at,
            payment_date: row.payment_date,
        });

        if let (Some(id), Some(name)) = (row.id_country, row.country_name) {
            entry.countries.push(Country { id, name });
        }
    }

    trips.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(trip: i32, country: Option<(i32, &str)>) -> ClientTripRow {
        let from = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ClientTripRow {
            id_trip: trip,
            name: format!("Trip {}", trip),
            description: "Sightseeing".to_string(),
            date_from: from,
            date_to: from,
            max_people: 10,
            registered_at: 20240601,
            payment_date: None,
            id_country: country.map(|(id, _)| id),
            country_name: country.map(|(_, name)| name.to_string()),
        }
    }

    #[test]
    fn test_encode_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(encode_date(date), 20240309);
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(encode_date(date), 19991231);
    }

    #[test]
    fn test_group_merges_countries_per_trip() {
        let rows = vec![
            row(2, Some((1, "Poland"))),
            row(2, Some((3, "Germany"))),
            row(5, Some((1, "Poland"))),
        ];
        let trips = group_client_trips(7, rows);

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].trip_id, 2);
        assert_eq!(trips[0].client_id, 7);
        assert_eq!(
            trips[0].countries.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Poland", "Germany"]
        );
        assert_eq!(trips[1].trip_id, 5);
        assert_eq!(trips[1].countries.len(), 1);
    }

    #[test]
    fn test_group_keeps_trip_without_country() {
        let trips = group_client_trips(1, vec![row(4, None)]);
        assert_eq!(trips.len(), 1);
        assert!(trips[0].countries.is_empty());
    }

    #[test]
    fn test_group_empty() {
        assert!(group_client_trips(1, Vec::new()).is_empty());
    }
}
