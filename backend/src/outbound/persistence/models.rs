//! Internal Diesel row structs for the trailers table.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::trailers;

/// Row struct for reading from the trailers table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = trailers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TrailerRow {
    pub id: Uuid,
    pub unit_number: String,
    pub trailer_type: String,
    pub status: String,
    pub ownership_type: String,
    pub vin: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub capacity: Option<i32>,
    pub axle_count: Option<i16>,
    pub purchase_date: Option<NaiveDate>,
    pub lease_end_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub license_plate: Option<String>,
    pub issuing_state: Option<String>,
    pub registration_expiry: Option<NaiveDate>,
    pub insurance_policy: Option<String>,
    pub insurance_expiry: Option<NaiveDate>,
    pub jurisdiction: Option<String>,
    pub gvwr: Option<i32>,
    pub assigned_yard: Option<String>,
    pub current_location: Option<String>,
    pub attached_truck_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new trailer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = trailers)]
pub(crate) struct NewTrailerRow<'a> {
    pub id: Uuid,
    pub unit_number: &'a str,
    pub trailer_type: &'a str,
    pub status: &'a str,
    pub ownership_type: &'a str,
    pub vin: Option<&'a str>,
    pub year: Option<i32>,
    pub color: Option<&'a str>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub capacity: Option<i32>,
    pub axle_count: Option<i16>,
    pub purchase_date: Option<NaiveDate>,
    pub lease_end_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub license_plate: Option<&'a str>,
    pub issuing_state: Option<&'a str>,
    pub registration_expiry: Option<NaiveDate>,
    pub insurance_policy: Option<&'a str>,
    pub insurance_expiry: Option<NaiveDate>,
    pub jurisdiction: Option<&'a str>,
    pub gvwr: Option<i32>,
    pub assigned_yard: Option<&'a str>,
    pub current_location: Option<&'a str>,
    pub attached_truck_id: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
