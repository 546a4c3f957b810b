//! Driving port for trailer creation.
//!
//! Inbound adapters hand over transport-validated fields. Categorical fields
//! arrive as raw strings and are parsed leniently by the use case.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::Error;
use crate::domain::trailer::{NewTrailer, OwnershipType, TrailerStatus, TrailerType};

use super::TrailerSummary;

/// Fields submitted for a new trailer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTrailerRequest {
    pub unit_number: Option<String>,
    pub trailer_type: Option<String>,
    pub year: Option<i32>,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub capacity: Option<u32>,
    pub axle_count: Option<u8>,
    pub ownership_type: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub lease_end_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub license_plate: Option<String>,
    pub issuing_state: Option<String>,
    pub registration_expiry: Option<NaiveDate>,
    pub insurance_policy: Option<String>,
    pub insurance_expiry: Option<NaiveDate>,
    pub jurisdiction: Option<String>,
    pub gvwr: Option<u32>,
    pub initial_status: Option<String>,
    pub assigned_yard: Option<String>,
    pub attached_truck_id: Option<String>,
}

impl From<CreateTrailerRequest> for NewTrailer {
    fn from(value: CreateTrailerRequest) -> Self {
        Self {
            unit_number: value.unit_number,
            trailer_type: value
                .trailer_type
                .as_deref()
                .map(TrailerType::parse)
                .unwrap_or_default(),
            year: value.year,
            vin: value.vin,
            color: value.color,
            length: value.length,
            width: value.width,
            height: value.height,
            capacity: value.capacity,
            axle_count: value.axle_count,
            ownership_type: value
                .ownership_type
                .as_deref()
                .map(OwnershipType::parse)
                .unwrap_or_default(),
            purchase_date: value.purchase_date,
            lease_end_date: value.lease_end_date,
            purchase_price: value.purchase_price,
            license_plate: value.license_plate,
            issuing_state: value.issuing_state,
            registration_expiry: value.registration_expiry,
            insurance_policy: value.insurance_policy,
            insurance_expiry: value.insurance_expiry,
            jurisdiction: value.jurisdiction,
            gvwr: value.gvwr,
            initial_status: value.initial_status.as_deref().map(TrailerStatus::parse),
            assigned_yard: value.assigned_yard,
            attached_truck_id: value.attached_truck_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTrailerResponse {
    pub trailer: TrailerSummary,
}

/// Domain use-case port for creating trailers.
#[async_trait]
pub trait TrailerCommand: Send + Sync {
    async fn create_trailer(
        &self,
        request: CreateTrailerRequest,
    ) -> Result<CreateTrailerResponse, Error>;
}
