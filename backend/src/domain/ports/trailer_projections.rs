//! Read projections returned by the trailer driving ports.
//!
//! `TrailerSummary` is the fleet-table row; `TrailerProfile` is the sectioned
//! detail view. Both serialise in camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::trailer::{Trailer, Vin};

const NO_TRUCK: &str = "None";
const NOT_AVAILABLE: &str = "N/A";

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Fleet-table row for one trailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrailerSummary {
    /// Unit number, e.g. `TR1234`.
    #[schema(example = "TR1234")]
    pub id: String,
    /// Trailer type label.
    #[schema(example = "Dry Van")]
    pub trailer_type: String,
    pub year: Option<i32>,
    pub vin: Option<String>,
    /// Status label.
    #[schema(example = "Available")]
    pub status: String,
    #[schema(example = "53 ft / 45,000 lbs")]
    pub length_capacity: String,
    pub axle_count: Option<u8>,
    /// Attached truck id, or `None`.
    pub attached_truck: String,
    /// Resolved location, or `N/A`.
    pub current_location: String,
}

impl From<&Trailer> for TrailerSummary {
    fn from(trailer: &Trailer) -> Self {
        let specifications = trailer.specifications();
        Self {
            id: trailer.unit_number().to_owned(),
            trailer_type: trailer.trailer_type().label().to_owned(),
            year: trailer.year(),
            vin: trailer.vin().map(|vin| vin.as_str().to_owned()),
            status: trailer.status().label().to_owned(),
            length_capacity: specifications.length_capacity_display(),
            axle_count: specifications.axle_count(),
            attached_truck: non_empty(trailer.attached_truck_id())
                .unwrap_or(NO_TRUCK)
                .to_owned(),
            current_location: non_empty(trailer.current_location())
                .unwrap_or(NOT_AVAILABLE)
                .to_owned(),
        }
    }
}

/// Detail view of one trailer, grouped by form section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrailerProfile {
    pub id: Uuid,
    pub unit_number: String,
    /// Trailer type wire form, e.g. `dry_van`.
    #[serde(rename = "type")]
    pub trailer_type: String,
    /// Status wire form, e.g. `out-of-service`.
    pub status: String,
    pub current_location: Option<String>,
    pub basic_information: BasicInformation,
    pub specifications: ProfileSpecifications,
    pub ownership_financials: OwnershipFinancials,
    pub registration_compliance: RegistrationCompliance,
    pub documents: Vec<TrailerDocument>,
    pub assigned_yard: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BasicInformation {
    /// VIN, or an empty string.
    pub vin: String,
    pub color: String,
    /// Model year, or 0 when unknown.
    pub year: i32,
    /// Axle count such as `2 Axles`.
    pub axle_count_type: String,
}

/// Dimensions in feet (length) and inches; capacity in pounds. Missing values
/// are reported as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSpecifications {
    pub length: f64,
    pub height: f64,
    pub width: f64,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipFinancials {
    pub ownership_type: String,
    /// Purchase or lease start date.
    pub lease_start_date: Option<NaiveDate>,
    pub lease_end_date: Option<NaiveDate>,
    /// Purchase price or lease cost.
    pub lease_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCompliance {
    pub license_plate: String,
    pub registration_expiry: Option<NaiveDate>,
    pub insurance_policy: String,
    pub insurance_expiry: Option<NaiveDate>,
    /// Periodic inspection due date; not tracked yet.
    #[schema(example = "N/A")]
    pub pti_due_date: String,
}

/// Document attached to a trailer. Uploads are not supported, so profiles
/// always carry an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrailerDocument {
    pub id: String,
    pub file_name: String,
    pub file_type: String,
    pub upload_date: DateTime<Utc>,
    pub file_url: String,
}

impl From<&Trailer> for TrailerProfile {
    fn from(trailer: &Trailer) -> Self {
        let specifications = trailer.specifications();
        Self {
            id: *trailer.id().as_uuid(),
            unit_number: trailer.unit_number().to_owned(),
            trailer_type: trailer.trailer_type().as_str().to_owned(),
            status: trailer.status().as_str().to_owned(),
            current_location: non_empty(trailer.current_location()).map(str::to_owned),
            basic_information: BasicInformation {
                vin: trailer.vin().map(Vin::as_str).unwrap_or_default().to_owned(),
                color: trailer.color().unwrap_or_default().to_owned(),
                year: trailer.year().unwrap_or_default(),
                axle_count_type: format!(
                    "{} Axles",
                    specifications.axle_count().unwrap_or_default()
                ),
            },
            specifications: ProfileSpecifications {
                length: specifications.length().unwrap_or_default(),
                height: specifications.height().unwrap_or_default(),
                width: specifications.width().unwrap_or_default(),
                capacity: specifications.capacity().unwrap_or_default(),
            },
            ownership_financials: OwnershipFinancials {
                ownership_type: trailer.ownership_type().as_str().to_owned(),
                lease_start_date: trailer.purchase_date(),
                lease_end_date: trailer.lease_end_date(),
                lease_cost: trailer.purchase_price(),
            },
            registration_compliance: RegistrationCompliance {
                license_plate: trailer.license_plate().unwrap_or_default().to_owned(),
                registration_expiry: trailer.registration_expiry(),
                insurance_policy: trailer.insurance_policy().unwrap_or_default().to_owned(),
                insurance_expiry: trailer.insurance_expiry(),
                pti_due_date: NOT_AVAILABLE.to_owned(),
            },
            documents: Vec::new(),
            assigned_yard: non_empty(trailer.assigned_yard()).map(str::to_owned),
            created_at: trailer.created_at(),
            updated_at: trailer.updated_at(),
        }
    }
}
