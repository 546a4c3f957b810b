//! Trailer request and query DTOs plus their transport validation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Error;
use crate::domain::ports::{CreateTrailerRequest, ListTrailersRequest};
use crate::domain::trailer::SpecificationsInput;
use crate::inbound::http::validation::{
    FieldName, empty_body_error, parse_optional_date, validate_gvwr, validate_price,
    validate_specifications, validate_year,
};

/// Request payload for registering a trailer. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrailerRequestBody {
    /// Unit number; generated as `TR####` when absent.
    #[schema(example = "TR1234")]
    pub trailer_id: Option<String>,
    /// Trailer category; unrecognised values fall back to dry van.
    #[schema(example = "reefer")]
    pub trailer_type: Option<String>,
    pub year: Option<i64>,
    #[schema(example = "1HGCM82633A123456")]
    pub vin: Option<String>,
    pub color: Option<String>,
    /// Length in feet.
    pub length: Option<f64>,
    /// Width in inches.
    pub width: Option<f64>,
    /// Height in inches.
    pub height: Option<f64>,
    /// Payload capacity in pounds.
    pub capacity: Option<i64>,
    pub axle_count: Option<i64>,
    #[schema(example = "leased")]
    pub ownership_type: Option<String>,
    #[schema(format = "date")]
    pub purchase_date: Option<String>,
    /// Required, and in the future, for leased trailers.
    #[schema(format = "date")]
    pub lease_end_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub license_plate: Option<String>,
    pub issuing_state: Option<String>,
    #[schema(format = "date")]
    pub registration_exp: Option<String>,
    pub insurance_policy: Option<String>,
    #[schema(format = "date")]
    pub insurance_exp: Option<String>,
    #[schema(example = "IFTA")]
    pub jurisdiction: Option<String>,
    pub gvwr: Option<i64>,
    #[schema(example = "available")]
    pub initial_status: Option<String>,
    #[schema(example = "loc1")]
    pub assigned_yard: Option<String>,
    pub default_truck_id: Option<String>,
}

impl CreateTrailerRequestBody {
    /// Validate transport-level constraints and build the use-case request.
    ///
    /// `today` bounds the model year.
    pub(crate) fn into_request(self, today: NaiveDate) -> Result<CreateTrailerRequest, Error> {
        if self == Self::default() {
            return Err(empty_body_error());
        }

        let year = validate_year(self.year, today.year(), FieldName::new("year"))?;
        let specifications = validate_specifications(SpecificationsInput {
            length: self.length,
            width: self.width,
            height: self.height,
            capacity: self.capacity,
            axle_count: self.axle_count,
        })?;
        let purchase_price = validate_price(self.purchase_price, FieldName::new("purchasePrice"))?;
        let gvwr = validate_gvwr(self.gvwr, FieldName::new("gvwr"))?;

        Ok(CreateTrailerRequest {
            unit_number: self.trailer_id,
            trailer_type: self.trailer_type,
            year,
            vin: self.vin,
            color: self.color,
            length: specifications.length(),
            width: specifications.width(),
            height: specifications.height(),
            capacity: specifications.capacity(),
            axle_count: specifications.axle_count(),
            ownership_type: self.ownership_type,
            purchase_date: parse_optional_date(self.purchase_date, FieldName::new("purchaseDate"))?,
            lease_end_date: parse_optional_date(
                self.lease_end_date,
                FieldName::new("leaseEndDate"),
            )?,
            purchase_price,
            license_plate: self.license_plate,
            issuing_state: self.issuing_state,
            registration_expiry: parse_optional_date(
                self.registration_exp,
                FieldName::new("registrationExp"),
            )?,
            insurance_policy: self.insurance_policy,
            insurance_expiry: parse_optional_date(
                self.insurance_exp,
                FieldName::new("insuranceExp"),
            )?,
            jurisdiction: self.jurisdiction,
            gvwr,
            initial_status: self.initial_status,
            assigned_yard: self.assigned_yard,
            attached_truck_id: self.default_truck_id,
        })
    }
}

/// Paging and filter parameters for the trailer list.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListTrailersQuery {
    /// One-based page number (default 1).
    pub page: Option<i64>,
    /// Page size, 1 to 100 (default 10).
    pub limit: Option<i64>,
    /// Status filter such as `available` or `out-of-service`.
    pub status: Option<String>,
    /// Category filter such as `dry_van` or `reefer`.
    pub trailer_type: Option<String>,
}

impl From<ListTrailersQuery> for ListTrailersRequest {
    fn from(value: ListTrailersQuery) -> Self {
        Self {
            page: value.page,
            limit: value.limit,
            status: value.status,
            trailer_type: value.trailer_type,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TrailerPath {
    pub(super) id: String,
}
