//! Trailer aggregate root and its construction paths.

use chrono::{DateTime, NaiveDate, Utc};

use super::{
    OwnershipType, Specifications, SpecificationsInput, TrailerId, TrailerIdentitySource,
    TrailerStatus, TrailerType, TrailerValidationError, Vin,
};
use crate::domain::ports::YardDirectory;

/// Location reported for trailers without an assigned yard.
pub const UNASSIGNED_LOCATION: &str = "Yard";
/// Jurisdiction applied when none is supplied.
pub const DEFAULT_JURISDICTION: &str = "IFTA";

/// Collaborators consulted while creating a trailer.
#[derive(Clone, Copy)]
pub struct CreationContext<'a> {
    pub identities: &'a dyn TrailerIdentitySource,
    pub yards: &'a dyn YardDirectory,
    /// Wall-clock instant of the request; its UTC date is "today".
    pub now: DateTime<Utc>,
}

/// Field set for a new trailer, after enum parsing.
///
/// Empty strings in `unit_number`, `vin` and `jurisdiction` count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTrailer {
    pub unit_number: Option<String>,
    pub trailer_type: TrailerType,
    pub year: Option<i32>,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub capacity: Option<u32>,
    pub axle_count: Option<u8>,
    pub ownership_type: OwnershipType,
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
    pub initial_status: Option<TrailerStatus>,
    pub assigned_yard: Option<String>,
    pub attached_truck_id: Option<String>,
}

/// Flat storage projection of a [`Trailer`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrailerRecord {
    pub id: TrailerId,
    pub unit_number: String,
    pub trailer_type: TrailerType,
    pub status: TrailerStatus,
    pub ownership_type: OwnershipType,
    pub vin: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub capacity: Option<u32>,
    pub axle_count: Option<u8>,
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
    pub assigned_yard: Option<String>,
    pub current_location: Option<String>,
    pub attached_truck_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fleet trailer aggregate.
///
/// ## Invariants
/// - A VIN, when present, passed [`Vin::new`] at creation time.
/// - Specifications are complete for every trailer built by
///   [`Trailer::create`].
/// - Leased trailers created through [`Trailer::create`] carry a lease end
///   date later than the creation date.
#[derive(Debug, Clone, PartialEq)]
pub struct Trailer {
    id: TrailerId,
    unit_number: String,
    trailer_type: TrailerType,
    status: TrailerStatus,
    specifications: Specifications,
    ownership_type: OwnershipType,
    vin: Option<Vin>,
    year: Option<i32>,
    color: Option<String>,
    purchase_date: Option<NaiveDate>,
    lease_end_date: Option<NaiveDate>,
    purchase_price: Option<f64>,
    license_plate: Option<String>,
    issuing_state: Option<String>,
    registration_expiry: Option<NaiveDate>,
    insurance_policy: Option<String>,
    insurance_expiry: Option<NaiveDate>,
    jurisdiction: Option<String>,
    gvwr: Option<u32>,
    assigned_yard: Option<String>,
    current_location: Option<String>,
    attached_truck_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl Trailer {
    /// Validate a new submission and assemble the aggregate.
    ///
    /// Steps run in a fixed order and the first failure is returned: unit
    /// number, VIN, specifications with defaults, status, lease rules, yard
    /// location, then the entity id.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use trailers::domain::ports::UnknownYardDirectory;
    /// use trailers::domain::trailer::{
    ///     CreationContext, NewTrailer, RandomIdentitySource, Trailer, TrailerStatus,
    /// };
    ///
    /// let context = CreationContext {
    ///     identities: &RandomIdentitySource,
    ///     yards: &UnknownYardDirectory,
    ///     now: Utc::now(),
    /// };
    /// let trailer = Trailer::create(
    ///     NewTrailer {
    ///         unit_number: Some("TR9999".to_owned()),
    ///         ..NewTrailer::default()
    ///     },
    ///     &context,
    /// )
    /// .expect("valid trailer");
    /// assert_eq!(trailer.unit_number(), "TR9999");
    /// assert_eq!(trailer.status(), TrailerStatus::Available);
    /// assert_eq!(trailer.current_location(), Some("Yard"));
    /// ```
    pub fn create(
        input: NewTrailer,
        context: &CreationContext<'_>,
    ) -> Result<Self, TrailerValidationError> {
        let unit_number =
            present(input.unit_number).unwrap_or_else(|| context.identities.unit_number());

        let vin = present(input.vin).map(Vin::new).transpose()?;

        let specifications = Specifications::with_defaults(
            input.length,
            input.width,
            input.height,
            input.capacity,
            input.axle_count,
        );

        let status = input.initial_status.unwrap_or_default();

        if input.ownership_type.requires_lease_end_date() && input.lease_end_date.is_none() {
            return Err(TrailerValidationError::LeaseEndDateRequired);
        }
        if let Some(lease_end_date) = input.lease_end_date {
            let today = context.now.date_naive();
            if lease_end_date <= today {
                return Err(TrailerValidationError::LeaseEndDateNotInFuture);
            }
        }

        let assigned_yard = present(input.assigned_yard);
        let current_location = match assigned_yard.as_deref() {
            Some(yard) => context.yards.resolve_name(yard),
            None => UNASSIGNED_LOCATION.to_owned(),
        };

        let id = context.identities.entity_id();

        Ok(Self {
            id,
            unit_number,
            trailer_type: input.trailer_type,
            status,
            specifications,
            ownership_type: input.ownership_type,
            vin,
            year: input.year,
            color: input.color,
            purchase_date: input.purchase_date,
            lease_end_date: input.lease_end_date,
            purchase_price: input.purchase_price,
            license_plate: input.license_plate,
            issuing_state: input.issuing_state,
            registration_expiry: input.registration_expiry,
            insurance_policy: input.insurance_policy,
            insurance_expiry: input.insurance_expiry,
            jurisdiction: Some(
                present(input.jurisdiction).unwrap_or_else(|| DEFAULT_JURISDICTION.to_owned()),
            ),
            gvwr: input.gvwr,
            assigned_yard,
            current_location: Some(current_location),
            attached_truck_id: input.attached_truck_id,
            created_at: context.now,
            updated_at: context.now,
        })
    }

    /// Rebuild a trailer from storage.
    ///
    /// The VIN is trusted; specifications are revalidated.
    pub fn from_record(record: TrailerRecord) -> Result<Self, TrailerValidationError> {
        let specifications = Specifications::new(SpecificationsInput {
            length: record.length,
            width: record.width,
            height: record.height,
            capacity: record.capacity.map(i64::from),
            axle_count: record.axle_count.map(i64::from),
        })?;

        Ok(Self {
            id: record.id,
            unit_number: record.unit_number,
            trailer_type: record.trailer_type,
            status: record.status,
            specifications,
            ownership_type: record.ownership_type,
            vin: record.vin.map(Vin::from_trusted),
            year: record.year,
            color: record.color,
            purchase_date: record.purchase_date,
            lease_end_date: record.lease_end_date,
            purchase_price: record.purchase_price,
            license_plate: record.license_plate,
            issuing_state: record.issuing_state,
            registration_expiry: record.registration_expiry,
            insurance_policy: record.insurance_policy,
            insurance_expiry: record.insurance_expiry,
            jurisdiction: record.jurisdiction,
            gvwr: record.gvwr,
            assigned_yard: record.assigned_yard,
            current_location: record.current_location,
            attached_truck_id: record.attached_truck_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    /// Flat projection written to storage.
    pub fn to_record(&self) -> TrailerRecord {
        TrailerRecord {
            id: self.id,
            unit_number: self.unit_number.clone(),
            trailer_type: self.trailer_type,
            status: self.status,
            ownership_type: self.ownership_type,
            vin: self.vin.as_ref().map(|vin| vin.as_str().to_owned()),
            year: self.year,
            color: self.color.clone(),
            length: self.specifications.length(),
            width: self.specifications.width(),
            height: self.specifications.height(),
            capacity: self.specifications.capacity(),
            axle_count: self.specifications.axle_count(),
            purchase_date: self.purchase_date,
            lease_end_date: self.lease_end_date,
            purchase_price: self.purchase_price,
            license_plate: self.license_plate.clone(),
            issuing_state: self.issuing_state.clone(),
            registration_expiry: self.registration_expiry,
            insurance_policy: self.insurance_policy.clone(),
            insurance_expiry: self.insurance_expiry,
            jurisdiction: self.jurisdiction.clone(),
            gvwr: self.gvwr,
            assigned_yard: self.assigned_yard.clone(),
            current_location: self.current_location.clone(),
            attached_truck_id: self.attached_truck_id.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn id(&self) -> TrailerId {
        self.id
    }

    /// Human-facing identifier such as `TR1234`.
    pub fn unit_number(&self) -> &str {
        self.unit_number.as_str()
    }

    pub fn trailer_type(&self) -> TrailerType {
        self.trailer_type
    }

    pub fn status(&self) -> TrailerStatus {
        self.status
    }

    pub fn specifications(&self) -> &Specifications {
        &self.specifications
    }

    pub fn ownership_type(&self) -> OwnershipType {
        self.ownership_type
    }

    pub fn vin(&self) -> Option<&Vin> {
        self.vin.as_ref()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn purchase_date(&self) -> Option<NaiveDate> {
        self.purchase_date
    }

    pub fn lease_end_date(&self) -> Option<NaiveDate> {
        self.lease_end_date
    }

    pub fn purchase_price(&self) -> Option<f64> {
        self.purchase_price
    }

    pub fn license_plate(&self) -> Option<&str> {
        self.license_plate.as_deref()
    }

    pub fn issuing_state(&self) -> Option<&str> {
        self.issuing_state.as_deref()
    }

    pub fn registration_expiry(&self) -> Option<NaiveDate> {
        self.registration_expiry
    }

    pub fn insurance_policy(&self) -> Option<&str> {
        self.insurance_policy.as_deref()
    }

    pub fn insurance_expiry(&self) -> Option<NaiveDate> {
        self.insurance_expiry
    }

    pub fn jurisdiction(&self) -> Option<&str> {
        self.jurisdiction.as_deref()
    }

    /// Gross vehicle weight rating in pounds.
    pub fn gvwr(&self) -> Option<u32> {
        self.gvwr
    }

    pub fn assigned_yard(&self) -> Option<&str> {
        self.assigned_yard.as_deref()
    }

    pub fn current_location(&self) -> Option<&str> {
        self.current_location.as_deref()
    }

    pub fn attached_truck_id(&self) -> Option<&str> {
        self.attached_truck_id.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
