//! Trailer aggregate, value objects and categorical types.
//!
//! Creation is the only validating path. [`Trailer::create`] runs the VIN
//! and specification value objects, applies the lease business rules and
//! assigns identity. [`Trailer::from_record`] rebuilds stored trailers and
//! trusts the stored VIN.

mod aggregate;
mod enums;
mod identity;
mod specifications;
mod vin;

use std::fmt;

pub use aggregate::{
    CreationContext, DEFAULT_JURISDICTION, NewTrailer, Trailer, TrailerRecord,
    UNASSIGNED_LOCATION,
};
pub use enums::{
    OwnershipType, ParseOwnershipTypeError, ParseTrailerStatusError, ParseTrailerTypeError,
    TrailerStatus, TrailerType,
};
pub use identity::{RandomIdentitySource, TrailerId, TrailerIdentitySource, UNIT_NUMBER_PREFIX};
pub use specifications::{
    DEFAULT_AXLE_COUNT, DEFAULT_CAPACITY_LBS, DEFAULT_HEIGHT_IN, DEFAULT_LENGTH_FT,
    DEFAULT_WIDTH_IN, SpecificationError, SpecificationField, Specifications,
    SpecificationsInput,
};
pub use vin::{VIN_LENGTH, Vin, VinValidationError};

impl VinValidationError {
    pub fn is_business_rule_violation(&self) -> bool {
        false
    }
}

impl SpecificationError {
    pub fn is_business_rule_violation(&self) -> bool {
        false
    }
}

/// Errors raised while creating or rehydrating a [`Trailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailerValidationError {
    Vin(VinValidationError),
    Specifications(SpecificationError),
    LeaseEndDateRequired,
    LeaseEndDateNotInFuture,
}

impl TrailerValidationError {
    /// True for the lease rules; false for malformed values.
    pub fn is_business_rule_violation(&self) -> bool {
        match self {
            Self::Vin(err) => err.is_business_rule_violation(),
            Self::Specifications(err) => err.is_business_rule_violation(),
            Self::LeaseEndDateRequired | Self::LeaseEndDateNotInFuture => true,
        }
    }

    /// Stable code reported to clients in error details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Vin(_) => "invalid_vin",
            Self::Specifications(_) => "out_of_range",
            Self::LeaseEndDateRequired | Self::LeaseEndDateNotInFuture => {
                "business_rule_violation"
            }
        }
    }

    /// camelCase name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Vin(_) => "vin",
            Self::Specifications(err) => err.field().as_str(),
            Self::LeaseEndDateRequired | Self::LeaseEndDateNotInFuture => "leaseEndDate",
        }
    }
}

impl fmt::Display for TrailerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vin(err) => err.fmt(f),
            Self::Specifications(err) => err.fmt(f),
            Self::LeaseEndDateRequired => {
                write!(f, "Lease end date is required for leased trailers")
            }
            Self::LeaseEndDateNotInFuture => write!(f, "Lease end date must be in the future"),
        }
    }
}

impl std::error::Error for TrailerValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Vin(err) => Some(err),
            Self::Specifications(err) => Some(err),
            Self::LeaseEndDateRequired | Self::LeaseEndDateNotInFuture => None,
        }
    }
}

impl From<VinValidationError> for TrailerValidationError {
    fn from(value: VinValidationError) -> Self {
        Self::Vin(value)
    }
}

impl From<SpecificationError> for TrailerValidationError {
    fn from(value: SpecificationError) -> Self {
        Self::Specifications(value)
    }
}

#[cfg(test)]
mod tests;
