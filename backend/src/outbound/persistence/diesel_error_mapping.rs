//! Translation of pool and Diesel failures into trailer repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{TrailerRepositoryError, TrailerUniqueField};

use super::pool::PoolError;

/// Unique index guarding `trailers.unit_number`.
pub(crate) const UNIT_NUMBER_CONSTRAINT: &str = "trailers_unit_number_key";
/// Unique index guarding `trailers.vin`.
pub(crate) const VIN_CONSTRAINT: &str = "trailers_vin_key";

pub(crate) fn map_pool_error(error: PoolError) -> TrailerRepositoryError {
    debug!(%error, "trailer pool checkout failed");
    TrailerRepositoryError::connection(error.message())
}

pub(crate) fn map_diesel_error(error: DieselError) -> TrailerRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => TrailerRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => TrailerRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TrailerRepositoryError::connection("database connection error")
        }
        _ => TrailerRepositoryError::query("database error"),
    }
}

/// Unique column violated by a failed insert, if any.
pub(crate) fn violated_unique_field(error: &DieselError) -> Option<TrailerUniqueField> {
    let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = error else {
        return None;
    };
    match info.constraint_name() {
        Some(UNIT_NUMBER_CONSTRAINT) => Some(TrailerUniqueField::UnitNumber),
        Some(VIN_CONSTRAINT) => Some(TrailerUniqueField::Vin),
        _ => None,
    }
}
