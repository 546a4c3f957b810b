//! Port for trailer persistence, lookup and uniqueness checks.

use std::fmt;

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::trailer::{Trailer, TrailerId, TrailerStatus, TrailerType};

use super::define_port_error;

/// Unique trailer attribute named in duplicate errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailerUniqueField {
    UnitNumber,
    Vin,
}

impl TrailerUniqueField {
    /// Request field carrying the attribute.
    pub fn request_field(&self) -> &'static str {
        match self {
            Self::UnitNumber => "trailerId",
            Self::Vin => "vin",
        }
    }
}

impl fmt::Display for TrailerUniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitNumber => f.write_str("ID"),
            Self::Vin => f.write_str("VIN"),
        }
    }
}

define_port_error! {
    /// Errors raised by trailer repository adapters.
    pub enum TrailerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "trailer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "trailer repository query failed: {message}",
        /// A unique column already holds the value.
        Duplicate { field: TrailerUniqueField, value: String } =>
            "Trailer with {field} {value} already exists",
    }
}

/// Optional narrowing applied to trailer listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrailerListFilter {
    pub status: Option<TrailerStatus>,
    pub trailer_type: Option<TrailerType>,
}

impl TrailerListFilter {
    /// True when `trailer` passes every set criterion.
    pub fn matches(&self, trailer: &Trailer) -> bool {
        self.status.is_none_or(|status| trailer.status() == status)
            && self
                .trailer_type
                .is_none_or(|trailer_type| trailer.trailer_type() == trailer_type)
    }
}

/// Port for storing and reading trailers.
///
/// Implementations must reject a second trailer with the same unit number or
/// VIN with [`TrailerRepositoryError::Duplicate`], even under concurrent
/// saves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrailerRepository: Send + Sync {
    /// Persist a new trailer.
    async fn save(&self, trailer: &Trailer) -> Result<(), TrailerRepositoryError>;

    /// Find a trailer by storage id.
    async fn find_by_id(&self, id: &TrailerId) -> Result<Option<Trailer>, TrailerRepositoryError>;

    /// Find a trailer by unit number.
    async fn find_by_unit_number(
        &self,
        unit_number: &str,
    ) -> Result<Option<Trailer>, TrailerRepositoryError>;

    /// List trailers newest first.
    async fn list(
        &self,
        filter: &TrailerListFilter,
        page: PageRequest,
    ) -> Result<Page<Trailer>, TrailerRepositoryError>;

    /// Whether a trailer already uses `unit_number`.
    async fn exists_by_unit_number(&self, unit_number: &str)
    -> Result<bool, TrailerRepositoryError>;

    /// Whether a trailer already uses the normalized `vin`.
    async fn exists_by_vin(&self, vin: &str) -> Result<bool, TrailerRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTrailerRepository;

#[async_trait]
impl TrailerRepository for FixtureTrailerRepository {
    async fn save(&self, _trailer: &Trailer) -> Result<(), TrailerRepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, _id: &TrailerId) -> Result<Option<Trailer>, TrailerRepositoryError> {
        Ok(None)
    }

    async fn find_by_unit_number(
        &self,
        _unit_number: &str,
    ) -> Result<Option<Trailer>, TrailerRepositoryError> {
        Ok(None)
    }

    async fn list(
        &self,
        _filter: &TrailerListFilter,
        page: PageRequest,
    ) -> Result<Page<Trailer>, TrailerRepositoryError> {
        Ok(Page::new(Vec::new(), 0, page))
    }

    async fn exists_by_unit_number(
        &self,
        _unit_number: &str,
    ) -> Result<bool, TrailerRepositoryError> {
        Ok(false)
    }

    async fn exists_by_vin(&self, _vin: &str) -> Result<bool, TrailerRepositoryError> {
        Ok(false)
    }
}
