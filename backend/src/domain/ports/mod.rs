//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`TrailerRepository`, `YardDirectory`) are implemented by
//! outbound adapters. Driving ports (`TrailerCommand`, `TrailerQuery`) are
//! implemented by domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod trailer_command;
mod trailer_projections;
mod trailer_query;
mod trailer_repository;
mod yard_directory;

pub use trailer_command::{CreateTrailerRequest, CreateTrailerResponse, TrailerCommand};
pub use trailer_projections::{
    BasicInformation, OwnershipFinancials, ProfileSpecifications, RegistrationCompliance,
    TrailerDocument, TrailerProfile, TrailerSummary,
};
pub use trailer_query::{
    GetTrailerRequest, GetTrailerResponse, ListTrailersRequest, ListTrailersResponse,
    TrailerQuery,
};
#[cfg(test)]
pub use trailer_repository::MockTrailerRepository;
pub use trailer_repository::{
    FixtureTrailerRepository, TrailerListFilter, TrailerRepository, TrailerRepositoryError,
    TrailerUniqueField,
};
pub use yard_directory::{UNKNOWN_YARD, UnknownYardDirectory, YardDirectory};
