//! Domain model and use cases for trailer assets.
//!
//! Purpose: keep validation, business rules and the use-case services free of
//! transport and storage concerns. Adapters reach the domain only through the
//! traits in [`ports`].
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failure payload.
//! - [`TraceId`]: request correlation id carried in task-local storage.
//! - [`trailer`]: the aggregate, its value objects and categories.
//! - [`TrailerCommandService`] and [`TrailerQueryService`]: the use cases.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod trailer;
mod trailer_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::trailer_service::{TrailerCommandService, TrailerQueryService};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use trailers::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Trailer with ID TR0000 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
