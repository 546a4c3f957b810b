//! Trailer domain services.
//!
//! `TrailerCommandService` runs the creation pipeline: uniqueness pre-checks,
//! lenient category parsing, aggregate validation and persistence.
//! `TrailerQueryService` serves paginated listings and profile lookups.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::PageRequest;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::ports::{
    CreateTrailerRequest, CreateTrailerResponse, GetTrailerRequest, GetTrailerResponse,
    ListTrailersRequest, ListTrailersResponse, TrailerCommand, TrailerListFilter, TrailerProfile,
    TrailerQuery, TrailerRepository, TrailerRepositoryError, TrailerSummary, TrailerUniqueField,
    YardDirectory,
};
use crate::domain::trailer::{
    CreationContext, NewTrailer, Trailer, TrailerId, TrailerIdentitySource, TrailerStatus,
    TrailerType, TrailerValidationError, Vin,
};

fn duplicate_error(field: TrailerUniqueField, value: &str) -> Error {
    Error::invalid_request(format!("Trailer with {field} {value} already exists")).with_details(
        json!({ "field": field.request_field(), "code": "duplicate", "value": value }),
    )
}

fn map_repository_error(error: TrailerRepositoryError) -> Error {
    match error {
        TrailerRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("trailer repository unavailable: {message}"))
        }
        TrailerRepositoryError::Query { message } => {
            Error::internal(format!("trailer repository error: {message}"))
        }
        TrailerRepositoryError::Duplicate { field, value } => duplicate_error(field, &value),
    }
}

fn map_validation_error(error: TrailerValidationError) -> Error {
    Error::invalid_request(error.to_string())
        .with_details(json!({ "field": error.field(), "code": error.code() }))
}

/// Trailer service implementing the command driving port.
#[derive(Clone)]
pub struct TrailerCommandService<R> {
    trailer_repo: Arc<R>,
    identities: Arc<dyn TrailerIdentitySource>,
    yards: Arc<dyn YardDirectory>,
    clock: Arc<dyn Clock>,
}

impl<R> TrailerCommandService<R> {
    /// Create a command service over the given collaborators.
    pub fn new(
        trailer_repo: Arc<R>,
        identities: Arc<dyn TrailerIdentitySource>,
        yards: Arc<dyn YardDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            trailer_repo,
            identities,
            yards,
            clock,
        }
    }
}

impl<R> TrailerCommandService<R>
where
    R: TrailerRepository,
{
    async fn ensure_unique(&self, new_trailer: &NewTrailer) -> Result<(), Error> {
        if let Some(unit_number) = new_trailer.unit_number.as_deref().filter(|v| !v.is_empty()) {
            if self
                .trailer_repo
                .exists_by_unit_number(unit_number)
                .await
                .map_err(map_repository_error)?
            {
                return Err(duplicate_error(TrailerUniqueField::UnitNumber, unit_number));
            }
        }

        if let Some(raw_vin) = new_trailer.vin.as_deref().filter(|v| !v.is_empty()) {
            let vin = Vin::normalize(raw_vin);
            if self
                .trailer_repo
                .exists_by_vin(&vin)
                .await
                .map_err(map_repository_error)?
            {
                return Err(duplicate_error(TrailerUniqueField::Vin, &vin));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<R> TrailerCommand for TrailerCommandService<R>
where
    R: TrailerRepository,
{
    async fn create_trailer(
        &self,
        request: CreateTrailerRequest,
    ) -> Result<CreateTrailerResponse, Error> {
        let new_trailer = NewTrailer::from(request);
        self.ensure_unique(&new_trailer).await?;

        let context = CreationContext {
            identities: self.identities.as_ref(),
            yards: self.yards.as_ref(),
            now: self.clock.utc(),
        };
        let trailer = Trailer::create(new_trailer, &context).map_err(map_validation_error)?;

        self.trailer_repo
            .save(&trailer)
            .await
            .map_err(map_repository_error)?;

        info!(
            trailer_id = %trailer.id(),
            unit_number = trailer.unit_number(),
            "trailer created"
        );

        Ok(CreateTrailerResponse {
            trailer: TrailerSummary::from(&trailer),
        })
    }
}

fn parse_filter<T>(
    raw: Option<&str>,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, Error> {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };
    parse(raw).map(Some).ok_or_else(|| {
        Error::invalid_request(format!("invalid {field} filter: {raw}"))
            .with_details(json!({ "field": field, "code": "invalid_filter", "value": raw }))
    })
}

/// Trailer service implementing the query driving port.
#[derive(Clone)]
pub struct TrailerQueryService<R> {
    trailer_repo: Arc<R>,
}

impl<R> TrailerQueryService<R> {
    /// Create a query service over the trailer repository.
    pub fn new(trailer_repo: Arc<R>) -> Self {
        Self { trailer_repo }
    }
}

#[async_trait]
impl<R> TrailerQuery for TrailerQueryService<R>
where
    R: TrailerRepository,
{
    async fn list_trailers(
        &self,
        request: ListTrailersRequest,
    ) -> Result<ListTrailersResponse, Error> {
        let page = PageRequest::new(request.page, request.limit).map_err(|err| {
            let field = match err {
                pagination::PageRequestError::InvalidPage { .. } => "page",
                pagination::PageRequestError::InvalidLimit { .. } => "limit",
            };
            Error::invalid_request(err.to_string())
                .with_details(json!({ "field": field, "code": "out_of_range" }))
        })?;
        let filter = TrailerListFilter {
            status: parse_filter(request.status.as_deref(), "status", TrailerStatus::try_parse)?,
            trailer_type: parse_filter(
                request.trailer_type.as_deref(),
                "trailerType",
                TrailerType::try_parse,
            )?,
        };

        let listed = self
            .trailer_repo
            .list(&filter, page)
            .await
            .map_err(map_repository_error)?
            .map(|trailer| TrailerSummary::from(&trailer));

        Ok(ListTrailersResponse {
            trailers: listed.items,
            total: listed.total,
            page: listed.page,
            limit: listed.limit,
        })
    }

    async fn get_trailer(&self, request: GetTrailerRequest) -> Result<GetTrailerResponse, Error> {
        let by_id = match Uuid::parse_str(&request.id) {
            Ok(id) => self
                .trailer_repo
                .find_by_id(&TrailerId::new(id))
                .await
                .map_err(map_repository_error)?,
            Err(_) => None,
        };
        let trailer = match by_id {
            Some(trailer) => Some(trailer),
            None => self
                .trailer_repo
                .find_by_unit_number(&request.id)
                .await
                .map_err(map_repository_error)?,
        }
        .ok_or_else(|| Error::not_found(format!("Trailer with ID {} not found", request.id)))?;

        Ok(GetTrailerResponse {
            profile: TrailerProfile::from(&trailer),
        })
    }
}

#[cfg(test)]
#[path = "trailer_service_tests.rs"]
mod tests;
