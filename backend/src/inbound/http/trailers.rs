//! Trailer HTTP handlers.
//!
//! ```text
//! POST /api/trailers
//! GET  /api/trailers
//! GET  /api/trailers/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::ports::{
    GetTrailerRequest, ListTrailersResponse, TrailerProfile, TrailerSummary,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

pub use super::trailers_dto::{CreateTrailerRequestBody, ListTrailersQuery};
use super::trailers_dto::TrailerPath;

/// Register a trailer.
///
/// Categories are parsed leniently; VIN, specification and lease rules are
/// enforced. Responds with the list-row summary of the new trailer.
#[utoipa::path(
    post,
    path = "/api/trailers",
    request_body = CreateTrailerRequestBody,
    responses(
        (status = 201, description = "Trailer created", body = TrailerSummary),
        (status = 400, description = "Invalid request or duplicate trailer", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["trailers"],
    operation_id = "createTrailer"
)]
#[post("/trailers")]
pub async fn create_trailer(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTrailerRequestBody>,
) -> ApiResult<HttpResponse> {
    let today = state.clock.utc().date_naive();
    let request = payload.into_inner().into_request(today)?;
    let response = state.trailers.create_trailer(request).await?;

    Ok(HttpResponse::Created().json(response.trailer))
}

/// List trailers newest first.
#[utoipa::path(
    get,
    path = "/api/trailers",
    params(ListTrailersQuery),
    responses(
        (status = 200, description = "One page of trailers", body = ListTrailersResponse),
        (status = 400, description = "Invalid paging or filter", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["trailers"],
    operation_id = "listTrailers"
)]
#[get("/trailers")]
pub async fn list_trailers(
    state: web::Data<HttpState>,
    query: web::Query<ListTrailersQuery>,
) -> ApiResult<web::Json<ListTrailersResponse>> {
    let response = state
        .trailers_query
        .list_trailers(query.into_inner().into())
        .await?;

    Ok(web::Json(response))
}

/// Fetch a trailer profile by storage id or unit number.
#[utoipa::path(
    get,
    path = "/api/trailers/{id}",
    params(("id" = String, Path, description = "Trailer UUID or unit number")),
    responses(
        (status = 200, description = "Trailer profile", body = TrailerProfile),
        (status = 404, description = "Trailer not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["trailers"],
    operation_id = "getTrailer"
)]
#[get("/trailers/{id}")]
pub async fn get_trailer(
    state: web::Data<HttpState>,
    path: web::Path<TrailerPath>,
) -> ApiResult<web::Json<TrailerProfile>> {
    let TrailerPath { id } = path.into_inner();
    let response = state
        .trailers_query
        .get_trailer(GetTrailerRequest { id })
        .await?;

    Ok(web::Json(response.profile))
}

#[cfg(test)]
#[path = "trailers_tests.rs"]
mod tests;
