//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the trailer and health endpoints plus the error
//! envelope schemas. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use crate::domain::ports::{
    BasicInformation, ListTrailersResponse, OwnershipFinancials, ProfileSpecifications,
    RegistrationCompliance, TrailerDocument, TrailerProfile, TrailerSummary,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::trailers::CreateTrailerRequestBody;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trailers service API",
        description = "Create, list and inspect fleet trailer assets."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::trailers::create_trailer,
        crate::inbound::http::trailers::list_trailers,
        crate::inbound::http::trailers::get_trailer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateTrailerRequestBody,
        TrailerSummary,
        ListTrailersResponse,
        TrailerProfile,
        BasicInformation,
        ProfileSpecifications,
        OwnershipFinancials,
        RegistrationCompliance,
        TrailerDocument,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "trailers", description = "Trailer asset registration and lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
