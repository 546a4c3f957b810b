//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod trailers;
mod trailers_dto;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// JSON body extractor settings that report malformed bodies in the
/// standard error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| validation::malformed_json_error(&err).into())
}

/// Query extractor settings that report malformed query strings in the
/// standard error envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| validation::malformed_query_error(&err).into())
}

/// Register the trailer API under `/api`.
pub fn configure_trailers(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(query_config())
            .service(trailers::create_trailer)
            .service(trailers::list_trailers)
            .service(trailers::get_trailer),
    );
}
