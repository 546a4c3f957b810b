//! HTTP adapter mapping for domain errors.
//!
//! Maps [`ErrorCode`] to a status code and renders the JSON envelope. Server
//! failures never leak repository text to clients.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";
const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Generic message replacing server-side failure text, if any.
fn public_message(code: ErrorCode) -> Option<&'static str> {
    match code {
        ErrorCode::InternalError => Some(INTERNAL_MESSAGE),
        ErrorCode::ServiceUnavailable => Some(UNAVAILABLE_MESSAGE),
        ErrorCode::InvalidRequest | ErrorCode::NotFound => None,
    }
}

/// Payload sent to the client.
///
/// Server-side failures are logged in full, then reduced to a generic
/// message with the trace id kept for correlation. Client errors pass
/// through unchanged.
fn client_view(error: &Error) -> Error {
    let Some(message) = public_message(error.code()) else {
        return error.clone();
    };
    error!(
        code = ?error.code(),
        trace_id = error.trace_id().unwrap_or("-"),
        detail = error.message(),
        "request failed on the server side"
    );
    let view = Error::new(error.code(), message);
    match error.trace_id() {
        Some(id) => view.with_trace_id(id.to_owned()),
        None => view,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let view = client_view(self);
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = view.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(view)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(INTERNAL_MESSAGE)
    }
}
