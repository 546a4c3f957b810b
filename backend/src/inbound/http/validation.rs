//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes an `invalid_request` error whose details carry
//! `{field, code}` and, where useful, the offending `value`.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Value, json};

use crate::domain::Error;
use crate::domain::trailer::{SpecificationError, Specifications, SpecificationsInput};

/// Earliest accepted model year.
pub(crate) const MIN_MODEL_YEAR: i64 = 1900;
/// Largest accepted gross vehicle weight rating, in pounds.
pub(crate) const MAX_GVWR: i64 = 200_000;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    EmptyBody,
    OutOfRange,
    InvalidDate,
    InvalidJson,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyBody => "empty_body",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidJson => "invalid_json",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<Value>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn empty_body_error() -> Error {
    ValidationError::new("body", "Request body must include at least one field")
        .with_code(ErrorCode::EmptyBody)
}

pub(crate) fn malformed_json_error(reason: impl std::fmt::Display) -> Error {
    ValidationError::new("body", format!("Request body is not valid JSON: {reason}"))
        .with_code(ErrorCode::InvalidJson)
}

pub(crate) fn malformed_query_error(reason: impl std::fmt::Display) -> Error {
    ValidationError::new("query", format!("Query string is invalid: {reason}"))
        .with_code(ErrorCode::InvalidJson)
}

fn out_of_range(field: FieldName, message: String, value: impl Into<Value>) -> Error {
    ValidationError::new(field.as_str(), message).with_value(ErrorCode::OutOfRange, value)
}

/// Model year within `1900..=current_year + 1`.
pub(crate) fn validate_year(
    value: Option<i64>,
    current_year: i32,
    field: FieldName,
) -> Result<Option<i32>, Error> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let max = i64::from(current_year) + 1;
    i32::try_from(raw)
        .ok()
        .filter(|_| (MIN_MODEL_YEAR..=max).contains(&raw))
        .map(Some)
        .ok_or_else(|| {
            out_of_range(
                field,
                format!("Year must be between {MIN_MODEL_YEAR} and {max}"),
                raw,
            )
        })
}

/// Non-negative monetary amount.
pub(crate) fn validate_price(value: Option<f64>, field: FieldName) -> Result<Option<f64>, Error> {
    match value {
        Some(raw) if raw.is_nan() || raw < 0.0 => Err(out_of_range(
            field,
            "Purchase price must not be negative".to_owned(),
            raw,
        )),
        other => Ok(other),
    }
}

/// Gross vehicle weight rating within `1..=200000` pounds.
pub(crate) fn validate_gvwr(value: Option<i64>, field: FieldName) -> Result<Option<u32>, Error> {
    let Some(raw) = value else {
        return Ok(None);
    };
    u32::try_from(raw)
        .ok()
        .filter(|_| (1..=MAX_GVWR).contains(&raw))
        .map(Some)
        .ok_or_else(|| {
            out_of_range(
                field,
                "GVWR must be between 1 and 200,000 pounds".to_owned(),
                raw,
            )
        })
}

fn specification_error(err: SpecificationError, input: &SpecificationsInput) -> Error {
    use crate::domain::trailer::SpecificationField;

    let field = err.field();
    let value = match field {
        SpecificationField::Length => input.length.map(Value::from),
        SpecificationField::Width => input.width.map(Value::from),
        SpecificationField::Height => input.height.map(Value::from),
        SpecificationField::Capacity => input.capacity.map(Value::from),
        SpecificationField::AxleCount => input.axle_count.map(Value::from),
    };
    ValidationError::new(field.as_str(), err.to_string())
        .with_value(ErrorCode::OutOfRange, value.unwrap_or(Value::Null))
}

/// Dimensions, capacity and axle count checked together.
pub(crate) fn validate_specifications(input: SpecificationsInput) -> Result<Specifications, Error> {
    Specifications::new(input).map_err(|err| specification_error(err, &input))
}

fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(
        field,
        format!("{field} must be a YYYY-MM-DD date or an RFC 3339 timestamp"),
    )
    .with_value(ErrorCode::InvalidDate, value)
}

/// Calendar date from `YYYY-MM-DD` or RFC 3339; timestamps keep their UTC date.
///
/// Blank strings count as absent.
pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| Some(timestamp.with_timezone(&Utc).date_naive()))
        .map_err(|_| invalid_date_error(field, trimmed))
}
