//! Shared request validation helpers for inbound HTTP adapters.
//!
//! Failures here are about the shape of a request (a missing field, a query
//! parameter that is not a number). Field content rules live in
//! [`crate::domain::validation`].

use actix_web::{HttpRequest, error::JsonPayloadError, error::QueryPayloadError, web};
use serde_json::{Value, json};

use crate::domain::{AGE_MAX, Error, UserId};

/// Request validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidType,
    InvalidValue,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidType => "invalid_type",
            ErrorCode::InvalidValue => "invalid_value",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for request field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {}", field.as_str()),
    )
}

/// Return `value` or a missing-field error naming `field`.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Age as submitted text: a JSON number or a string of digits.
///
/// Whole floats such as `25.0` are written without the fraction.
///
/// Range and digit checks are left to the domain validator so every age
/// problem is reported alongside the other field issues.
pub(crate) fn age_text(value: Value, field: FieldName) -> Result<String, Error> {
    match value {
        Value::Number(number) => Ok(whole_number_text(&number)),
        Value::String(text) => Ok(text),
        _ => Err(field_error(
            field,
            ErrorCode::InvalidType,
            format!("{} must be a number or a string of digits", field.as_str()),
        )),
    }
}

fn whole_number_text(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.is_finite() && value.fract() == 0.0 => {
            format!("{value:.0}")
        }
        _ => number.to_string(),
    }
}

/// Parse an optional age bound from the query string.
pub(crate) fn parse_age_bound(value: Option<&str>, field: FieldName) -> Result<Option<u8>, Error> {
    value
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            raw.parse::<u8>()
                .ok()
                .filter(|age| *age <= AGE_MAX)
                .ok_or_else(|| {
                    field_error(
                        field,
                        ErrorCode::InvalidValue,
                        format!("{} must be a whole number between 0 and {AGE_MAX}", field.as_str()),
                    )
                })
        })
        .transpose()
}

/// Parse a query value with `FromStr`, reporting failures against `field`.
pub(crate) fn parse_query_value<T>(value: Option<&str>, field: FieldName) -> Result<Option<T>, Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|err| field_error(field, ErrorCode::InvalidValue, err.to_string()))
        })
        .transpose()
}

/// Parse a `{id}` path segment. Anything that is not a user id cannot name a
/// stored user, so it is reported as not found.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse::<UserId>()
        .map_err(|_| Error::not_found(format!("user {raw} not found")))
}

fn malformed_body(message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "code": ErrorCode::MalformedBody.as_str(),
    }))
}

/// JSON extractor configuration reporting body errors as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        malformed_body(format!("invalid JSON body: {err}")).into()
    })
}

/// Query extractor configuration reporting parse errors as domain errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        malformed_body(format!("invalid query string: {err}")).into()
    })
}
