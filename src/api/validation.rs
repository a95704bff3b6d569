//! Request validation.
//!
//! Bodies are deserialized and checked before any store access; every
//! failure becomes a 400.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::ApiError;
use crate::db::utils::is_valid_entity_id;

/// Checks a deserialized request body.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// JSON body extractor that rejects malformed or invalid payloads with 400.
///
/// Plain `Json` answers 415/422 for some failures; clients of this API only
/// distinguish "bad request" from everything else.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Title fields must be non-empty.
pub fn check_title(title: &str) -> Result<(), ApiError> {
    if title.is_empty() {
        return Err(ApiError::Validation("Title is required".to_string()));
    }
    Ok(())
}

pub fn check_optional_title(title: Option<&str>) -> Result<(), ApiError> {
    title.map_or(Ok(()), check_title)
}

/// Positions are non-negative sort keys.
pub fn check_position(position: Option<i64>) -> Result<(), ApiError> {
    match position {
        Some(p) if p < 0 => Err(ApiError::Validation(format!(
            "Position must be a non-negative integer, got {}",
            p
        ))),
        _ => Ok(()),
    }
}

/// Due dates are RFC 3339 datetimes.
pub fn check_due_date(due_date: Option<&str>) -> Result<(), ApiError> {
    if let Some(value) = due_date
        && chrono::DateTime::parse_from_rfc3339(value).is_err()
    {
        return Err(ApiError::Validation(format!(
            "dueDate must be an RFC 3339 datetime, got '{}'",
            value
        )));
    }
    Ok(())
}

/// Referenced ids in bodies must look like generated entity ids.
pub fn check_entity_id(field: &str, value: &str) -> Result<(), ApiError> {
    if !is_valid_entity_id(value) {
        return Err(ApiError::Validation(format!(
            "{}: Invalid ObjectId '{}'",
            field, value
        )));
    }
    Ok(())
}
