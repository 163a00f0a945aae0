//! Validating extractors for Web API DTOs.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::ApiError;

/// A query string extractor that validates the parsed parameters.
///
/// Parse failures and rule violations are both rendered as [`ApiError`],
/// the latter with field-level details.
///
/// ```ignore
/// async fn list_scripts(
///     ValidatedQuery(query): ValidatedQuery<ListScriptsQuery>,
/// ) -> Result<Json<Vec<ScriptResponse>>, ApiError> {
///     // query.skip and query.limit are non-negative here
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ApiError::from)?;

        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedQuery(value))
    }
}
