//! Page size extractor
//!
//! Reads the optional `num` query parameter. Clamping to the configured
//! bounds happens in the services, so a handler only forwards the request.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw `num` query parameter
#[derive(Debug, Deserialize)]
pub struct PageSizeParams {
    #[serde(default)]
    pub num: Option<i64>,
}

/// Requested page size, if any
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSize(pub Option<i64>);

#[async_trait]
impl<S> FromRequestParts<S> for PageSize
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageSizeParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_query("'num' must be an integer"))?;

        Ok(PageSize(params.num))
    }
}
