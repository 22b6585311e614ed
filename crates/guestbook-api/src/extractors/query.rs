//! Typed query string extractor

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::response::ApiError;

/// Query string deserialized into `T`, rejected as `INVALID_QUERY_PARAMETER`
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(ApiQuery(value))
    }
}

/// `GET /messages/search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search_term: String,
    #[serde(default)]
    pub num: Option<i64>,
}

/// `POST /activate`
#[derive(Debug, Deserialize)]
pub struct ActivateParams {
    pub token: String,
}
