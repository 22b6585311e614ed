//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and query parameters.

mod auth;
mod pagination;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use pagination::{PageSize, PageSizeParams};
pub use path::MessageIdPath;
pub use query::{ActivateParams, ApiQuery, SearchParams};
pub use validated::{JsonBody, ValidatedJson};
