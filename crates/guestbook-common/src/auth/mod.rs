//! Credential utilities

mod password;

pub use password::{hash_password, validate_password, verify_password};
