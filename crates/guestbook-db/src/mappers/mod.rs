//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for rows read back from PostgreSQL.
//! Inserts bind entity fields directly.

mod message;
mod user;
