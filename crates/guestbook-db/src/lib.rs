//! # guestbook-db
//!
//! PostgreSQL implementations of the repository traits defined in
//! `guestbook-core`, using SQLx.
//!
//! - Connection pool management and migrations
//! - Row models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guestbook_common::AppConfig;
//! use guestbook_db::{create_pool, run_migrations, PgMessageRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     run_migrations(&pool).await?;
//!     let messages = PgMessageRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{
    create_pool, create_pool_with, run_migrations, MigrationError, PgPool, PoolOptions, MIGRATOR,
};
pub use repositories::{
    PgActivationTokenRepository, PgMessageRepository, PgUpvoteRepository, PgUserRepository,
};
