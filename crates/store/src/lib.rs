//! Core types and database access for the backoffice database.
//!
//! The schema lives in `migrations/` and is applied by `sqlx migrate run`
//! (see the `migrate-and-seed` tool). [`MIGRATOR`] embeds the same files for
//! callers that want to apply them in-process, such as integration tests.

pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod models;

pub use database::Database;
pub use errors::StoreError;

/// Embedded copy of the schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
