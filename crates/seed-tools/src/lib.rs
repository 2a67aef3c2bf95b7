//! Seeding and maintenance tools for the backoffice database.
//!
//! Each binary in `src/bin` is a thin, flag-less wrapper around one of the
//! modules here:
//!
//! - `seed-admin`: [`db::Seeder::seed_admin`]
//! - `seed-translations`: [`catalog::TranslationCatalog`] + [`db::Seeder::seed_translations`]
//! - `run-translation-seed` / `migrate-and-seed`: [`runner::Pipeline`]
//! - `format-sql-batch`: [`sql_batch::format_file`]
//!
//! Every tool logs a failure and exits with status 1.

pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod runner;
pub mod sql_batch;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::{CatalogError, TranslationCatalog};
    pub use crate::config::{AdminSeedConfig, RunnerConfig, SqlBatchConfig, TranslationSeedConfig};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::logging::init_logging;
    pub use crate::runner::{Pipeline, RunSummary, RunnerError, Step};
    pub use crate::sql_batch::{FormatError, FormatReport, format_file};
    pub use store::config::DatabaseConfig;
}
