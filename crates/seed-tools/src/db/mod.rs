//! Database seeding for the admin account and translations.
//!
//! A [`Seeder`] owns the pool for the lifetime of one tool run. Callers pass
//! every result through [`Seeder::finish`], which closes the pool on both the
//! success and failure paths.

mod seeder;

pub use seeder::{SeedError, Seeder};
