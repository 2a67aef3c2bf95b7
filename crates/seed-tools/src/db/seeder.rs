//! Database seeding utilities.

use store::Database;
use store::StoreError;
use store::auth::hash_password;
use store::config::DatabaseConfig;
use store::models::{AdminAccount, NewAdmin, Role, Translation};
use thiserror::Error;
use tracing::info;

use crate::config::AdminSeedConfig;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Writes seed rows through a single database handle.
pub struct Seeder {
    db: Database,
}

impl Seeder {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, SeedError> {
        let db = Database::connect(config).await?;
        info!("Connected to database");
        Ok(Self::new(db))
    }

    /// Hashes the configured password and upserts the admin account by email.
    pub async fn seed_admin(&self, config: &AdminSeedConfig) -> Result<AdminAccount, SeedError> {
        info!("Seeding admin account {}...", config.email);

        let admin = NewAdmin {
            email: config.email.clone(),
            password_hash: hash_password(&config.password)?,
            role: Role::Admin,
            name: config.name.clone(),
            phone: config.phone.clone(),
        };
        let account = self.db.upsert_admin(&admin).await?;

        info!(
            "Seeded {} account {} ({})",
            account.role.as_str(),
            account.email,
            account.id
        );
        Ok(account)
    }

    /// Upserts translation rows, returning how many were written.
    pub async fn seed_translations(&self, entries: &[Translation]) -> Result<u64, SeedError> {
        info!("Seeding {} translations...", entries.len());

        let written = self.db.upsert_translations(entries).await?;

        info!("Seeded {} translations", written);
        Ok(written)
    }

    /// Closes the pool, then hands back `result` unchanged.
    pub async fn finish<T>(self, result: Result<T, SeedError>) -> Result<T, SeedError> {
        self.db.close().await;
        info!("Database connection closed");
        result
    }
}
