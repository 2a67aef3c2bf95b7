use crate::errors::StoreError;
use crate::models::{AdminAccount, NewAdmin, Translation};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::DatabaseConfig;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool for the configured database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        debug!("Connecting to database (max {} connections)", config.max_connections);
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect(&config.url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        info!("Applying {} migrations", crate::MIGRATOR.iter().count());
        crate::MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    /// Closes the pool. Waits for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Creates the account if no row has this email, otherwise overwrites
    /// password, role, name, and phone in place.
    pub async fn upsert_admin(&self, admin: &NewAdmin) -> Result<AdminAccount, StoreError> {
        let account = sqlx::query_as::<_, AdminAccount>(
            r#"
            INSERT INTO users (id, email, password_hash, role, name, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            ON CONFLICT (email) DO UPDATE
            SET password_hash = EXCLUDED.password_hash,
                role = EXCLUDED.role,
                name = EXCLUDED.name,
                phone = EXCLUDED.phone,
                updated_at = NOW()
            RETURNING id, email, password_hash, role, name, phone, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(admin.role)
        .bind(&admin.name)
        .bind(&admin.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    pub async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, StoreError> {
        let account = sqlx::query_as(
            r#"
            SELECT id, email, password_hash, role, name, phone, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    pub async fn count_users_with_email(&self, email: &str) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Upserts every translation in a single transaction. Returns the number of rows written.
    pub async fn upsert_translations(&self, entries: &[Translation]) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;
        let mut written = 0;

        for entry in entries {
            let result = sqlx::query(
                r#"
                INSERT INTO translations (locale, key, value, updated_at)
                VALUES ($1, $2, $3, NOW())
                ON CONFLICT (locale, key) DO UPDATE
                SET value = EXCLUDED.value,
                    updated_at = NOW()
                "#,
            )
            .bind(&entry.locale)
            .bind(&entry.key)
            .bind(&entry.value)
            .execute(&mut *tx)
            .await?;
            written += result.rows_affected();
        }

        tx.commit().await?;
        Ok(written)
    }

    pub async fn get_translations(&self, locale: &str) -> Result<Vec<Translation>, StoreError> {
        let rows = sqlx::query_as(
            r#"
            SELECT locale, key, value
            FROM translations
            WHERE locale = $1
            ORDER BY key
            "#,
        )
        .bind(locale)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
