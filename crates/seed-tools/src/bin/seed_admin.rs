//! Creates or updates the administrative account.
//!
//! Run with:
//! ```
//! ADMIN_EMAIL=ops@example.com ADMIN_PASSWORD=... cargo run -p seed-tools --bin seed-admin
//! ```

use seed_tools::prelude::*;
use tracing::{error, info};

async fn run() -> anyhow::Result<()> {
    let db_config = DatabaseConfig::from_env();
    let admin = AdminSeedConfig::from_env();

    let seeder = Seeder::connect(&db_config).await?;
    let result = seeder.seed_admin(&admin).await;
    let account = seeder.finish(result).await?;

    info!("Admin seed completed: {} <{}>", account.name, account.email);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        error!("Admin seed failed: {e:#}");
        std::process::exit(1);
    }
}
