//! Loads the translation catalog and upserts it.
//!
//! Run with:
//! ```
//! TRANSLATIONS_FILE=seeds/translations.json cargo run -p seed-tools --bin seed-translations
//! ```

use seed_tools::prelude::*;
use tracing::{error, info};

async fn run() -> anyhow::Result<()> {
    let db_config = DatabaseConfig::from_env();
    let seed_config = TranslationSeedConfig::from_env();

    let catalog = TranslationCatalog::load(&seed_config.file)?;
    info!(
        "Loaded {} translations across {} locales from {}",
        catalog.len(),
        catalog.locale_count(),
        seed_config.file.display()
    );

    let seeder = Seeder::connect(&db_config).await?;
    let result = seeder.seed_translations(&catalog.entries()).await;
    let written = seeder.finish(result).await?;

    info!("Translation seed completed: {written} rows");
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        error!("Translation seed failed: {e:#}");
        std::process::exit(1);
    }
}
