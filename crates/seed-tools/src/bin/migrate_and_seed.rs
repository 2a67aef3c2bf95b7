//! Applies pending migrations, then seeds translations.
//!
//! The seed step only runs if the migration step succeeds. Override the
//! commands with `MIGRATE_COMMAND` and `SEED_COMMAND`.

use seed_tools::prelude::*;
use tracing::{error, info};

fn run() -> anyhow::Result<()> {
    let config = RunnerConfig::from_env();

    let summary = Pipeline::new()
        .step(Step::from_command_line("migrate", &config.migrate_command)?)
        .step(Step::from_command_line("seed", &config.seed_command)?)
        .run()?;

    info!("Migration and seed completed ({} steps)", summary.completed.len());
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("Migration and seed failed: {e:#}");
        std::process::exit(1);
    }
}
