//! Runs the translation seeding command as a child process.
//!
//! The command defaults to the `seed-translations` binary and can be replaced
//! with `SEED_COMMAND`.

use seed_tools::prelude::*;
use tracing::{error, info};

fn run() -> anyhow::Result<()> {
    let config = RunnerConfig::from_env();

    Pipeline::new()
        .step(Step::from_command_line("seed translations", &config.seed_command)?)
        .run()?;

    info!("Translations seeded");
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("Translation seeding failed: {e:#}");
        std::process::exit(1);
    }
}
