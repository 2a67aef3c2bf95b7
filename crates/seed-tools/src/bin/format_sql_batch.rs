//! Prints the statements of a SQL dump and writes a numbered copy.
//!
//! Run with:
//! ```
//! SQL_BATCH_INPUT=dump.sql SQL_BATCH_OUTPUT=dump.numbered.sql \
//!     cargo run -p seed-tools --bin format-sql-batch
//! ```

use seed_tools::prelude::*;
use tracing::{error, info};

fn run() -> anyhow::Result<()> {
    let config = SqlBatchConfig::from_env();

    let stdout = std::io::stdout();
    let report = format_file(&config, &mut stdout.lock())?;

    info!(
        "Formatted {} statements into {}",
        report.statements,
        report.output.display()
    );
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("SQL batch formatting failed: {e:#}");
        std::process::exit(1);
    }
}
