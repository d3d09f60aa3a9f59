use log::info;

use crate::config::Config;
use crate::error::Result;

/// Log a summary of the effective configuration. Validation itself already
/// ran in main.
pub fn handle_validate(cfg: &Config) -> Result<()> {
    info!(
        "Database: {}:{}/{} (user: {})",
        cfg.database.host, cfg.database.port, cfg.database.database, cfg.database.username
    );
    info!("Log level: {}", cfg.logging.level());
    info!("Log file: {}", cfg.logging.file());
    info!("Chart output: {}", cfg.chart.file());

    Ok(())
}
