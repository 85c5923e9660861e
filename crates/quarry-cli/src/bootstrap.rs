use anyhow::Context;
use quarry_config::QuarryConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<QuarryConfig> {
    let mut config = QuarryConfig::load_with_dotenv().context("failed to load quarry configuration")?;
    if let Some(path) = &flags.database {
        tracing::debug!(%path, "database path overridden on the command line");
        config.database.path.clone_from(path);
    }
    Ok(config)
}
