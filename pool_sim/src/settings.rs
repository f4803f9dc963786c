use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pool_core::Config;

/// Load a table configuration, or the defaults when no file is given.
///
/// The file is JSON; any field left out keeps its default.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            parse_config(&raw).with_context(|| format!("loading config file {}", path.display()))?
        }
        None => Config::default(),
    };
    Ok(config)
}

/// Parse and validate a JSON configuration
pub fn parse_config(raw: &str) -> Result<Config> {
    let config: Config = serde_json::from_str(raw).context("parsing config JSON")?;
    config.validate().context("validating config")?;
    Ok(config)
}
