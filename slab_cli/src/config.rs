use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use slab_core::request::DesignRequest;
use slab_core::CalculatorSettings;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "slabcalc.toml";

/// Load settings from `path`, or from ./slabcalc.toml when present, or defaults.
///
/// An explicit path that cannot be read is an error; a missing default file is not.
pub fn load_settings(path: Option<&Path>) -> Result<CalculatorSettings> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                debug!("no config file, using default settings");
                return Ok(CalculatorSettings::default());
            }
            default
        }
    };

    let text = fs::read_to_string(&path).with_context(|| format!("failed to read config {}", path.display()))?;
    let settings: CalculatorSettings =
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), code = %settings.code, "loaded settings");
    Ok(settings)
}

/// Read a JSON design request
pub fn load_request(path: &Path) -> Result<DesignRequest> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read request {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid request {}", path.display()))
}
