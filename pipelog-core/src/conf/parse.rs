use crate::conf::error::ConfigError;
use crate::conf::types::ConfigLayer;
use std::fs;
use std::path::Path;

/// Reads an HCL profile file.
pub fn load_profile(path: &Path) -> Result<ConfigLayer, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let layer: ConfigLayer = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    tracing::debug!(path = %path.display(), "profile loaded");

    Ok(layer)
}
