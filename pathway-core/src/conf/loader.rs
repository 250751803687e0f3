use crate::conf::error::ConfigError;
use crate::conf::types::PipelineConfig;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load a pipeline config file and run structural checks.
pub fn load_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let config: PipelineConfig =
        serde_yaml::from_str(&raw).map_err(|e| ConfigError::parse(path, e))?;

    //--------------------------------------------------------------------------
    // Structural checks: device names must be unique
    //--------------------------------------------------------------------------
    let mut seen = HashSet::new();
    for device in &config.devices {
        if !seen.insert(device.name.as_str()) {
            return Err(ConfigError::DuplicateDevice {
                name: device.name.clone(),
            });
        }
    }

    Ok(config)
}
