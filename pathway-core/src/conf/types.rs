use serde::Deserialize;

/// Top-level pipeline configuration: the ordered device chain.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    /// Name used in build errors and log lines.
    pub name: String,

    pub builtin: BuiltinDeviceKind,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Device-specific settings, handed to the builtin's constructor.
    #[serde(default = "default_device_config")]
    pub config: serde_yaml::Value,
}

fn default_enabled() -> bool {
    true
}

fn default_device_config() -> serde_yaml::Value {
    serde_yaml::Value::Mapping(Default::default())
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinDeviceKind {
    CleanPath,
    StructuredLogging,
}
