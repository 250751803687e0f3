use crate::conf::{BuiltinDeviceKind, PipelineConfig};
use crate::device::builtin::clean_path::CleanPathDevice;
use crate::device::builtin::structured_logging::StructuredLoggingDevice;
use crate::device::core::Device;
use anyhow::{Context, Result};
use std::sync::Arc;

fn build_builtin(kind: BuiltinDeviceKind, cfg: &serde_yaml::Value) -> Result<Arc<dyn Device>> {
    match kind {
        BuiltinDeviceKind::CleanPath => Ok(Arc::new(CleanPathDevice::new())),
        BuiltinDeviceKind::StructuredLogging => {
            Ok(Arc::new(StructuredLoggingDevice::from_config(cfg)?))
        }
    }
}

/// Holds the assembled device chain, in configuration order.
pub struct DeviceRegistry {
    devices: Vec<Arc<dyn Device>>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    pub fn load_from_config(&mut self, cfg: &PipelineConfig) -> Result<()> {
        for device_cfg in &cfg.devices {
            if !device_cfg.enabled {
                continue;
            }

            let device = build_builtin(device_cfg.builtin, &device_cfg.config)
                .with_context(|| format!("failed to build device '{}'", device_cfg.name))?;

            self.devices.push(device);
        }

        Ok(())
    }

    pub fn all(&self) -> &[Arc<dyn Device>] {
        &self.devices
    }
}
