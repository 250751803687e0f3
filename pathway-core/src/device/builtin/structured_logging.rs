use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::errors::DeviceError;
use crate::device::core::{Device, DeviceResult};
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, error, info, trace, warn};

// ----------------------------------------------------------------------------
// Logging level & config
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingConfig {
    #[serde(default = "default_level")]
    level: LogLevel,

    #[serde(default = "default_include_request_id")]
    include_request_id: bool,
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

fn default_include_request_id() -> bool {
    true
}

// ----------------------------------------------------------------------------
// Emit macro (DRY-out logging calls)
// ----------------------------------------------------------------------------

macro_rules! emit {
    ($level:expr, $($fields:tt)*) => {
        match $level {
            LogLevel::Trace => trace!($($fields)*),
            LogLevel::Debug => debug!($($fields)*),
            LogLevel::Info  => info!($($fields)*),
            LogLevel::Warn  => warn!($($fields)*),
            LogLevel::Error => error!($($fields)*),
        }
    };
}

// ----------------------------------------------------------------------------
// Device implementation
// ----------------------------------------------------------------------------

/// Emits one structured event per pipeline phase.
///
/// Runs after the routing path is settled, so its request events show both
/// the raw wire path and the path the router will actually match.
pub struct StructuredLoggingDevice {
    level: LogLevel,
    include_request_id: bool,
}

impl StructuredLoggingDevice {
    pub fn from_config(raw: &serde_yaml::Value) -> Result<Self> {
        let cfg: LoggingConfig =
            serde_yaml::from_value(raw.clone()).context("invalid structured_logging config")?;

        Ok(Self {
            level: cfg.level,
            include_request_id: cfg.include_request_id,
        })
    }

    fn request_id_field(&self, request_id: Option<String>) -> Option<String> {
        if self.include_request_id {
            request_id
        } else {
            None
        }
    }
}

impl Device for StructuredLoggingDevice {
    fn on_request(&self, ctx: &mut RequestCtx) -> DeviceResult {
        emit!(
            self.level,
            event = "request",
            method = ctx.method_str(),
            raw_path = ctx.raw_path(),
            route_path = ctx.route_path(),
            request_id = self.request_id_field(ctx.request_id()),
        );

        DeviceResult::Continue
    }

    fn on_response(&self, ctx: &mut ResponseCtx) -> DeviceResult {
        emit!(
            self.level,
            event = "response",
            status = ctx.status.as_str(),
            request_id = self.request_id_field(ctx.request_id.clone()),
        );

        DeviceResult::Continue
    }

    fn on_error(&self, err: &DeviceError) {
        emit!(
            self.level,
            event = "device_error",
            fatal = err.fatal,
            message = %err.message,
        );
    }
}
