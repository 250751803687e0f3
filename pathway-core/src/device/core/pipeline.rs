use super::{Device, DeviceResult};
use crate::ctx::{RequestCtx, ResponseCtx};
use std::sync::Arc;

/// Runs a device chain phase by phase.
///
/// Devices execute in declaration order; the first non-Continue result stops
/// the chain. The request phase must run before the router matches, so the
/// routing path every later stage observes is already settled.
pub struct DevicePipeline;

impl DevicePipeline {
    pub fn run_on_request(devices: &[Arc<dyn Device>], ctx: &mut RequestCtx) -> DeviceResult {
        for dev in devices {
            match dev.on_request(ctx) {
                DeviceResult::Continue => continue,
                r @ DeviceResult::Respond(_) => return r,
                DeviceResult::Error(err) => {
                    dev.on_error(&err);
                    return DeviceResult::Error(err);
                }
            }
        }
        DeviceResult::Continue
    }

    pub fn run_on_response(devices: &[Arc<dyn Device>], ctx: &mut ResponseCtx) -> DeviceResult {
        for dev in devices {
            match dev.on_response(ctx) {
                DeviceResult::Continue => continue,
                r @ DeviceResult::Respond(_) => return r,
                DeviceResult::Error(err) => {
                    dev.on_error(&err);
                    return DeviceResult::Error(err);
                }
            }
        }
        DeviceResult::Continue
    }
}
