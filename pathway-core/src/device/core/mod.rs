pub mod errors;
pub mod pipeline;
pub mod registry;
pub mod result;

use self::errors::DeviceError;
pub use self::pipeline::DevicePipeline;
pub use self::registry::DeviceRegistry;
pub use self::result::DeviceResult;
use crate::ctx::{RequestCtx, ResponseCtx};

/// A processing unit in the request pipeline.
///
/// Devices run in declaration order between request entry and route
/// matching, and again on the way back out for responses. Each device must
/// be both Send and Sync so the embedding server can share one device chain
/// across concurrent request flows.
///
/// All methods provide default implementations that simply continue the
/// pipeline, allowing implementations to override only the hooks they care
/// about.
pub trait Device: Send + Sync {
    /// Called when a request is first received, before the router matches.
    ///
    /// The one place a device may rewrite the routing path.
    fn on_request(&self, _ctx: &mut RequestCtx) -> DeviceResult {
        DeviceResult::Continue
    }

    /// Called just before the response is sent back to the client.
    fn on_response(&self, _ctx: &mut ResponseCtx) -> DeviceResult {
        DeviceResult::Continue
    }

    /// Called when an error occurs during pipeline processing.
    fn on_error(&self, _err: &DeviceError) {}
}
