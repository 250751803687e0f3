use crate::clean::clean_path;
use crate::ctx::RequestCtx;
use crate::device::core::{Device, DeviceResult};
use http::Method;
use tracing::debug;

/// Rewrites the routing path to the cleaned form of the raw wire path
/// before the router matches.
///
/// CONNECT requests pass through untouched: their request target is an
/// authority (host:port) rather than a hierarchical path, and rewriting it
/// would corrupt tunnel establishment.
#[derive(Debug, Default)]
pub struct CleanPathDevice;

impl CleanPathDevice {
    pub fn new() -> Self {
        Self
    }
}

impl Device for CleanPathDevice {
    /// CleanPath is a request-only stage: it writes the route-path override
    /// and never responds or fails.
    fn on_request(&self, ctx: &mut RequestCtx) -> DeviceResult {
        // Authority-form target; path semantics do not apply.
        if ctx.method() == Method::CONNECT {
            return DeviceResult::Continue;
        }

        let outcome = clean_path(ctx.raw_path());

        if outcome.was_rewritten() {
            debug!(
                raw_path = ctx.raw_path(),
                route_path = outcome.path().as_str(),
                "request path rewritten for routing"
            );
        }

        ctx.set_route_path(outcome.into_path().into_string());

        DeviceResult::Continue
    }
}
