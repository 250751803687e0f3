use crate::ctx::RequestCtx;
use anyhow::{Result, anyhow};

/// Longest-prefix router over the context's routing path.
///
/// Matching runs after the device pipeline, so the path consulted here is
/// the routing path: the override recorded by a pipeline stage when one
/// exists, the raw wire path otherwise.
#[derive(Debug)]
pub struct Router {
    routes: Vec<RouteEntry>,
}

#[derive(Debug)]
pub struct RouteEntry {
    pub path: String,
    pub upstream: String,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn add_route(&mut self, path: &str, upstream: &str) -> Result<()> {
        if !path.starts_with('/') {
            return Err(anyhow!("route path must start with '/': {}", path));
        }

        if self.routes.iter().any(|r| r.path == path) {
            return Err(anyhow!("duplicate route path: {}", path));
        }

        self.routes.push(RouteEntry {
            path: path.to_string(),
            upstream: upstream.to_string(),
        });

        // The longest prefix wins --> sort descending by path length.
        self.routes.sort_by(|a, b| b.path.len().cmp(&a.path.len()));

        Ok(())
    }

    pub fn match_route(&self, ctx: &RequestCtx) -> Result<&RouteEntry> {
        let request_path = ctx.route_path();

        for route in &self.routes {
            if path_matches(&route.path, request_path) {
                return Ok(route);
            }
        }

        Err(anyhow!("no route matched path {}", request_path))
    }
}

fn path_matches(route_path: &str, request_path: &str) -> bool {
    if route_path == "/" {
        return true;
    }

    if request_path == route_path {
        return true;
    }

    // Prefix matches only count on segment boundaries.
    request_path.starts_with(route_path)
        && request_path
            .as_bytes()
            .get(route_path.len())
            .map(|b| *b == b'/')
            .unwrap_or(false)
}
