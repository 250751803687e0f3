use http::{Extensions, Method, Uri};
use uuid::Uuid;

/// Correlation id assigned at hydration and carried in the context
/// extensions.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct RequestId(pub String);

impl Default for RequestId {
    fn default() -> Self {
        RequestId(Uuid::new_v4().to_string())
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId(s.to_owned())
    }
}

/// Canonical request context passed through the pathway pipeline.
///
/// One context exists per request flow: it is created empty at request
/// entry, hydrated exactly once from the parsed request line, mutated only
/// by the flow that owns it, and dropped when the response is finalized.
#[derive(Debug)]
pub struct RequestCtx {
    /// Lifecycle flag to determine if the context has already been hydrated.
    pub hydrated: bool,

    /// Request method token.
    method: Method,

    /// Path as received on the wire. Read-only after hydration.
    raw_path: String,

    /// Routing-path override consulted by the router. `None` means no
    /// pipeline stage recorded an override and the router falls back to the
    /// raw wire path.
    route_path: Option<String>,

    /// Request-scoped typed extensions (NOT forwarded, NOT logged by default).
    pub extensions: Extensions,
}

impl Default for RequestCtx {
    fn default() -> Self {
        Self::empty()
    }
}

/// Hydration API
impl RequestCtx {
    pub fn empty() -> Self {
        Self {
            hydrated: false,
            method: Method::GET,
            raw_path: String::new(),
            route_path: None,
            extensions: Extensions::new(),
        }
    }

    /// Create a boundary to decouple the embedding server from the pipeline.
    ///
    /// Hydration cannot fail: the request line was already parsed by the
    /// server, and no normalization happens here. For a CONNECT request the
    /// target is an authority rather than a path, so `Uri::path()` yields
    /// the empty string and the context carries that as the raw path.
    pub fn hydrate(&mut self, method: Method, target: &Uri) {
        debug_assert!(!self.hydrated, "Already hydrated, cannot hydrate again");

        // Generate a new request ID.
        self.extensions.insert(RequestId::default());

        self.method = method;
        self.raw_path = target.path().to_string();

        self.hydrated = true;
    }
}

/// Request path API
impl RequestCtx {
    /// Path the router matches against: the recorded override when one
    /// exists, the raw wire path otherwise.
    pub fn route_path(&self) -> &str {
        debug_assert!(self.hydrated);
        self.route_path.as_deref().unwrap_or(&self.raw_path)
    }

    /// The override itself. `None` means no stage wrote one.
    pub fn route_path_override(&self) -> Option<&str> {
        debug_assert!(self.hydrated);
        self.route_path.as_deref()
    }

    pub fn set_route_path(&mut self, path: String) {
        debug_assert!(self.hydrated);
        self.route_path = Some(path);
    }

    /// Path as received on the wire, untouched by any pipeline stage.
    pub fn raw_path(&self) -> &str {
        debug_assert!(self.hydrated);
        &self.raw_path
    }
}

/// Method API
impl RequestCtx {
    pub fn method(&self) -> &Method {
        debug_assert!(self.hydrated);
        &self.method
    }

    pub fn method_str(&self) -> &str {
        self.method().as_str()
    }
}

/// Request ID API
impl RequestCtx {
    pub fn request_id(&self) -> Option<String> {
        self.extensions.get::<RequestId>().map(|id| id.0.clone())
    }
}
