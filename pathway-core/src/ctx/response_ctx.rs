use http::{HeaderMap, StatusCode};

/// Response payload produced when a device short-circuits the pipeline
/// instead of letting the request continue to the router.
#[derive(Debug)]
pub struct ResponseCtx {
    pub request_id: Option<String>,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ResponseCtx {
    pub fn new(
        request_id: Option<String>,
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Self {
        Self {
            request_id,
            status,
            headers,
            body,
        }
    }

    /// Plain-text response, the common short-circuit shape.
    pub fn text(request_id: Option<String>, status: StatusCode, body: &str) -> Self {
        Self::new(request_id, status, HeaderMap::new(), body.as_bytes().to_vec())
    }
}
