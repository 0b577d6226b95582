//! Response contract for the geodata endpoint.
//!
//! The processor only ever looks at three things: the status code, the
//! declared content type, and the body text. [`GeodataResponse`] captures
//! exactly that contract, with one HTTP-backed implementation used at runtime
//! and one in-memory implementation used as a test double.

/// Minimal view of an API response, as consumed by the response processor.
pub trait GeodataResponse {
    /// HTTP status code of the response.
    fn status(&self) -> u16;

    /// Value of the `Content-Type` header, if one was present.
    fn content_type(&self) -> Option<&str>;

    /// Response body as text.
    fn body(&self) -> &str;
}

/// A response captured from a real HTTP exchange.
///
/// The requester drains the body eagerly so the processor can work on plain
/// data without holding any network resource.
#[derive(Debug, Clone)]
pub struct HttpGeodataResponse {
    pub(crate) status: u16,
    pub(crate) content_type: Option<String>,
    pub(crate) body: String,
}

impl GeodataResponse for HttpGeodataResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn body(&self) -> &str {
        self.body.as_str()
    }
}

/// An in-memory response, for exercising the processor without a server.
#[derive(Debug, Clone)]
pub struct StaticResponse {
    status: u16,
    content_type: Option<String>,
    body: String,
}

impl StaticResponse {
    /// Builds a response with the given status, content type, and body text.
    pub fn new(status: u16, content_type: Option<&str>, body: &str) -> Self {
        Self {
            status,
            content_type: content_type.map(String::from),
            body: body.to_string(),
        }
    }

    /// Builds a 200 `application/json` response around the given body.
    pub fn json(body: &str) -> Self {
        Self::new(200, Some("application/json"), body)
    }
}

impl GeodataResponse for StaticResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn body(&self) -> &str {
        self.body.as_str()
    }
}
