//! Request context for log correlation.

use uuid::Uuid;

/// Per-invocation context carried through dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// Unique identifier for this request, used in log lines.
    pub request_id: String,
}

impl RequestContext {
    /// Create a context with a specific request ID.
    pub fn new(request_id: String) -> Self {
        Self { request_id }
    }

    /// Create a context with a freshly generated request ID.
    pub fn with_generated_id() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }
}
