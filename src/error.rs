//! Error types for profile request handling.
//!
//! Routing mismatches never surface here; the router reports them as a plain
//! 404 outcome. Everything else — malformed bodies, shape violations, remote
//! store failures — is a [`ProfileError`] that propagates unchanged to the
//! single fault boundary in the request handler.

/// Main error type for profile operations.
///
/// All variants flatten to an HTTP 500 at the handler's outer boundary; the
/// variant distinction exists for logging and for embedders that call the
/// operations directly.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Request shape violations: missing path parameter, empty contact id,
    /// missing body, conflicting identifiers.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Request body failed to parse as JSON or lacked required fields.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Any failure reported by the remote attribute store.
    #[error("Attribute store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ProfileError {
    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Wrap a store error.
    pub fn store<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(error))
    }
}

/// Result type alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_message() {
        let error = ProfileError::invalid_request("missing path parameter 'id'");
        assert_eq!(
            error.to_string(),
            "Invalid request: missing path parameter 'id'"
        );
    }

    #[test]
    fn test_malformed_body_from_serde() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = ProfileError::from(parse_error);
        assert!(error.to_string().starts_with("Malformed request body"));
    }

    #[test]
    fn test_store_error_wrapping() {
        let error = ProfileError::store(crate::store::StoreError::throttled("rate exceeded"));
        assert!(error.to_string().contains("rate exceeded"));
    }
}
