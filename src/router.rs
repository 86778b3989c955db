//! Route classification for profile requests.
//!
//! Matching is pure and exhaustive: the four supported `(method, template)`
//! pairs map to the four profile operations, everything else is
//! [`RouteMatch::NotFound`]. Templates are compared literally — there is no
//! wildcard or prefix matching beyond the single `{id}` parameter the HTTP
//! layer has already extracted.

/// The closed set of profile operations the handler supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileOperation {
    /// Read a profile's attribute map.
    Get,
    /// First write of a profile's attributes.
    Create,
    /// Overwrite a profile's attributes.
    Update,
    /// Overwrite a profile's attributes with the empty map.
    Delete,
}

/// Outcome of classifying one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    /// The request matched one of the four supported routes.
    Operation(ProfileOperation),
    /// No supported route matched; the handler answers 404.
    NotFound,
}

/// Classify a request by method and matched route template.
///
/// Side-effect free; the caller extracts path parameters separately.
pub fn route(method: &str, path: &str) -> RouteMatch {
    match (method, path) {
        ("GET", "/customers/{id}") => RouteMatch::Operation(ProfileOperation::Get),
        ("POST", "/customers") => RouteMatch::Operation(ProfileOperation::Create),
        ("PUT", "/customers/{id}") => RouteMatch::Operation(ProfileOperation::Update),
        ("DELETE", "/customers/{id}") => RouteMatch::Operation(ProfileOperation::Delete),
        _ => RouteMatch::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_routes() {
        assert_eq!(
            route("GET", "/customers/{id}"),
            RouteMatch::Operation(ProfileOperation::Get)
        );
        assert_eq!(
            route("POST", "/customers"),
            RouteMatch::Operation(ProfileOperation::Create)
        );
        assert_eq!(
            route("PUT", "/customers/{id}"),
            RouteMatch::Operation(ProfileOperation::Update)
        );
        assert_eq!(
            route("DELETE", "/customers/{id}"),
            RouteMatch::Operation(ProfileOperation::Delete)
        );
    }

    #[test]
    fn test_unsupported_combinations_are_not_found() {
        assert_eq!(route("POST", "/customers/{id}"), RouteMatch::NotFound);
        assert_eq!(route("GET", "/customers"), RouteMatch::NotFound);
        assert_eq!(route("PATCH", "/customers/{id}"), RouteMatch::NotFound);
        assert_eq!(route("DELETE", "/customers"), RouteMatch::NotFound);
        assert_eq!(route("GET", "/orders/{id}"), RouteMatch::NotFound);
        assert_eq!(route("GET", ""), RouteMatch::NotFound);
    }

    #[test]
    fn test_matching_is_literal_not_prefix() {
        assert_eq!(route("GET", "/customers/{id}/notes"), RouteMatch::NotFound);
        assert_eq!(route("GET", "/customers/c1"), RouteMatch::NotFound);
        // Method comparison is case-sensitive; normalization is the HTTP
        // layer's job.
        assert_eq!(route("get", "/customers/{id}"), RouteMatch::NotFound);
    }
}
