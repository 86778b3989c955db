//! Normalized HTTP request and response types.
//!
//! The handler is transport-agnostic: whatever actually terminates HTTP
//! (an API gateway event, a web framework, a test) produces an
//! [`HttpRequest`] and renders the returned [`HttpResponse`]. The request
//! carries the route template the HTTP layer matched (e.g.
//! `/customers/{id}`) plus the extracted path parameters; the response is a
//! status code and a JSON body.
//!
//! # Examples
//!
//! ```rust
//! use contact_profile_server::http::HttpRequest;
//! use serde_json::json;
//!
//! let request = HttpRequest::post(
//!     "/customers",
//!     json!({"id": "c1", "attributes": {"tier": "gold"}}).to_string(),
//! );
//! assert_eq!(request.method, "POST");
//! ```

use serde_json::{Value, json};
use std::collections::HashMap;

/// Normalized request descriptor for one handler invocation.
///
/// Immutable for the duration of the invocation. `path` is the matched route
/// template, not the concrete URL; the single `{id}` segment value arrives in
/// `path_params`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method, uppercase ("GET", "POST", ...).
    pub method: String,
    /// Matched route template, e.g. "/customers/{id}".
    pub path: String,
    /// Values bound to path template parameters.
    pub path_params: HashMap<String, String>,
    /// Raw request body, if the request carried one.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Create a request with no path parameters and no body.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            path_params: HashMap::new(),
            body: None,
        }
    }

    /// Create a GET request for a single customer.
    pub fn get(contact_id: impl Into<String>) -> Self {
        Self::new("GET", "/customers/{id}").with_path_param("id", contact_id)
    }

    /// Create a POST request with the given body.
    pub fn post(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new("POST", path).with_body(body)
    }

    /// Create a PUT request for a single customer with the given body.
    pub fn put(contact_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new("PUT", "/customers/{id}")
            .with_path_param("id", contact_id)
            .with_body(body)
    }

    /// Create a DELETE request for a single customer.
    pub fn delete(contact_id: impl Into<String>) -> Self {
        Self::new("DELETE", "/customers/{id}").with_path_param("id", contact_id)
    }

    /// Bind a path template parameter.
    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name.into(), value.into());
        self
    }

    /// Attach a request body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// HTTP response produced by the handler: status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Value,
}

impl HttpResponse {
    /// 200 OK with the given body.
    pub fn ok(body: Value) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    /// 201 Created with the given body.
    pub fn created(body: Value) -> Self {
        Self {
            status_code: 201,
            body,
        }
    }

    /// 200 OK with a `{message}` body.
    pub fn message(text: &str) -> Self {
        Self::ok(json!({ "message": text }))
    }

    /// 404 for requests matching none of the supported routes.
    pub fn route_not_found() -> Self {
        Self {
            status_code: 404,
            body: json!({ "error": "Route not found" }),
        }
    }

    /// 500 with the fault message in an `{error}` body.
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: json!({ "error": message.into() }),
        }
    }
}
