//! Customer profile CRUD over contact-center attribute storage.
//!
//! A customer profile is a flat string-to-string attribute map attached to a
//! contact in an external contact-center platform. This crate provides the
//! request router and the CRUD translation layer: it classifies a normalized
//! HTTP request against the four supported routes, issues exactly one call
//! against the remote attribute store, and maps the outcome to an HTTP
//! response.
//!
//! # Core Components
//!
//! - [`ProfileRequestHandler`] - Routes and dispatches profile requests
//! - [`AttributeStore`] - Trait for the remote attribute store backend
//! - [`InMemoryAttributeStore`] - In-memory backend for tests and development
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use contact_profile_server::{
//!     InMemoryAttributeStore, ProfileRequestHandler, ProfileServerConfig,
//! };
//! use contact_profile_server::http::HttpRequest;
//! use serde_json::json;
//!
//! # async fn example() {
//! let store = InMemoryAttributeStore::new();
//! let handler = ProfileRequestHandler::new(store, ProfileServerConfig::new("inst-1"));
//!
//! let request = HttpRequest::post(
//!     "/customers",
//!     json!({"id": "c1", "attributes": {"tier": "gold"}}).to_string(),
//! );
//! let response = handler.handle(request).await;
//! assert_eq!(response.status_code, 201);
//! # }
//! ```
//!
//! The handler keeps no state between invocations; every operation is a
//! pass-through read or write against the store, and deletion is an
//! overwrite with the empty attribute map (the platform offers no true
//! delete primitive).

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod http;
pub mod router;
pub mod store;

// Re-export commonly used types for convenience
pub use config::ProfileServerConfig;
pub use context::RequestContext;
pub use error::{ProfileError, ProfileResult};
pub use handler::ProfileRequestHandler;
pub use http::{HttpRequest, HttpResponse};
pub use router::{ProfileOperation, RouteMatch, route};
pub use store::{AttributeStore, InMemoryAttributeStore, StoreError};
