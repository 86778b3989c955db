//! Profile request handling.
//!
//! This module turns a normalized HTTP request into exactly one attribute
//! store call and maps the outcome back to an HTTP response.
//!
//! # Key Types
//!
//! - [`ProfileRequestHandler`] - Main handler for processing profile requests
//! - [`crate::http::HttpRequest`] - Normalized request descriptor
//! - [`crate::http::HttpResponse`] - Status code plus JSON body
//!
//! # Examples
//!
//! ```rust,no_run
//! use contact_profile_server::config::ProfileServerConfig;
//! use contact_profile_server::handler::ProfileRequestHandler;
//! use contact_profile_server::http::HttpRequest;
//! use contact_profile_server::store::InMemoryAttributeStore;
//!
//! # async fn example() {
//! let store = InMemoryAttributeStore::new();
//! let handler = ProfileRequestHandler::new(store, ProfileServerConfig::new("inst-1"));
//!
//! let response = handler.handle(HttpRequest::get("c1")).await;
//! println!("{}: {}", response.status_code, response.body);
//! # }
//! ```

mod core;
mod crud;
mod errors;

pub use core::ProfileRequestHandler;
pub use errors::error_response;
