//! Core handler infrastructure.
//!
//! Holds the handler struct and the dispatch loop: classify the request,
//! run the matching CRUD operation, and flatten any propagated fault at the
//! single outer boundary.

use crate::{
    config::ProfileServerConfig,
    context::RequestContext,
    http::{HttpRequest, HttpResponse},
    router::{ProfileOperation, RouteMatch, route},
    store::AttributeStore,
};
use log::{debug, info, warn};

/// Request handler for customer profile CRUD.
///
/// The attribute store is injected at construction; the handler keeps no
/// state of its own beyond the store handle and configuration, so concurrent
/// invocations are fully independent. Two concurrent writes to the same
/// contact race at the store with last-write-wins semantics.
pub struct ProfileRequestHandler<S: AttributeStore> {
    store: S,
    config: ProfileServerConfig,
}

impl<S: AttributeStore> ProfileRequestHandler<S> {
    /// Create a handler over the given store and configuration.
    pub fn new(store: S, config: ProfileServerConfig) -> Self {
        Self { store, config }
    }

    /// Handle one request, always producing a response.
    ///
    /// Unsupported routes answer 404. Every fault from body parsing, shape
    /// validation, or the store is caught here and becomes a 500 with the
    /// fault message in the body; callers of the HTTP surface cannot
    /// distinguish a bad request from an infrastructure fault.
    pub async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let context = RequestContext::with_generated_id();

        let operation = match route(&request.method, &request.path) {
            RouteMatch::Operation(operation) => operation,
            RouteMatch::NotFound => {
                info!(
                    "no route for {} {} (request: '{}')",
                    request.method, request.path, context.request_id
                );
                return HttpResponse::route_not_found();
            }
        };

        info!(
            "profile handler processing {:?} for {} {} (request: '{}')",
            operation, request.method, request.path, context.request_id
        );

        let result = match operation {
            ProfileOperation::Get => super::crud::handle_get(self, &request).await,
            ProfileOperation::Create => super::crud::handle_create(self, &request).await,
            ProfileOperation::Update => super::crud::handle_update(self, &request).await,
            ProfileOperation::Delete => super::crud::handle_delete(self, &request).await,
        };

        match result {
            Ok(response) => {
                debug!(
                    "profile handler completed with {} (request: '{}')",
                    response.status_code, context.request_id
                );
                response
            }
            Err(error) => {
                warn!(
                    "profile handler failed: {} (request: '{}')",
                    error, context.request_id
                );
                super::errors::error_response(&error)
            }
        }
    }

    /// Get access to the underlying attribute store.
    pub(super) fn store(&self) -> &S {
        &self.store
    }

    /// Get the handler configuration.
    pub(super) fn config(&self) -> &ProfileServerConfig {
        &self.config
    }
}
