//! Shared test utilities.

use contact_profile_server::store::{AttributeStore, StoreError};
use contact_profile_server::{InMemoryAttributeStore, ProfileRequestHandler, ProfileServerConfig};
use std::collections::HashMap;

pub const INSTANCE_ID: &str = "test-instance";

/// Initialize logging for test runs so `RUST_LOG` is honored.
///
/// Safe to call from every test; only the first call wins.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a handler plus a handle on its backing store.
///
/// `InMemoryAttributeStore` is a cheap clone over shared state, so tests can
/// seed or fault the store after handing it to the handler.
pub fn test_handler() -> (
    ProfileRequestHandler<InMemoryAttributeStore>,
    InMemoryAttributeStore,
) {
    init_logging();
    let store = InMemoryAttributeStore::new();
    let handler =
        ProfileRequestHandler::new(store.clone(), ProfileServerConfig::new(INSTANCE_ID));
    (handler, store)
}

/// Convenience constructor for attribute maps.
pub fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A store whose every operation is denied, for exercising substitution of
/// the injected store with an arbitrary failing backend.
pub struct DeniedStore;

impl AttributeStore for DeniedStore {
    type Error = StoreError;

    async fn read_attributes(
        &self,
        _instance_id: &str,
        _contact_id: &str,
    ) -> Result<HashMap<String, String>, Self::Error> {
        Err(StoreError::access_denied("read_attributes", "denied by test"))
    }

    async fn write_attributes(
        &self,
        _instance_id: &str,
        _contact_id: &str,
        _attributes: HashMap<String, String>,
    ) -> Result<(), Self::Error> {
        Err(StoreError::access_denied("write_attributes", "denied by test"))
    }
}
