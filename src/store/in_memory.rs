//! In-memory attribute store.
//!
//! Thread-safe implementation of [`AttributeStore`] backed by a nested
//! HashMap behind an async RwLock, for tests and development. A fault switch
//! lets tests simulate remote failures on any operation without a second
//! store type.

use crate::store::{AttributeStore, StoreError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

// Structure: instance_id -> contact_id -> attribute name -> value
type AttributeMap = HashMap<String, HashMap<String, HashMap<String, String>>>;

/// Thread-safe in-memory attribute store.
///
/// Writes upsert the contact; reads of an unknown contact fail with
/// [`StoreError::ContactNotFound`], matching the remote platform's behavior
/// for an unknown contact id.
#[derive(Clone, Default)]
pub struct InMemoryAttributeStore {
    data: Arc<RwLock<AttributeMap>>,
    fault: Arc<RwLock<Option<String>>>,
}

impl InMemoryAttributeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with the given message, until
    /// [`clear_fault`](Self::clear_fault) is called. For simulating remote
    /// outages in tests.
    pub async fn inject_fault(&self, message: impl Into<String>) {
        let mut fault_guard = self.fault.write().await;
        *fault_guard = Some(message.into());
    }

    /// Remove an injected fault.
    pub async fn clear_fault(&self) {
        let mut fault_guard = self.fault.write().await;
        *fault_guard = None;
    }

    /// Number of contacts held for an instance.
    pub async fn contact_count(&self, instance_id: &str) -> usize {
        let data_guard = self.data.read().await;
        data_guard
            .get(instance_id)
            .map(|contacts| contacts.len())
            .unwrap_or(0)
    }

    /// All contact IDs held for an instance.
    pub async fn list_contacts(&self, instance_id: &str) -> Vec<String> {
        let data_guard = self.data.read().await;
        data_guard
            .get(instance_id)
            .map(|contacts| contacts.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all data (useful for testing).
    pub async fn clear(&self) {
        let mut data_guard = self.data.write().await;
        data_guard.clear();
    }

    async fn check_fault(&self) -> Result<(), StoreError> {
        let fault_guard = self.fault.read().await;
        match fault_guard.as_ref() {
            Some(message) => Err(StoreError::unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

impl AttributeStore for InMemoryAttributeStore {
    type Error = StoreError;

    async fn read_attributes(
        &self,
        instance_id: &str,
        contact_id: &str,
    ) -> Result<HashMap<String, String>, Self::Error> {
        self.check_fault().await?;

        let data_guard = self.data.read().await;
        data_guard
            .get(instance_id)
            .and_then(|contacts| contacts.get(contact_id))
            .cloned()
            .ok_or_else(|| StoreError::contact_not_found(instance_id, contact_id))
    }

    async fn write_attributes(
        &self,
        instance_id: &str,
        contact_id: &str,
        attributes: HashMap<String, String>,
    ) -> Result<(), Self::Error> {
        self.check_fault().await?;

        let mut data_guard = self.data.write().await;
        data_guard
            .entry(instance_id.to_string())
            .or_default()
            .insert(contact_id.to_string(), attributes);
        Ok(())
    }
}
