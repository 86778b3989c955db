//! Attribute store abstraction.
//!
//! The remote contact-center platform stores a profile as a flat
//! string-to-string attribute map attached to a contact, addressed by
//! `(instance_id, contact_id)`. The [`AttributeStore`] trait is the only
//! interface the handler consumes; it is injected at construction so tests
//! substitute an in-memory or failing store.
//!
//! The store exposes no true delete: attribute replacement is the only write
//! primitive. "Create", "update", and "delete" are all business distinctions
//! layered on top of one overwrite call by the handler.
//!
//! # Example Usage
//!
//! ```rust
//! use contact_profile_server::store::{AttributeStore, InMemoryAttributeStore};
//! use std::collections::HashMap;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryAttributeStore::new();
//!
//! let attributes = HashMap::from([("tier".to_string(), "gold".to_string())]);
//! store.write_attributes("inst-1", "c1", attributes).await?;
//!
//! let read_back = store.read_attributes("inst-1", "c1").await?;
//! assert_eq!(read_back.get("tier").map(String::as_str), Some("gold"));
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::StoreError;
pub use in_memory::InMemoryAttributeStore;

use std::collections::HashMap;
use std::future::Future;

/// Remote attribute store keyed by `(instance_id, contact_id)`.
///
/// Implementations wrap whatever actually holds the attributes — the hosted
/// platform's API client in production, a HashMap in tests. They perform no
/// validation of attribute names or values; the handler stores whatever the
/// caller supplied, verbatim.
pub trait AttributeStore: Send + Sync {
    /// The error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the full attribute map for a contact.
    ///
    /// Fails with a not-found error if the contact does not exist in the
    /// instance; a contact whose attributes were overwritten with the empty
    /// map still exists and yields an empty map.
    fn read_attributes(
        &self,
        instance_id: &str,
        contact_id: &str,
    ) -> impl Future<Output = Result<HashMap<String, String>, Self::Error>> + Send;

    /// Replace the full attribute map for a contact.
    ///
    /// Overwrite semantics: the supplied map becomes the contact's entire
    /// attribute set. Writing the empty map is the closest thing to deletion
    /// the platform offers.
    fn write_attributes(
        &self,
        instance_id: &str,
        contact_id: &str,
        attributes: HashMap<String, String>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
