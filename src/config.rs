//! Handler configuration.

/// Configuration for a [`ProfileRequestHandler`](crate::handler::ProfileRequestHandler).
///
/// `instance_id` identifies the contact-center instance whose attribute store
/// backs the profiles. It is fixed deployment configuration, never derived
/// from request input.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileServerConfig {
    /// Contact-center instance the handler operates against.
    pub instance_id: String,
}

impl ProfileServerConfig {
    /// Create a configuration for the given instance.
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
        }
    }
}
