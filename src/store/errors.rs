//! Store-specific error types.
//!
//! These errors represent failures of the remote attribute store, separate
//! from request-shape errors in the handler layer. They mirror the fault
//! families a hosted contact-center platform actually reports: unknown
//! contact, throttling, access denial, network trouble, and internal faults.

use std::fmt;

/// Errors that can occur during attribute store operations.
#[derive(Debug)]
pub enum StoreError {
    /// The contact does not exist in the instance.
    ContactNotFound {
        instance_id: String,
        contact_id: String,
    },

    /// The platform rejected the call due to rate limiting.
    Throttled { message: String },

    /// The caller lacks permission for the operation.
    AccessDenied { operation: String, message: String },

    /// Network-level failure reaching the platform.
    Network {
        message: String,
        endpoint: Option<String>,
    },

    /// The store is temporarily unavailable.
    Unavailable { message: String },

    /// Generic internal store error.
    Internal {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ContactNotFound {
                instance_id,
                contact_id,
            } => {
                write!(f, "Contact not found: {}/{}", instance_id, contact_id)
            }
            StoreError::Throttled { message } => {
                write!(f, "Throttled: {}", message)
            }
            StoreError::AccessDenied { operation, message } => {
                write!(f, "Access denied for {}: {}", operation, message)
            }
            StoreError::Network { message, endpoint } => {
                if let Some(ep) = endpoint {
                    write!(f, "Network error: {} (endpoint: {})", message, ep)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            StoreError::Unavailable { message } => {
                write!(f, "Store unavailable: {}", message)
            }
            StoreError::Internal { message, .. } => {
                write!(f, "Internal store error: {}", message)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Internal { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

impl StoreError {
    /// Create a new ContactNotFound error.
    pub fn contact_not_found(
        instance_id: impl Into<String>,
        contact_id: impl Into<String>,
    ) -> Self {
        Self::ContactNotFound {
            instance_id: instance_id.into(),
            contact_id: contact_id.into(),
        }
    }

    /// Create a new Throttled error.
    pub fn throttled(message: impl Into<String>) -> Self {
        Self::Throttled {
            message: message.into(),
        }
    }

    /// Create a new AccessDenied error.
    pub fn access_denied(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AccessDenied {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a new Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            endpoint: None,
        }
    }

    /// Create a new Unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a new Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Internal error with a source error.
    pub fn internal_with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Check if this error indicates an unknown contact.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::ContactNotFound { .. })
    }

    /// Check if this error indicates a temporary failure that might succeed
    /// on retry.
    pub fn is_temporary(&self) -> bool {
        matches!(
            self,
            StoreError::Throttled { .. }
                | StoreError::Network { .. }
                | StoreError::Unavailable { .. }
        )
    }
}
