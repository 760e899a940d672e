//! Registry and identity client error types.

/// Errors from registry queries and identity lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Network failure, timeout, or non-2xx status.
    #[error("{endpoint} unavailable: {reason}")]
    Unavailable { endpoint: String, reason: String },

    /// The response arrived but does not have the expected shape.
    #[error("unexpected response from {endpoint}: {reason}")]
    Protocol { endpoint: String, reason: String },

    /// The identity service has no usable record for the identifier.
    #[error("no identity record for {identifier}")]
    IdentityNotFound { identifier: String },

    /// Client construction failed on bad configuration.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
