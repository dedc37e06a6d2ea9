//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`GatewayError`]
//! at the port boundary. Downstream failures carry their source but are never
//! retried or compensated at this layer.

/// Errors surfaced by gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The actor is absent, unknown, or does not own the target device.
    #[error("Unauthorized")]
    Unauthorized,

    /// The ownership store failed.
    #[error("ownership store failure")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The command publisher failed to hand off a command.
    #[error("command publish failure")]
    Publish(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The device information provider failed.
    #[error("device information failure")]
    Info(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    /// Wrap a storage backend error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }

    /// Wrap a publisher hand-off error.
    pub fn publish(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Publish(Box::new(err))
    }

    /// Wrap a device information provider error.
    pub fn info(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Info(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unauthorized_verbatim() {
        assert_eq!(GatewayError::Unauthorized.to_string(), "Unauthorized");
    }

    #[test]
    fn should_keep_source_when_wrapping_storage_error() {
        let io = std::io::Error::other("db gone");
        let err = GatewayError::storage(io);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "ownership store failure");
    }

    #[test]
    fn should_keep_source_when_wrapping_publish_error() {
        let io = std::io::Error::other("broker gone");
        let err = GatewayError::publish(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
