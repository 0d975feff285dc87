//! Unified error type for the Buzzwire server.

use buzzwire_transport::TransportError;

/// Top-level error returned by server startup and the serve loop.
///
/// Runtime refusals (duplicate names, stale rooms) never surface here;
/// the hub swallows those per connection. This type only carries the
/// failures that stop a server from coming up or staying up.
#[derive(Debug, thiserror::Error)]
pub enum BuzzwireError {
    /// The real-time listener failed to bind or accept.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The HTTP listener failed to bind.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transport_error() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "taken");
        let err: BuzzwireError = TransportError::Bind(io).into();
        assert!(matches!(err, BuzzwireError::Transport(_)));
        assert!(err.to_string().contains("taken"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "taken");
        let err: BuzzwireError = io.into();
        assert!(matches!(err, BuzzwireError::Io(_)));
    }
}
