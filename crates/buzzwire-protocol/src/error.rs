//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding wire events.
///
/// Decode failures are expected during normal operation: clients may send
/// events this server does not understand, and the session handler drops
/// such frames after logging them.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serializing a value to bytes failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// Parsing bytes into an event failed.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}
