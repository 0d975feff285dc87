//! Transport layer for Buzzwire.
//!
//! Defines the [`Transport`] (listener) and [`Connection`] (accepted peer)
//! traits the server is written against, plus the WebSocket implementation
//! used in production.
//!
//! # Feature Flags
//!
//! - `websocket` (default) — WebSocket listener via `tokio-tungstenite`

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "websocket")]
mod websocket;

pub use error::TransportError;
#[cfg(feature = "websocket")]
pub use websocket::{WebSocketConnection, WebSocketTransport};

use std::fmt;

/// Opaque identifier assigned to each accepted connection.
///
/// Identifies a peer for the lifetime of its socket; never reused while the
/// process runs. This is the `id` the roster broadcasts expose to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Wraps a raw `u64`.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64`, e.g. for inclusion in a wire payload.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// A listener that produces connections.
pub trait Transport: Send + Sync + 'static {
    /// The connection type this transport accepts.
    type Connection: Connection;
    /// The error type for listener operations.
    type Error: std::error::Error + Send + Sync;

    /// Waits for the next incoming connection and completes its handshake.
    async fn accept(&mut self) -> Result<Self::Connection, Self::Error>;
}

/// A single bidirectional byte-message connection.
///
/// Send and receive must not block each other: the server broadcasts to
/// connections that are concurrently parked in [`Connection::recv`].
pub trait Connection: Send + Sync + 'static {
    /// The error type for connection operations.
    type Error: std::error::Error + Send + Sync;

    /// Sends one message to the peer.
    async fn send(&self, data: &[u8]) -> Result<(), Self::Error>;

    /// Receives the next message from the peer.
    ///
    /// Returns `Ok(None)` once the connection is closed.
    async fn recv(&self) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Closes the connection.
    async fn close(&self) -> Result<(), Self::Error>;

    /// The identifier assigned when this connection was accepted.
    fn id(&self) -> ConnectionId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_id_roundtrip() {
        assert_eq!(ConnectionId::new(99).into_inner(), 99);
    }

    #[test]
    fn test_connection_id_display() {
        assert_eq!(ConnectionId::new(3).to_string(), "conn-3");
    }

    #[test]
    fn test_connection_id_usable_as_map_key() {
        let mut seen = std::collections::HashMap::new();
        seen.insert(ConnectionId::new(10), 1u32);
        seen.insert(ConnectionId::new(11), 2u32);
        assert_eq!(seen[&ConnectionId::new(10)], 1);
        assert_ne!(ConnectionId::new(10), ConnectionId::new(11));
    }
}
