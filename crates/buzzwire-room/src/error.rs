//! Error types for the room layer.

use buzzwire_transport::ConnectionId;

/// Errors that can occur registering rooms and players.
///
/// These are refusals, not failures: the caller logs them and carries
/// on, and nothing is reported back to the offending client.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoomError {
    /// A room with this name already exists.
    #[error("room {0:?} already exists")]
    DuplicateRoom(String),

    /// The named room does not exist.
    #[error("room {0:?} not found")]
    RoomNotFound(String),

    /// The name is already registered by a player in that room.
    #[error("player {name:?} already in room {room:?}")]
    DuplicateName { name: String, room: String },

    /// The connection already registered a player.
    #[error("connection {conn} already registered player {name:?}")]
    ConnectionInUse { conn: ConnectionId, name: String },
}
