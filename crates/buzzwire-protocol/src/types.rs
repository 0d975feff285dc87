//! Wire-level event types.
//!
//! Every frame is a single JSON object tagged by an `event` field with the
//! payload under `data`:
//!
//! ```json
//! {"event": "player joined", "data": {"name": "ada", "room": "trivia"}}
//! {"event": "buzz",          "data": {"name": "ada", "room": "trivia"}}
//! {"event": "add blue",      "data": "trivia"}
//! ```
//!
//! Event names contain spaces; they are part of the protocol and must not
//! be normalized. A frame the server does not recognize fails to decode and
//! is dropped by the session handler.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Payload fragments
// ---------------------------------------------------------------------------

/// Identifies a player by name within a room.
///
/// Inbound events address players by `(name, room)`, never by connection ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub name: String,
    pub room: String,
}

/// One roster entry in a `room data` broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub room: String,
    /// ID of the connection the player joined on.
    pub id: u64,
}

/// Full room state, broadcast as `room info` after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub name: String,
    pub blue: i64,
    pub red: i64,
    /// Name of the player holding the buzzer, `""` when nobody does.
    pub buzzed: String,
    pub locked: bool,
}

// ---------------------------------------------------------------------------
// Client -> server events
// ---------------------------------------------------------------------------

/// Events sent by clients.
///
/// Score and buzz-control events carry the bare room name as their payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientEvent {
    /// Register as a player and subscribe to the room's broadcasts.
    #[serde(rename = "player joined")]
    PlayerJoined(PlayerRef),

    /// Create a room. The creator is not subscribed to it.
    #[serde(rename = "create room")]
    CreateRoom(String),

    /// Subscribe to a room's broadcasts without registering a player.
    #[serde(rename = "host joined")]
    HostJoined(String),

    /// Withdraw a player from the roster. The connection stays subscribed.
    #[serde(rename = "exit room")]
    ExitRoom(PlayerRef),

    /// Delete a room and evict everyone in it.
    #[serde(rename = "remove room")]
    RemoveRoom(String),

    /// Claim the buzzer. Only the first claim while the room is open wins.
    #[serde(rename = "buzz")]
    Buzz(PlayerRef),

    /// Lock the room without naming a buzzer holder.
    #[serde(rename = "lock")]
    Lock(String),

    /// Reopen the room, clearing lock and buzzer holder.
    #[serde(rename = "unlock")]
    Unlock(String),

    /// Clear the buzzer holder but keep the room locked.
    #[serde(rename = "clear")]
    Clear(String),

    #[serde(rename = "add blue")]
    AddBlue(String),

    #[serde(rename = "minus blue")]
    MinusBlue(String),

    #[serde(rename = "add red")]
    AddRed(String),

    #[serde(rename = "minus red")]
    MinusRed(String),
}

// ---------------------------------------------------------------------------
// Server -> client events
// ---------------------------------------------------------------------------

/// Events broadcast by the server to a room's subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerEvent {
    /// Current roster of a room, in join order.
    #[serde(rename = "room data")]
    RoomData(Vec<PlayerSnapshot>),

    /// Current scores and buzz state of a room.
    #[serde(rename = "room info")]
    RoomInfo(RoomSnapshot),

    /// A buzz was accepted; clients play their buzzer sound.
    #[serde(rename = "buzzer sound")]
    BuzzerSound,

    /// The room was removed; clients should leave it.
    #[serde(rename = "redirect players")]
    RedirectPlayers,
}
