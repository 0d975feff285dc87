//! Broadcast gateway: fans server events out to a room's subscribers.
//!
//! Each connection's session handler owns the receiving half of an
//! unbounded channel and writes whatever arrives to its socket. The
//! gateway holds the sending halves, grouped by room, so a broadcast is
//! a synchronous loop of non-blocking sends. Delivery is best effort: a
//! subscriber whose receiver is gone is skipped, and its entry is swept
//! out when the connection's disconnect cleanup runs.
//!
//! Subscription is independent of the player roster. Hosts subscribe
//! without being players, and a player who exits a room keeps receiving
//! its broadcasts until the socket closes.

use std::collections::HashMap;

use buzzwire_protocol::ServerEvent;
use buzzwire_transport::ConnectionId;
use tokio::sync::mpsc;

/// Sending half of a connection's outbound event queue.
pub type EventSender = mpsc::UnboundedSender<ServerEvent>;

/// Per-room subscriber channels.
#[derive(Debug, Default)]
pub struct RoomChannels {
    rooms: HashMap<String, HashMap<ConnectionId, EventSender>>,
}

impl RoomChannels {
    pub fn new() -> Self {
        Self { rooms: HashMap::new() }
    }

    /// Subscribes a connection to a room's broadcasts.
    ///
    /// Re-subscribing replaces the previous sender for that connection.
    pub fn subscribe(&mut self, room: &str, conn: ConnectionId, sender: EventSender) {
        self.rooms
            .entry(room.to_string())
            .or_default()
            .insert(conn, sender);
        tracing::debug!(room, %conn, "subscribed to room");
    }

    /// Drops every subscription a connection holds, in any room.
    pub fn drop_connection(&mut self, conn: ConnectionId) {
        self.rooms.retain(|_, subs| {
            subs.remove(&conn);
            !subs.is_empty()
        });
    }

    /// Drops a room's channel entirely.
    pub fn drop_room(&mut self, room: &str) {
        if self.rooms.remove(room).is_some() {
            tracing::debug!(room, "dropped room channel");
        }
    }

    /// Queues an event for every subscriber of a room.
    ///
    /// Unknown rooms and closed receivers are skipped silently.
    pub fn broadcast(&self, room: &str, event: ServerEvent) {
        let Some(subs) = self.rooms.get(room) else {
            return;
        };
        for sender in subs.values() {
            let _ = sender.send(event.clone());
        }
    }

    /// Number of live subscriptions for a room.
    pub fn subscriber_count(&self, room: &str) -> usize {
        self.rooms.get(room).map_or(0, HashMap::len)
    }
}
