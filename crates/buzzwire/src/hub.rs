//! The game hub: single coordinator for rooms, players, and broadcasts.
//!
//! All game state lives here, behind one async mutex. Each inbound event
//! locks the hub, mutates the registries, queues any broadcasts on the
//! subscribers' unbounded channels, and releases the lock. Queueing never
//! awaits, so every handler runs to completion while it holds the lock:
//! buzz arbitration needs no further synchronization, and two buzzes can
//! never interleave halfway.
//!
//! Refused events (duplicate names, unknown rooms) are logged and dropped.
//! The wire protocol has no error event, so clients learn about refusals
//! only through the absence of the broadcasts a success would have caused.

use std::sync::Arc;

use buzzwire_gateway::{EventSender, RoomChannels};
use buzzwire_protocol::{ClientEvent, ServerEvent};
use buzzwire_room::{BuzzOutcome, PlayerRegistry, RoomError, RoomRegistry, Team};
use buzzwire_transport::ConnectionId;
use tokio::sync::Mutex;

/// Handle shared between the accept loop, session handlers, and the HTTP
/// surface.
pub type SharedHub = Arc<Mutex<GameHub>>;

/// Owns the room registry, the player roster, and the broadcast channels.
#[derive(Debug, Default)]
pub struct GameHub {
    rooms: RoomRegistry,
    players: PlayerRegistry,
    channels: RoomChannels,
}

impl GameHub {
    pub fn new() -> Self {
        Self {
            rooms: RoomRegistry::new(),
            players: PlayerRegistry::new(),
            channels: RoomChannels::new(),
        }
    }

    /// Routes one decoded client event to its operation.
    ///
    /// `sender` is the queue feeding this connection's socket; join events
    /// hand a clone to the gateway so later broadcasts reach it.
    pub fn handle_event(
        &mut self,
        conn: ConnectionId,
        sender: &EventSender,
        event: ClientEvent,
    ) {
        match event {
            ClientEvent::PlayerJoined(player) => {
                if let Err(e) =
                    self.player_joined(conn, sender.clone(), &player.name, &player.room)
                {
                    tracing::warn!(%conn, error = %e, "player join refused");
                }
            }
            ClientEvent::CreateRoom(room) => {
                if let Err(e) = self.create_room(&room) {
                    tracing::warn!(%conn, error = %e, "create room refused");
                }
            }
            ClientEvent::HostJoined(room) => {
                if let Err(e) = self.host_joined(conn, sender.clone(), &room) {
                    tracing::warn!(%conn, error = %e, "host join refused");
                }
            }
            ClientEvent::ExitRoom(player) => self.exit_room(&player.name, &player.room),
            ClientEvent::RemoveRoom(room) => self.remove_room(&room),
            ClientEvent::Buzz(player) => self.buzz(&player.name, &player.room),
            ClientEvent::Lock(room) => self.lock(&room),
            ClientEvent::Unlock(room) => self.unlock(&room),
            ClientEvent::Clear(room) => self.clear_buzz(&room),
            ClientEvent::AddBlue(room) => self.adjust_score(&room, Team::Blue, 1),
            ClientEvent::MinusBlue(room) => self.adjust_score(&room, Team::Blue, -1),
            ClientEvent::AddRed(room) => self.adjust_score(&room, Team::Red, 1),
            ClientEvent::MinusRed(room) => self.adjust_score(&room, Team::Red, -1),
        }
    }

    // -----------------------------------------------------------------------
    // Event operations
    // -----------------------------------------------------------------------

    /// Creates a room. Nothing is broadcast; the creator subscribes with a
    /// separate `host joined` or `player joined` event.
    pub fn create_room(&mut self, room: &str) -> Result<(), RoomError> {
        self.rooms.create(room)?;
        Ok(())
    }

    /// Registers a player and subscribes their connection to the room.
    ///
    /// On success everyone in the room receives the updated roster
    /// followed by the room state, the new player included.
    pub fn player_joined(
        &mut self,
        conn: ConnectionId,
        sender: EventSender,
        name: &str,
        room: &str,
    ) -> Result<(), RoomError> {
        if !self.rooms.contains(room) {
            return Err(RoomError::RoomNotFound(room.to_string()));
        }
        self.players.join(name, room, conn)?;
        self.channels.subscribe(room, conn, sender);
        self.broadcast_player_list(room);
        self.broadcast_room_state(room);
        Ok(())
    }

    /// Subscribes a connection to a room without registering a player.
    /// The room's current state is rebroadcast so the host sees it.
    pub fn host_joined(
        &mut self,
        conn: ConnectionId,
        sender: EventSender,
        room: &str,
    ) -> Result<(), RoomError> {
        if !self.rooms.contains(room) {
            return Err(RoomError::RoomNotFound(room.to_string()));
        }
        self.channels.subscribe(room, conn, sender);
        tracing::info!(%conn, room, "host joined");
        self.broadcast_room_state(room);
        Ok(())
    }

    /// Withdraws a player from the roster and tells the room.
    ///
    /// Removal matches name AND room exactly, so a same-named player in
    /// another room is untouched. The player's connection deliberately
    /// stays subscribed: the lobby client keeps showing the roster until
    /// the socket closes. The roster is rebroadcast even when no player
    /// matched, which makes retried exits harmless.
    pub fn exit_room(&mut self, name: &str, room: &str) {
        self.players.remove(name, room);
        self.broadcast_player_list(room);
    }

    /// Deletes a room: redirects every subscriber, then evicts the room's
    /// players and drops its channel, all in one step so no player is left
    /// referencing a dead room.
    pub fn remove_room(&mut self, room: &str) {
        if self.rooms.remove(room).is_none() {
            return;
        }
        self.channels.broadcast(room, ServerEvent::RedirectPlayers);
        let evicted = self.players.evict_room(room);
        self.channels.drop_room(room);
        tracing::info!(room, evicted = evicted.len(), "room removed and players evicted");
    }

    /// Runs buzz arbitration for a player.
    ///
    /// An accepted buzz emits the buzzer-sound signal and then the room
    /// state. A losing or stale buzz emits nothing at all.
    pub fn buzz(&mut self, name: &str, room: &str) {
        match self.rooms.buzz(room, name) {
            Some(BuzzOutcome::Accepted) => {
                tracing::info!(player = name, room, "buzz accepted");
                self.channels.broadcast(room, ServerEvent::BuzzerSound);
                self.broadcast_room_state(room);
            }
            Some(BuzzOutcome::Ignored) => {
                tracing::debug!(player = name, room, "buzz ignored, room not open");
            }
            None => {}
        }
    }

    /// Locks a room, keeping any current holder.
    pub fn lock(&mut self, room: &str) {
        if self.rooms.lock(room).is_some() {
            self.broadcast_room_state(room);
        }
    }

    /// Reopens a room for buzzing.
    pub fn unlock(&mut self, room: &str) {
        if self.rooms.unlock(room).is_some() {
            self.broadcast_room_state(room);
        }
    }

    /// Clears the holder while keeping the room locked.
    pub fn clear_buzz(&mut self, room: &str) {
        if self.rooms.clear_buzz(room).is_some() {
            self.broadcast_room_state(room);
        }
    }

    /// Adjusts one team's score and tells the room.
    pub fn adjust_score(&mut self, room: &str, team: Team, delta: i64) {
        if self.rooms.adjust_score(room, team, delta).is_some() {
            tracing::debug!(room, %team, delta, "score adjusted");
            self.broadcast_room_state(room);
        }
    }

    /// Cleans up after a closed connection.
    ///
    /// Drops the connection's subscriptions, removes the player it
    /// registered (if any), and tells that player's room. Rooms are never
    /// removed here; an empty room persists until `remove room`.
    pub fn disconnect(&mut self, conn: ConnectionId) {
        self.channels.drop_connection(conn);
        if let Some(player) = self.players.remove_by_connection(conn) {
            tracing::info!(player = player.name, room = player.room, %conn, "player disconnected");
            self.broadcast_player_list(&player.room);
        } else {
            tracing::debug!(%conn, "connection closed without a player");
        }
    }

    // -----------------------------------------------------------------------
    // Advisory reads (HTTP pre-validation)
    // -----------------------------------------------------------------------

    pub fn room_exists(&self, room: &str) -> bool {
        self.rooms.contains(room)
    }

    /// Whether any player in any room uses this name.
    pub fn player_name_taken(&self, name: &str) -> bool {
        self.players.name_taken(name)
    }

    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    // -----------------------------------------------------------------------
    // Broadcast helpers
    // -----------------------------------------------------------------------

    fn broadcast_player_list(&self, room: &str) {
        let roster = self.players.snapshot_of(room);
        self.channels.broadcast(room, ServerEvent::RoomData(roster));
    }

    fn broadcast_room_state(&self, room: &str) {
        if let Some(state) = self.rooms.get(room) {
            self.channels
                .broadcast(room, ServerEvent::RoomInfo(state.snapshot()));
        }
    }
}
