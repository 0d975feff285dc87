//! Player registry: the global roster across all rooms.
//!
//! Backed by a `Vec` on purpose: `room data` broadcasts promise rosters
//! in join order, and a vector keeps that order for free. Lookups are
//! linear scans, which is fine at buzzer-game scale (tens of players).

use buzzwire_protocol::PlayerSnapshot;
use buzzwire_transport::ConnectionId;

use crate::RoomError;

/// A registered player: a display name bound to a room and the
/// connection it joined on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub room: String,
    pub conn: ConnectionId,
}

impl Player {
    /// The wire representation used in `room data` rosters.
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            name: self.name.clone(),
            room: self.room.clone(),
            id: self.conn.into_inner(),
        }
    }
}

/// Every registered player, in join order.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self { players: Vec::new() }
    }

    /// Registers a player in a room.
    ///
    /// Names are unique per room; a second join with a name already
    /// present in that room fails and changes nothing. The same name may
    /// appear in different rooms. A connection registers at most one
    /// player, so disconnect cleanup always has a single owner to remove.
    pub fn join(
        &mut self,
        name: &str,
        room: &str,
        conn: ConnectionId,
    ) -> Result<(), RoomError> {
        if let Some(owner) = self.players.iter().find(|p| p.conn == conn) {
            return Err(RoomError::ConnectionInUse {
                conn,
                name: owner.name.clone(),
            });
        }
        if self
            .players
            .iter()
            .any(|p| p.name == name && p.room == room)
        {
            return Err(RoomError::DuplicateName {
                name: name.to_string(),
                room: room.to_string(),
            });
        }
        self.players.push(Player {
            name: name.to_string(),
            room: room.to_string(),
            conn,
        });
        tracing::info!(player = name, room, %conn, "player joined");
        Ok(())
    }

    /// All players in a room, in join order.
    pub fn players_in<'a>(
        &'a self,
        room: &'a str,
    ) -> impl Iterator<Item = &'a Player> {
        self.players.iter().filter(move |p| p.room == room)
    }

    /// Roster of a room as wire snapshots, in join order.
    pub fn snapshot_of(&self, room: &str) -> Vec<PlayerSnapshot> {
        self.players_in(room).map(Player::snapshot).collect()
    }

    /// Removes players matching `name` AND `room` exactly.
    ///
    /// Matching on both fields means a player leaving one room never
    /// disturbs a same-named player in another room. Join-time
    /// uniqueness keeps duplicates out, so this removes at most one
    /// player in practice.
    pub fn remove(&mut self, name: &str, room: &str) -> Vec<Player> {
        let (removed, kept): (Vec<Player>, Vec<Player>) =
            std::mem::take(&mut self.players)
                .into_iter()
                .partition(|p| p.name == name && p.room == room);
        self.players = kept;
        if !removed.is_empty() {
            tracing::info!(player = name, room, "player left");
        }
        removed
    }

    /// Removes every player in a room. Used when the room itself goes away.
    pub fn evict_room(&mut self, room: &str) -> Vec<Player> {
        let (evicted, kept): (Vec<Player>, Vec<Player>) =
            std::mem::take(&mut self.players)
                .into_iter()
                .partition(|p| p.room == room);
        self.players = kept;
        if !evicted.is_empty() {
            tracing::debug!(room, count = evicted.len(), "evicted players");
        }
        evicted
    }

    /// Removes the player registered on a connection, if any.
    pub fn remove_by_connection(&mut self, conn: ConnectionId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.conn == conn)?;
        Some(self.players.remove(idx))
    }

    /// Whether any player anywhere uses this name.
    ///
    /// Deliberately global: the lobby's advisory join check refuses a
    /// name that is taken in any room, not just the target room.
    pub fn name_taken(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(n: u64) -> ConnectionId {
        ConnectionId::new(n)
    }

    fn names(players: &PlayerRegistry, room: &str) -> Vec<String> {
        players.players_in(room).map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_join_keeps_roster_in_join_order() {
        let mut players = PlayerRegistry::new();
        players.join("cyd", "trivia", conn(1)).unwrap();
        players.join("ada", "trivia", conn(2)).unwrap();
        players.join("bob", "trivia", conn(3)).unwrap();
        assert_eq!(names(&players, "trivia"), ["cyd", "ada", "bob"]);
    }

    #[test]
    fn test_join_rejects_duplicate_name_in_same_room() {
        let mut players = PlayerRegistry::new();
        players.join("ada", "trivia", conn(1)).unwrap();
        let err = players.join("ada", "trivia", conn(2)).unwrap_err();
        assert_eq!(
            err,
            RoomError::DuplicateName { name: "ada".into(), room: "trivia".into() }
        );
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn test_same_name_allowed_in_different_rooms() {
        let mut players = PlayerRegistry::new();
        players.join("ada", "trivia", conn(1)).unwrap();
        players.join("ada", "geography", conn(2)).unwrap();
        assert_eq!(players.len(), 2);
    }

    #[test]
    fn test_connection_registers_at_most_one_player() {
        let mut players = PlayerRegistry::new();
        players.join("ada", "trivia", conn(1)).unwrap();
        let err = players.join("alt", "trivia", conn(1)).unwrap_err();
        assert_eq!(
            err,
            RoomError::ConnectionInUse { conn: conn(1), name: "ada".into() }
        );

        // Leaving releases the binding for a rejoin on the same socket.
        players.remove("ada", "trivia");
        players.join("alt", "trivia", conn(1)).unwrap();
    }

    #[test]
    fn test_remove_matches_name_and_room_exactly() {
        let mut players = PlayerRegistry::new();
        players.join("ada", "trivia", conn(1)).unwrap();
        players.join("ada", "geography", conn(2)).unwrap();
        players.join("bob", "trivia", conn(3)).unwrap();

        let removed = players.remove("ada", "trivia");
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].conn, conn(1));

        // The same name in another room and other players in the same
        // room are untouched.
        assert_eq!(names(&players, "geography"), ["ada"]);
        assert_eq!(names(&players, "trivia"), ["bob"]);
    }

    #[test]
    fn test_remove_unknown_player_returns_empty() {
        let mut players = PlayerRegistry::new();
        players.join("ada", "trivia", conn(1)).unwrap();
        assert!(players.remove("ghost", "trivia").is_empty());
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn test_evict_room_removes_only_that_room() {
        let mut players = PlayerRegistry::new();
        players.join("ada", "trivia", conn(1)).unwrap();
        players.join("bob", "trivia", conn(2)).unwrap();
        players.join("cyd", "geography", conn(3)).unwrap();

        let evicted = players.evict_room("trivia");
        assert_eq!(evicted.len(), 2);
        assert_eq!(names(&players, "trivia"), Vec::<String>::new());
        assert_eq!(names(&players, "geography"), ["cyd"]);
    }

    #[test]
    fn test_remove_by_connection_returns_the_player() {
        let mut players = PlayerRegistry::new();
        players.join("ada", "trivia", conn(7)).unwrap();

        let gone = players.remove_by_connection(conn(7)).expect("should remove");
        assert_eq!(gone.name, "ada");
        assert!(players.remove_by_connection(conn(7)).is_none());
        assert!(players.is_empty());
    }

    #[test]
    fn test_name_taken_checks_across_all_rooms() {
        let mut players = PlayerRegistry::new();
        players.join("ada", "trivia", conn(1)).unwrap();
        assert!(players.name_taken("ada"));
        assert!(!players.name_taken("bob"));
    }

    #[test]
    fn test_snapshot_of_exposes_connection_ids() {
        let mut players = PlayerRegistry::new();
        players.join("ada", "trivia", conn(4)).unwrap();
        let roster = players.snapshot_of("trivia");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "ada");
        assert_eq!(roster[0].room, "trivia");
        assert_eq!(roster[0].id, 4);
    }
}
