//! Room registry: owns every live room, keyed by name.
//!
//! Rooms never leak out as `&mut`; mutations go through the registry's
//! own methods so the room invariant cannot be broken from outside.
//!
//! Mutating methods return `None` when the named room does not exist.
//! That is the normal idle-client case (a host clicking `lock` right as
//! the room is removed), not an error: callers broadcast nothing and
//! move on.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{BuzzOutcome, Room, RoomError, Team};

/// All live rooms, keyed by room name.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<String, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self { rooms: HashMap::new() }
    }

    /// Creates an open, zero-score room.
    ///
    /// Room names are unique; creating over an existing name fails and
    /// leaves the existing room untouched.
    pub fn create(&mut self, name: &str) -> Result<&Room, RoomError> {
        match self.rooms.entry(name.to_string()) {
            Entry::Occupied(_) => Err(RoomError::DuplicateRoom(name.to_string())),
            Entry::Vacant(slot) => {
                let room = slot.insert(Room::new(name));
                tracing::info!(room = name, "room created");
                Ok(&*room)
            }
        }
    }

    /// Removes a room, returning its final state if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Room> {
        let room = self.rooms.remove(name);
        if room.is_some() {
            tracing::info!(room = name, "room removed");
        }
        room
    }

    pub fn get(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    // -----------------------------------------------------------------------
    // Per-room mutations
    // -----------------------------------------------------------------------

    /// Attempts a buzz in the named room.
    pub fn buzz(&mut self, name: &str, player: &str) -> Option<BuzzOutcome> {
        self.rooms.get_mut(name).map(|room| room.buzz(player))
    }

    /// Locks the named room.
    pub fn lock(&mut self, name: &str) -> Option<&Room> {
        self.rooms.get_mut(name).map(|room| {
            room.lock();
            &*room
        })
    }

    /// Unlocks the named room, clearing any holder.
    pub fn unlock(&mut self, name: &str) -> Option<&Room> {
        self.rooms.get_mut(name).map(|room| {
            room.unlock();
            &*room
        })
    }

    /// Clears the named room's holder, keeping the lock.
    pub fn clear_buzz(&mut self, name: &str) -> Option<&Room> {
        self.rooms.get_mut(name).map(|room| {
            room.clear_buzz();
            &*room
        })
    }

    /// Adjusts one team's score in the named room.
    pub fn adjust_score(
        &mut self,
        name: &str,
        team: Team,
        delta: i64,
    ) -> Option<&Room> {
        self.rooms.get_mut(name).map(|room| {
            room.adjust_score(team, delta);
            &*room
        })
    }
}
