//! A single room: team scores plus the buzz-lock state machine.
//!
//! `Room` is plain owned state. All concurrency lives in the layer above;
//! a room only guarantees that its own invariant holds after every method:
//! a named buzzer holder implies the room is locked.

use std::fmt;

use buzzwire_protocol::RoomSnapshot;

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// The two fixed teams every room scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Blue,
    Red,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Blue => write!(f, "blue"),
            Team::Red => write!(f, "red"),
        }
    }
}

// ---------------------------------------------------------------------------
// Buzz state
// ---------------------------------------------------------------------------

/// Buzz-arbitration state of a room, derived from `(locked, buzzed)`.
///
/// ```text
///              buzz(name)
///    Open ──────────────────► Buzzed (locked, holder named)
///     │  ▲                      │
/// lock│  │unlock          clear │        unlock: Buzzed ──► Open
///     ▼  │                      ▼
///    LockedEmpty ◄──────────────┘
/// ```
///
/// `buzz` is only accepted in `Open`. `lock` and `clear` cannot name a
/// holder, so the only path into `Buzzed` is an accepted buzz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzState {
    /// Unlocked, no holder. Buzzes are accepted.
    Open,
    /// Locked with a named holder.
    Buzzed,
    /// Locked with no holder.
    LockedEmpty,
}

/// What happened to a buzz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzOutcome {
    /// The room was open; the buzzing player now holds the buzzer.
    Accepted,
    /// The room was already locked. State is unchanged.
    Ignored,
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// Scores and buzz state for one named room.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    blue: i64,
    red: i64,
    buzzed: Option<String>,
    locked: bool,
}

impl Room {
    /// Creates an open room with zeroed scores.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blue: 0,
            red: 0,
            buzzed: None,
            locked: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current buzz-arbitration state.
    pub fn state(&self) -> BuzzState {
        match (self.locked, &self.buzzed) {
            (false, _) => BuzzState::Open,
            (true, Some(_)) => BuzzState::Buzzed,
            (true, None) => BuzzState::LockedEmpty,
        }
    }

    /// Attempts to claim the buzzer for `player`.
    ///
    /// Accepted only while the room is [`BuzzState::Open`]; an accepted
    /// buzz names the holder and locks the room in one step, so no later
    /// buzz can displace the first.
    pub fn buzz(&mut self, player: &str) -> BuzzOutcome {
        if self.state() != BuzzState::Open {
            return BuzzOutcome::Ignored;
        }
        self.buzzed = Some(player.to_string());
        self.locked = true;
        BuzzOutcome::Accepted
    }

    /// Locks the room. Keeps the current holder, if any.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Unlocks the room and clears the holder.
    pub fn unlock(&mut self) {
        self.locked = false;
        self.buzzed = None;
    }

    /// Clears the holder without unlocking.
    ///
    /// On an already-open room this is a no-op: there is no holder to
    /// clear and the room stays open.
    pub fn clear_buzz(&mut self) {
        self.buzzed = None;
    }

    /// Adds `delta` (may be negative) to a team's score.
    ///
    /// Scores are unbounded in both directions; nothing clamps at zero.
    pub fn adjust_score(&mut self, team: Team, delta: i64) {
        match team {
            Team::Blue => self.blue = self.blue.saturating_add(delta),
            Team::Red => self.red = self.red.saturating_add(delta),
        }
    }

    pub fn score(&self, team: Team) -> i64 {
        match team {
            Team::Blue => self.blue,
            Team::Red => self.red,
        }
    }

    /// Name of the player holding the buzzer, if any.
    pub fn buzzed(&self) -> Option<&str> {
        self.buzzed.as_deref()
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// The wire representation broadcast as `room info`.
    ///
    /// A missing holder is encoded as the empty string.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            name: self.name.clone(),
            blue: self.blue,
            red: self.red,
            buzzed: self.buzzed.clone().unwrap_or_default(),
            locked: self.locked,
        }
    }
}
