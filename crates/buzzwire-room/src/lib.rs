//! Room and player state for Buzzwire.
//!
//! Plain synchronous data structures; the game hub in the server crate
//! wraps them in its own lock and drives them from event handlers.
//!
//! # Key types
//!
//! - [`Room`] — team scores plus the buzz-lock state machine
//! - [`RoomRegistry`] — every live room, keyed by name
//! - [`PlayerRegistry`] — the global roster, kept in join order
//! - [`BuzzState`] / [`BuzzOutcome`] — buzz arbitration results

mod error;
mod player;
mod registry;
mod room;

pub use error::RoomError;
pub use player::{Player, PlayerRegistry};
pub use registry::RoomRegistry;
pub use room::{BuzzOutcome, BuzzState, Room, Team};
