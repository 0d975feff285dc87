//! Wire protocol for Buzzwire.
//!
//! Defines the events clients and server exchange and how they are encoded:
//!
//! - **Types** ([`ClientEvent`], [`ServerEvent`] and their payloads) — the
//!   JSON event structures that travel on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how events are converted
//!   to and from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong doing that.
//!
//! The protocol layer sits between the transport (raw frames) and the game
//! hub (rooms and rosters). It knows nothing about connections or rooms,
//! only about the shape of events.
//!
//! ```text
//! Transport (bytes) → Protocol (ClientEvent) → Hub (room state)
//! ```

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{ClientEvent, PlayerRef, PlayerSnapshot, RoomSnapshot, ServerEvent};
