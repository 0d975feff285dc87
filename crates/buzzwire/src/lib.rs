//! # Buzzwire
//!
//! Real-time coordinator for buzzer-style quiz rooms.
//!
//! A room has two team scores and a buzz lock; players race to claim the
//! buzzer and the first one in wins until a host clears or unlocks it.
//! The server speaks a small JSON event protocol over WebSocket and runs
//! an advisory HTTP surface the lobby uses to pre-validate names.
//!
//! ```text
//! clients ── WebSocket ──► session handlers ──► GameHub ──► broadcasts
//! lobby   ── HTTP      ──► pre-validation  ──┘   (rooms, roster)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use buzzwire::BuzzwireServer;
//!
//! # async fn run() -> Result<(), buzzwire::BuzzwireError> {
//! let server = BuzzwireServer::builder()
//!     .bind("0.0.0.0:5000")
//!     .bind_http("0.0.0.0:5001")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod handler;
mod http;
mod hub;
mod server;

pub use error::BuzzwireError;
pub use hub::{GameHub, SharedHub};
pub use server::{BuzzwireServer, BuzzwireServerBuilder};

/// One-stop imports for server binaries and integration tests.
pub mod prelude {
    pub use crate::{
        BuzzwireError, BuzzwireServer, BuzzwireServerBuilder, GameHub, SharedHub,
    };
    pub use buzzwire_protocol::{
        ClientEvent, Codec, JsonCodec, PlayerRef, PlayerSnapshot, RoomSnapshot,
        ServerEvent,
    };
    pub use buzzwire_room::{
        BuzzOutcome, BuzzState, Player, PlayerRegistry, Room, RoomError,
        RoomRegistry, Team,
    };
    pub use buzzwire_transport::ConnectionId;
}
