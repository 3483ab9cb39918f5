//! Concurrent room hosting with an async actor model.
//!
//! This module implements:
//! - `RoomActor`: async actor serializing all transitions on one room
//! - `RoomRegistry`: spawns and addresses room actors by ID
//! - Message-based communication over tokio channels
//! - Fire-and-forget event broadcast to subscribers
//!
//! ## Architecture
//!
//! Each room runs in its own Tokio task draining an mpsc inbox. The
//! registry holds a handle per room behind an `RwLock`, cloning it out
//! before any await, so rooms mutate independently while operations on
//! one room stay strictly ordered.
//!
//! ## Example
//!
//! ```ignore
//! use card_rooms::room::RoomRegistry;
//! use card_rooms::game::Street;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = RoomRegistry::new();
//!     registry.create_room("table-1").await?;
//!     registry.join_room("table-1", "alice").await?;
//!     registry.join_room("table-1", "bob").await?;
//!     registry.start_game("table-1").await?;
//!     let board = registry.reveal_cards("table-1", Street::Flop).await?;
//! }
//! ```

pub mod actor;
pub mod config;
pub mod messages;
pub mod registry;

pub use actor::{RoomActor, RoomHandle};
pub use config::RoomConfig;
pub use messages::{RoomEvent, RoomEventKind, RoomMessage};
pub use registry::RoomRegistry;
