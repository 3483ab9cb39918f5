//! # Card Rooms
//!
//! Ephemeral hold'em-style game rooms with a complete showdown
//! evaluator and concurrency-safe room hosting.
//!
//! Each room is a small state machine walking the community-card
//! lifecycle:
//!
//! - **Lobby**: players join; nothing is dealt
//! - **PreFlop**: two hole cards per player, betting open
//! - **Flop/Turn/River**: community cards revealed street by street
//! - **Showdown**: every 7-card hand ranked, winners picked
//!
//! and an explicit reset returns it to an empty lobby.
//!
//! Rooms live behind a [`room::RoomRegistry`]: each one is an actor on
//! its own Tokio task, so transitions on a single room are strictly
//! serialized while distinct rooms run in parallel. Subscribers get
//! `gameUpdate` and `gameResult` events over bounded channels that a
//! slow consumer can never block.
//!
//! ## Core Modules
//!
//! - [`game`]: cards, hand evaluation, and the per-room state machine
//! - [`room`]: actors, registry, and event broadcast
//!
//! ## Example
//!
//! ```
//! use card_rooms::GameState;
//!
//! // A room starts out as an empty lobby
//! let room = GameState::new(10);
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    Card, Chips, Deck, GameState, HandScore, Phase, Player, PlayerId, Rank, RoomError, RoomId,
    RoomSnapshot, ShowdownResult, Street, Suit, Value, evaluator,
};

/// Concurrent room hosting and event broadcast.
pub mod room;
pub use room::{RoomConfig, RoomEvent, RoomEventKind, RoomRegistry};
