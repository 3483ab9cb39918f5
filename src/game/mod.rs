//! Core game model: cards, hand evaluation, and the per-room state
//! machine. Everything here is synchronous and single-threaded; the
//! `room` module wraps it for concurrent access.

pub mod entities;
pub mod evaluator;
pub mod state_machine;

pub use entities::{
    Card, Chips, Deck, HandScore, Player, PlayerId, PlayerRanking, PlayerView, Rank, RoomId,
    RoomSnapshot, ShowdownResult, Suit, Value,
};
pub use state_machine::{GameState, Phase, RoomError, Street};
