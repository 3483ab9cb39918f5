//! Room actor message and event types.

use serde::Serialize;
use tokio::sync::{mpsc, oneshot};

use crate::game::{
    Card, Chips, PlayerId, RoomError, RoomId, RoomSnapshot, ShowdownResult, Street,
};

/// Messages that can be sent to a `RoomActor`. Requests carry a oneshot
/// sender for the reply; `Subscribe` is fire-and-forget.
#[derive(Debug)]
pub enum RoomMessage {
    /// Seat a new player in the lobby
    Join {
        name: String,
        reply: oneshot::Sender<Result<PlayerId, RoomError>>,
    },

    /// Deal hole cards and enter pre-flop
    Start {
        reply: oneshot::Sender<Result<(), RoomError>>,
    },

    /// Reveal the next community cards
    Reveal {
        street: Street,
        reply: oneshot::Sender<Result<Vec<Card>, RoomError>>,
    },

    /// Add a bet to the pot
    Bet {
        amount: i64,
        reply: oneshot::Sender<Result<Chips, RoomError>>,
    },

    /// Rank all hands and pick the winners
    Showdown {
        reply: oneshot::Sender<Result<ShowdownResult, RoomError>>,
    },

    /// Tear the room down to an empty lobby
    Reset {
        reply: oneshot::Sender<RoomSnapshot>,
    },

    /// Read-only copy of the current room state
    Snapshot {
        reply: oneshot::Sender<RoomSnapshot>,
    },

    /// Subscribe to room events
    Subscribe { sender: mpsc::Sender<RoomEvent> },
}

/// Event pushed to subscribers after a transition commits.
#[derive(Debug, Clone, Serialize)]
pub struct RoomEvent {
    pub room_id: RoomId,
    #[serde(flatten)]
    pub kind: RoomEventKind,
}

/// What changed. `GameUpdate` follows every successful mutating
/// transition; `GameResult` follows a showdown.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "payload")]
pub enum RoomEventKind {
    #[serde(rename = "gameUpdate")]
    GameUpdate(RoomSnapshot),
    #[serde(rename = "gameResult")]
    GameResult(ShowdownResult),
}

impl RoomEventKind {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Self::GameUpdate(_) => "gameUpdate",
            Self::GameResult(_) => "gameResult",
        }
    }
}
