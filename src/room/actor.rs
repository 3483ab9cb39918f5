//! Room actor implementation with async message handling.
//!
//! Each room runs as a single task draining an mpsc inbox, so every
//! transition on one room is serialized while different rooms proceed
//! in parallel. Events go out through per-subscriber channels with
//! `try_send`, so a slow consumer can never stall the room.

use tokio::sync::mpsc;

use super::{
    config::RoomConfig,
    messages::{RoomEvent, RoomEventKind, RoomMessage},
};
use crate::game::{GameState, RoomError, RoomId};

/// Room actor handle for sending messages
#[derive(Clone)]
pub struct RoomHandle {
    sender: mpsc::Sender<RoomMessage>,
    room_id: RoomId,
}

impl RoomHandle {
    /// Create a new room handle
    pub fn new(sender: mpsc::Sender<RoomMessage>, room_id: RoomId) -> Self {
        Self { sender, room_id }
    }

    /// Get room ID
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Send a message to the room
    pub async fn send(&self, message: RoomMessage) -> Result<(), RoomError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| RoomError::RoomClosed)
    }
}

/// Room actor managing a single game room
pub struct RoomActor {
    /// Room ID
    room_id: RoomId,

    /// Game state machine
    state: GameState,

    /// Message inbox
    inbox: mpsc::Receiver<RoomMessage>,

    /// Subscribers for room event notifications
    subscribers: Vec<mpsc::Sender<RoomEvent>>,
}

impl RoomActor {
    /// Create a new room actor and its handle.
    pub fn new(room_id: RoomId, config: &RoomConfig) -> (Self, RoomHandle) {
        let (sender, inbox) = mpsc::channel(config.inbox_capacity);

        let actor = Self {
            room_id: room_id.clone(),
            state: GameState::new(config.max_players),
            inbox,
            subscribers: Vec::new(),
        };

        let handle = RoomHandle::new(sender, room_id);

        (actor, handle)
    }

    /// Run the room actor event loop. Returns when every handle to the
    /// room has been dropped.
    pub async fn run(mut self) {
        log::info!("Room {} open", self.room_id);

        while let Some(message) = self.inbox.recv().await {
            self.handle_message(message);
        }

        log::info!("Room {} closed", self.room_id);
    }

    /// Handle a room message. Failed transitions reply with the error
    /// and publish nothing; the state is untouched.
    fn handle_message(&mut self, message: RoomMessage) {
        match message {
            RoomMessage::Join { name, reply } => {
                let result = self.state.join(&name);
                let changed = result.is_ok();
                let _ = reply.send(result);
                if changed {
                    self.publish_update();
                }
            }

            RoomMessage::Start { reply } => {
                let result = self.state.start();
                let changed = result.is_ok();
                let _ = reply.send(result);
                if changed {
                    self.publish_update();
                }
            }

            RoomMessage::Reveal { street, reply } => {
                let result = self.state.reveal(street).map(|board| board.to_vec());
                let changed = result.is_ok();
                let _ = reply.send(result);
                if changed {
                    self.publish_update();
                }
            }

            RoomMessage::Bet { amount, reply } => {
                let result = self.state.bet(amount);
                let changed = result.is_ok();
                let _ = reply.send(result);
                if changed {
                    self.publish_update();
                }
            }

            RoomMessage::Showdown { reply } => {
                let result = self.state.showdown();
                let outcome = result.clone().ok();
                let _ = reply.send(result);
                if let Some(outcome) = outcome {
                    self.publish(RoomEventKind::GameResult(outcome));
                }
            }

            RoomMessage::Reset { reply } => {
                self.state.reset();
                let _ = reply.send(self.snapshot());
                self.publish_update();
            }

            RoomMessage::Snapshot { reply } => {
                let _ = reply.send(self.snapshot());
            }

            RoomMessage::Subscribe { sender } => {
                self.subscribers.push(sender);
                log::debug!(
                    "Room {} gained a subscriber ({} total)",
                    self.room_id,
                    self.subscribers.len()
                );
            }
        }
    }

    fn snapshot(&self) -> crate::game::RoomSnapshot {
        self.state.snapshot(&self.room_id)
    }

    fn publish_update(&mut self) {
        self.publish(RoomEventKind::GameUpdate(self.snapshot()));
    }

    /// Broadcast an event to all subscribers. A full channel drops
    /// this event but keeps the subscriber; a closed channel removes
    /// the subscriber.
    fn publish(&mut self, kind: RoomEventKind) {
        let event = RoomEvent {
            room_id: self.room_id.clone(),
            kind,
        };
        let room_id = &self.room_id;
        self.subscribers.retain(|sender| {
            match sender.try_send(event.clone()) {
                Ok(()) => true,
                Err(mpsc::error::TrySendError::Full(dropped)) => {
                    log::warn!(
                        "Room {room_id}: subscriber channel full, dropping {} event",
                        dropped.kind.name()
                    );
                    true
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    log::debug!("Room {room_id}: subscriber disconnected, removing");
                    false
                }
            }
        });
    }
}
