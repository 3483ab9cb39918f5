//! Room registry for spawning and addressing room actors.

use std::collections::HashMap;
use tokio::sync::{RwLock, mpsc, oneshot};

use super::{
    actor::{RoomActor, RoomHandle},
    config::RoomConfig,
    messages::{RoomEvent, RoomMessage},
};
use crate::game::{Card, Chips, PlayerId, RoomError, RoomId, RoomSnapshot, ShowdownResult, Street};

/// Registry of live rooms, addressed by ID.
///
/// The lock only guards the handle map; game state lives inside each
/// room's actor task. Handles are cloned out before any await, so the
/// lock is never held across a room call and operations on different
/// rooms run concurrently.
pub struct RoomRegistry {
    /// Configuration applied to every spawned room
    config: RoomConfig,

    /// Active room handles
    rooms: RwLock<HashMap<RoomId, RoomHandle>>,
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomRegistry {
    /// Create a registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RoomConfig::default(),
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with a custom configuration.
    pub fn with_config(config: RoomConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            rooms: RwLock::new(HashMap::new()),
        })
    }

    /// Get a room's handle, or `RoomNotFound`.
    async fn get_room(&self, room_id: &str) -> Result<RoomHandle, RoomError> {
        let rooms = self.rooms.read().await;
        rooms.get(room_id).cloned().ok_or(RoomError::RoomNotFound)
    }

    /// Create a room if it does not exist yet and return its snapshot.
    /// Creating an existing room is a no-op returning the live room's
    /// current state, so concurrent creates of the same ID are safe.
    pub async fn create_room(&self, room_id: &str) -> Result<RoomSnapshot, RoomError> {
        let handle = {
            let mut rooms = self.rooms.write().await;
            if let Some(existing) = rooms.get(room_id) {
                existing.clone()
            } else {
                let (actor, handle) = RoomActor::new(RoomId::from(room_id), &self.config);
                rooms.insert(RoomId::from(room_id), handle.clone());
                tokio::spawn(actor.run());
                log::info!("Created room {room_id}");
                handle
            }
        };

        let (tx, rx) = oneshot::channel();
        handle.send(RoomMessage::Snapshot { reply: tx }).await?;
        rx.await.map_err(|_| RoomError::RoomClosed)
    }

    /// Seat a player in a room's lobby.
    pub async fn join_room(&self, room_id: &str, name: &str) -> Result<PlayerId, RoomError> {
        let handle = self.get_room(room_id).await?;
        let (tx, rx) = oneshot::channel();
        handle
            .send(RoomMessage::Join {
                name: name.to_string(),
                reply: tx,
            })
            .await?;
        rx.await.map_err(|_| RoomError::RoomClosed)?
    }

    /// Deal hole cards and open pre-flop betting.
    pub async fn start_game(&self, room_id: &str) -> Result<(), RoomError> {
        let handle = self.get_room(room_id).await?;
        let (tx, rx) = oneshot::channel();
        handle.send(RoomMessage::Start { reply: tx }).await?;
        rx.await.map_err(|_| RoomError::RoomClosed)?
    }

    /// Reveal the next community cards, returning the full board.
    pub async fn reveal_cards(&self, room_id: &str, street: Street) -> Result<Vec<Card>, RoomError> {
        let handle = self.get_room(room_id).await?;
        let (tx, rx) = oneshot::channel();
        handle
            .send(RoomMessage::Reveal { street, reply: tx })
            .await?;
        rx.await.map_err(|_| RoomError::RoomClosed)?
    }

    /// Add a bet to a room's pot, returning the new pot total.
    pub async fn place_bet(&self, room_id: &str, amount: i64) -> Result<Chips, RoomError> {
        let handle = self.get_room(room_id).await?;
        let (tx, rx) = oneshot::channel();
        handle.send(RoomMessage::Bet { amount, reply: tx }).await?;
        rx.await.map_err(|_| RoomError::RoomClosed)?
    }

    /// Rank every hand and return the winners.
    pub async fn determine_winner(&self, room_id: &str) -> Result<ShowdownResult, RoomError> {
        let handle = self.get_room(room_id).await?;
        let (tx, rx) = oneshot::channel();
        handle.send(RoomMessage::Showdown { reply: tx }).await?;
        rx.await.map_err(|_| RoomError::RoomClosed)?
    }

    /// Reset a room to an empty lobby. The room stays registered.
    pub async fn reset_room(&self, room_id: &str) -> Result<RoomSnapshot, RoomError> {
        let handle = self.get_room(room_id).await?;
        let (tx, rx) = oneshot::channel();
        handle.send(RoomMessage::Reset { reply: tx }).await?;
        let snapshot = rx.await.map_err(|_| RoomError::RoomClosed)?;
        log::info!("Reset room {room_id}");
        Ok(snapshot)
    }

    /// Read-only copy of a room's current state.
    pub async fn snapshot(&self, room_id: &str) -> Result<RoomSnapshot, RoomError> {
        let handle = self.get_room(room_id).await?;
        let (tx, rx) = oneshot::channel();
        handle.send(RoomMessage::Snapshot { reply: tx }).await?;
        rx.await.map_err(|_| RoomError::RoomClosed)
    }

    /// Subscribe to a room's events.
    pub async fn subscribe(&self, room_id: &str) -> Result<mpsc::Receiver<RoomEvent>, RoomError> {
        let handle = self.get_room(room_id).await?;
        let (sender, receiver) = mpsc::channel(self.config.event_capacity);
        handle.send(RoomMessage::Subscribe { sender }).await?;
        Ok(receiver)
    }

    /// Number of live rooms.
    pub async fn room_count(&self) -> usize {
        let rooms = self.rooms.read().await;
        rooms.len()
    }
}
