//! Room configuration models.

use serde::{Deserialize, Serialize};

/// Configuration shared by every room a registry spawns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Maximum number of seated players (default: 10)
    pub max_players: usize,

    /// Capacity of each room's message inbox
    pub inbox_capacity: usize,

    /// Capacity of each subscriber's event channel
    pub event_capacity: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            max_players: 10,
            inbox_capacity: 64,
            event_capacity: 64,
        }
    }
}

impl RoomConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_players < 2 {
            return Err("max_players must be at least 2".to_string());
        }
        // 23 players * 2 hole cards + 5 board + 1 slack = 52.
        if self.max_players > 23 {
            return Err("max_players cannot exceed 23 (one 52-card deck)".to_string());
        }
        if self.inbox_capacity == 0 {
            return Err("inbox_capacity must be positive".to_string());
        }
        if self.event_capacity == 0 {
            return Err("event_capacity must be positive".to_string());
        }
        Ok(())
    }
}
