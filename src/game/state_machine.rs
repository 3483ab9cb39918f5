//! One room's lifecycle: phase machine, roster, pot, and showdown.
//!
//! `GameState` owns everything a single room mutates. Every transition
//! validates all of its preconditions before touching any field, so a
//! failure leaves the room exactly as it was — there are no partial
//! applications to roll back.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::entities::{
    Card, Chips, Deck, Player, PlayerId, PlayerRanking, RoomId, RoomSnapshot, ShowdownResult,
};
use super::evaluator;

/// Room phases in lifecycle order. `Showdown` loops back to `Lobby`
/// only through an explicit reset.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Phase {
    Lobby,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    /// Betting is open from the first deal until the showdown.
    #[must_use]
    pub fn is_betting(self) -> bool {
        matches!(self, Self::PreFlop | Self::Flop | Self::Turn | Self::River)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Lobby => "lobby",
            Self::PreFlop => "pre-flop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
            Self::Showdown => "showdown",
        };
        write!(f, "{repr}")
    }
}

/// Community-card reveal rounds.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        };
        write!(f, "{repr}")
    }
}

/// Every way a room operation can fail. All variants are recoverable
/// and reported to the caller; none of them crash the room.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum RoomError {
    #[error("room does not exist")]
    RoomNotFound,
    #[error("operation not allowed during {phase}")]
    InvalidPhase { phase: Phase },
    #[error("need 2+ players, have {count}")]
    InsufficientPlayers { count: usize },
    #[error("can't reveal the {street} during {phase}")]
    InvalidRound { street: Street, phase: Phase },
    #[error("invalid bet amount {amount}")]
    InvalidAmount { amount: i64 },
    #[error("deck exhausted: requested {requested} with {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("room is full ({max} seats)")]
    RoomFull { max: usize },
    #[error("room is closed")]
    RoomClosed,
}

/// State machine for a single room.
#[derive(Debug)]
pub struct GameState {
    phase: Phase,
    deck: Deck,
    /// Seating and turn order is join order.
    players: Vec<Player>,
    pot: Chips,
    current_turn: usize,
    /// Community cards: 0, 3, 4, or 5 depending on phase.
    board: Vec<Card>,
    max_players: usize,
}

impl GameState {
    #[must_use]
    pub fn new(max_players: usize) -> Self {
        Self {
            phase: Phase::Lobby,
            deck: Deck::shuffled(),
            players: Vec::with_capacity(max_players),
            pot: 0,
            current_turn: 0,
            board: Vec::with_capacity(5),
            max_players,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn pot(&self) -> Chips {
        self.pot
    }

    #[must_use]
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    #[must_use]
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Seat a new player. Only legal in the lobby: once cards are in
    /// the air the roster is frozen, so a late join is rejected rather
    /// than silently queued.
    pub fn join(&mut self, name: &str) -> Result<PlayerId, RoomError> {
        if self.phase != Phase::Lobby {
            return Err(RoomError::InvalidPhase { phase: self.phase });
        }
        if self.players.len() >= self.max_players {
            return Err(RoomError::RoomFull {
                max: self.max_players,
            });
        }
        let player = Player::new(name);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Deal two hole cards to every player in join order and open the
    /// pre-flop betting round.
    pub fn start(&mut self) -> Result<(), RoomError> {
        if self.phase != Phase::Lobby {
            return Err(RoomError::InvalidPhase { phase: self.phase });
        }
        if self.players.len() < 2 {
            return Err(RoomError::InsufficientPlayers {
                count: self.players.len(),
            });
        }
        // Check the whole deal up front so a failure mid-roster can't
        // leave some players holding cards.
        let requested = 2 * self.players.len();
        if requested > self.deck.remaining() {
            return Err(RoomError::DeckExhausted {
                requested,
                remaining: self.deck.remaining(),
            });
        }
        for player in &mut self.players {
            player.cards = self.deck.draw(2)?;
        }
        self.current_turn = 0;
        self.phase = Phase::PreFlop;
        Ok(())
    }

    /// Reveal the next community cards: 3 on the flop, then 1 each on
    /// the turn and river. The street must match the current phase
    /// exactly or nothing changes.
    pub fn reveal(&mut self, street: Street) -> Result<&[Card], RoomError> {
        let (expected_phase, expected_board, count, next) = match street {
            Street::Flop => (Phase::PreFlop, 0, 3, Phase::Flop),
            Street::Turn => (Phase::Flop, 3, 1, Phase::Turn),
            Street::River => (Phase::Turn, 4, 1, Phase::River),
        };
        if self.phase != expected_phase || self.board.len() != expected_board {
            return Err(RoomError::InvalidRound {
                street,
                phase: self.phase,
            });
        }
        let mut drawn = self.deck.draw(count)?;
        self.board.append(&mut drawn);
        self.phase = next;
        Ok(&self.board)
    }

    /// Add a bet to the pot and pass the turn to the next seat.
    ///
    /// The amount arrives as `i64` straight off the wire so a negative
    /// value is representable — and rejected — here instead of by an
    /// exception somewhere downstream. Overflowing the pot is rejected
    /// the same way.
    pub fn bet(&mut self, amount: i64) -> Result<Chips, RoomError> {
        if !self.phase.is_betting() {
            return Err(RoomError::InvalidPhase { phase: self.phase });
        }
        let chips =
            Chips::try_from(amount).map_err(|_| RoomError::InvalidAmount { amount })?;
        let pot = self
            .pot
            .checked_add(chips)
            .ok_or(RoomError::InvalidAmount { amount })?;
        self.pot = pot;
        // Betting phases imply >= 2 seated players.
        self.current_turn = (self.current_turn + 1) % self.players.len();
        Ok(self.pot)
    }

    /// Rank every player's best 5-card hand from their 2 hole cards
    /// plus the full board. Legal on the river and again during the
    /// showdown; repeat calls recompute the same deterministic result.
    pub fn showdown(&mut self) -> Result<ShowdownResult, RoomError> {
        if !matches!(self.phase, Phase::River | Phase::Showdown) {
            return Err(RoomError::InvalidPhase { phase: self.phase });
        }
        let mut rankings = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let mut cards = player.cards.clone();
            cards.extend_from_slice(&self.board);
            // 2 hole + 5 board cards are guaranteed by the phase check;
            // anything else is a broken invariant, surfaced rather than
            // unwrapped.
            let score = evaluator::best_hand(&cards)
                .ok_or(RoomError::InvalidPhase { phase: self.phase })?;
            rankings.push(PlayerRanking {
                id: player.id,
                name: player.name.clone(),
                score,
            });
        }
        // Stable sort: equal scores keep join order, so repeat calls
        // return an identical list.
        rankings.sort_by(|a, b| b.score.cmp(&a.score));
        let scores: Vec<_> = rankings.iter().map(|r| r.score.clone()).collect();
        let winners = evaluator::winner_indices(&scores)
            .into_iter()
            .map(|i| rankings[i].id)
            .collect();
        self.phase = Phase::Showdown;
        Ok(ShowdownResult { winners, rankings })
    }

    /// Tear the room down to an empty lobby with a fresh shuffled deck.
    /// Legal from any phase.
    pub fn reset(&mut self) {
        self.phase = Phase::Lobby;
        self.deck = Deck::shuffled();
        self.players.clear();
        self.pot = 0;
        self.current_turn = 0;
        self.board.clear();
    }

    #[must_use]
    pub fn snapshot(&self, room_id: &str) -> RoomSnapshot {
        RoomSnapshot {
            room_id: RoomId::from(room_id),
            phase: self.phase,
            players: self.players.iter().map(Into::into).collect(),
            pot: self.pot,
            current_turn: self.current_turn,
            board: self.board.clone(),
        }
    }
}
