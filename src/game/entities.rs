use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::state_machine::{Phase, RoomError};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Spade,
    Diamond,
    Heart,
}

impl Suit {
    pub const ALL: [Self; 4] = [Self::Club, Self::Spade, Self::Diamond, Self::Heart];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Club => "♣",
            Self::Spade => "♠",
            Self::Diamond => "♦",
            Self::Heart => "♥",
        };
        write!(f, "{repr}")
    }
}

/// Card values run 2u8..=14u8. Aces are always stored high (14); only
/// the evaluator's wheel check treats them as 1.
pub type Value = u8;

pub const ACE: Value = 14;

/// A card is a tuple of a value and a suit. A standard deck holds
/// exactly one of each of the 52 combinations.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Value, pub Suit);

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self.0 {
            14 => "A".to_string(),
            13 => "K".to_string(),
            12 => "Q".to_string(),
            11 => "J".to_string(),
            v => v.to_string(),
        };
        let repr = format!("{value}/{}", self.1);
        write!(f, "{repr:>4}")
    }
}

/// Hand categories, weakest first so the derived order ranks them.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Rank {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::HighCard => "high card",
            Self::OnePair => "pair",
            Self::TwoPair => "two pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
        };
        write!(f, "{repr}")
    }
}

/// The total order over evaluated hands: category first, then the
/// five-value kicker tuple lexicographically. Both fall out of the
/// derived `Ord`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct HandScore {
    pub rank: Rank,
    pub values: Vec<Value>,
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.rank, self.values)
    }
}

#[derive(Debug)]
pub struct Deck {
    cards: [Card; 52],
    deck_idx: usize,
}

impl Deck {
    /// A fresh deck in uniform random order. The rand slice `shuffle`
    /// is an inclusive-bounds Fisher–Yates.
    #[must_use]
    pub fn shuffled() -> Self {
        let mut deck = Self::default();
        deck.shuffle();
        deck
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::rng());
        self.deck_idx = 0;
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.deck_idx
    }

    /// Draw `n` cards from the top of the deck. Drawn cards are never
    /// reused until the next shuffle. A failed draw consumes nothing.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, RoomError> {
        if n > self.remaining() {
            return Err(RoomError::DeckExhausted {
                requested: n,
                remaining: self.remaining(),
            });
        }
        let cards = self.cards[self.deck_idx..self.deck_idx + n].to_vec();
        self.deck_idx += n;
        Ok(cards)
    }
}

impl Default for Deck {
    fn default() -> Self {
        let mut cards = [Card(2, Suit::Club); 52];
        for (i, value) in (2..=ACE).enumerate() {
            for (j, suit) in Suit::ALL.into_iter().enumerate() {
                cards[4 * i + j] = Card(value, suit);
            }
        }
        Self { cards, deck_idx: 0 }
    }
}

/// Type alias for whole chips in the pot. Bets are validated at the
/// API edge before they're narrowed into this.
pub type Chips = u32;

/// Room identifiers are caller-chosen strings, taken as they arrive
/// from the transport.
pub type RoomId = String;

/// Player identifiers are generated on join. v4 uuids rather than a
/// short random token, so collisions are a non-issue at any roster
/// size.
pub type PlayerId = Uuid;

#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Hole cards: empty in the lobby, exactly 2 once dealt.
    pub cards: Vec<Card>,
}

impl Player {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            cards: Vec::with_capacity(2),
        }
    }
}

/// Read-only copy of a seated player for snapshots.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub cards: Vec<Card>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            cards: player.cards.clone(),
        }
    }
}

/// Immutable copy of room state, emitted to subscribers after every
/// mutating transition.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub phase: Phase,
    pub players: Vec<PlayerView>,
    pub pot: Chips,
    pub current_turn: usize,
    pub board: Vec<Card>,
}

/// One player's showdown placement.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlayerRanking {
    pub id: PlayerId,
    pub name: String,
    pub score: HandScore,
}

/// Showdown outcome: the full ranked list (descending) plus the winner
/// set. Ties put every tied player in `winners` — a split pot, not an
/// error.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ShowdownResult {
    pub winners: Vec<PlayerId>,
    pub rankings: Vec<PlayerRanking>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_deck_has_52_unique_cards() {
        let deck = Deck::default();
        let unique: BTreeSet<_> = deck.cards.iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut deck = Deck::shuffled();
        let drawn = deck.draw(52).unwrap();
        let canonical: BTreeSet<_> = Deck::default().cards.into_iter().collect();
        let shuffled: BTreeSet<_> = drawn.into_iter().collect();
        assert_eq!(shuffled, canonical);
    }

    #[test]
    fn test_draw_removes_cards() {
        let mut deck = Deck::shuffled();
        assert_eq!(deck.remaining(), 52);
        let first = deck.draw(2).unwrap();
        assert_eq!(deck.remaining(), 50);
        let rest = deck.draw(50).unwrap();
        assert!(first.iter().all(|c| !rest.contains(c)));
    }

    #[test]
    fn test_draw_past_end_is_deck_exhausted() {
        let mut deck = Deck::shuffled();
        deck.draw(50).unwrap();
        let err = deck.draw(3).unwrap_err();
        assert_eq!(
            err,
            RoomError::DeckExhausted {
                requested: 3,
                remaining: 2
            }
        );
        // The failed draw must not consume anything.
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn test_shuffle_resets_the_deal() {
        let mut deck = Deck::shuffled();
        deck.draw(10).unwrap();
        deck.shuffle();
        assert_eq!(deck.remaining(), 52);
    }

    #[test]
    fn test_card_display_face_cards() {
        assert!(Card(14, Suit::Spade).to_string().contains('A'));
        assert!(Card(13, Suit::Heart).to_string().contains('K'));
        assert!(Card(12, Suit::Diamond).to_string().contains('Q'));
        assert!(Card(11, Suit::Club).to_string().contains('J'));
        assert!(Card(10, Suit::Spade).to_string().contains("10"));
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::HighCard < Rank::OnePair);
        assert!(Rank::OnePair < Rank::TwoPair);
        assert!(Rank::TwoPair < Rank::ThreeOfAKind);
        assert!(Rank::ThreeOfAKind < Rank::Straight);
        assert!(Rank::Straight < Rank::Flush);
        assert!(Rank::Flush < Rank::FullHouse);
        assert!(Rank::FullHouse < Rank::FourOfAKind);
        assert!(Rank::FourOfAKind < Rank::StraightFlush);
    }

    #[test]
    fn test_hand_score_rank_dominates_values() {
        let two_pair = HandScore {
            rank: Rank::TwoPair,
            values: vec![5, 5, 4, 4, 3],
        };
        let pair_of_aces = HandScore {
            rank: Rank::OnePair,
            values: vec![14, 14, 13, 12, 11],
        };
        assert!(two_pair > pair_of_aces);
    }

    #[test]
    fn test_hand_score_kickers_break_ties() {
        let pair_aces_king = HandScore {
            rank: Rank::OnePair,
            values: vec![14, 14, 13, 12, 11],
        };
        let pair_aces_queen = HandScore {
            rank: Rank::OnePair,
            values: vec![14, 14, 12, 11, 10],
        };
        assert!(pair_aces_king > pair_aces_queen);
        assert_eq!(pair_aces_king, pair_aces_king.clone());
    }

    #[test]
    fn test_player_ids_are_unique() {
        let a = Player::new("alice");
        let b = Player::new("alice");
        assert_ne!(a.id, b.id);
        assert!(a.cards.is_empty());
    }
}
