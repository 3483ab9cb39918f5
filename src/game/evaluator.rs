//! Showdown hand evaluation.
//!
//! A hand of 5 to 7 cards (2 hole + up to 5 community) is scored by
//! enumerating every 5-card subset (at most C(7,5) = 21), classifying
//! each into a [`HandScore`], and keeping the maximum under the
//! (category, kicker tuple) total order. The subset sweep is what makes
//! the category reflect the best 5-card combination: testing "best
//! flush" and "best straight" independently would miss straight
//! flushes that only exist in one particular subset.

use super::entities::{ACE, Card, HandScore, Rank, Value};

/// Score exactly five cards.
///
/// The kicker tuple always carries all five values, ordered by
/// (count-in-group descending, value descending), e.g. a pair of kings
/// with A-9-4 kickers scores `[13, 13, 14, 9, 4]`. Straights carry
/// `[hi, hi-1, .., hi-4]`, with the wheel A-2-3-4-5 scored five-high
/// as `[5, 4, 3, 2, 1]`.
#[must_use]
pub fn score_five(cards: &[Card; 5]) -> HandScore {
    let mut values: Vec<Value> = cards.iter().map(|c| c.0).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.1 == cards[0].1);

    if let Some(hi) = straight_high(&values) {
        let rank = if flush {
            Rank::StraightFlush
        } else {
            Rank::Straight
        };
        return HandScore {
            rank,
            values: (0..5).map(|i| hi - i).collect(),
        };
    }

    // Distinct values with their multiplicities, ordered by
    // (count desc, value desc). `values` is sorted descending, so the
    // groups come out value-descending before the count sort.
    let mut groups: Vec<(usize, Value)> = Vec::with_capacity(5);
    for &value in &values {
        match groups.last_mut() {
            Some((count, v)) if *v == value => *count += 1,
            _ => groups.push((1, value)),
        }
    }
    groups.sort_by(|a, b| b.cmp(a));

    let counts: Vec<usize> = groups.iter().map(|(count, _)| *count).collect();
    let rank = match counts.as_slice() {
        [4, 1] => Rank::FourOfAKind,
        [3, 2] => Rank::FullHouse,
        _ if flush => Rank::Flush,
        [3, 1, 1] => Rank::ThreeOfAKind,
        [2, 2, 1] => Rank::TwoPair,
        [2, 1, 1, 1] => Rank::OnePair,
        _ => Rank::HighCard,
    };
    let values = groups
        .into_iter()
        .flat_map(|(count, value)| std::iter::repeat_n(value, count))
        .collect();
    HandScore { rank, values }
}

/// Straight detection over five values sorted descending. Returns the
/// high card of the straight, counting the ace as 1 for A-2-3-4-5.
fn straight_high(sorted_desc: &[Value]) -> Option<Value> {
    if sorted_desc.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }
    if sorted_desc[0] - sorted_desc[4] == 4 {
        return Some(sorted_desc[0]);
    }
    if sorted_desc == [ACE, 5, 4, 3, 2].as_slice() {
        return Some(5);
    }
    None
}

/// Best 5-card score over 5 to 7 cards. `None` when fewer than five
/// cards are supplied.
#[must_use]
pub fn best_hand(cards: &[Card]) -> Option<HandScore> {
    let n = cards.len();
    if n < 5 {
        return None;
    }
    let mut best: Option<HandScore> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let score = score_five(&five);
                        if best.as_ref().is_none_or(|current| score > *current) {
                            best = Some(score);
                        }
                    }
                }
            }
        }
    }
    best
}

/// Indices of every score tied at the maximum, ascending. More than
/// one index means a split pot.
#[must_use]
pub fn winner_indices(scores: &[HandScore]) -> Vec<usize> {
    let Some(best) = scores.iter().max() else {
        return Vec::new();
    };
    scores
        .iter()
        .enumerate()
        .filter(|(_, score)| *score == best)
        .map(|(i, _)| i)
        .collect()
}
