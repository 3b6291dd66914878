// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand scoring.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::EvalError;
use slotpoker_cards::Card;

/// A hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category ordinal, from 1 to 9.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Gets a category from its ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<HandCategory> {
        Self::categories().find(|c| c.ordinal() == ordinal)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        f.write_str(name)
    }
}

/// The score of a 5 cards hand.
///
/// The category and the five tie breaking rank values are packed into an
/// integer so that a higher score is always a stronger hand:
///
/// ```text
///   +--------+--------+--------+
///   |cccc1111|22223333|44445555|
///   +--------+--------+--------+
///   c = hand category (high card=1,one pair=2,...,straight flush=9)
///   1..5 = tie breaking rank values, the most significant first
/// ```
///
/// An unused tie breaking slot is zero, and the ace of a wheel straight
/// counts as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HandScore(u32);

impl HandScore {
    /// Number of cards in a scored hand.
    pub const HAND_SIZE: usize = 5;

    const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];

    /// Scores a hand of exactly 5 cards.
    pub fn eval(cards: &[Card]) -> Result<HandScore, EvalError> {
        let hand = <&[Card; 5]>::try_from(cards).map_err(|_| EvalError::InvalidHandSize {
            expected: Self::HAND_SIZE,
            actual: cards.len(),
        })?;

        Ok(Self::eval5(hand))
    }

    pub(crate) fn eval5(cards: &[Card; 5]) -> HandScore {
        let mut values = cards.map(|c| c.rank_value());
        values.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let mut is_straight = values.windows(2).all(|w| w[0] == w[1] + 1);
        if values == Self::WHEEL {
            is_straight = true;
            values = [5, 4, 3, 2, 1];
        }

        // Groups of (count, value) ordered by count and then value.
        let mut counts = [0u8; 15];
        for v in values {
            counts[v as usize] += 1;
        }

        let mut groups = (1..=14u8)
            .rev()
            .filter(|&v| counts[v as usize] > 0)
            .map(|v| (counts[v as usize], v))
            .collect::<Vec<_>>();
        groups.sort_by(|a, b| b.0.cmp(&a.0));

        let count = |i: usize| groups.get(i).map(|g| g.0).unwrap_or(0);
        let kickers = |n: usize| {
            let mut tiebreaks = [0u8; 5];
            for (t, g) in tiebreaks.iter_mut().zip(groups.iter().take(n)) {
                *t = g.1;
            }
            tiebreaks
        };

        let (category, tiebreaks) = if is_flush && is_straight {
            (HandCategory::StraightFlush, values)
        } else if count(0) == 4 {
            (HandCategory::FourOfAKind, kickers(2))
        } else if count(0) == 3 && count(1) == 2 {
            (HandCategory::FullHouse, kickers(2))
        } else if is_flush {
            (HandCategory::Flush, values)
        } else if is_straight {
            (HandCategory::Straight, values)
        } else if count(0) == 3 {
            (HandCategory::ThreeOfAKind, kickers(3))
        } else if count(0) == 2 && count(1) == 2 {
            (HandCategory::TwoPair, kickers(3))
        } else if count(0) == 2 {
            (HandCategory::OnePair, kickers(4))
        } else {
            (HandCategory::HighCard, values)
        };

        Self::pack(category, tiebreaks)
    }

    fn pack(category: HandCategory, tiebreaks: [u8; 5]) -> HandScore {
        let score = tiebreaks
            .iter()
            .fold(category.ordinal() as u32, |acc, &t| (acc << 4) | (t & 0xf) as u32);
        HandScore(score)
    }

    /// The packed score value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        HandCategory::from_ordinal(((self.0 >> 20) & 0xf) as u8).unwrap_or(HandCategory::HighCard)
    }

    /// The tie breaking rank values, the most significant first.
    pub fn tiebreaks(&self) -> [u8; 5] {
        [16, 12, 8, 4, 0].map(|shift| ((self.0 >> shift) & 0xf) as u8)
    }

    /// Checks if this is an ace high straight flush.
    pub fn is_royal(&self) -> bool {
        self.category() == HandCategory::StraightFlush && self.tiebreaks()[0] == 14
    }

    /// The score as an upper case hex string, e.g. `0x3D8E00`.
    pub fn to_hex(&self) -> String {
        format!("0x{:X}", self.0)
    }
}

impl fmt::UpperHex for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category(), self.to_hex())
    }
}

impl TryFrom<u32> for HandScore {
    type Error = EvalError;

    /// Validates a packed score, it must have a category from 1 to 9 and
    /// tiebreaks that are rank values.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let score = HandScore(value);
        let valid = value >> 24 == 0
            && HandCategory::from_ordinal((value >> 20) as u8).is_some()
            && score.tiebreaks().iter().all(|&t| t <= 14);

        if valid {
            Ok(score)
        } else {
            Err(EvalError::InvalidScore(value))
        }
    }
}

impl From<HandScore> for u32 {
    fn from(score: HandScore) -> Self {
        score.0
    }
}
