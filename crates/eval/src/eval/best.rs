// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards out of 7 cards.
use serde::{Deserialize, Serialize};

use super::{EvalError, HandCategory, HandScore};
use slotpoker_cards::Card;

/// The best 5 cards hand out of a 7 cards hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    score: HandScore,
    cards: [Card; 5],
}

impl BestHand {
    /// Number of cards the best hand is selected from.
    pub const HAND_SIZE: usize = 7;

    /// Selects the best 5 cards out of exactly 7 cards.
    ///
    /// All the 21 hands obtained by excluding two cards are scored, the first
    /// hand with the highest score wins and its cards keep the input order.
    pub fn eval(cards: &[Card]) -> Result<BestHand, EvalError> {
        let cards = <&[Card; 7]>::try_from(cards).map_err(|_| EvalError::InvalidHandSize {
            expected: Self::HAND_SIZE,
            actual: cards.len(),
        })?;

        // Skip cards i and j.
        let hand_without = |i: usize, j: usize| {
            let mut hand = [cards[0]; 5];
            let kept = cards
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, c)| *c);
            for (slot, card) in hand.iter_mut().zip(kept) {
                *slot = card;
            }
            hand
        };

        let hand = hand_without(0, 1);
        let mut best = BestHand {
            score: HandScore::eval5(&hand),
            cards: hand,
        };

        for i in 0..Self::HAND_SIZE {
            for j in (i + 1)..Self::HAND_SIZE {
                let hand = hand_without(i, j);
                let score = HandScore::eval5(&hand);
                if score > best.score {
                    best = BestHand { score, cards: hand };
                }
            }
        }

        Ok(best)
    }

    /// The best hand score.
    pub fn score(&self) -> HandScore {
        self.score
    }

    /// The best hand category.
    pub fn category(&self) -> HandCategory {
        self.score.category()
    }

    /// Checks if the best hand is an ace high straight flush.
    pub fn is_royal(&self) -> bool {
        self.score.is_royal()
    }

    /// The best hand cards.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}
