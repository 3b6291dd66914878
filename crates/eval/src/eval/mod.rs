// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! It provides a [HandScore::eval] method that scores exactly 5 cards, and a
//! [BestHand::eval] method that picks the best 5 cards out of exactly 7 cards
//! by brute force, useful for UIs to show a winning hand.
use thiserror::Error;

mod best;
pub use best::BestHand;

mod score;
pub use score::{HandCategory, HandScore};

/// Evaluation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The number of cards doesn't match what the evaluator expects.
    #[error("invalid hand size: expected {expected} cards got {actual}")]
    InvalidHandSize {
        /// The expected number of cards.
        expected: usize,
        /// The number of cards passed to the evaluator.
        actual: usize,
    },
    /// A packed score that no hand evaluates to.
    #[error("invalid hand score {0:#X}")]
    InvalidScore(u32),
}
