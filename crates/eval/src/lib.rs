// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Slotpoker hand evaluator.
//!
//! Poker hand evaluator for 5 and 7 cards hands. A 5 cards hand is evaluated
//! into a [HandScore], a single integer that packs the hand category and its
//! tie breaking ranks so that comparing two scores compares the two hands:
//!
//! ```
//! # use slotpoker_eval::*;
//! let straight = parse_cards("6c 5d 4h 3s 2c").unwrap();
//! let wheel = parse_cards("Ac 2d 3h 4s 5c").unwrap();
//! let s1 = HandScore::eval(&straight).unwrap();
//! let s2 = HandScore::eval(&wheel).unwrap();
//! assert_eq!(s2.category(), HandCategory::Straight);
//! assert!(s1 > s2);
//! ```
//!
//! A 7 cards hand is evaluated with [BestHand] that scores all the 21 five
//! cards hands and keeps the best one:
//!
//! ```
//! # use slotpoker_eval::*;
//! let cards = parse_cards("As Ks Qs Js Ts 2h 3d").unwrap();
//! let best = BestHand::eval(&cards).unwrap();
//! assert!(best.is_royal());
//! assert_eq!(best.score().to_hex(), "0x9EDCBA");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{BestHand, EvalError, HandCategory, HandScore};

// Reexport cards types.
pub use slotpoker_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
