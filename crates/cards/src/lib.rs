// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Slotpoker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use slotpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.rank_value(), 14);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! cards can also be parsed from text, both `T` and `10` are accepted for tens
//! and suits can be letters or symbols:
//!
//! ```
//! # use slotpoker_cards::{parse_cards, Card, Rank, Suit};
//! let cards = parse_cards("As 10h t♦ 2c").unwrap();
//! assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Hearts));
//! assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type for iterating and sampling cards in the deck, for example
//! to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use slotpoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! or to sample 10 random 7-cards hands:
//!
//! ```
//! # use slotpoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 7, |hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod parse;
pub use parse::{ParseCardError, parse_cards};
