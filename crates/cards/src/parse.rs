// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards text parsing.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when parsing cards from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The card text is empty.
    #[error("empty card")]
    Empty,
    /// The rank part of the card is not valid.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit part of the card is not valid.
    #[error("invalid suit '{0}'")]
    InvalidSuit(String),
    /// The card id doesn't encode a valid rank and suit.
    #[error("invalid card id {0:#04x}")]
    InvalidId(u8),
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "c" | "C" | "♣" | "♧" => Suit::Clubs,
            "d" | "D" | "♦" | "♢" => Suit::Diamonds,
            "h" | "H" | "♥" | "♡" => Suit::Hearts,
            "s" | "S" | "♠" | "♤" => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(s.to_string())),
        };

        Ok(suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card from its rank followed by its suit, e.g. `"AS"`, `"10h"`,
    /// or `"Q♦"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((suit_pos, _)) = s.char_indices().last() else {
            return Err(ParseCardError::Empty);
        };

        let (rank, suit) = s.split_at(suit_pos);
        if rank.is_empty() {
            return Err(ParseCardError::InvalidRank(rank.to_string()));
        }

        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

/// Parses a list of cards.
///
/// Cards can be separated by whitespace or commas, or written back to back as
/// in `"AhKd10c"`, a card ends at its suit.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    let mut cards = Vec::new();
    let mut start = 0;

    for (pos, c) in s.char_indices() {
        let end = pos + c.len_utf8();
        if c.is_whitespace() || c == ',' {
            if start < pos {
                // A pending token without a suit.
                cards.push(s[start..pos].parse()?);
            }
            start = end;
        } else if s[pos..end].parse::<Suit>().is_ok() {
            cards.push(s[start..end].parse()?);
            start = end;
        }
    }

    if start < s.len() {
        cards.push(s[start..].parse()?);
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_card() {
        assert_eq!("AS".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("ah".parse(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!("10c".parse(), Ok(Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!("Td".parse(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("Q♠".parse(), Ok(Card::new(Rank::Queen, Suit::Spades)));
        assert_eq!("2♦".parse(), Ok(Card::new(Rank::Deuce, Suit::Diamonds)));
    }

    #[test]
    fn parse_card_errors() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!(
            "S".parse::<Card>(),
            Err(ParseCardError::InvalidRank(String::new()))
        );
        assert_eq!(
            "1s".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "Kx".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("x".to_string()))
        );
    }

    #[test]
    fn display_roundtrip() {
        for card in crate::Deck::default() {
            assert_eq!(card.to_string().parse(), Ok(card));
        }
    }

    #[test]
    fn parse_list() {
        let cards = parse_cards("As Ks, Qs  Js 10s").unwrap();
        assert_eq!(cards.len(), 5);
        assert!(cards.iter().all(|c| c.suit() == Suit::Spades));
        assert_eq!(cards[4].rank(), Rank::Ten);

        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards(" , ").unwrap().is_empty());
        assert_eq!(
            parse_cards("As Zs"),
            Err(ParseCardError::InvalidRank("Z".to_string()))
        );
        assert_eq!(
            parse_cards("Kx Qs"),
            Err(ParseCardError::InvalidSuit("x".to_string()))
        );
        assert_eq!(
            parse_cards("As K"),
            Err(ParseCardError::InvalidRank(String::new()))
        );
    }

    #[test]
    fn parse_compact_list() {
        let cards = parse_cards("AhKd10c").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Ten, Suit::Clubs),
            ]
        );

        let cards = parse_cards("A♠K♠ 2c3c").unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[1], Card::new(Rank::King, Suit::Spades));
    }
}
