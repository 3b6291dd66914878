// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Slotpoker three slots settlement engine.
//!
//! A game round is played over three weighted slots, each slot is settled on
//! its own by [Settler::settle_slot] that moves points from the slot losers to
//! the slot winners, then [Settler::settle_total] combines the three slots and
//! charges a fixed penalty to the players that didn't win any slot:
//!
//! ```
//! # use slotpoker_settle::*;
//! let settler = Settler::default();
//! let players = [
//!     PlayerSlotInfo::new(1, HandCategory::FourOfAKind),
//!     PlayerSlotInfo::new(2, HandCategory::FullHouse),
//!     PlayerSlotInfo::new(3, HandCategory::OnePair),
//! ];
//! let slot1 = settler.settle_slot(&players, &[1], SlotId::FIRST).unwrap();
//! let slot2 = settler.settle_slot(&players, &[2], SlotId::SECOND).unwrap();
//! let slot3 = settler.settle_slot(&players, &[1], SlotId::THIRD).unwrap();
//! let totals = settler.settle_total([&slot1[..], &slot2[..], &slot3[..]], &[1, 2, 3]).unwrap();
//! assert_eq!(totals.iter().map(|r| r.total_delta).sum::<i64>(), 0);
//! assert!(totals[2].is_total_loser);
//! ```
//!
//! All the settlement operations are pure and deterministic, when points can't
//! be split evenly the remainder goes to the first seat in the order given by
//! the caller.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use log::warn;
use thiserror::Error;

pub mod showdown;
pub use showdown::{GameSettlement, SeatBestHand, SeatHand, Showdown, SlotOutcome};

mod slot;
pub use slot::{PlayerSlotInfo, SettlementResult, SlotId};

mod total;
pub use total::SlotSettlementResult;

// Reexport eval types.
pub use slotpoker_eval::{
    BestHand, Card, Deck, EvalError, HandCategory, HandScore, Rank, Suit, parse_cards,
};

/// A player seat index.
pub type SeatIndex = usize;

/// Settlement errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettleError {
    /// A declared winner has no matching active player.
    #[error("winner seat {0} not found among active players")]
    WinnerNotFound(SeatIndex),
    /// A seat appears more than once.
    #[error("seat {0} listed more than once")]
    DuplicateSeat(SeatIndex),
    /// The winners of a slot don't have the same hand strength.
    #[error("winner seat {seat} hand doesn't match winner seat {reference}")]
    WinnersDisagree {
        /// The winner whose hand differs.
        seat: SeatIndex,
        /// The first winner.
        reference: SeatIndex,
    },
    /// A player placed too many cards in a slot.
    #[error("seat {seat} has more than two cards in slot {slot}")]
    SlotOverfilled {
        /// The player seat.
        seat: SeatIndex,
        /// The slot.
        slot: SlotId,
    },
    /// A card is used more than once.
    #[error("card {0} used more than once")]
    DuplicateCard(Card),
    /// Hand evaluation error.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Settlement configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleConfig {
    /// Require all the winners of a slot to hold hands of the same strength,
    /// when false the strength is taken from the first winner.
    pub strict: bool,
    /// Points levied on the players that didn't win any slot and credited to
    /// the other players.
    pub total_loser_pool: u32,
}

impl SettleConfig {
    /// The default total loser pool.
    pub const TOTAL_LOSER_POOL: u32 = 60;
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            strict: true,
            total_loser_pool: Self::TOTAL_LOSER_POOL,
        }
    }
}

/// Computes slot and total settlements for a given configuration.
#[derive(Debug, Clone, Default)]
pub struct Settler {
    config: SettleConfig,
}

impl Settler {
    /// Creates a settler with the given configuration.
    pub fn new(config: SettleConfig) -> Self {
        Self { config }
    }

    /// This settler configuration.
    pub fn config(&self) -> &SettleConfig {
        &self.config
    }

    /// Settles one slot.
    ///
    /// Returns one result per player in `players` order. Each active player not
    /// in `winners` loses the slot unit loss, and the pot is split among the
    /// `winners` with the remainder going to the first winner.
    pub fn settle_slot(
        &self,
        players: &[PlayerSlotInfo],
        winners: &[SeatIndex],
        slot: SlotId,
    ) -> Result<Vec<SettlementResult>, SettleError> {
        slot::settle(&self.config, players, winners, slot)
            .inspect_err(|e| warn!("Slot {slot} settlement failed: {e}"))
    }

    /// Settles a game round given the results of its three slots.
    ///
    /// Returns one result per seat in `seats` order.
    pub fn settle_total(
        &self,
        slots: [&[SettlementResult]; 3],
        seats: &[SeatIndex],
    ) -> Result<Vec<SlotSettlementResult>, SettleError> {
        total::settle(&self.config, slots, seats)
            .inspect_err(|e| warn!("Total settlement failed: {e}"))
    }
}

/// Splits `amount` into `n` shares, the first share takes the remainder.
fn split(amount: i64, n: usize) -> impl Iterator<Item = i64> {
    let n = n.max(1) as i64;
    let (share, remainder) = (amount / n, amount % n);
    (0..n).map(move |i| if i == 0 { share + remainder } else { share })
}
