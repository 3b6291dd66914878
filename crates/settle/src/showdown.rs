// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game round showdown.
//!
//! At showdown each player has placed up to two cards in each of the three
//! slots, a slot hand is the best 5 cards out of the slot two cards and the five
//! board cards. The players with the highest score win the slot.
use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    BestHand, Card, EvalError, PlayerSlotInfo, SeatIndex, SettleConfig, SettleError,
    SettlementResult, Settler, SlotId, SlotSettlementResult,
};

/// The cards a player placed in the slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatHand {
    /// The player seat.
    pub seat: SeatIndex,
    /// Whether the player folded.
    pub folded: bool,
    /// The cards in each slot.
    pub slots: [Vec<Card>; 3],
}

impl SeatHand {
    /// Number of cards a player must place in a slot to play it.
    pub const SLOT_CARDS: usize = 2;

    /// Creates a seat hand from the slots cards.
    pub fn new(seat: SeatIndex, slots: [Vec<Card>; 3]) -> Self {
        Self {
            seat,
            folded: false,
            slots,
        }
    }

    /// Checks if the player contests the given slot.
    pub fn plays(&self, slot: SlotId) -> bool {
        !self.folded
            && self
                .slot_cards(slot)
                .is_some_and(|cards| cards.len() == Self::SLOT_CARDS)
    }

    fn slot_cards(&self, slot: SlotId) -> Option<&[Card]> {
        let idx = (slot.id() as usize).checked_sub(1)?;
        self.slots.get(idx).map(Vec::as_slice)
    }
}

/// A player best hand in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatBestHand {
    /// The player seat.
    pub seat: SeatIndex,
    /// The player best hand.
    pub hand: BestHand,
}

/// The outcome of one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOutcome {
    /// The slot.
    pub slot: SlotId,
    /// The best hand of the players that contested the slot.
    pub hands: Vec<SeatBestHand>,
    /// The winners seats.
    pub winners: Vec<SeatIndex>,
    /// The points change for each player.
    pub results: Vec<SettlementResult>,
}

/// The outcome of a game round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettlement {
    /// The three slots outcomes.
    pub slots: [SlotOutcome; 3],
    /// The game round points change for each player.
    pub totals: Vec<SlotSettlementResult>,
}

/// Evaluates and settles a game round given the board cards.
#[derive(Debug, Clone)]
pub struct Showdown {
    board: Vec<Card>,
    settler: Settler,
}

impl Showdown {
    /// Number of board cards.
    pub const BOARD_CARDS: usize = 5;

    /// Creates a showdown for the given board.
    pub fn new(board: Vec<Card>, config: SettleConfig) -> Self {
        Self {
            board,
            settler: Settler::new(config),
        }
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Evaluates the players hands and settles the three slots and the round.
    ///
    /// Winners and totals follow the order of `seats`.
    pub fn evaluate(&self, seats: &[SeatHand]) -> Result<GameSettlement, SettleError> {
        self.validate(seats)?;

        let [first, second, third] = SlotId::ALL;
        let slots = [
            self.evaluate_slot(seats, first)?,
            self.evaluate_slot(seats, second)?,
            self.evaluate_slot(seats, third)?,
        ];

        let seat_ids = seats.iter().map(|s| s.seat).collect::<Vec<_>>();
        let totals = self
            .settler
            .settle_total(slots.each_ref().map(|o| &o.results[..]), &seat_ids)?;

        Ok(GameSettlement { slots, totals })
    }

    fn validate(&self, seats: &[SeatHand]) -> Result<(), SettleError> {
        if self.board.len() != Self::BOARD_CARDS {
            return Err(EvalError::InvalidHandSize {
                expected: Self::BOARD_CARDS,
                actual: self.board.len(),
            }
            .into());
        }

        let mut seat_ids = AHashSet::with_capacity(seats.len());
        let mut cards = self.board.iter().copied().collect::<AHashSet<_>>();
        if cards.len() != self.board.len() {
            return Err(self.duplicate_board_card());
        }

        for hand in seats {
            if !seat_ids.insert(hand.seat) {
                return Err(SettleError::DuplicateSeat(hand.seat));
            }

            for (slot, slot_cards) in SlotId::ALL.into_iter().zip(&hand.slots) {
                if slot_cards.len() > SeatHand::SLOT_CARDS {
                    return Err(SettleError::SlotOverfilled {
                        seat: hand.seat,
                        slot,
                    });
                }

                for &card in slot_cards {
                    if !cards.insert(card) {
                        return Err(SettleError::DuplicateCard(card));
                    }
                }
            }
        }

        Ok(())
    }

    fn duplicate_board_card(&self) -> SettleError {
        let mut seen = AHashSet::with_capacity(self.board.len());
        let card = self
            .board
            .iter()
            .find(|&&c| !seen.insert(c))
            .copied()
            .unwrap_or(self.board[0]);
        SettleError::DuplicateCard(card)
    }

    fn evaluate_slot(&self, seats: &[SeatHand], slot: SlotId) -> Result<SlotOutcome, SettleError> {
        let mut hands = Vec::with_capacity(seats.len());
        for seat in seats.iter().filter(|s| s.plays(slot)) {
            let mut cards = seat.slot_cards(slot).unwrap_or_default().to_vec();
            cards.extend_from_slice(&self.board);
            hands.push(SeatBestHand {
                seat: seat.seat,
                hand: BestHand::eval(&cards)?,
            });
        }

        let winners = match hands.iter().map(|h| h.hand.score()).max() {
            Some(max) => hands
                .iter()
                .filter(|h| h.hand.score() == max)
                .map(|h| h.seat)
                .collect(),
            None => Vec::new(),
        };

        let players = seats
            .iter()
            .map(|seat| match hands.iter().find(|h| h.seat == seat.seat) {
                Some(h) => PlayerSlotInfo::new(seat.seat, h.hand.category())
                    .with_royal(h.hand.is_royal()),
                None => PlayerSlotInfo::not_played(seat.seat),
            })
            .collect::<Vec<_>>();

        let results = self.settler.settle_slot(&players, &winners, slot)?;
        debug!("Slot {slot} winners {winners:?}");

        Ok(SlotOutcome {
            slot,
            hands,
            winners,
            results,
        })
    }
}
