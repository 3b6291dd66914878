// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Single slot settlement.
use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{HandCategory, SeatIndex, SettleConfig, SettleError, split};

/// A slot identifier, slots are numbered from 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(u8);

impl SlotId {
    /// The first slot, pays 5 times the hand strength.
    pub const FIRST: SlotId = SlotId(1);
    /// The second slot, pays 3 times the hand strength.
    pub const SECOND: SlotId = SlotId(2);
    /// The third slot, pays the hand strength.
    pub const THIRD: SlotId = SlotId(3);
    /// All the slots in a game round.
    pub const ALL: [SlotId; 3] = [Self::FIRST, Self::SECOND, Self::THIRD];

    /// Creates a slot id.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The slot id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// The slot points multiplier, unknown slots have multiplier 1.
    pub fn multiplier(&self) -> i64 {
        match self.0 {
            1 => 5,
            2 => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player showdown result for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSlotInfo {
    /// The player seat.
    pub seat: SeatIndex,
    /// Whether the player contested the slot.
    pub has_played: bool,
    /// The player hand category.
    pub category: HandCategory,
    /// Whether the hand is an ace high straight flush.
    pub is_royal: bool,
}

impl PlayerSlotInfo {
    /// Creates info for a player that played the slot with a non royal hand.
    pub fn new(seat: SeatIndex, category: HandCategory) -> Self {
        Self {
            seat,
            has_played: true,
            category,
            is_royal: false,
        }
    }

    /// Creates info for a player that didn't play the slot.
    pub fn not_played(seat: SeatIndex) -> Self {
        Self {
            seat,
            has_played: false,
            category: HandCategory::HighCard,
            is_royal: false,
        }
    }

    /// Sets the royal flag.
    pub fn with_royal(mut self, is_royal: bool) -> Self {
        self.is_royal = is_royal;
        self
    }

    /// The base points of this player hand when it wins a slot.
    pub fn strength(&self) -> i64 {
        match self.category {
            HandCategory::HighCard | HandCategory::OnePair => 1,
            HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::Straight => 4,
            HandCategory::Flush => 5,
            HandCategory::FullHouse => 6,
            HandCategory::FourOfAKind => 10,
            HandCategory::StraightFlush if self.is_royal => 20,
            HandCategory::StraightFlush => 15,
        }
    }
}

/// A player points change for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// The player seat.
    pub seat: SeatIndex,
    /// The points won (positive) or lost (negative).
    pub score_delta: i64,
}

pub(crate) fn settle(
    config: &SettleConfig,
    players: &[PlayerSlotInfo],
    winners: &[SeatIndex],
    slot: SlotId,
) -> Result<Vec<SettlementResult>, SettleError> {
    let mut results = players
        .iter()
        .map(|p| SettlementResult {
            seat: p.seat,
            score_delta: 0,
        })
        .collect::<Vec<_>>();

    let mut positions = AHashMap::with_capacity(players.len());
    for (pos, player) in players.iter().enumerate() {
        if positions.insert(player.seat, pos).is_some() {
            return Err(SettleError::DuplicateSeat(player.seat));
        }
    }

    let mut winners_set = AHashSet::with_capacity(winners.len());
    for &seat in winners {
        if !winners_set.insert(seat) {
            return Err(SettleError::DuplicateSeat(seat));
        }
    }

    let is_active = |seat: &SeatIndex| {
        positions
            .get(seat)
            .is_some_and(|&pos| players[pos].has_played)
    };

    let losers = players
        .iter()
        .filter(|p| p.has_played && !winners_set.contains(&p.seat))
        .collect::<Vec<_>>();

    // No pot without winners or losers.
    let Some(&first_winner) = winners.first() else {
        return Ok(results);
    };

    if losers.is_empty() {
        return Ok(results);
    }

    if let Some(&seat) = winners.iter().find(|&s| !is_active(s)) {
        return Err(SettleError::WinnerNotFound(seat));
    }

    let reference = &players[positions[&first_winner]];
    if config.strict {
        for &seat in &winners[1..] {
            let winner = &players[positions[&seat]];
            if winner.category != reference.category || winner.strength() != reference.strength()
            {
                return Err(SettleError::WinnersDisagree {
                    seat,
                    reference: first_winner,
                });
            }
        }
    }

    let unit_loss = reference.strength() * slot.multiplier();
    for loser in &losers {
        results[positions[&loser.seat]].score_delta -= unit_loss;
    }

    let pot = unit_loss * losers.len() as i64;
    for (&seat, share) in winners.iter().zip(split(pot, winners.len())) {
        results[positions[&seat]].score_delta += share;
    }

    debug!(
        "Slot {slot} {} unit loss {unit_loss} pot {pot} winners {winners:?}",
        reference.category
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settler;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn delta(results: &[SettlementResult], seat: SeatIndex) -> i64 {
        results
            .iter()
            .find(|r| r.seat == seat)
            .map(|r| r.score_delta)
            .unwrap()
    }

    fn sum(results: &[SettlementResult]) -> i64 {
        results.iter().map(|r| r.score_delta).sum()
    }

    #[test]
    fn single_winner_first_slot() {
        let players = [
            PlayerSlotInfo::new(1, HandCategory::FourOfAKind),
            PlayerSlotInfo::new(2, HandCategory::FullHouse),
        ];

        let results = Settler::default()
            .settle_slot(&players, &[1], SlotId::FIRST)
            .unwrap();
        assert_eq!(delta(&results, 1), 50);
        assert_eq!(delta(&results, 2), -50);
    }

    #[test]
    fn remainder_to_first_winner() {
        let players = [
            PlayerSlotInfo::new(1, HandCategory::Flush),
            PlayerSlotInfo::new(2, HandCategory::Flush),
            PlayerSlotInfo::new(3, HandCategory::Straight),
        ];

        let results = Settler::default()
            .settle_slot(&players, &[1, 2], SlotId::SECOND)
            .unwrap();
        assert_eq!(delta(&results, 3), -15);
        assert_eq!(delta(&results, 1), 8);
        assert_eq!(delta(&results, 2), 7);

        // Winners order decides who gets the remainder.
        let results = Settler::default()
            .settle_slot(&players, &[2, 1], SlotId::SECOND)
            .unwrap();
        assert_eq!(delta(&results, 1), 7);
        assert_eq!(delta(&results, 2), 8);
    }

    #[test]
    fn royal_flush_third_slot() {
        let players = [
            PlayerSlotInfo::new(1, HandCategory::StraightFlush).with_royal(true),
            PlayerSlotInfo::new(2, HandCategory::StraightFlush),
        ];

        let results = Settler::default()
            .settle_slot(&players, &[1], SlotId::THIRD)
            .unwrap();
        assert_eq!(delta(&results, 1), 20);
        assert_eq!(delta(&results, 2), -20);

        // A plain straight flush.
        let results = Settler::default()
            .settle_slot(&players, &[2], SlotId::THIRD)
            .unwrap();
        assert_eq!(delta(&results, 2), 15);
        assert_eq!(delta(&results, 1), -15);
    }

    #[test]
    fn not_played_is_excluded() {
        let players = [
            PlayerSlotInfo::new(1, HandCategory::OnePair),
            PlayerSlotInfo::new(2, HandCategory::HighCard),
            PlayerSlotInfo::not_played(3),
        ];

        let results = Settler::default()
            .settle_slot(&players, &[1], SlotId::THIRD)
            .unwrap();
        assert_eq!(delta(&results, 1), 1);
        assert_eq!(delta(&results, 2), -1);
        assert_eq!(delta(&results, 3), 0);
    }

    #[test]
    fn full_chop_is_zero() {
        let players = [
            PlayerSlotInfo::new(1, HandCategory::HighCard),
            PlayerSlotInfo::new(2, HandCategory::HighCard),
        ];

        let results = Settler::default()
            .settle_slot(&players, &[1, 2], SlotId::FIRST)
            .unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score_delta == 0));
    }

    #[test]
    fn degenerate_inputs_are_zero() {
        let settler = Settler::default();
        let players = [
            PlayerSlotInfo::new(1, HandCategory::Flush),
            PlayerSlotInfo::new(2, HandCategory::Straight),
        ];

        // No winners.
        let results = settler.settle_slot(&players, &[], SlotId::FIRST).unwrap();
        assert!(results.iter().all(|r| r.score_delta == 0));

        // Nobody played.
        let idle = [PlayerSlotInfo::not_played(1), PlayerSlotInfo::not_played(2)];
        let results = settler.settle_slot(&idle, &[1], SlotId::FIRST).unwrap();
        assert!(results.iter().all(|r| r.score_delta == 0));

        // No players at all.
        let results = settler.settle_slot(&[], &[1], SlotId::FIRST).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn winner_not_found() {
        let settler = Settler::default();
        let players = [
            PlayerSlotInfo::new(1, HandCategory::Flush),
            PlayerSlotInfo::new(2, HandCategory::Straight),
            PlayerSlotInfo::not_played(3),
        ];

        assert_eq!(
            settler.settle_slot(&players, &[7], SlotId::FIRST),
            Err(SettleError::WinnerNotFound(7))
        );

        // A winner that didn't play the slot.
        assert_eq!(
            settler.settle_slot(&players, &[3], SlotId::FIRST),
            Err(SettleError::WinnerNotFound(3))
        );

        // A second unknown winner would lose its pot share.
        assert_eq!(
            settler.settle_slot(&players, &[1, 9], SlotId::FIRST),
            Err(SettleError::WinnerNotFound(9))
        );
    }

    #[test]
    fn duplicate_seats() {
        let settler = Settler::default();
        let players = [
            PlayerSlotInfo::new(1, HandCategory::Flush),
            PlayerSlotInfo::new(2, HandCategory::Straight),
        ];

        assert_eq!(
            settler.settle_slot(&players, &[1, 1], SlotId::FIRST),
            Err(SettleError::DuplicateSeat(1))
        );

        let players = [
            PlayerSlotInfo::new(1, HandCategory::Flush),
            PlayerSlotInfo::new(1, HandCategory::Straight),
        ];
        assert_eq!(
            settler.settle_slot(&players, &[1], SlotId::FIRST),
            Err(SettleError::DuplicateSeat(1))
        );
    }

    #[test]
    fn winners_disagree() {
        let players = [
            PlayerSlotInfo::new(1, HandCategory::Flush),
            PlayerSlotInfo::new(2, HandCategory::Straight),
            PlayerSlotInfo::new(3, HandCategory::HighCard),
        ];

        assert_eq!(
            Settler::default().settle_slot(&players, &[1, 2], SlotId::FIRST),
            Err(SettleError::WinnersDisagree {
                seat: 2,
                reference: 1
            })
        );

        // Permissive settlement takes the strength from the first winner.
        let permissive = Settler::new(SettleConfig {
            strict: false,
            ..Default::default()
        });
        let results = permissive
            .settle_slot(&players, &[1, 2], SlotId::FIRST)
            .unwrap();
        assert_eq!(delta(&results, 3), -25);
        assert_eq!(delta(&results, 1), 13);
        assert_eq!(delta(&results, 2), 12);

        // Royal and plain straight flushes differ in strength.
        let players = [
            PlayerSlotInfo::new(1, HandCategory::StraightFlush).with_royal(true),
            PlayerSlotInfo::new(2, HandCategory::StraightFlush),
            PlayerSlotInfo::new(3, HandCategory::HighCard),
        ];
        assert!(
            Settler::default()
                .settle_slot(&players, &[1, 2], SlotId::FIRST)
                .is_err()
        );
    }

    #[test]
    fn unknown_slot_multiplier() {
        assert_eq!(SlotId::new(0).multiplier(), 1);
        assert_eq!(SlotId::new(4).multiplier(), 1);

        let players = [
            PlayerSlotInfo::new(1, HandCategory::TwoPair),
            PlayerSlotInfo::new(2, HandCategory::OnePair),
        ];
        let results = Settler::default()
            .settle_slot(&players, &[1], SlotId::new(9))
            .unwrap();
        assert_eq!(delta(&results, 1), 2);
    }

    #[test]
    fn strength_table() {
        use HandCategory::*;
        let strengths = HandCategory::categories()
            .map(|c| PlayerSlotInfo::new(0, c).strength())
            .collect::<Vec<_>>();
        assert_eq!(strengths, vec![1, 1, 2, 3, 4, 5, 6, 10, 15]);
        assert_eq!(
            PlayerSlotInfo::new(0, StraightFlush)
                .with_royal(true)
                .strength(),
            20
        );
        // Royal only matters for straight flushes.
        assert_eq!(PlayerSlotInfo::new(0, Flush).with_royal(true).strength(), 5);
    }

    #[test]
    fn random_slots_are_zero_sum() {
        let mut rng = StdRng::seed_from_u64(42);
        let categories = HandCategory::categories().collect::<Vec<_>>();
        let settler = Settler::new(SettleConfig {
            strict: false,
            ..Default::default()
        });

        for _ in 0..1_000 {
            let n = rng.random_range(1..=9);
            let players = (0..n)
                .map(|seat| PlayerSlotInfo {
                    seat,
                    has_played: rng.random_bool(0.8),
                    category: categories[rng.random_range(0..categories.len())],
                    is_royal: rng.random_bool(0.1),
                })
                .collect::<Vec<_>>();

            let winners = players
                .iter()
                .filter(|p| p.has_played && rng.random_bool(0.4))
                .map(|p| p.seat)
                .collect::<Vec<_>>();

            let slot = SlotId::new(rng.random_range(1..=3));
            let results = settler.settle_slot(&players, &winners, slot).unwrap();
            assert_eq!(results.len(), players.len());
            assert_eq!(sum(&results), 0);

            // Players that didn't play are never charged.
            for (p, r) in players.iter().zip(&results) {
                assert_eq!(p.seat, r.seat);
                if !p.has_played {
                    assert_eq!(r.score_delta, 0);
                }
            }
        }
    }
}
