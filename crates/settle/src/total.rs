// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game round settlement over the three slots.
use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{SeatIndex, SettleConfig, SettleError, SettlementResult, split};

/// A player points change for a game round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSettlementResult {
    /// The player seat.
    pub seat: SeatIndex,
    /// Points change in the first slot.
    pub slot1_delta: i64,
    /// Points change in the second slot.
    pub slot2_delta: i64,
    /// Points change in the third slot.
    pub slot3_delta: i64,
    /// Penalty (negative) or bonus (positive) from the total loser pool.
    pub total_loser_delta: i64,
    /// The sum of the slots and total loser changes.
    pub total_delta: i64,
    /// Whether the player didn't win any slot.
    pub is_total_loser: bool,
}

pub(crate) fn settle(
    config: &SettleConfig,
    slots: [&[SettlementResult]; 3],
    seats: &[SeatIndex],
) -> Result<Vec<SlotSettlementResult>, SettleError> {
    let mut seen = AHashSet::with_capacity(seats.len());
    for &seat in seats {
        if !seen.insert(seat) {
            return Err(SettleError::DuplicateSeat(seat));
        }
    }

    // A seat missing from a slot results didn't play that slot.
    let slot_delta = |slot: &[SettlementResult], seat: SeatIndex| {
        slot.iter()
            .find(|r| r.seat == seat)
            .map(|r| r.score_delta)
            .unwrap_or(0)
    };

    let has_won = |seat: SeatIndex| {
        slots
            .iter()
            .any(|slot| slot.iter().any(|r| r.seat == seat && r.score_delta > 0))
    };

    let mut results = seats
        .iter()
        .map(|&seat| {
            let [s1, s2, s3] = slots.map(|slot| slot_delta(slot, seat));
            SlotSettlementResult {
                seat,
                slot1_delta: s1,
                slot2_delta: s2,
                slot3_delta: s3,
                total_loser_delta: 0,
                total_delta: s1 + s2 + s3,
                is_total_loser: !has_won(seat),
            }
        })
        .collect::<Vec<_>>();

    let losers = results.iter().filter(|r| r.is_total_loser).count();
    let others = results.len() - losers;
    if losers == 0 || others == 0 {
        return Ok(results);
    }

    let pool = i64::from(config.total_loser_pool);
    debug!("Total loser pool {pool} charged to {losers} players credited to {others} players");

    let mut penalties = split(pool, losers);
    let mut bonuses = split(pool, others);
    for result in results.iter_mut() {
        let delta = if result.is_total_loser {
            -penalties.next().unwrap_or(0)
        } else {
            bonuses.next().unwrap_or(0)
        };

        result.total_loser_delta += delta;
        result.total_delta += delta;
    }

    Ok(results)
}
