// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seat arguments parsing.
use anyhow::{Context, Result, bail};

use slotpoker_settle::{SeatHand, parse_cards};

/// Parses a seat from "SEAT:SLOT1/SLOT2/SLOT3", a leading '!' marks a folded
/// player and missing or empty slots are not played.
pub fn parse(s: &str) -> Result<SeatHand> {
    let (folded, s) = match s.trim().strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, s.trim()),
    };

    let Some((seat, slots)) = s.split_once(':') else {
        bail!("Invalid seat '{s}' expected SEAT:SLOT1/SLOT2/SLOT3");
    };

    let seat: usize = seat
        .trim()
        .parse()
        .with_context(|| format!("Invalid seat index '{seat}'"))?;

    let parts = slots.split('/').collect::<Vec<_>>();
    if parts.len() > 3 {
        bail!("Seat {seat} has {} slots, max is 3", parts.len());
    }

    let mut hand = SeatHand::new(seat, Default::default());
    hand.folded = folded;
    for (slot, part) in hand.slots.iter_mut().zip(parts) {
        *slot = parse_cards(part).with_context(|| format!("Invalid seat {seat} slot '{part}'"))?;
    }

    Ok(hand)
}
