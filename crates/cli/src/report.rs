// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal reports.
use slotpoker_settle::{BestHand, Card, GameSettlement};

/// Formats cards separated by spaces.
pub fn cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints a best hand.
pub fn best_hand(best: &BestHand) {
    println!("{}  {}", cards(best.cards()), best.score());
}

/// Prints a game round settlement.
pub fn settlement(settlement: &GameSettlement) {
    for outcome in &settlement.slots {
        println!("Slot {} (x{})", outcome.slot, outcome.slot.multiplier());

        for result in &outcome.results {
            let hand = outcome.hands.iter().find(|h| h.seat == result.seat);
            let winner = if outcome.winners.contains(&result.seat) {
                "  winner"
            } else {
                ""
            };

            match hand {
                Some(h) => println!(
                    "  seat {:<3} {:<15} {:<30} {:>+6}{winner}",
                    result.seat,
                    cards(h.hand.cards()),
                    h.hand.score().to_string(),
                    result.score_delta,
                ),
                None => println!(
                    "  seat {:<3} {:<15} {:<30} {:>+6}",
                    result.seat, "-", "not played", result.score_delta
                ),
            }
        }

        println!();
    }

    println!(
        "{:<8} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "Seat", "Slot1", "Slot2", "Slot3", "Loser", "Total"
    );

    for r in &settlement.totals {
        let mark = if r.is_total_loser { "  total loser" } else { "" };
        println!(
            "{:<8} {:>+6} {:>+6} {:>+6} {:>+6} {:>+6}{mark}",
            r.seat, r.slot1_delta, r.slot2_delta, r.slot3_delta, r.total_loser_delta, r.total_delta,
        );
    }
}
