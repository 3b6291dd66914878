// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Slotpoker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;

use slotpoker_settle::{BestHand, HandScore, SettleConfig, Showdown, parse_cards};

mod report;
mod seat;

#[derive(Debug, Parser)]
#[clap(version, about = "Slotpoker hands scoring and settlement.")]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scores a 5 cards hand.
    Score {
        /// The hand cards, e.g. "As Ks Qs Js Ts".
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Selects the best 5 cards out of 7 cards.
    Best {
        /// The hand cards, e.g. "As Ks Qs Js Ts 2h 3d".
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Evaluates and settles a game round.
    Settle {
        /// The five board cards.
        #[clap(long, short)]
        board: String,
        /// A player slots as "SEAT:SLOT1/SLOT2/SLOT3", e.g. "1:AhAd/KcKd/2c3c",
        /// prefix with '!' for a folded player.
        #[clap(long = "seat", short, required = true)]
        seats: Vec<String>,
        /// Take a slot strength from the first winner without checking the
        /// other winners hands.
        #[clap(long)]
        permissive: bool,
        /// Points charged to the players that didn't win any slot.
        #[clap(long, default_value_t = SettleConfig::TOTAL_LOSER_POOL)]
        pool: u32,
        /// Print the settlement as JSON.
        #[clap(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Command::Score { cards } => {
            let cards = parse_cards(&cards.join(" ")).context("Invalid hand")?;
            let score = HandScore::eval(&cards)?;
            println!("{score}");
        }
        Command::Best { cards } => {
            let cards = parse_cards(&cards.join(" ")).context("Invalid hand")?;
            let best = BestHand::eval(&cards)?;
            report::best_hand(&best);
        }
        Command::Settle {
            board,
            seats,
            permissive,
            pool,
            json,
        } => {
            let board = parse_cards(&board).context("Invalid board")?;
            let seats = seats
                .iter()
                .map(|s| seat::parse(s.as_str()))
                .collect::<Result<Vec<_>>>()?;

            if seats.is_empty() {
                bail!("No seats");
            }

            let config = SettleConfig {
                strict: !permissive,
                total_loser_pool: pool,
            };

            info!("Settling {} players on board {}", seats.len(), report::cards(&board));
            let settlement = Showdown::new(board, config).evaluate(&seats)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&settlement)?);
            } else {
                report::settlement(&settlement);
            }
        }
    }

    Ok(())
}
