// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cactus Poker hand evaluator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info};
use std::time::Instant;

use cactus_eval::{Category, TableSet, parse_cards};

pub mod stats;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a 5 or 7 cards hand, i.e. `cactus eval AH KH QH JH 9H`.
    Eval {
        /// The hand cards.
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Evaluates every hand and checks the categories frequencies.
    Enumerate {
        /// The number of cards in a hand.
        #[clap(long, short, default_value_t = 5, value_parser = parse_hand_size)]
        cards: usize,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
    },
    /// Evaluates random hands and prints the categories frequencies.
    Sample {
        /// The number of cards in a hand.
        #[clap(long, short, default_value_t = 7, value_parser = parse_hand_size)]
        cards: usize,
        /// Number of hands to sample.
        #[clap(long, default_value_t = 1_000_000)]
        hands: usize,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
    },
    /// Builds the lookup tables and prints a summary.
    Tables,
}

fn parse_hand_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n @ (5 | 7)) => Ok(n),
        _ => Err(format!("{s} is not a valid hand size, expected 5 or 7")),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let now = Instant::now();
    let tables = TableSet::build()?;
    info!("Lookup tables ready in {:.3}ms", now.elapsed().as_secs_f64() * 1000.0);

    match cli.command {
        Command::Eval { cards } => {
            let cards = parse_cards(&cards.join(" "))?;
            let score = tables.evaluate(&cards)?;
            let hand = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
            println!("{} {score}", hand.join(" "));
        }
        Command::Enumerate { cards, tasks } => {
            let counts = stats::enumerate(&tables, cards, tasks as usize)?;
            println!("{counts}");
            counts.check_exhaustive()?;
            info!("All categories frequencies match");
        }
        Command::Sample {
            cards,
            hands,
            tasks,
        } => {
            let counts = stats::sample(&tables, cards, hands, tasks as usize)?;
            println!("{counts}");
        }
        Command::Tables => print_tables(&tables),
    }

    Ok(())
}

fn print_tables(tables: &TableSet) {
    let nonzero = |t: &[u16]| t.iter().filter(|&&s| s != 0).count();

    println!(
        "Flushes:         {} entries, {} hands",
        tables.flushes().len(),
        nonzero(tables.flushes())
    );
    println!(
        "Unique ranks:    {} entries, {} hands",
        tables.unique5().len(),
        nonzero(tables.unique5())
    );
    println!("Perfect hash:    {} keys", tables.products().len());

    if let (Some(first), Some(last)) = (tables.products().first(), tables.products().last()) {
        println!("Keys range:      {first}..={last}");
    }

    println!();
    for category in Category::ALL {
        let range = category.range();
        let label = format!("{category}:");
        println!(
            "{label:<17}{:>4}..={:<4} {} scores",
            range.start(),
            range.end(),
            range.end() - range.start() + 1
        );
    }
}
