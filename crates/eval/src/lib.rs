// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cactus Poker hand evaluator.
//!
//! Poker hand evaluator for 5 and 7 cards hands based on [Cactus Kev's][kevlink]
//! evaluator. Each card carries its rank prime, rank bit and suit bit, and a
//! hand is scored with at most one lookup in each of three tables:
//!
//! - suited hands are looked up by ranks mask in the flushes table,
//! - hands with 5 distinct ranks by ranks mask in the unique ranks table,
//! - all other hands by binary search of their primes product in a perfect
//!   hash of the 4888 ranks multisets with a repeated rank.
//!
//! The tables are built once with [TableSet::build] and passed explicitly to
//! the evaluation functions, a [Score] is in 1..=7462 where 1 is a royal flush
//! and smaller scores are stronger:
//!
//! ```
//! # use cactus_eval::*;
//! let tables = TableSet::build().unwrap();
//!
//! let flush = parse_cards("AH KH QH JH 9H").unwrap();
//! let score = tables.evaluate(&flush).unwrap();
//! assert_eq!(score.value(), 323);
//! assert_eq!(score.category(), Category::Flush);
//!
//! // 2C, 3C, .., 8C
//! let cards = Deck::default().into_iter().take(7).collect::<Vec<_>>();
//! let sf = tables.evaluate(&cards).unwrap();
//! assert!(sf.is_stronger_than(score));
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod error;
pub use error::{EvalError, TableBuildError};

mod eval;

pub mod hand;
pub use hand::{FiveCardHand, Hand, SevenCardHand};

pub mod score;
pub use score::{Category, Score, category_of};

pub mod tables;
pub use tables::TableSet;

// Reexport cards types.
pub use cactus_cards::{Card, CardError, Deck, Rank, Suit, parse_cards};
