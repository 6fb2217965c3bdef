// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cactus Poker cards types.
//!
//! This crate defines the packed card encoding used by the hand evaluator:
//!
//! ```
//! # use cactus_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.rank(), Rank::Ace);
//! assert_eq!(ah.suit(), Suit::Hearts);
//! assert_eq!(ah.prime(), 41);
//! assert_eq!(ah.rank_bit(), 1 << 12);
//!
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 7 cards hands:
//!
//! ```no_run
//! # use cactus_cards::Deck;
//! // Iterate through all 7 cards hands (133M hands).
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 133_784_560);
//! ```
//!
//! to sample 10 random 5-cards hands:
//!
//! ```
//! # use cactus_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling and iteration with
//! a given number of tasks, the closure `task_id` can be used to store per task
//! data to reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use cactus_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, CardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::Deck;
