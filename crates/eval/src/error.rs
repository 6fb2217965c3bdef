// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use crate::score::Category;
use cactus_cards::CardError;

/// Errors detected while building the lookup tables.
///
/// Any of these means the tables cannot be trusted and the evaluator must not
/// be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableBuildError {
    /// Two rank multisets produced the same prime product.
    #[error("duplicate perfect hash key {0}")]
    DuplicateKey(u32),
    /// A table does not have the expected number of entries.
    #[error("table {table} has {actual} entries, expected {expected}")]
    TableSize {
        /// The table name.
        table: &'static str,
        /// The expected number of entries.
        expected: usize,
        /// The number of entries found.
        actual: usize,
    },
    /// The scores assigned to a category do not match its range.
    #[error("{category} scores {first}..={last}, expected {expected_first}..={expected_last}")]
    CategoryRange {
        /// The category.
        category: Category,
        /// The first score of the category range.
        expected_first: u16,
        /// The last score of the category range.
        expected_last: u16,
        /// The first score assigned.
        first: u16,
        /// The last score assigned.
        last: u16,
    },
}

/// Evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Invalid card rank.
    #[error(transparent)]
    InvalidRank(#[from] CardError),
    /// Only 5 and 7 cards hands can be evaluated.
    #[error("unsupported hand of {0} cards, expected 5 or 7")]
    UnsupportedArity(usize),
    /// A card position outside the hand.
    #[error("card index {index} out of range for a {len} cards hand")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The hand length.
        len: usize,
    },
    /// The perfect hash lookup failed, the hand has duplicate cards or the
    /// tables are corrupt.
    #[error("no perfect hash entry for prime product {product}")]
    InternalInconsistency {
        /// The hand prime product.
        product: u32,
    },
    /// A score outside 1..=7462.
    #[error("score {0} out of range 1..=7462")]
    ScoreOutOfRange(u16),
    /// Tables construction failed.
    #[error(transparent)]
    TableBuild(#[from] TableBuildError),
}
