// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand scores and categories.
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive};

use crate::error::EvalError;

/// The strongest score, a royal flush.
pub const BEST_SCORE: u16 = 1;

/// The weakest score, 7-5-4-3-2 offsuit.
pub const WORST_SCORE: u16 = 7462;

/// A hand strength in 1..=7462, smaller is stronger.
///
/// The derived ordering is the numeric one, so `a < b` means that `a` beats
/// `b` and the best of many scores is their minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Score(u16);

impl Score {
    /// Creates a score checking it is in 1..=7462.
    pub fn new(value: u16) -> Result<Self, EvalError> {
        if (BEST_SCORE..=WORST_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EvalError::ScoreOutOfRange(value))
        }
    }

    /// Creates a score from a table value.
    #[inline]
    pub(crate) const fn from_table(value: u16) -> Self {
        Self(value)
    }

    /// The score numeric value.
    #[inline]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// The score category.
    pub fn category(&self) -> Category {
        Category::from_value(self.0)
    }

    /// Checks if this score beats `other`.
    #[inline]
    pub fn is_stronger_than(&self, other: Score) -> bool {
        self.0 < other.0
    }
}

impl TryFrom<u16> for Score {
    type Error = EvalError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u16 {
    fn from(score: Score) -> u16 {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.category(), self.0)
    }
}

/// A hand category, from the strongest to the weakest.
///
/// The discriminants are contiguous so a category can index a counters array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Straight flush.
    StraightFlush = 0,
    /// Four of a kind.
    FourOfAKind,
    /// Full house.
    FullHouse,
    /// Flush.
    Flush,
    /// Straight.
    Straight,
    /// Three of a kind.
    ThreeOfAKind,
    /// Two pair.
    TwoPair,
    /// One pair.
    OnePair,
    /// High card.
    HighCard,
}

impl Category {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// All categories from the strongest to the weakest.
    pub const ALL: [Category; Category::COUNT] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    /// The inclusive range of scores for this category.
    pub const fn range(self) -> RangeInclusive<u16> {
        match self {
            Category::StraightFlush => 1..=10,
            Category::FourOfAKind => 11..=166,
            Category::FullHouse => 167..=322,
            Category::Flush => 323..=1599,
            Category::Straight => 1600..=1609,
            Category::ThreeOfAKind => 1610..=2467,
            Category::TwoPair => 2468..=3325,
            Category::OnePair => 3326..=6185,
            Category::HighCard => 6186..=7462,
        }
    }

    /// The number of hands in this category when evaluating every 5 or 7
    /// cards hand from a 52 cards deck, None for other hand sizes.
    pub const fn expected_count(self, hand_size: usize) -> Option<u64> {
        let counts: [u64; Category::COUNT] = match hand_size {
            5 => [40, 624, 3744, 5108, 10200, 54912, 123552, 1098240, 1302540],
            7 => [
                41584, 224848, 3473184, 4047644, 6180020, 6461620, 31433400, 58627800,
                23294460,
            ],
            _ => return None,
        };

        Some(counts[self as usize])
    }

    /// Maps an in range value to its category.
    fn from_value(value: u16) -> Category {
        match value {
            0..=10 => Category::StraightFlush,
            11..=166 => Category::FourOfAKind,
            167..=322 => Category::FullHouse,
            323..=1599 => Category::Flush,
            1600..=1609 => Category::Straight,
            1610..=2467 => Category::ThreeOfAKind,
            2468..=3325 => Category::TwoPair,
            3326..=6185 => Category::OnePair,
            _ => Category::HighCard,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High Card",
        };

        f.write_str(name)
    }
}

/// Returns the category of a score value, fails if the value is not in
/// 1..=7462.
pub fn category_of(value: u16) -> Result<Category, EvalError> {
    Score::new(value).map(|s| s.category())
}
