// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lookup tables construction.
//!
//! The evaluator uses three tables:
//!
//! - a flushes table indexed by the 13 bits ranks mask of a 5 cards hand with
//!   the score of the hand when all cards have the same suit,
//! - a unique ranks table with the same index and the score of hands with 5
//!   distinct ranks and mixed suits (straights and high cards),
//! - a perfect hash made of the sorted prime products of the ranks multisets
//!   that have at least one pair, with a parallel array of scores.
//!
//! All scores are derived here from the hand ranking rules, the builder walks
//! each category from the strongest to the weakest hand assigning consecutive
//! scores starting from 1 for a royal flush.
use log::debug;
use std::{fmt, time::Instant};

use crate::{
    Rank,
    error::TableBuildError,
    score::{Category, WORST_SCORE},
};

/// Number of 13 bits ranks masks.
const MASKS: usize = 1 << 13;

/// Number of masks with 5 distinct ranks, 13 choose 5.
const UNIQUE_RANKS: usize = 1287;

/// Number of ranks multisets with at least one repeated rank.
pub const PERFECT_HASH_SIZE: usize = 4888;

/// Straight masks from the strongest (ace high) to the weakest (the wheel).
const STRAIGHTS: [u16; 10] = [
    0x1f00, 0x0f80, 0x07c0, 0x03e0, 0x01f0, 0x00f8, 0x007c, 0x003e, 0x001f, 0x100f,
];

/// The immutable lookup tables used by the evaluator.
///
/// Build the tables once with [TableSet::build] and share them by reference,
/// evaluation never mutates them so any number of threads can use the same
/// table set.
#[derive(Clone)]
pub struct TableSet {
    pub(crate) flushes: Box<[u16]>,
    pub(crate) unique5: Box<[u16]>,
    pub(crate) products: Box<[u32]>,
    pub(crate) values: Box<[u16]>,
}

impl TableSet {
    /// Builds and checks the lookup tables.
    pub fn build() -> Result<Self, TableBuildError> {
        let now = Instant::now();

        let mut flushes = vec![0u16; MASKS];
        let mut unique5 = vec![0u16; MASKS];
        let mut entries = Vec::with_capacity(PERFECT_HASH_SIZE);

        let high_cards = rank_sets(5, 0)
            .filter(|m| !STRAIGHTS.contains(m))
            .collect::<Vec<_>>();

        let mut next = 1;

        assign(&mut next, Category::StraightFlush, STRAIGHTS, |m, s| {
            flushes[m as usize] = s;
        })?;

        let quads = Rank::ranks().rev().flat_map(|q| {
            Rank::ranks()
                .rev()
                .filter(move |&k| k != q)
                .map(move |k| q.prime().pow(4) * k.prime())
        });
        assign(&mut next, Category::FourOfAKind, quads, |p, s| {
            entries.push((p, s));
        })?;

        let full_houses = Rank::ranks().rev().flat_map(|t| {
            Rank::ranks()
                .rev()
                .filter(move |&p| p != t)
                .map(move |p| t.prime().pow(3) * p.prime().pow(2))
        });
        assign(&mut next, Category::FullHouse, full_houses, |p, s| {
            entries.push((p, s));
        })?;

        assign(&mut next, Category::Flush, high_cards.iter().copied(), |m, s| {
            flushes[m as usize] = s;
        })?;

        assign(&mut next, Category::Straight, STRAIGHTS, |m, s| {
            unique5[m as usize] = s;
        })?;

        let trips = Rank::ranks().rev().flat_map(|t| {
            rank_sets(2, t.bit()).map(move |k| t.prime().pow(3) * mask_product(k))
        });
        assign(&mut next, Category::ThreeOfAKind, trips, |p, s| {
            entries.push((p, s));
        })?;

        let two_pairs = rank_sets(2, 0).flat_map(|pairs| {
            rank_sets(1, pairs).map(move |k| mask_product(pairs).pow(2) * mask_product(k))
        });
        assign(&mut next, Category::TwoPair, two_pairs, |p, s| {
            entries.push((p, s));
        })?;

        let pairs = Rank::ranks().rev().flat_map(|p| {
            rank_sets(3, p.bit()).map(move |k| p.prime().pow(2) * mask_product(k))
        });
        assign(&mut next, Category::OnePair, pairs, |p, s| {
            entries.push((p, s));
        })?;

        assign(&mut next, Category::HighCard, high_cards.iter().copied(), |m, s| {
            unique5[m as usize] = s;
        })?;

        debug_assert_eq!(next, WORST_SCORE + 1);

        check_size("flushes", UNIQUE_RANKS, flushes.iter().filter(|&&s| s != 0).count())?;
        check_size("unique5", UNIQUE_RANKS, unique5.iter().filter(|&&s| s != 0).count())?;
        check_size("products", PERFECT_HASH_SIZE, entries.len())?;

        entries.sort_unstable_by_key(|&(p, _)| p);
        if let Some(w) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(TableBuildError::DuplicateKey(w[0].0));
        }

        let (products, values): (Vec<_>, Vec<_>) = entries.into_iter().unzip();

        debug!(
            "Built tables flushes={} unique5={} perfect hash={} in {:.3}ms",
            flushes.len(),
            unique5.len(),
            products.len(),
            now.elapsed().as_secs_f64() * 1000.0
        );

        Ok(Self {
            flushes: flushes.into_boxed_slice(),
            unique5: unique5.into_boxed_slice(),
            products: products.into_boxed_slice(),
            values: values.into_boxed_slice(),
        })
    }

    /// Flushes and straight flushes scores indexed by ranks mask.
    pub fn flushes(&self) -> &[u16] {
        &self.flushes
    }

    /// Straights and high cards scores indexed by ranks mask.
    pub fn unique5(&self) -> &[u16] {
        &self.unique5
    }

    /// The sorted perfect hash keys.
    pub fn products(&self) -> &[u32] {
        &self.products
    }

    /// The perfect hash scores, parallel to [TableSet::products].
    pub fn values(&self) -> &[u16] {
        &self.values
    }
}

impl fmt::Debug for TableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSet")
            .field("flushes", &self.flushes.len())
            .field("unique5", &self.unique5.len())
            .field("products", &self.products.len())
            .finish()
    }
}

/// Assigns consecutive scores to a category hands, from the strongest, and
/// checks the category range.
fn assign<T>(
    next: &mut u16,
    category: Category,
    hands: impl IntoIterator<Item = T>,
    mut store: impl FnMut(T, u16),
) -> Result<(), TableBuildError> {
    let first = *next;
    for hand in hands {
        store(hand, *next);
        *next += 1;
    }

    let last = next.saturating_sub(1);
    let range = category.range();
    if first != *range.start() || last != *range.end() {
        return Err(TableBuildError::CategoryRange {
            category,
            expected_first: *range.start(),
            expected_last: *range.end(),
            first,
            last,
        });
    }

    Ok(())
}

fn check_size(table: &'static str, expected: usize, actual: usize) -> Result<(), TableBuildError> {
    if expected == actual {
        Ok(())
    } else {
        Err(TableBuildError::TableSize {
            table,
            expected,
            actual,
        })
    }
}

/// Ranks masks with `n` ranks not in `exclude`, in descending order.
///
/// For masks with the same number of bits the numeric order is the order of
/// their ranks compared from the highest, so the first mask is the strongest.
fn rank_sets(n: u32, exclude: u16) -> impl Iterator<Item = u16> {
    (0..MASKS as u16)
        .rev()
        .filter(move |m| m.count_ones() == n && m & exclude == 0)
}

/// Product of the primes for the ranks in a mask.
fn mask_product(mask: u16) -> u32 {
    Rank::ranks()
        .filter(|r| mask & r.bit() != 0)
        .map(|r| r.prime())
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn rank_sets_order() {
        let sets = rank_sets(2, 0).collect::<Vec<_>>();
        assert_eq!(sets.len(), 78);
        // Aces and kings, aces and queens, ...
        assert_eq!(sets[0], Rank::Ace.bit() | Rank::King.bit());
        assert_eq!(sets[1], Rank::Ace.bit() | Rank::Queen.bit());
        assert_eq!(sets[77], Rank::Trey.bit() | Rank::Deuce.bit());

        let kickers = rank_sets(3, Rank::Ace.bit()).collect::<Vec<_>>();
        assert_eq!(kickers.len(), 220);
        assert!(kickers.iter().all(|k| k & Rank::Ace.bit() == 0));
    }

    #[test]
    fn straights() {
        for (idx, m) in STRAIGHTS.iter().enumerate() {
            assert_eq!(m.count_ones(), 5);
            // The wheel is the only non consecutive mask.
            if idx < 9 {
                assert_eq!(m >> m.trailing_zeros(), 0x1f);
            }
        }

        let wheel = [Rank::Ace, Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five]
            .iter()
            .fold(0, |acc, r| acc | r.bit());
        assert_eq!(STRAIGHTS[9], wheel);
    }

    #[test]
    fn table_sizes() {
        let tables = TableSet::build().unwrap();
        assert_eq!(tables.flushes().len(), 8192);
        assert_eq!(tables.unique5().len(), 8192);
        assert_eq!(tables.products().len(), PERFECT_HASH_SIZE);
        assert_eq!(tables.values().len(), PERFECT_HASH_SIZE);
        assert_eq!(tables.flushes().iter().filter(|&&s| s != 0).count(), 1287);
        assert_eq!(tables.unique5().iter().filter(|&&s| s != 0).count(), 1287);
    }

    #[test]
    fn perfect_hash_keys() {
        let tables = TableSet::build().unwrap();
        assert!(tables.products().windows(2).all(|w| w[0] < w[1]));

        // Smallest key is four deuces and a trey, largest four aces and a king.
        assert_eq!(tables.products()[0], 2 * 2 * 2 * 2 * 3);
        assert_eq!(tables.products()[PERFECT_HASH_SIZE - 1], 41 * 41 * 41 * 41 * 37);

        // Every paired score appears once.
        let values = tables.values().iter().copied().collect::<HashSet<_>>();
        assert_eq!(values.len(), PERFECT_HASH_SIZE);
        for v in values {
            let category = crate::category_of(v).unwrap();
            assert!(matches!(
                category,
                Category::FourOfAKind
                    | Category::FullHouse
                    | Category::ThreeOfAKind
                    | Category::TwoPair
                    | Category::OnePair
            ));
        }
    }

    #[test]
    fn flushes_and_unique5_scores() {
        let tables = TableSet::build().unwrap();

        let royal = STRAIGHTS[0] as usize;
        assert_eq!(tables.flushes()[royal], 1);
        assert_eq!(tables.unique5()[royal], 1600);

        let wheel = STRAIGHTS[9] as usize;
        assert_eq!(tables.flushes()[wheel], 10);
        assert_eq!(tables.unique5()[wheel], 1609);

        // A K Q J 9 is the best non straight.
        let akqj9 = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]
            .iter()
            .fold(0, |acc, r| acc | r.bit()) as usize;
        assert_eq!(tables.flushes()[akqj9], 323);
        assert_eq!(tables.unique5()[akqj9], 6186);

        // 7 5 4 3 2 is the worst hand.
        let worst = [Rank::Seven, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce]
            .iter()
            .fold(0, |acc, r| acc | r.bit()) as usize;
        assert_eq!(tables.flushes()[worst], 1599);
        assert_eq!(tables.unique5()[worst], 7462);

        // Both tables are zero for masks without 5 ranks.
        for mask in 0..MASKS {
            if (mask as u16).count_ones() != 5 {
                assert_eq!(tables.flushes()[mask], 0);
                assert_eq!(tables.unique5()[mask], 0);
            }
        }
    }

    #[test]
    fn assign_checks_range() {
        let mut next = 1;
        let res = assign(&mut next, Category::StraightFlush, 0..9, |_, _| {});
        assert_eq!(
            res,
            Err(TableBuildError::CategoryRange {
                category: Category::StraightFlush,
                expected_first: 1,
                expected_last: 10,
                first: 1,
                last: 9,
            })
        );

        assert!(check_size("t", 2, 1).is_err());
    }
}
