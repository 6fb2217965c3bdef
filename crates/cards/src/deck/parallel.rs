// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use rand::prelude::*;
use std::thread;

use super::{Deck, MAX_HAND};
use crate::{Card, Rank, Suit};

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_binomials() -> [[u64; MAX_HAND + 1]; Deck::SIZE + 1] {
    let mut t = [[0u64; MAX_HAND + 1]; Deck::SIZE + 1];
    let mut n = 0;

    while n <= Deck::SIZE {
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_HAND && k <= n {
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const BINOMIALS: [[u64; MAX_HAND + 1]; Deck::SIZE + 1] = make_binomials();

/// Returns the binomial coefficient for n choose k.
#[inline]
fn nck(n: usize, k: usize) -> usize {
    debug_assert!(n <= Deck::SIZE && k <= MAX_HAND);
    BINOMIALS[n][k] as usize
}

/// k-subsets of {0..n} in colexicographic order.
struct Subsets {
    /// Subset positions with a sentinel n at index k.
    pos: [usize; MAX_HAND + 1],
    k: usize,
}

impl Subsets {
    /// Creates the subset with colex rank `nth` using the combinatorial
    /// number system (see Theorem L pg. 260 Knuth 4a).
    fn starting_at(n: usize, k: usize, mut nth: usize) -> Self {
        debug_assert!(nth < nck(n, k));

        let mut pos = [0; MAX_HAND + 1];
        pos[k] = n;

        let mut c = n;
        for i in (0..k).rev() {
            c -= 1;
            while nck(c, i + 1) > nth {
                c -= 1;
            }

            pos[i] = c;
            nth -= nck(c, i + 1);
        }

        Self { pos, k }
    }

    fn positions(&self) -> &[usize] {
        &self.pos[..self.k]
    }

    /// Moves to the next subset, returns false after the last one.
    fn advance(&mut self) -> bool {
        // Algorithm L from TAOCP 4a.
        let mut j = 0;
        while j < self.k && self.pos[j] + 1 == self.pos[j + 1] {
            self.pos[j] = j;
            j += 1;
        }

        if j == self.k {
            return false;
        }

        self.pos[j] += 1;
        true
    }
}

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes the task identifier (0..num_tasks) and a slice of
    /// cards of length k, hands are split evenly across tasks.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=MAX_HAND).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        if k > n {
            return;
        }

        let num_hands = nck(n, k);
        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                if start >= num_hands {
                    break;
                }

                let count = hands_per_task.min(num_hands - start);
                let f = &f;
                s.spawn(move || {
                    let mut hand = [Card::new(Rank::Ace, Suit::Diamonds); MAX_HAND];
                    let mut subsets = Subsets::starting_at(n, k, start);

                    for _ in 0..count {
                        for (idx, &pos) in subsets.positions().iter().enumerate() {
                            hand[idx] = self.cards[pos];
                        }

                        f(task_id, &hand[..k]);

                        if !subsets.advance() {
                            break;
                        }
                    }
                });
            }
        });
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=MAX_HAND).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut hand = [Card::new(Rank::Ace, Suit::Diamonds); MAX_HAND];
                    let mut rng = SmallRng::from_os_rng();

                    for _ in 0..samples_per_task {
                        for (pos, c) in self.cards.choose_multiple(&mut rng, k).enumerate() {
                            hand[pos] = *c;
                        }

                        f(task_id, &hand[..k]);
                    }
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_nck() {
        assert_eq!(nck(2, 3), 0);
        assert_eq!(nck(0, 0), 1);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));
    }

    #[test]
    fn subsets_unranking() {
        // Walking from the first subset must match unranking each index.
        let (n, k) = (12, 4);
        let mut walk = Subsets::starting_at(n, k, 0);
        let mut seen = HashSet::default();

        for nth in 0..nck(n, k) {
            let ranked = Subsets::starting_at(n, k, nth);
            assert_eq!(walk.positions(), ranked.positions());
            assert!(walk.positions().windows(2).all(|w| w[0] < w[1]));
            seen.insert(walk.positions().to_vec());

            let more = walk.advance();
            assert_eq!(more, nth + 1 < nck(n, k));
        }

        assert_eq!(seen.len(), nck(n, k));
    }

    #[test]
    fn par_for_each_visits_all() {
        let deck = Deck::default();
        let hands = Mutex::new(HashSet::default());

        deck.par_for_each(7, 3, |_, cards| {
            assert_eq!(cards.len(), 3);
            hands.lock().unwrap().insert(cards.to_owned());
        });

        assert_eq!(hands.into_inner().unwrap().len(), 22_100);
    }

    #[test]
    fn par_for_each_tasks() {
        let deck = Deck::default();
        let counter = AtomicUsize::new(0);
        let max_task = AtomicUsize::new(0);

        deck.par_for_each(5, 5, |task_id, cards| {
            assert_eq!(cards.len(), 5);
            max_task.fetch_max(task_id, Ordering::Relaxed);
            counter.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(counter.load(Ordering::Relaxed), 2_598_960);
        assert_eq!(max_task.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn par_sample_count() {
        let deck = Deck::default();
        let counter = AtomicUsize::new(0);

        deck.par_sample(4, 10, 7, |_, cards| {
            assert_eq!(cards.len(), 7);
            counter.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(counter.load(Ordering::Relaxed), 40);
    }
}
