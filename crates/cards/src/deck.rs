// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck used to produce hands.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

#[cfg(feature = "parallel")]
mod parallel;

/// The largest hand the deck iterators produce.
const MAX_HAND: usize = 7;

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns None if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are visited in lexicographic order of the cards positions in the
    /// deck. Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=MAX_HAND).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; MAX_HAND];
        let mut hand = [Card::new(Rank::Ace, Suit::Hearts); MAX_HAND];
        for i in 0..k {
            pos[i] = i;
            hand[i] = self.cards[i];
        }

        loop {
            f(&hand[..k]);

            // Find the rightmost position that can still move forward.
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                break;
            };

            pos[i] += 1;
            hand[i] = self.cards[pos[i]];
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
                hand[j] = self.cards[pos[j]];
            }
        }
    }

    /// Calls the `f` closure for `samples` random k-cards hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<F>(&self, samples: usize, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=MAX_HAND).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut rng = SmallRng::from_os_rng();
        let mut hand = [Card::new(Rank::Ace, Suit::Hearts); MAX_HAND];

        for _ in 0..samples {
            for (pos, c) in self.cards.choose_multiple(&mut rng, k).enumerate() {
                hand[pos] = *c;
            }

            f(&hand[..k]);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
