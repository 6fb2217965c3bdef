// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! 7 cards hands evaluation.
use crate::{
    error::EvalError,
    hand::{FiveCardHand, SevenCardHand},
    score::{Score, WORST_SCORE},
    tables::TableSet,
};

/// Creates the 21 ways to pick 5 positions out of 7.
const fn make_perm7() -> [[usize; 5]; 21] {
    let mut t = [[0; 5]; 21];
    let mut n = 0;

    // Each 5 cards hand leaves out two positions i < j.
    let mut i = 0;
    while i < 7 {
        let mut j = i + 1;
        while j < 7 {
            let mut pos = 0;
            let mut k = 0;
            while pos < 7 {
                if pos != i && pos != j {
                    t[n][k] = pos;
                    k += 1;
                }
                pos += 1;
            }

            n += 1;
            j += 1;
        }
        i += 1;
    }

    t
}

const PERM7: [[usize; 5]; 21] = make_perm7();

impl TableSet {
    /// Evaluates a 7 cards hand as the best of its 5 cards hands.
    pub fn eval7(&self, hand: &SevenCardHand) -> Result<Score, EvalError> {
        let cards = hand.cards();
        let mut best = Score::from_table(WORST_SCORE);

        for perm in &PERM7 {
            let sub = FiveCardHand::new(perm.map(|pos| cards[pos]));
            best = best.min(self.eval5(&sub)?);
        }

        Ok(best)
    }
}
