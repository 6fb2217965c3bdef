// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator is a port of the [Cactus Kev's][kevlink] poker evaluator to
//! evaluate 5 and 7 cards poker hands, a 7 cards hand is evaluated as the best
//! of its 21 5-cards hands.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use crate::{
    Card,
    error::EvalError,
    hand::{FiveCardHand, SevenCardHand},
    score::Score,
    tables::TableSet,
};

mod eval7;

impl TableSet {
    /// Evaluates a 5 or 7 cards hand.
    pub fn evaluate(&self, cards: &[Card]) -> Result<Score, EvalError> {
        match cards.len() {
            5 => self.eval5(&FiveCardHand::try_from(cards)?),
            7 => self.eval7(&SevenCardHand::try_from(cards)?),
            n => Err(EvalError::UnsupportedArity(n)),
        }
    }

    /// Evaluates a 5 cards hand.
    #[inline]
    pub fn eval5(&self, hand: &FiveCardHand) -> Result<Score, EvalError> {
        let mask = hand.rank_mask() as usize;

        // Flushes and straight flushes.
        let score = if hand.suit_mask() != 0 {
            self.flushes[mask]
        } else {
            // Straights and high cards.
            match self.unique5[mask] {
                0 => return self.eval_paired(hand.prime_product()),
                s => s,
            }
        };

        // A suited hand with less than 5 ranks has duplicate cards.
        if score == 0 {
            return Err(EvalError::InternalInconsistency {
                product: hand.prime_product(),
            });
        }

        Ok(Score::from_table(score))
    }

    /// Looks up the score of a hand with repeated ranks.
    #[inline]
    fn eval_paired(&self, product: u32) -> Result<Score, EvalError> {
        self.products
            .binary_search(&product)
            .map(|idx| Score::from_table(self.values[idx]))
            .map_err(|_| EvalError::InternalInconsistency { product })
    }
}
