// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fixed size hands.
use std::fmt;

use crate::{Card, error::EvalError};

/// A fixed size sequence of cards.
///
/// The hand doesn't check for duplicate cards, evaluating a hand with
/// duplicates returns an error or a meaningless score.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand<const N: usize>([Card; N]);

/// A 5 cards hand.
pub type FiveCardHand = Hand<5>;

/// A 7 cards hand.
pub type SevenCardHand = Hand<7>;

impl<const N: usize> Hand<N> {
    /// Creates a hand from an array of cards.
    pub const fn new(cards: [Card; N]) -> Self {
        Self(cards)
    }

    /// The number of cards in the hand.
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false, hands have at least one card.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the card at position `index`.
    pub fn card(&self, index: usize) -> Result<Card, EvalError> {
        self.0
            .get(index)
            .copied()
            .ok_or(EvalError::IndexOutOfRange { index, len: N })
    }

    /// Replaces the card at position `index`.
    pub fn set_card(&mut self, index: usize, card: Card) -> Result<(), EvalError> {
        let slot = self
            .0
            .get_mut(index)
            .ok_or(EvalError::IndexOutOfRange { index, len: N })?;
        *slot = card;
        Ok(())
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; N] {
        &self.0
    }

    /// The OR of the cards rank bits, one bit for each distinct rank.
    #[inline]
    pub fn rank_mask(&self) -> u16 {
        self.0.iter().fold(0, |acc, c| acc | c.rank_bit())
    }

    /// The AND of the cards suit bits, non zero only if all cards have the
    /// same suit.
    #[inline]
    pub fn suit_mask(&self) -> u8 {
        self.0.iter().fold(0xf, |acc, c| acc & c.suit_bits())
    }
}

impl FiveCardHand {
    /// The product of the cards primes, unique for each ranks multiset.
    #[inline]
    pub fn prime_product(&self) -> u32 {
        self.0.iter().map(|c| c.prime()).product()
    }
}

impl<const N: usize> From<[Card; N]> for Hand<N> {
    fn from(cards: [Card; N]) -> Self {
        Self(cards)
    }
}

impl<const N: usize> TryFrom<&[Card]> for Hand<N> {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        <[Card; N]>::try_from(cards)
            .map(Self)
            .map_err(|_| EvalError::UnsupportedArity(cards.len()))
    }
}

impl<const N: usize> fmt::Display for Hand<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

impl<const N: usize> fmt::Debug for Hand<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn royal(suit: Suit) -> FiveCardHand {
        Hand::new(
            [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten].map(|r| Card::new(r, suit)),
        )
    }

    #[test]
    fn hand_masks() {
        let hand = royal(Suit::Spades);
        assert_eq!(hand.rank_mask(), 0b1_1111_0000_0000);
        assert_eq!(hand.suit_mask(), Suit::Spades as u8);
        assert_eq!(hand.prime_product(), 41 * 37 * 31 * 29 * 23);

        let mut hand = hand;
        hand.set_card(0, Card::new(Rank::Ace, Suit::Hearts)).unwrap();
        assert_eq!(hand.suit_mask(), 0);
        assert_eq!(hand.rank_mask(), 0b1_1111_0000_0000);
    }

    #[test]
    fn paired_rank_mask() {
        let hand = FiveCardHand::new([
            Card::new(Rank::Deuce, Suit::Clubs),
            Card::new(Rank::Deuce, Suit::Diamonds),
            Card::new(Rank::Deuce, Suit::Hearts),
            Card::new(Rank::Deuce, Suit::Spades),
            Card::new(Rank::Trey, Suit::Clubs),
        ]);
        assert_eq!(hand.rank_mask(), 0b11);
        assert_eq!(hand.prime_product(), 2 * 2 * 2 * 2 * 3);
    }

    #[test]
    fn hand_index_errors() {
        let mut hand = royal(Suit::Clubs);
        assert_eq!(hand.len(), 5);
        assert_eq!(hand.card(4), Ok(Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!(
            hand.card(5),
            Err(EvalError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(
            hand.set_card(7, Card::new(Rank::Ten, Suit::Hearts)),
            Err(EvalError::IndexOutOfRange { index: 7, len: 5 })
        );
    }

    #[test]
    fn hand_from_slice() {
        let cards = royal(Suit::Hearts).cards().to_vec();
        let hand = FiveCardHand::try_from(cards.as_slice()).unwrap();
        assert_eq!(hand.cards().as_slice(), cards.as_slice());
        assert_eq!(hand.to_string(), "[AH KH QH JH TH]");

        assert_eq!(
            SevenCardHand::try_from(cards.as_slice()),
            Err(EvalError::UnsupportedArity(5))
        );
    }
}
