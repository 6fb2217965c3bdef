// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card codec.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Primes used to encode a card rank, indexed by rank.
const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// All ranks indexed by their rank value.
const RANKS: [Rank; 13] = [
    Rank::Deuce,
    Rank::Trey,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Card encoding and parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A rank value outside Deuce(0)..Ace(12).
    #[error("invalid rank {0}, expected 0..=12")]
    InvalidRank(u8),
    /// A packed value that is not one of the 52 card encodings.
    #[error("invalid card encoding 0x{0:08x}")]
    InvalidEncoding(u32),
    /// A card string that cannot be parsed.
    #[error("invalid card string {0:?}")]
    Parse(String),
}

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink] Poker
/// hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// All fields are extracted with a shift and a mask, a hand's suit flags can
/// be ANDed together to detect a flush, its rank bits ORed together to get the
/// set of distinct ranks, and its primes multiplied to get a key that only
/// depends on the ranks multiset.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Card(u32);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[rank as usize] | (rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// Create a card from a rank value in 0..=12.
    pub fn try_new(rank: u8, suit: Suit) -> Result<Card, CardError> {
        Ok(Self::new(Rank::try_from(rank)?, suit))
    }

    /// This card packed value.
    #[inline]
    pub const fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => unreachable!("invalid suit bits in 0x{:08x}", self.0),
        }
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        RANKS[self.rank_bits() as usize]
    }

    /// Returns the rank prime.
    #[inline]
    pub const fn prime(&self) -> u32 {
        self.0 & 0x3f
    }

    /// Returns the 13 bits rank field with only this card rank bit set.
    #[inline]
    pub const fn rank_bit(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Returns the rank bits.
    #[inline]
    pub const fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub const fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }
}

impl TryFrom<u32> for Card {
    type Error = CardError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let rank = Rank::try_from(((value >> 8) & 0xf) as u8)
            .map_err(|_| CardError::InvalidEncoding(value))?;
        let suit = Suit::try_from_bits(((value >> 12) & 0xf) as u8)
            .ok_or(CardError::InvalidEncoding(value))?;

        let card = Card::new(rank, suit);
        if card.0 == value {
            Ok(card)
        } else {
            Err(CardError::InvalidEncoding(value))
        }
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> u32 {
        card.0
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a two characters card like `AH`, `td` or `7s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::Parse(s.to_string()));
        };

        let rank = match r.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(CardError::Parse(s.to_string())),
        };

        let suit = match su.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(CardError::Parse(s.to_string())),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by whitespace or commas.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from Deuce to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS.into_iter()
    }

    /// The rank value, Deuce is 0 and Ace is 12.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The prime number associated with this rank.
    #[inline]
    pub const fn prime(self) -> u32 {
        PRIMES[self as usize]
    }

    /// The rank bit, bit 0 for Deuce up to bit 12 for Ace.
    #[inline]
    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RANKS
            .get(value as usize)
            .copied()
            .ok_or(CardError::InvalidRank(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Each suit is a distinct bit so that ANDing the suits of a hand is non zero
/// only if all cards have the same suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    fn try_from_bits(bits: u8) -> Option<Suit> {
        Suit::suits().find(|s| *s as u8 == bits)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    fn all_cards() -> impl Iterator<Item = Card> {
        Suit::suits().flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
    }

    #[test]
    fn card_encoding() {
        let mut ids = HashSet::default();

        for card in all_cards() {
            assert_eq!(card.id() & 0xff, PRIMES[card.rank() as usize]);
            assert_eq!(card.prime(), card.rank().prime());
            assert_eq!((card.id() >> 8) & 0xf, card.rank() as u32);
            assert_eq!((card.id() >> 12) & 0xf, card.suit() as u32);
            assert_eq!(card.rank_bit(), 1 << (card.rank() as usize));
            assert_eq!(card.rank_bit().count_ones(), 1);
            ids.insert(card.id());
        }

        assert_eq!(ids.len(), 52);

        // From the Cactus Kev's website.
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 0x08004b25);
        assert_eq!(kd.prime(), 37);
        assert_eq!(kd.rank_bit(), 1 << 11);

        let fs = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(fs.id(), 0x00081307);
        assert_eq!(fs.prime(), 7);
        assert_eq!(fs.rank_bit(), 1 << 3);

        let jc = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(jc.id(), 0x0200891d);
        assert_eq!(jc.prime(), 29);
        assert_eq!(jc.rank_bit(), 1 << 9);
    }

    #[test]
    fn rank_suit_roundtrip() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);

                let card = Card::try_new(rank as u8, suit).unwrap();
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
            }
        }
    }

    #[test]
    fn invalid_rank() {
        assert_eq!(
            Card::try_new(13, Suit::Hearts),
            Err(CardError::InvalidRank(13))
        );
        assert_eq!(Rank::try_from(255u8), Err(CardError::InvalidRank(255)));
        assert_eq!(Rank::try_from(12u8), Ok(Rank::Ace));
    }

    #[test]
    fn suits_and_detects_flush() {
        let hearts = [Rank::Ace, Rank::Four, Rank::Nine]
            .map(|r| Card::new(r, Suit::Hearts))
            .iter()
            .fold(0xf, |acc, c| acc & c.suit_bits());
        assert_ne!(hearts, 0);

        let mixed = Card::new(Rank::Ace, Suit::Hearts).suit_bits()
            & Card::new(Rank::Ace, Suit::Spades).suit_bits();
        assert_eq!(mixed, 0);
    }

    #[test]
    fn card_from_u32() {
        for card in all_cards() {
            assert_eq!(Card::try_from(card.id()), Ok(card));
        }

        // Rank 13.
        assert!(Card::try_from(0x0000_1d00u32).is_err());
        // Two suit bits.
        let bad = Card::new(Rank::Ace, Suit::Hearts).id() | 0x1000;
        assert_eq!(Card::try_from(bad), Err(CardError::InvalidEncoding(bad)));
        // Wrong prime.
        let bad = Card::new(Rank::Ace, Suit::Hearts).id() ^ 0x1;
        assert_eq!(Card::try_from(bad), Err(CardError::InvalidEncoding(bad)));
    }

    #[test]
    fn card_serde() {
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let json = serde_json::to_string(&kd).unwrap();
        assert_eq!(json, 0x08004b25u32.to_string());
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), kd);
        assert!(serde_json::from_str::<Card>("12345").is_err());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");
    }

    #[test]
    fn card_from_string() {
        for card in all_cards() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            assert_eq!(card.to_string().to_lowercase().parse::<Card>(), Ok(card));
        }

        assert!("".parse::<Card>().is_err());
        assert!("A".parse::<Card>().is_err());
        assert!("AHS".parse::<Card>().is_err());
        assert!("1H".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());

        let cards = parse_cards("Ah Kh, qh  jh,9H").unwrap();
        assert_eq!(
            cards,
            [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]
                .map(|r| Card::new(r, Suit::Hearts))
        );
        assert_eq!(parse_cards("Ah Zz"), Err(CardError::Parse("Zz".to_string())));
    }
}
