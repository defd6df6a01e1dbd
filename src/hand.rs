use crate::cards::{parse_compact, Card};
use std::fmt;
use std::str::FromStr;

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    #[error("expected exactly {expected} cards, got {got}")]
    CardCount { expected: usize, got: usize },
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five distinct cards.
///
/// ```
/// use deuce_seven::hand::Hand;
///
/// let hand: Hand = "D2 H3 C4 S5 H7".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert!("2c 2c 3d 4h 5s".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        ensure_distinct(&cards)?;
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = slice
            .try_into()
            .map_err(|_| HandError::CardCount { expected: HAND_SIZE, got: slice.len() })?;
        Self::try_new(cards)
    }

    /// The cards in the order they were given.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    /// The cards sorted the way lookup tables index them.
    pub fn canonical(&self) -> [Card; HAND_SIZE] {
        let mut cards = self.0;
        canonical_order(&mut cards);
        cards
    }
}

impl AsRef<[Card]> for Hand {
    fn as_ref(&self) -> &[Card] {
        &self.0
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_compact(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Sort cards by rank descending (Ace high), then suit descending.
pub fn canonical_order(cards: &mut [Card]) {
    cards.sort_unstable_by(|a, b| b.cmp(a));
}

/// Reject any card that appears more than once.
pub fn ensure_distinct(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = 0u64;
    for c in cards {
        let bit = 1u64 << c.index();
        if seen & bit != 0 {
            return Err(HandError::DuplicateCard(*c));
        }
        seen |= bit;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn hand_cards_must_be_distinct() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let k = Card::new(Rank::King, Suit::Spades);
        let cards = [a, k, Card::new(Rank::Two, Suit::Clubs), Card::new(Rank::Three, Suit::Clubs), a];
        assert_eq!(Hand::try_new(cards), Err(HandError::DuplicateCard(a)));
    }

    #[test]
    fn from_slice_checks_count() {
        let cards = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Spades)];
        assert_eq!(
            Hand::from_slice(&cards),
            Err(HandError::CardCount { expected: 5, got: 2 })
        );
    }

    #[test]
    fn canonical_is_rank_then_suit_descending() {
        let hand: Hand = "D2 HA C4 SA H5".parse().unwrap();
        let sorted = hand.canonical();
        assert_eq!(sorted[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(sorted[1], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(sorted[2], Card::new(Rank::Five, Suit::Hearts));
        assert_eq!(sorted[3], Card::new(Rank::Four, Suit::Clubs));
        assert_eq!(sorted[4], Card::new(Rank::Two, Suit::Diamonds));
    }

    #[test]
    fn parsing_interfaces_work() {
        let spaced: Hand = "As Kd 7c 5h 2s".parse().unwrap();
        let compact: Hand = "AsKd7c5h2s".parse().unwrap();
        assert_eq!(spaced, compact);
        assert_eq!(spaced.to_string(), "As Kd 7c 5h 2s");
        assert!(matches!("As Kd".parse::<Hand>(), Err(HandError::CardCount { got: 2, .. })));
        assert!(matches!("As Kd Zz 5h 2s".parse::<Hand>(), Err(HandError::CardParse(_))));
    }
}
