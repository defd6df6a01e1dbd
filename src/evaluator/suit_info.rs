use crate::cards::Card;

/// Information about whether all cards share the same suit (flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
}

impl SuitInfo {
    /// Detect if every card has the same suit. An empty slice is not a flush.
    pub fn detect(cards: &[Card]) -> Self {
        let Some(first) = cards.first() else {
            return SuitInfo { is_flush: false };
        };
        let first_suit = first.suit();
        SuitInfo { is_flush: cards.iter().all(|c| c.suit() == first_suit) }
    }
}
