use super::Variant;
use crate::cards::{Card, Rank};

const FULL_WINDOW: u8 = 0b1_1111;
const WHEEL_TOP: usize = 3;

/// Information about whether a hand contains a straight and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight with a circular sliding window over rank indices.
    ///
    /// Window `w` collects bit `i` from every card of rank index `w - i`
    /// (mod 13), so it fills up exactly when the five ranks ending at `w`
    /// are present. Ace sits at index 12, which makes TJQKA an ordinary
    /// window. Windows that wrap past the Ace (QKA23, KA234) never count;
    /// the wheel A2345 (window 3) counts only when the variant allows it.
    pub fn detect(cards: &[Card], variant: Variant) -> Self {
        let mut windows = [0u8; 13];
        let mut top: Option<usize> = None;

        for c in cards {
            let r = c.rank().index() as usize;
            for i in 0..5 {
                let w = (r + i) % 13;
                windows[w] |= 1 << i;
                if windows[w] == FULL_WINDOW && window_counts(w, variant) {
                    top = top.max(Some(w));
                }
            }
        }

        let top_rank = top.and_then(|w| Rank::from_index(w as u8));
        StraightInfo { is_straight: top_rank.is_some(), top_rank }
    }
}

fn window_counts(top: usize, variant: Variant) -> bool {
    top > WHEEL_TOP || (top == WHEEL_TOP && variant.wheel_is_straight())
}
