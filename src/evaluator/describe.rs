use super::{classify, Category, Classification, EvalError, Variant};
use crate::cards::Card;
use std::fmt;

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
            Category::FiveOfAKind => "Five of a kind",
        };
        f.write_str(name)
    }
}

/// Short rank pattern, e.g. `AA-K-7-5` or `9 straight`.
///
/// Kickers dropped during classification print as `x`, `y`.
impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.tiebreak;
        let r = |i: usize| t.get(i).map_or('?', |rank| rank.to_char());
        let dropped = t.len() == 1;

        match self.category {
            Category::HighCard => {
                let ranks: Vec<String> = t.as_slice().iter().map(|r| r.to_string()).collect();
                f.write_str(&ranks.join("-"))
            }
            Category::Pair => write!(f, "{0}{0}-{1}-{2}-{3}", r(0), r(1), r(2), r(3)),
            Category::TwoPair => write!(f, "{0}{0}-{1}{1}-{2}", r(0), r(1), r(2)),
            Category::ThreeOfAKind if dropped => write!(f, "{0}{0}{0}-x-y", r(0)),
            Category::ThreeOfAKind => write!(f, "{0}{0}{0}-{1}-{2}", r(0), r(1), r(2)),
            Category::Straight => write!(f, "{} straight", r(0)),
            Category::Flush => {
                for rank in t.as_slice() {
                    write!(f, "{rank}")?;
                }
                f.write_str(" flush")
            }
            Category::FullHouse if dropped => write!(f, "{0}{0}{0}-xx", r(0)),
            Category::FullHouse => write!(f, "{0}{0}{0}-{1}{1}", r(0), r(1)),
            Category::FourOfAKind if dropped => write!(f, "{0}{0}{0}{0}-x", r(0)),
            Category::FourOfAKind => write!(f, "{0}{0}{0}{0}-{1}", r(0), r(1)),
            Category::StraightFlush => write!(f, "{} straight flush", r(0)),
            Category::FiveOfAKind => write!(f, "{0}{0}{0}{0}{0}", r(0)),
        }
    }
}

/// Describe the best five cards of a 5- or 7-card hand.
///
/// ```
/// use deuce_seven::cards::parse_cards;
/// use deuce_seven::evaluator::{describe, Variant};
///
/// let cards = parse_cards("Ad 2h 3c 4s 5h").unwrap();
/// assert_eq!(describe(&cards, Variant::High).unwrap(), "5 straight");
/// assert_eq!(describe(&cards, Variant::DeuceToSeven).unwrap(), "A-5-4-3-2");
/// ```
pub fn describe(cards: &[Card], variant: Variant) -> Result<String, EvalError> {
    classify(cards, variant, false).map(|c| c.to_string())
}
