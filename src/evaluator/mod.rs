pub(crate) mod combinations;
mod describe;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
mod hash;
pub(crate) mod rank_groups;
mod score;
pub(crate) mod straight_info;
pub(crate) mod suit_info;
mod table;

pub use describe::describe;
pub use hash::{class_representatives, perfect_hash, FLUSH_OFFSET, TABLE_SIZE};
pub use score::{pack_score, HandValue, Score, ScoreMap};
pub use table::{FastEvaluator, LookupTable, TableError, HANDS};

use crate::cards::{format_cards, Card, Rank};
use crate::hand::HAND_SIZE;
use combinations::Combinations7Choose5;
use core::cmp::Ordering;
use log::debug;

/// Cards dealt in a seven-card hand.
pub const SEVEN_CARD_SIZE: usize = 7;

/// Ranking rules a hand is scored under.
///
/// Both variants share one category hierarchy and one score scale. They
/// differ in whether A-2-3-4-5 is a straight and in which end of the scale wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Standard high poker: the wheel is a 5-high straight, higher scores win.
    #[default]
    High,
    /// 2-7 lowball: Aces are always high, the wheel is not a straight, lower scores win.
    DeuceToSeven,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::High, Variant::DeuceToSeven];

    pub const fn wheel_is_straight(self) -> bool {
        matches!(self, Variant::High)
    }

    pub const fn higher_is_better(self) -> bool {
        matches!(self, Variant::High)
    }

    /// Order two scores by hand strength. `Greater` means `a` is the better hand.
    pub fn compare(self, a: Score, b: Score) -> Ordering {
        if self.higher_is_better() {
            a.cmp(&b)
        } else {
            b.cmp(&a)
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Variant::High => f.write_str("high"),
            Variant::DeuceToSeven => f.write_str("deuce-to-seven"),
        }
    }
}

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    /// Needs the same rank five times, so only duplicated cards produce it.
    FiveOfAKind = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::FiveOfAKind,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Category> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

/// Up to five tie-break ranks, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tiebreak {
    ranks: [Rank; HAND_SIZE],
    len: u8,
}

impl Tiebreak {
    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, i: usize) -> Option<Rank> {
        self.as_slice().get(i).copied()
    }
}

/// Collects at most five ranks; extra items are ignored.
impl FromIterator<Rank> for Tiebreak {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut tiebreak = Tiebreak { ranks: [Rank::Two; HAND_SIZE], len: 0 };
        for rank in iter.into_iter().take(HAND_SIZE) {
            tiebreak.ranks[tiebreak.len as usize] = rank;
            tiebreak.len += 1;
        }
        tiebreak
    }
}

/// Category plus the ranks that break ties within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub category: Category,
    pub tiebreak: Tiebreak,
}

impl Classification {
    /// Raw comparable ordinal under standard high ranking.
    pub fn value(&self) -> HandValue {
        HandValue::from_classification(self)
    }

    /// Dense packed score, see [`pack_score`].
    pub fn score(&self) -> Score {
        pack_score(self)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected 5 or 7 cards, got {0}")]
    InvalidSize(usize),
    #[error("unclassifiable hand: {}", format_cards(.0))]
    Unclassifiable(Vec<Card>),
    #[error("lookup table unavailable: {0}")]
    Table(#[from] TableError),
}

/// Classify five cards, or the best five of seven.
///
/// With `drop_unusable_kickers`, trips, full houses and quads keep only their
/// primary rank: with one deck two such hands can never share it, so the
/// remaining cards cannot decide anything.
///
/// Distinct cards are assumed, not checked; duplicated cards may classify as
/// [`Category::FiveOfAKind`] or [`EvalError::Unclassifiable`].
///
/// ```
/// use deuce_seven::cards::parse_cards;
/// use deuce_seven::evaluator::{classify, Category, Variant};
///
/// let wheel = parse_cards("Ad 2h 3c 4s 5h").unwrap();
/// let high = classify(&wheel, Variant::High, false).unwrap();
/// assert_eq!(high.category, Category::Straight);
/// let low = classify(&wheel, Variant::DeuceToSeven, false).unwrap();
/// assert_eq!(low.category, Category::HighCard);
/// ```
pub fn classify(
    cards: &[Card],
    variant: Variant,
    drop_unusable_kickers: bool,
) -> Result<Classification, EvalError> {
    match cards.len() {
        HAND_SIZE => classify_five(cards, variant, drop_unusable_kickers),
        SEVEN_CARD_SIZE => {
            let seven = seven_cards(cards)?;
            let (hand, _) = best_five_by(seven, variant, |hand| {
                classify_five(hand, variant, false).map(|c| pack_score(&c))
            })?;
            classify_five(&hand, variant, drop_unusable_kickers)
        }
        n => Err(EvalError::InvalidSize(n)),
    }
}

fn classify_five(
    cards: &[Card],
    variant: Variant,
    drop_unusable_kickers: bool,
) -> Result<Classification, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards, variant);

    // Check categories in priority order
    DETECTORS
        .iter()
        .find(|detector| detector.detect(&analysis))
        .map(|detector| detector.classify(&analysis, drop_unusable_kickers))
        .ok_or_else(|| EvalError::Unclassifiable(cards.to_vec()))
}

fn seven_cards(cards: &[Card]) -> Result<&[Card; SEVEN_CARD_SIZE], EvalError> {
    cards.try_into().map_err(|_| EvalError::InvalidSize(cards.len()))
}

/// Score a hand without the lookup table. Accepts 5 or 7 cards.
pub fn evaluate_slow(cards: &[Card], variant: Variant) -> Result<Score, EvalError> {
    classify(cards, variant, false).map(|c| pack_score(&c))
}

/// Score five cards with the shared lookup table, building it on first use.
///
/// The cards must be distinct. Repeated cards are not detected and get the
/// score of whatever class shares their bucket; use [`evaluate_slow`] for them.
///
/// If the table could not be built, the failure has already been logged and
/// this falls back to [`evaluate_slow`], which yields the same score.
///
/// ```
/// use deuce_seven::cards::parse_cards;
/// use deuce_seven::evaluator::{evaluate_fast, evaluate_slow, Variant};
///
/// let cards = parse_cards("D2 H3 C4 S5 H7").unwrap();
/// let hand: [_; 5] = cards.as_slice().try_into().unwrap();
/// let fast = evaluate_fast(&hand, Variant::DeuceToSeven).unwrap();
/// assert_eq!(fast, evaluate_slow(&cards, Variant::DeuceToSeven).unwrap());
/// ```
pub fn evaluate_fast(cards: &[Card; HAND_SIZE], variant: Variant) -> Result<Score, EvalError> {
    match LookupTable::shared(variant) {
        Ok(table) => Ok(table.lookup(cards)),
        Err(err) => {
            debug!("{variant} table unavailable ({err}), evaluating slowly");
            evaluate_slow(cards, variant)
        }
    }
}

/// Score five cards with the table, or seven cards by their best five.
pub fn evaluate(cards: &[Card], variant: Variant) -> Result<Score, EvalError> {
    match cards.len() {
        HAND_SIZE => {
            let hand: &[Card; HAND_SIZE] =
                cards.try_into().map_err(|_| EvalError::InvalidSize(cards.len()))?;
            evaluate_fast(hand, variant)
        }
        SEVEN_CARD_SIZE => evaluate_seven(seven_cards(cards)?, variant),
        n => Err(EvalError::InvalidSize(n)),
    }
}

/// Order two scores under `variant`. `Greater` means `a` is the better hand.
///
/// ```
/// use deuce_seven::cards::parse_cards;
/// use deuce_seven::evaluator::{compare, evaluate_slow, Variant};
/// use std::cmp::Ordering;
///
/// let seven_low = evaluate_slow(&parse_cards("D2 H3 C4 S5 H7").unwrap(), Variant::DeuceToSeven).unwrap();
/// let ace_high = evaluate_slow(&parse_cards("D2 H3 C4 S5 HA").unwrap(), Variant::DeuceToSeven).unwrap();
/// assert_eq!(compare(seven_low, ace_high, Variant::DeuceToSeven), Ordering::Greater);
/// assert_eq!(compare(seven_low, ace_high, Variant::High), Ordering::Less);
/// ```
pub fn compare(a: Score, b: Score, variant: Variant) -> Ordering {
    variant.compare(a, b)
}

/// Evaluate two hands of 5 or 7 cards and order them under `variant`.
pub fn compare_hands(a: &[Card], b: &[Card], variant: Variant) -> Result<Ordering, EvalError> {
    let sa = evaluate(a, variant)?;
    let sb = evaluate(b, variant)?;
    Ok(compare(sa, sb, variant))
}

/// Best score over the 21 five-card subsets of seven cards.
pub fn evaluate_seven(cards: &[Card; SEVEN_CARD_SIZE], variant: Variant) -> Result<Score, EvalError> {
    best_five_by(cards, variant, |hand| evaluate_fast(hand, variant)).map(|(_, score)| score)
}

/// The winning five of seven cards and their classification.
pub fn best_five(
    cards: &[Card; SEVEN_CARD_SIZE],
    variant: Variant,
) -> Result<([Card; HAND_SIZE], Classification), EvalError> {
    let (hand, _) = best_five_by(cards, variant, |hand| evaluate_fast(hand, variant))?;
    let classification = classify_five(&hand, variant, false)?;
    Ok((hand, classification))
}

fn best_five_by<F>(
    cards: &[Card; SEVEN_CARD_SIZE],
    variant: Variant,
    score: F,
) -> Result<([Card; HAND_SIZE], Score), EvalError>
where
    F: Fn(&[Card; HAND_SIZE]) -> Result<Score, EvalError>,
{
    let pick = |indices: [usize; HAND_SIZE]| indices.map(|i| cards[i]);

    let mut best_hand = pick([0, 1, 2, 3, 4]);
    let mut best = score(&best_hand)?;

    // The first combination is the one scored above
    for indices in Combinations7Choose5::new().skip(1) {
        let hand = pick(indices);
        let s = score(&hand)?;
        if variant.compare(s, best) == Ordering::Greater {
            best = s;
            best_hand = hand;
        }
    }

    Ok((best_hand, best))
}
