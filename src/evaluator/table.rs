use super::combinations::Combinations52Choose5;
use super::{classify, pack_score, perfect_hash, Score, Variant, TABLE_SIZE};
use crate::cards::{format_cards, Card};
use crate::deck::Deck;
use crate::hand::{canonical_order, HAND_SIZE};
use core::cmp::Ordering;
use log::{error, info};
use std::sync::OnceLock;
use std::time::Instant;

/// Number of distinct five-card hands in a 52-card deck: C(52, 5).
pub const HANDS: usize = 2_598_960;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("failed to classify {hand}: {reason}")]
    Classify { hand: String, reason: String },
    #[error("bucket {bucket} holds score {existing}, {hand} needs {incoming}")]
    Collision { bucket: usize, existing: Score, incoming: Score, hand: String },
    #[error("bucket {0} was never filled")]
    Unfilled(usize),
    #[error("enumerated {got} hands, expected {expected}")]
    HandCount { expected: usize, got: usize },
    #[error("bucket {bucket} is outside the table")]
    OutOfRange { bucket: usize },
}

/// Precomputed score for every hash bucket under one variant.
///
/// Immutable once built. Use [`LookupTable::shared`] for the process-wide copy.
#[derive(Debug)]
pub struct LookupTable {
    variant: Variant,
    scores: Box<[Score]>,
}

impl LookupTable {
    /// Classify all C(52,5) hands and store each score in its bucket.
    ///
    /// Fails if two hands with different scores share a bucket, if any bucket
    /// stays empty, or if the enumeration does not visit exactly [`HANDS`] hands.
    pub fn build(variant: Variant) -> Result<Self, TableError> {
        let started = Instant::now();
        info!("building {variant} lookup table");

        let deck = Deck::standard();
        let cards = deck.as_slice();
        let mut slots: Vec<Option<Score>> = vec![None; TABLE_SIZE];
        let mut hands = 0usize;

        for indices in Combinations52Choose5::new() {
            let mut hand: [Card; HAND_SIZE] = indices.map(|i| cards[i]);
            canonical_order(&mut hand);

            let classification = classify(&hand, variant, false).map_err(|e| {
                TableError::Classify { hand: format_cards(&hand), reason: e.to_string() }
            })?;
            let score = pack_score(&classification);
            let bucket = perfect_hash(&hand);

            let slot = slots.get_mut(bucket).ok_or(TableError::OutOfRange { bucket })?;
            match *slot {
                Some(existing) if existing != score => {
                    return Err(TableError::Collision {
                        bucket,
                        existing,
                        incoming: score,
                        hand: format_cards(&hand),
                    });
                }
                _ => *slot = Some(score),
            }
            hands += 1;
        }

        if hands != HANDS {
            return Err(TableError::HandCount { expected: HANDS, got: hands });
        }

        let scores = slots
            .into_iter()
            .enumerate()
            .map(|(bucket, slot)| slot.ok_or(TableError::Unfilled(bucket)))
            .collect::<Result<Vec<_>, _>>()?
            .into_boxed_slice();

        info!(
            "built {variant} lookup table: {} buckets from {hands} hands in {:?}",
            scores.len(),
            started.elapsed()
        );
        Ok(Self { variant, scores })
    }

    /// Process-wide table for `variant`, built once.
    ///
    /// Concurrent first callers block until the single build finishes. A
    /// failed build is logged once and its error returned to every caller.
    pub fn shared(variant: Variant) -> Result<&'static LookupTable, TableError> {
        static HIGH: OnceLock<Result<LookupTable, TableError>> = OnceLock::new();
        static DEUCE_TO_SEVEN: OnceLock<Result<LookupTable, TableError>> = OnceLock::new();

        let cell = match variant {
            Variant::High => &HIGH,
            Variant::DeuceToSeven => &DEUCE_TO_SEVEN,
        };
        cell.get_or_init(|| {
            LookupTable::build(variant).map_err(|err| {
                error!("{variant} lookup table construction failed: {err}");
                err
            })
        })
        .as_ref()
        .map_err(Clone::clone)
    }

    /// Score five distinct cards in any order.
    pub fn lookup(&self, cards: &[Card; HAND_SIZE]) -> Score {
        self.scores[perfect_hash(cards)]
    }

    pub fn get(&self, bucket: usize) -> Option<Score> {
        self.scores.get(bucket).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }
}

/// Table-backed evaluator. Evaluation never fails once a table exists.
#[derive(Debug, Clone, Copy)]
pub struct FastEvaluator<'t> {
    table: &'t LookupTable,
}

impl<'t> FastEvaluator<'t> {
    pub fn new(table: &'t LookupTable) -> Self {
        Self { table }
    }

    pub fn variant(&self) -> Variant {
        self.table.variant()
    }

    pub fn evaluate(&self, cards: &[Card; HAND_SIZE]) -> Score {
        self.table.lookup(cards)
    }

    /// `Greater` means `a` is the better hand.
    pub fn compare(&self, a: &[Card; HAND_SIZE], b: &[Card; HAND_SIZE]) -> Ordering {
        self.variant().compare(self.evaluate(a), self.evaluate(b))
    }
}

impl FastEvaluator<'static> {
    pub fn shared(variant: Variant) -> Result<Self, TableError> {
        LookupTable::shared(variant).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::evaluate_slow;

    fn hand(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn shared_tables_are_complete() {
        for variant in Variant::ALL {
            let table = LookupTable::shared(variant).unwrap();
            assert_eq!(table.variant(), variant);
            assert_eq!(table.len(), TABLE_SIZE);
            assert_eq!(table.get(TABLE_SIZE), None);
        }
    }

    #[test]
    fn shared_is_memoized() {
        let a = LookupTable::shared(Variant::High).unwrap();
        let b = LookupTable::shared(Variant::High).unwrap();
        assert!(std::ptr::eq(a, b));
        let low = LookupTable::shared(Variant::DeuceToSeven).unwrap();
        assert!(!std::ptr::eq(a, low));
    }

    #[test]
    fn lookup_matches_slow_path() {
        for s in ["D2 H3 C4 S5 H7", "HA CA D3 C4 H5", "H2 H3 H4 H5 HA", "As Ks Qs Js Ts"] {
            for variant in Variant::ALL {
                let table = LookupTable::shared(variant).unwrap();
                let cards = hand(s);
                assert_eq!(table.lookup(&cards), evaluate_slow(&cards, variant).unwrap(), "{s}");
            }
        }
    }

    #[test]
    fn lookup_ignores_card_order() {
        let table = LookupTable::shared(Variant::DeuceToSeven).unwrap();
        assert_eq!(table.lookup(&hand("7h 5d 4c 3s 2h")), table.lookup(&hand("2h 3s 4c 5d 7h")));
    }

    #[test]
    fn fast_evaluator_compares_by_variant() {
        let high = FastEvaluator::shared(Variant::High).unwrap();
        let low = FastEvaluator::shared(Variant::DeuceToSeven).unwrap();
        let wheel = hand("Ad 2h 3c 4s 5h");
        let pair = hand("Kd Kh 3c 4s 5h");
        assert_eq!(high.compare(&wheel, &pair), Ordering::Greater);
        assert_eq!(low.compare(&wheel, &pair), Ordering::Greater);
        assert_eq!(low.compare(&pair, &wheel), Ordering::Less);
        assert_eq!(low.compare(&pair, &pair), Ordering::Equal);
    }

    #[test]
    fn errors_describe_the_failure() {
        let err = TableError::HandCount { expected: HANDS, got: 3 };
        assert_eq!(err.to_string(), "enumerated 3 hands, expected 2598960");
        assert_eq!(TableError::Unfilled(7).to_string(), "bucket 7 was never filled");
    }
}
