use super::{class_representatives, classify, Category, Classification, EvalError, Tiebreak, Variant};
use crate::cards::Rank;
use crate::hand::HAND_SIZE;
use log::debug;
use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

/// Raw comparable ordinal of a classification under high ranking.
///
/// Layout (most significant first):
/// `[ category (4 bits) | r0 (4) | r1 (4) | r2 (4) | r3 (4) | r4 (4) ]`,
/// where each rank is its face value 2..14 and 0 marks an absent rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

const CATEGORY_SHIFT: u32 = 20;
const RANK_BITS: u32 = 4;
const RANK_MASK: u32 = (1 << RANK_BITS) - 1;

impl HandValue {
    pub fn from_classification(classification: &Classification) -> Self {
        let mut v = (classification.category.ordinal() as u32) << CATEGORY_SHIFT;
        for (i, r) in classification.tiebreak.as_slice().iter().enumerate() {
            let offset = CATEGORY_SHIFT - RANK_BITS * (i as u32 + 1);
            v |= (r.value() as u32) << offset;
        }
        HandValue(v)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub fn category(self) -> Option<Category> {
        Category::from_ordinal((self.0 >> CATEGORY_SHIFT) as u8)
    }

    /// Decode back into a classification, if the value is well formed.
    pub fn classification(self) -> Option<Classification> {
        let category = self.category()?;
        let tiebreak: Tiebreak = (0..HAND_SIZE as u32)
            .map(|i| (self.0 >> (CATEGORY_SHIFT - RANK_BITS * (i + 1))) & RANK_MASK)
            .take_while(|&v| v != 0)
            .map(|v| (v as u8).checked_sub(2).and_then(Rank::from_index))
            .collect::<Option<Vec<Rank>>>()?
            .into_iter()
            .collect();
        Some(Classification { category, tiebreak })
    }
}

/// Dense packed hand score.
///
/// Scores run from 1 (75432 offsuit) upward in standard high order. Under
/// [`Variant::High`] a higher score wins, under [`Variant::DeuceToSeven`] a
/// lower one does. Zero is never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i16);

impl Score {
    pub const fn get(self) -> i16 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every hand value reachable from distinct cards under either variant, sorted.
///
/// A score is one plus the number of map values strictly below a hand value.
/// High allows 5-high straights, 2-7 allows A5432 as a high card and flush,
/// so the union holds 7464 values.
#[derive(Debug)]
pub struct ScoreMap {
    values: Vec<HandValue>,
}

impl ScoreMap {
    pub fn build() -> Result<Self, EvalError> {
        let started = Instant::now();
        let hands = class_representatives();
        let mut values = Vec::with_capacity(hands.len() * Variant::ALL.len());

        for variant in Variant::ALL {
            for hand in &hands {
                values.push(classify(hand, variant, false)?.value());
            }
        }
        values.sort_unstable();
        values.dedup();

        debug!("score map: {} hand values in {:?}", values.len(), started.elapsed());
        Ok(Self { values })
    }

    /// Process-wide map, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the map cannot be built. That needs a distinct-card hand the
    /// classifier rejects, which no input can cause.
    pub fn shared() -> &'static ScoreMap {
        static MAP: OnceLock<ScoreMap> = OnceLock::new();
        MAP.get_or_init(|| match ScoreMap::build() {
            Ok(map) => map,
            Err(err) => panic!("score map construction failed: {err}"),
        })
    }

    pub fn score(&self, value: HandValue) -> Score {
        let below = self.values.partition_point(|v| *v < value);
        // The map holds fewer than i16::MAX values.
        Score(below as i16 + 1)
    }

    /// The hand value a score was issued for.
    pub fn value_of(&self, score: Score) -> Option<HandValue> {
        let index = usize::try_from(score.0).ok()?.checked_sub(1)?;
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Pack a classification into its dense score.
///
/// Hands with dropped kickers share the score of the weakest full hand with
/// the same primary rank. Five of a kind scores above every straight flush.
pub fn pack_score(classification: &Classification) -> Score {
    ScoreMap::shared().score(classification.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn classification(s: &str, variant: Variant, drop: bool) -> Classification {
        classify(&parse_cards(s).unwrap(), variant, drop).unwrap()
    }

    #[test]
    fn map_holds_both_variants() {
        let map = ScoreMap::shared();
        assert_eq!(map.len(), 7464);
        assert!(!map.is_empty());
    }

    #[test]
    fn scores_span_the_map() {
        let map = ScoreMap::shared();
        let worst = classification("7c 5d 4h 3s 2c", Variant::High, false);
        assert_eq!(pack_score(&worst).get(), 1);
        let royal = classification("As Ks Qs Js Ts", Variant::High, false);
        assert_eq!(pack_score(&royal).get() as usize, map.len());
    }

    #[test]
    fn value_layout() {
        let c = classification("Ah Ad Ts 9c 2d", Variant::High, false);
        assert_eq!(c.value().raw(), 0x1_E_A_9_2_0);
        assert_eq!(c.value().category(), Some(Category::Pair));
    }

    #[test]
    fn value_of_round_trips() {
        let map = ScoreMap::shared();
        for s in ["Ah Ad Ts 9c 2d", "9s 8h 7d 6c 5s", "Ad 2d 3d 4d 5d"] {
            for variant in Variant::ALL {
                let c = classification(s, variant, false);
                let score = pack_score(&c);
                let value = map.value_of(score).unwrap();
                assert_eq!(value, c.value());
                assert_eq!(value.classification(), Some(c));
            }
        }
        assert_eq!(map.value_of(Score(0)), None);
        assert_eq!(map.value_of(Score(7465)), None);
    }

    #[test]
    fn wheel_values_exist_once_per_variant() {
        let high = classification("Ad 2h 3c 4s 5h", Variant::High, false);
        let low = classification("Ad 2h 3c 4s 5h", Variant::DeuceToSeven, false);
        assert_ne!(pack_score(&high), pack_score(&low));
        let six_high = classification("6d 2h 3c 4s 5h", Variant::High, false);
        assert!(pack_score(&high) < pack_score(&six_high));
    }

    #[test]
    fn dropped_kickers_land_on_weakest_full_hand() {
        let dropped = classification("Ah Ac Ad Kh Qh", Variant::High, true);
        let weakest = classification("Ah Ac Ad 3h 2h", Variant::High, false);
        let below = classification("Kh Kc Kd Ah Qh", Variant::High, false);
        assert_eq!(pack_score(&dropped), pack_score(&weakest));
        assert!(pack_score(&dropped) > pack_score(&below));

        let boat = classification("7h 7c 7d 2h 2s", Variant::High, true);
        let weakest_boat = classification("7h 7c 7d 2h 2s", Variant::High, false);
        assert_eq!(pack_score(&boat), pack_score(&weakest_boat));
    }

    #[test]
    fn malformed_values_do_not_decode() {
        assert_eq!(HandValue(0xF_0_0_0_0_0).classification(), None);
        assert_eq!(HandValue(0x0_1_0_0_0_0).classification(), None);
    }
}
