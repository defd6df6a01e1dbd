use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use super::{Category, Classification, Tiebreak, Variant};
use crate::cards::Card;

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone, Copy)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    /// Analyze a hand under the straight rules of `variant`. Card order does not matter.
    pub fn new(cards: &[Card], variant: Variant) -> Self {
        Self {
            rank_groups: RankGroups::from_cards(cards),
            suit_info: SuitInfo::detect(cards),
            straight_info: StraightInfo::detect(cards, variant),
        }
    }

    pub fn is_flush(&self) -> bool {
        self.suit_info.is_flush
    }

    pub fn is_straight(&self) -> bool {
        self.straight_info.is_straight
    }

    pub fn build_classification(&self, category: Category, tiebreak: Tiebreak) -> Classification {
        Classification { category, tiebreak }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};

    fn analyze(s: &str, variant: Variant) -> HandAnalysis {
        HandAnalysis::new(&parse_cards(s).unwrap(), variant)
    }

    #[test]
    fn test_royal_flush_analysis() {
        let analysis = analyze("As Ks Qs Js Ts", Variant::High);
        assert!(analysis.is_flush());
        assert!(analysis.is_straight());
        assert_eq!(analysis.straight_info.top_rank, Some(Rank::Ace));
        assert_eq!(analysis.rank_groups.dupes(1), 5);
    }

    #[test]
    fn test_full_house_analysis() {
        let analysis = analyze("Ks Kh Kd Qc Qs", Variant::DeuceToSeven);
        assert!(analysis.rank_groups.has_full_house());
        assert_eq!(analysis.rank_groups.descending(3).next(), Some(Rank::King));
        assert!(!analysis.is_flush());
        assert!(!analysis.is_straight());
    }

    #[test]
    fn test_wheel_analysis_depends_on_variant() {
        let high = analyze("Ad 2d 3d 4d 5d", Variant::High);
        assert!(high.is_straight());
        assert!(high.is_flush());

        let low = analyze("Ad 2d 3d 4d 5d", Variant::DeuceToSeven);
        assert!(!low.is_straight());
        assert!(low.is_flush());
        assert_eq!(low.rank_groups.descending(1).next(), Some(Rank::Ace));
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = analyze("3s Ah 5d Kc 9s", Variant::High);
        let b = analyze("Kc 9s 3s 5d Ah", Variant::High);
        assert_eq!(a.rank_groups, b.rank_groups);
        assert_eq!(a.suit_info, b.suit_info);
        assert_eq!(a.straight_info, b.straight_info);
    }
}
