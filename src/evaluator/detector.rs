use super::hand_analysis::HandAnalysis;
use super::{Category, Classification, Tiebreak};

/// Strategy pattern: each category detector knows how to detect its
/// category and extract the tie-break ranks, most significant first.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    /// `drop_unusable_kickers` omits kickers that cannot differ between two
    /// five-card hands dealt from one deck with the same primary rank.
    fn tiebreak(&self, analysis: &HandAnalysis, drop_unusable_kickers: bool) -> Tiebreak;

    fn classify(&self, analysis: &HandAnalysis, drop_unusable_kickers: bool) -> Classification {
        analysis.build_classification(self.category(), self.tiebreak(analysis, drop_unusable_kickers))
    }
}

// ============================================================================
// Detector Implementations (in priority order: weakest to strongest)
// ============================================================================

/// High Card: five unpaired ranks, no straight, no flush
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        !analysis.is_flush() && !analysis.is_straight() && analysis.rank_groups.dupes(1) == 5
    }

    fn tiebreak(&self, analysis: &HandAnalysis, _: bool) -> Tiebreak {
        analysis.rank_groups.descending(1).collect()
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        let g = &analysis.rank_groups;
        g.dupes(2) == 1 && g.dupes(3) == 0
    }

    fn tiebreak(&self, analysis: &HandAnalysis, _: bool) -> Tiebreak {
        let g = &analysis.rank_groups;
        g.descending(2).chain(g.descending(1)).collect()
    }
}

/// Two Pair: Two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.dupes(2) == 2
    }

    fn tiebreak(&self, analysis: &HandAnalysis, _: bool) -> Tiebreak {
        let g = &analysis.rank_groups;
        g.descending(2).chain(g.descending(1)).collect()
    }
}

/// Three of a Kind: Three cards of the same rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        let g = &analysis.rank_groups;
        g.dupes(3) == 1 && g.dupes(2) == 0
    }

    fn tiebreak(&self, analysis: &HandAnalysis, drop_unusable_kickers: bool) -> Tiebreak {
        let g = &analysis.rank_groups;
        if drop_unusable_kickers {
            return g.descending(3).collect();
        }
        g.descending(3).chain(g.descending(1)).collect()
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight() && !analysis.is_flush()
    }

    fn tiebreak(&self, analysis: &HandAnalysis, _: bool) -> Tiebreak {
        analysis.straight_info.top_rank.into_iter().collect()
    }
}

/// Flush: All five cards of the same suit, not consecutive
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && !analysis.is_straight()
    }

    fn tiebreak(&self, analysis: &HandAnalysis, _: bool) -> Tiebreak {
        analysis.rank_groups.descending(1).collect()
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn tiebreak(&self, analysis: &HandAnalysis, drop_unusable_kickers: bool) -> Tiebreak {
        let g = &analysis.rank_groups;
        if drop_unusable_kickers {
            return g.descending(3).collect();
        }
        g.descending(3).chain(g.descending(2)).collect()
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.dupes(4) == 1
    }

    fn tiebreak(&self, analysis: &HandAnalysis, drop_unusable_kickers: bool) -> Tiebreak {
        let g = &analysis.rank_groups;
        if drop_unusable_kickers {
            return g.descending(4).collect();
        }
        g.descending(4).chain(g.descending(1)).collect()
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight() && analysis.is_flush()
    }

    fn tiebreak(&self, analysis: &HandAnalysis, _: bool) -> Tiebreak {
        analysis.straight_info.top_rank.into_iter().collect()
    }
}

/// Five of a Kind: only reachable when the same card is passed twice
pub struct FiveOfAKindDetector;

impl CategoryDetector for FiveOfAKindDetector {
    fn category(&self) -> Category {
        Category::FiveOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.dupes(5) == 1
    }

    fn tiebreak(&self, analysis: &HandAnalysis, _: bool) -> Tiebreak {
        analysis.rank_groups.descending(5).collect()
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &HighCardDetector,
    &OnePairDetector,
    &TwoPairDetector,
    &ThreeOfAKindDetector,
    &StraightDetector,
    &FlushDetector,
    &FullHouseDetector,
    &FourOfAKindDetector,
    &StraightFlushDetector,
    &FiveOfAKindDetector,
];
