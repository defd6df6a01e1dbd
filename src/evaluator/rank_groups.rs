use crate::cards::{Card, Rank};

/// Ranks of a hand bucketed by multiplicity.
///
/// `dupes[k]` is how many distinct ranks occur exactly `k` times and
/// `bits[k - 1]` is the 13-bit mask of those ranks (bit 0 = Two, bit 12 = Ace).
/// Buckets are disjoint: a paired rank is not also listed as a single.
///
/// Example: AAAKQ has `dupes[3] == 1`, `dupes[1] == 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroups {
    dupes: [u8; 6],
    bits: [u16; 5],
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 13];
        let mut dupes = [0u8; 6];
        let mut bits = [0u16; 5];

        for c in cards {
            let r = c.rank().index() as usize;
            let seen = counts[r] as usize;
            // Five is the most copies a bucket tracks.
            if seen >= bits.len() {
                continue;
            }
            bits[seen] |= 1 << r;
            counts[r] += 1;
            dupes[seen + 1] += 1;
            if seen > 0 {
                dupes[seen] -= 1;
            }
        }

        // bits[k] holds every rank seen more than k times; keep exactly k + 1.
        for k in 0..bits.len() - 1 {
            bits[k] &= !bits[k + 1];
        }

        Self { dupes, bits }
    }

    /// Number of distinct ranks appearing exactly `count` times.
    pub fn dupes(&self, count: usize) -> u8 {
        self.dupes.get(count).copied().unwrap_or(0)
    }

    /// Mask of ranks appearing exactly `count` times.
    pub fn mask(&self, count: usize) -> u16 {
        match count {
            1..=5 => self.bits[count - 1],
            _ => 0,
        }
    }

    /// Ranks appearing exactly `count` times, highest first.
    pub fn descending(&self, count: usize) -> TopRanks {
        TopRanks(self.mask(count))
    }

    /// Returns true if the hand has exactly one trips and one pair.
    pub fn has_full_house(&self) -> bool {
        self.dupes(3) == 1 && self.dupes(2) == 1
    }
}

/// Pops the highest set bit of a rank mask on each step.
#[derive(Debug, Clone, Copy)]
pub struct TopRanks(u16);

impl Iterator for TopRanks {
    type Item = Rank;

    fn next(&mut self) -> Option<Rank> {
        if self.0 == 0 {
            return None;
        }
        let top = 15 - self.0.leading_zeros() as u8;
        self.0 &= !(1 << top);
        Rank::from_index(top)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for TopRanks {}
