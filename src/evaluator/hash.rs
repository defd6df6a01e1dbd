//! Perfect hash from five cards to a hand-strength class.
//!
//! A class is a multiset of five ranks plus whether the hand is a flush.
//! Two hands in one class classify identically under every variant, so the
//! class index is a collision-free bucket for the lookup table.
//!
//! Ranks are walked in ascending order `a0 <= .. <= a4` (rank index, Ace = 12):
//!
//! - non-flush: `sum C(a_i + i, i + 1) - a4`. The sum is the colex index of
//!   the multiset; subtracting `a4` skips the five-of-a-kind multisets that
//!   precede it, leaving `0..6175`.
//! - flush: `6175 + sum C(a_i, i + 1)` over five distinct ranks, `6175..7462`.

use crate::cards::{Card, Rank, Suit};
use crate::hand::{canonical_order, HAND_SIZE};

const RANKS: usize = 13;

/// Rank multisets of size five with no rank five times: C(17, 5) - 13.
const NON_FLUSH_CLASSES: usize = 6175;

/// Sets of five distinct ranks: C(13, 5).
const FLUSH_CLASSES: usize = 1287;

/// First bucket used by flushes and straight flushes.
pub const FLUSH_OFFSET: usize = NON_FLUSH_CLASSES;

/// Number of buckets in a lookup table.
pub const TABLE_SIZE: usize = NON_FLUSH_CLASSES + FLUSH_CLASSES;

// C(n, k) for n < 17, k < 6
const CHOOSE: [[usize; HAND_SIZE + 1]; RANKS + HAND_SIZE - 1] = choose_table();

const fn choose_table() -> [[usize; HAND_SIZE + 1]; RANKS + HAND_SIZE - 1] {
    let mut table = [[0; HAND_SIZE + 1]; RANKS + HAND_SIZE - 1];
    let mut n = 0;
    while n < table.len() {
        table[n][0] = 1;
        let mut k = 1;
        while k <= HAND_SIZE && n > 0 {
            table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
            k += 1;
        }
        n += 1;
    }
    table
}

/// Bucket of a five-card hand in `0..TABLE_SIZE`. Card order does not matter.
///
/// The bucket is only meaningful for five distinct cards. Repeated cards still
/// index inside the table but share a bucket with an unrelated class: five
/// Aces land on the 6-5-4-3-2 flush bucket.
///
/// ```
/// use deuce_seven::cards::parse_cards;
/// use deuce_seven::evaluator::{perfect_hash, TABLE_SIZE};
///
/// let a: [_; 5] = parse_cards("As Kd 7c 5h 2s").unwrap().try_into().unwrap();
/// let b: [_; 5] = parse_cards("2c 5d 7h Kc Ad").unwrap().try_into().unwrap();
/// assert_eq!(perfect_hash(&a), perfect_hash(&b));
/// assert!(perfect_hash(&a) < TABLE_SIZE);
/// ```
pub fn perfect_hash(cards: &[Card; HAND_SIZE]) -> usize {
    let suit = cards[0].suit();
    let same_suit = cards.iter().all(|c| c.suit() == suit);

    let mut ranks = cards.map(|c| c.rank().index() as usize);
    ranks.sort_unstable();
    let distinct = ranks.windows(2).all(|w| w[0] < w[1]);

    if same_suit && distinct {
        let colex: usize = ranks.iter().enumerate().map(|(i, &a)| CHOOSE[a][i + 1]).sum();
        FLUSH_OFFSET + colex
    } else {
        let colex: usize = ranks.iter().enumerate().map(|(i, &a)| CHOOSE[a + i][i + 1]).sum();
        colex - ranks[HAND_SIZE - 1]
    }
}

/// One distinct-card hand per hash bucket, in canonical order.
///
/// Non-flush classes deal suits round-robin over the sorted ranks, which never
/// repeats a card and never makes a flush. Flush classes are all clubs.
pub fn class_representatives() -> Vec<[Card; HAND_SIZE]> {
    let mut hands = Vec::with_capacity(TABLE_SIZE);

    for_each_multiset(&mut |ranks| {
        if ranks[0] == ranks[HAND_SIZE - 1] {
            return;
        }
        hands.push(deal(ranks, |i| Suit::ALL[i % Suit::ALL.len()]));
    });

    for_each_multiset(&mut |ranks| {
        if ranks.windows(2).all(|w| w[0] < w[1]) {
            hands.push(deal(ranks, |_| Suit::Clubs));
        }
    });

    hands
}

fn for_each_multiset(f: &mut dyn FnMut(&[u8; HAND_SIZE])) {
    let top = RANKS as u8;
    for a0 in 0..top {
        for a1 in a0..top {
            for a2 in a1..top {
                for a3 in a2..top {
                    for a4 in a3..top {
                        f(&[a0, a1, a2, a3, a4]);
                    }
                }
            }
        }
    }
}

fn deal(ranks: &[u8; HAND_SIZE], suit: impl Fn(usize) -> Suit) -> [Card; HAND_SIZE] {
    let mut hand: [Card; HAND_SIZE] = std::array::from_fn(|i| {
        let rank = Rank::ALL[ranks[i] as usize];
        Card::new(rank, suit(i))
    });
    canonical_order(&mut hand);
    hand
}
