use deuce_seven::cards::{parse_compact, Card, Rank};
use deuce_seven::evaluator::{
    best_five, compare, describe, evaluate_fast, evaluate_seven, Category, Variant,
};
use std::cmp::Ordering;

fn seven(s: &str) -> [Card; 7] {
    parse_compact(s).unwrap().try_into().unwrap()
}

#[test]
fn high_picks_the_straight_flush() {
    let cards = seven("AcKcQcJcTc9h8d");
    let (five, c) = best_five(&cards, Variant::High).unwrap();
    assert_eq!(c.category, Category::StraightFlush);
    assert_eq!(c.tiebreak.as_slice(), &[Rank::Ace]);
    assert_eq!(evaluate_seven(&cards, Variant::High).unwrap(), evaluate_fast(&five, Variant::High).unwrap());
    assert_eq!(describe(&cards, Variant::High).unwrap(), "A straight flush");
}

#[test]
fn lowball_avoids_pairs_and_flushes() {
    let cards = seven("2h3h4h5h7h7c8d");
    let (five, c) = best_five(&cards, Variant::DeuceToSeven).unwrap();
    assert_eq!(c.category, Category::HighCard);
    assert_eq!(c.tiebreak.as_slice(), &[Rank::Seven, Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
    assert!(five.iter().any(|card| card.to_string() == "7c"));
}

#[test]
fn lowball_wheel_cards_are_not_a_straight() {
    let cards = seven("Ad2c3h4s5d9cKh");
    assert_eq!(describe(&cards, Variant::DeuceToSeven).unwrap(), "9-5-4-3-2");
    assert_eq!(describe(&cards, Variant::High).unwrap(), "5 straight");
}

#[test]
fn seven_card_winner_and_tie() {
    let a = evaluate_seven(&seven("AsAh2c3d7h9sJc"), Variant::High).unwrap();
    let b = evaluate_seven(&seven("KsKh2d3c7s9hJd"), Variant::High).unwrap();
    assert_eq!(compare(a, b, Variant::High), Ordering::Greater);
    // Both play J-9-7-3-2 low.
    let low_a = evaluate_seven(&seven("AsAh2c3d7h9sJc"), Variant::DeuceToSeven).unwrap();
    let low_b = evaluate_seven(&seven("KsKh2d3c7s9hJd"), Variant::DeuceToSeven).unwrap();
    assert_eq!(compare(low_a, low_b, Variant::DeuceToSeven), Ordering::Equal);

    let c = evaluate_seven(&seven("AdAc2h3s7d9cJh"), Variant::High).unwrap();
    assert_eq!(compare(a, c, Variant::High), Ordering::Equal);
}
