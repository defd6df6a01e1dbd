//! deuce-seven: five-card poker hand evaluation for high and 2-7 lowball
//!
//! Goals:
//! - One classifier for both variants, parameterized by [`evaluator::Variant`]
//! - O(1) scoring through a perfect-hash table built once per process
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: compare two lowball hands
//! ```
//! use deuce_seven::evaluator::{compare_hands, describe, Variant};
//! use deuce_seven::hand::Hand;
//! use std::cmp::Ordering;
//!
//! let seven_low: Hand = "D2H3C4S5H7".parse().unwrap();
//! let wheel: Hand = "D2H3C4S5HA".parse().unwrap();
//!
//! let ord = compare_hands(seven_low.as_ref(), wheel.as_ref(), Variant::DeuceToSeven).unwrap();
//! assert_eq!(ord, Ordering::Greater);
//! assert_eq!(describe(wheel.as_ref(), Variant::DeuceToSeven).unwrap(), "A-5-4-3-2");
//! ```
//!
//! ## CLI
//! Compare seven-card hands with:
//! ```sh
//! cargo run --bin sevencard -- AcKhQdJsTs9h8d 2c3d4h5s7c9dJh --variant deuce-seven
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
