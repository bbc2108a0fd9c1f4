//! poker-hands: five-card poker hand classification and comparison
//!
//! Goals:
//! - Deterministic classification into the nine standard categories
//! - A total order over classified hands that agrees with poker rules
//! - No panics for invalid input; parsing returns `Result`
//!
//! ## Quick start
//! ```
//! use poker_hands::evaluator::{classify, compare, Category};
//! use poker_hands::hand::Hand;
//! use std::cmp::Ordering;
//!
//! let a: Hand = "4c 8c Js 8d Jd".parse().unwrap();
//! let b: Hand = "7c Jc Js 7d 4d".parse().unwrap();
//!
//! let (a, b) = (classify(&a), classify(&b));
//! assert_eq!(a.category, Category::TwoPair);
//! assert_eq!(compare(&a, &b), Ordering::Greater);
//! ```
//!
//! The library logs through the `log` facade at `trace` and `debug` level and
//! never installs a logger itself.

pub mod cards;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
