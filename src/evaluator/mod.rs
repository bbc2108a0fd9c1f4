pub(crate) mod classifier;
pub mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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
}

impl Category {
    /// All categories, weakest first.
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    /// Numeric strength, `0` (high card) to `8` (straight flush).
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human-readable name, e.g. `"full house"`.
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryParseError {
    #[error("unknown hand category: '{0}'")]
    Unknown(String),
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == t)
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Classification rules that are not universal across house games.
///
/// ```
/// use poker_hands::evaluator::{classify_with, Category, Rules};
/// use poker_hands::hand::Hand;
///
/// let wheel: Hand = "Ac 2d 3h 4s 5c".parse().unwrap();
/// assert_eq!(classify_with(&wheel, Rules::standard()).category, Category::Straight);
/// assert_eq!(classify_with(&wheel, Rules::consecutive_only()).category, Category::HighCard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Count A-2-3-4-5 as a five-high straight.
    pub ace_low_straight: bool,
}

impl Rules {
    /// Standard poker: the wheel is the lowest straight.
    pub const fn standard() -> Self {
        Self { ace_low_straight: true }
    }

    /// Straights are only five consecutive rank values; the ace is always high.
    pub const fn consecutive_only() -> Self {
        Self { ace_low_straight: false }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}

/// A classified hand: its category plus its cards in tie-break order.
///
/// `cards[0]` is the most significant card: quads, trips, or pair ranks come
/// first (higher pair before lower), then kickers descending. Ordering and
/// equality follow [`compare`], so two hands are `==` exactly when they tie.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct RankedHand {
    pub category: Category,
    pub cards: [Card; 5],
}

impl RankedHand {
    /// Ranks in tie-break order.
    pub fn ranks(&self) -> [Rank; 5] {
        self.cards.map(Card::rank)
    }
}

impl Ord for RankedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for RankedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedHand {}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, ")")
    }
}

/// Classify a hand under [`Rules::standard`].
///
/// ```
/// use poker_hands::evaluator::{classify, Category};
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "8s Ah 8c Ad 8h".parse().unwrap();
/// let ranked = classify(&hand);
/// assert_eq!(ranked.category, Category::FullHouse);
/// assert_eq!(ranked.ranks().map(|r| r.value()), [8, 8, 8, 14, 14]);
/// ```
pub fn classify(hand: &Hand) -> RankedHand {
    classify_with(hand, Rules::standard())
}

/// Classify a hand under the given rules.
pub fn classify_with(hand: &Hand, rules: Rules) -> RankedHand {
    let ranked = classifier::classify(hand.cards(), rules);
    log::trace!("classified [{hand}] as {ranked}");
    ranked
}

/// Compare two classified hands: category first, then rank by rank along
/// the tie-break order. Suits never matter.
///
/// `Less` means `a` loses, `Greater` means `a` wins, `Equal` is a tie.
/// Cast with `as i8` for a `-1`/`0`/`1` outcome.
///
/// ```
/// use poker_hands::evaluator::{classify, compare};
/// use poker_hands::hand::Hand;
/// use std::cmp::Ordering;
///
/// let high: Hand = "8s Qs 6c Ts As".parse().unwrap();
/// let pair: Hand = "2s Qh 6d 2c As".parse().unwrap();
/// assert_eq!(compare(&classify(&high), &classify(&pair)), Ordering::Less);
/// ```
pub fn compare(a: &RankedHand, b: &RankedHand) -> Ordering {
    let ord = a.category.cmp(&b.category).then_with(|| {
        a.cards
            .iter()
            .zip(b.cards.iter())
            .map(|(x, y)| x.rank().cmp(&y.rank()))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    log::trace!("{a} vs {b}: {ord:?}");
    ord
}

/// Classify two hands under [`Rules::standard`] and compare them.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    compare(&classify(a), &classify(b))
}
