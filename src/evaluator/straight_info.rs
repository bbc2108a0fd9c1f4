use crate::cards::{Card, Rank};
use crate::evaluator::Rules;

const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];

/// A detected straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    /// Highest card of the run as played; `Five` for the wheel.
    pub top_rank: Rank,
}

impl StraightInfo {
    /// The ace is played below the two. Only the wheel tops out at five.
    pub fn ace_low(&self) -> bool {
        self.top_rank == Rank::Five
    }

    /// Detect a straight in five cards already sorted descending by rank.
    ///
    /// A straight is five ranks where `max - min == 4` with no rank repeated.
    /// A-5-4-3-2 counts only when `rules.ace_low_straight` is set.
    pub fn detect(desc: &[Card; 5], rules: Rules) -> Option<Self> {
        let ranks = desc.map(Card::rank);
        debug_assert!(ranks.windows(2).all(|w| w[0] >= w[1]), "cards must be sorted descending");

        let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
        if distinct && ranks[0].value() - ranks[4].value() == 4 {
            return Some(StraightInfo { top_rank: ranks[0] });
        }

        if rules.ace_low_straight && ranks == WHEEL {
            return Some(StraightInfo { top_rank: Rank::Five });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn desc(ranks: [Rank; 5]) -> [Card; 5] {
        let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
        let mut cards: [Card; 5] = std::array::from_fn(|i| Card::new(ranks[i], suits[i]));
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
        cards
    }

    #[test]
    fn test_regular_straight() {
        let cards = desc([Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        let info = StraightInfo::detect(&cards, Rules::default()).unwrap();
        assert_eq!(info.top_rank, Rank::King);
        assert!(!info.ace_low());
    }

    #[test]
    fn test_ace_high_straight() {
        let cards = desc([Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        let info = StraightInfo::detect(&cards, Rules::consecutive_only()).unwrap();
        assert_eq!(info.top_rank, Rank::Ace);
    }

    #[test]
    fn test_wheel_with_standard_rules() {
        let cards = desc([Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        let info = StraightInfo::detect(&cards, Rules::standard()).unwrap();
        assert_eq!(info.top_rank, Rank::Five);
        assert!(info.ace_low());
    }

    #[test]
    fn test_wheel_with_consecutive_only_rules() {
        let cards = desc([Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert_eq!(StraightInfo::detect(&cards, Rules::consecutive_only()), None);
    }

    #[test]
    fn test_low_straight() {
        let cards = desc([Rank::Six, Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
        let info = StraightInfo::detect(&cards, Rules::consecutive_only()).unwrap();
        assert_eq!(info.top_rank, Rank::Six);
        assert!(!info.ace_low());
    }

    #[test]
    fn test_gap_is_not_straight() {
        let cards = desc([Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]);
        assert_eq!(StraightInfo::detect(&cards, Rules::default()), None);
    }

    #[test]
    fn test_span_of_four_with_pair_is_not_straight() {
        // 9 - 5 == 4, but the repeated seven leaves a hole
        let cards = desc([Rank::Nine, Rank::Seven, Rank::Seven, Rank::Six, Rank::Five]);
        assert_eq!(StraightInfo::detect(&cards, Rules::default()), None);
    }
}
