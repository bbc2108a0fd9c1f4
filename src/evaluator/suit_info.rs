use crate::cards::{Card, Suit};

/// The shared suit when every card has it.
pub fn flush_suit(cards: &[Card]) -> Option<Suit> {
    let (first, rest) = cards.split_first()?;
    rest.iter().all(|c| c.suit() == first.suit()).then_some(first.suit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    fn suit_of(s: &str) -> Option<Suit> {
        let hand: Hand = s.parse().unwrap();
        flush_suit(hand.cards())
    }

    #[test]
    fn test_flush() {
        assert_eq!(suit_of("8s Qs 6s Ts As"), Some(Suit::Spades));
        assert_eq!(suit_of("Qc 4c 2c 7c Kc"), Some(Suit::Clubs));
    }

    #[test]
    fn test_not_flush() {
        assert_eq!(suit_of("8s Qs 6c Ts As"), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(flush_suit(&[]), None);
    }
}
