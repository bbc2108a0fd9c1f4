use crate::cards::{parse_cards, Card, CardParseError};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("hands must contain exactly five cards, got {0}")]
    CardCount(usize),
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// Exactly five cards, in whatever order the caller supplied them.
///
/// The cardinality is guaranteed by construction. Repeated cards are not
/// rejected; classification treats them like any other cards of that rank.
///
/// ```
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "8s 2h 7c Ad 4c".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
///
/// assert!("8s 2h 7c Ad".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        Self::from_slice(&cards)
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| {
            log::debug!("rejecting hand of {} cards", cards.len());
            HandError::CardCount(cards.len())
        })?;
        Ok(Self(cards))
    }

    /// Build a hand from individual card tokens such as `["Ah", "10d", ...]`.
    /// The count is checked before any token is parsed.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, HandError> {
        if tokens.len() != HAND_SIZE {
            log::debug!("rejecting hand of {} tokens", tokens.len());
            return Err(HandError::CardCount(tokens.len()));
        }
        let cards = tokens
            .iter()
            .map(|t| t.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| log::debug!("rejecting hand: {e}"))?;
        Self::from_slice(&cards)
    }

    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).inspect_err(|e| log::debug!("rejecting hand {s:?}: {e}"))?;
        Self::try_new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
