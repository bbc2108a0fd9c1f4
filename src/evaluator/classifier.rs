use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::flush_suit;
use crate::cards::Card;
use crate::evaluator::{Category, RankedHand, Rules};

/// Assign a category and the canonical tie-break order to five cards.
pub(crate) fn classify(cards: &[Card; 5], rules: Rules) -> RankedHand {
    let groups = RankGroups::new(cards);

    // Flatten groups into the significance order
    let mut ordered = *cards;
    for (slot, card) in ordered.iter_mut().zip(groups.cards()) {
        *slot = card;
    }

    let category = match groups.shape() {
        (n, _) if n >= 4 => Category::FourOfAKind,
        (3, 2) => Category::FullHouse,
        (3, _) => Category::ThreeOfAKind,
        (2, 2) => Category::TwoPair,
        (2, _) => Category::Pair,
        _ => return classify_unpaired(ordered, rules),
    };

    RankedHand { category, cards: ordered }
}

/// Five distinct ranks, sorted descending.
fn classify_unpaired(mut desc: [Card; 5], rules: Rules) -> RankedHand {
    let flush = flush_suit(&desc).is_some();
    let straight = StraightInfo::detect(&desc, rules);

    if straight.is_some_and(|s| s.ace_low()) {
        // A5432 plays as 5432A
        desc.rotate_left(1);
    }

    let category = match (flush, straight.is_some()) {
        (true, true) => Category::StraightFlush,
        (true, false) => Category::Flush,
        (false, true) => Category::Straight,
        (false, false) => Category::HighCard,
    };

    RankedHand { category, cards: desc }
}
