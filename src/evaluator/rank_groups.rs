use crate::cards::{Card, Rank};

/// Cards of a hand that share one rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    rank: Rank,
    cards: Vec<Card>,
}

impl RankGroup {
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Member cards, in the order they appeared in the hand.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A hand partitioned by rank.
///
/// Post-condition of [`RankGroups::new`]: groups are sorted by size
/// descending, then by rank descending. Classification and comparison rely on
/// this order without re-checking it.
///
/// Example: `8s Ah 8c Ad 8h` groups as `[8s 8c 8h] [Ah Ad]`.
///
/// ```
/// use poker_hands::cards::Rank;
/// use poker_hands::evaluator::rank_groups::RankGroups;
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "4s 8h Qc 8d Ts".parse().unwrap();
/// let groups = RankGroups::new(hand.cards());
/// let ranks: Vec<Rank> = groups.iter().map(|g| g.rank()).collect();
/// assert_eq!(ranks, [Rank::Eight, Rank::Queen, Rank::Ten, Rank::Four]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<RankGroup>,
}

impl RankGroups {
    pub fn new(cards: &[Card]) -> Self {
        let mut groups: Vec<RankGroup> = Vec::with_capacity(cards.len());

        for &card in cards {
            match groups.iter_mut().find(|g| g.rank == card.rank()) {
                Some(group) => group.cards.push(card),
                None => groups.push(RankGroup { rank: card.rank(), cards: vec![card] }),
            }
        }

        // Sort by size (descending), then by rank (descending)
        groups.sort_by(|a, b| b.len().cmp(&a.len()).then(b.rank.cmp(&a.rank)));

        Self { groups }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sizes of the largest and second-largest groups (0 when absent).
    pub fn shape(&self) -> (usize, usize) {
        let size = |i: usize| self.groups.get(i).map_or(0, RankGroup::len);
        (size(0), size(1))
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.iter().find(|g| g.len() == 4).map(RankGroup::rank)
    }

    /// Returns the rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().find(|g| g.len() == 3).map(RankGroup::rank)
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|g| g.len() == 2).map(RankGroup::rank).collect()
    }

    /// Returns all singleton (kicker) ranks, in descending order.
    pub fn kickers(&self) -> Vec<Rank> {
        self.groups.iter().filter(|g| g.len() == 1).map(RankGroup::rank).collect()
    }

    /// All cards, group by group, most significant first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.groups.iter().flat_map(|g| g.cards.iter().copied())
    }
}

impl<'a> IntoIterator for &'a RankGroups {
    type Item = &'a RankGroup;
    type IntoIter = std::slice::Iter<'a, RankGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
