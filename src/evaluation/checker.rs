use super::KickerOrder;
use super::flush::check_flush;
use super::set::check_sets;
use super::straight::{check_royal_flush, check_straight, check_straight_flush};
use crate::core::{Card, DeckhandError, PokerHand, Rank};

/// One way of recognising a poker hand category.
///
/// Every checker is a plain value; checking a hand keeps all of its working
/// state on the stack, so checkers can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankChecker {
    /// Groups of matching values. The largest group needs `size_one` cards
    /// and the next largest `size_two` (zero means it isn't needed).
    Sets {
        rank: Rank,
        size_one: usize,
        size_two: usize,
    },
    Flush,
    Straight,
    StraightFlush,
    RoyalFlush,
}

/// Every checker, strongest category first.
pub const CHECKERS: [RankChecker; 9] = [
    RankChecker::RoyalFlush,
    RankChecker::StraightFlush,
    RankChecker::Sets {
        rank: Rank::FourOfAKind,
        size_one: 4,
        size_two: 0,
    },
    RankChecker::Sets {
        rank: Rank::FullHouse,
        size_one: 3,
        size_two: 2,
    },
    RankChecker::Flush,
    RankChecker::Straight,
    RankChecker::Sets {
        rank: Rank::ThreeOfAKind,
        size_one: 3,
        size_two: 0,
    },
    RankChecker::Sets {
        rank: Rank::TwoPair,
        size_one: 2,
        size_two: 2,
    },
    RankChecker::Sets {
        rank: Rank::Pair,
        size_one: 2,
        size_two: 0,
    },
];

impl RankChecker {
    /// The checker for a rank. High card needs no checking so it has none.
    pub fn for_rank(rank: Rank) -> Option<RankChecker> {
        CHECKERS.into_iter().find(|c| c.rank() == rank)
    }

    /// The rank of hands this checker finds.
    pub const fn rank(&self) -> Rank {
        match self {
            RankChecker::Sets { rank, .. } => *rank,
            RankChecker::Flush => Rank::Flush,
            RankChecker::Straight => Rank::Straight,
            RankChecker::StraightFlush => Rank::StraightFlush,
            RankChecker::RoyalFlush => Rank::RoyalFlush,
        }
    }

    /// Look for this checker's category among `cards`.
    ///
    /// `Ok(None)` means the category isn't there. Errors only come from a
    /// `hand_size` too small to make a poker hand.
    ///
    /// ```
    /// use deckhand::core::{Hand, Rank};
    /// use deckhand::evaluation::RankChecker;
    ///
    /// let pool: Vec<_> = Hand::new_from_str("2H 3H 4H 5H AH 9C").unwrap().into_iter().collect();
    /// let straight = RankChecker::Straight.check_hand(&pool, 5).unwrap().unwrap();
    ///
    /// assert_eq!(Rank::Straight, straight.rank());
    /// ```
    pub fn check_hand(
        &self,
        cards: &[Card],
        hand_size: usize,
    ) -> Result<Option<PokerHand>, DeckhandError> {
        self.check_hand_with(cards, hand_size, KickerOrder::default())
    }

    /// Like `check_hand`, with a choice of how kickers get picked.
    pub fn check_hand_with(
        &self,
        cards: &[Card],
        hand_size: usize,
        kicker_order: KickerOrder,
    ) -> Result<Option<PokerHand>, DeckhandError> {
        match *self {
            RankChecker::Sets {
                rank,
                size_one,
                size_two,
            } => check_sets(cards, hand_size, rank, (size_one, size_two), kicker_order),
            RankChecker::Flush => check_flush(cards, hand_size),
            RankChecker::Straight => check_straight(cards, hand_size),
            RankChecker::StraightFlush => check_straight_flush(cards, hand_size),
            RankChecker::RoyalFlush => check_royal_flush(cards, hand_size),
        }
    }
}
