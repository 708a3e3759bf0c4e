use tracing::event;

use super::checker::{CHECKERS, RankChecker};
use crate::core::{Card, DeckhandError, MIN_POKER_HAND_SIZE, PokerHand, Rank};

/// Which cards fill out a hand once the matching cards are in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KickerOrder {
    /// Take unused cards in the order they were given.
    #[default]
    PoolOrder,
    /// Take unused cards highest value first.
    Descending,
}

/// # HandEvaluator
///
/// Finds the best poker hand in a pool of cards. The evaluator only holds
/// settings, so one value can be copied around and used from as many
/// threads as needed.
///
/// ## Setters
///
/// Each setter replaces one setting and returns the evaluator. Defaults are
/// five card hands with kickers taken in pool order.
///
/// ## Examples
///
/// ```
/// use deckhand::core::{Hand, Rank};
/// use deckhand::evaluation::{HandEvaluator, KickerOrder};
///
/// let pool: Vec<_> = Hand::new_from_str("KS KD QH QC 2D 2S 9H")
///     .unwrap()
///     .into_iter()
///     .collect();
/// let evaluator = HandEvaluator::default().kicker_order(KickerOrder::Descending);
/// let best = evaluator.find_best_hand(&pool).unwrap();
///
/// assert_eq!(Rank::TwoPair, best.rank());
/// assert_eq!("9H", best.cards()[4].to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandEvaluator {
    hand_size: usize,
    kicker_order: KickerOrder,
}

impl Default for HandEvaluator {
    fn default() -> Self {
        Self {
            hand_size: MIN_POKER_HAND_SIZE,
            kicker_order: KickerOrder::default(),
        }
    }
}

impl HandEvaluator {
    /// Set how many cards make a hand.
    pub fn hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set how kickers are chosen.
    pub fn kicker_order(mut self, kicker_order: KickerOrder) -> Self {
        self.kicker_order = kicker_order;
        self
    }

    pub fn get_hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn get_kicker_order(&self) -> KickerOrder {
        self.kicker_order
    }

    /// Find the strongest hand in `cards`.
    ///
    /// Categories are tried from royal flush down to pair and the first one
    /// found is returned. If nothing matches, the first `hand_size` cards
    /// are returned as a high card hand, in the order given.
    pub fn find_best_hand(&self, cards: &[Card]) -> Result<PokerHand, DeckhandError> {
        self.check_pool(cards)?;

        for checker in CHECKERS {
            match checker.check_hand_with(cards, self.hand_size, self.kicker_order)? {
                Some(hand) => {
                    event!(tracing::Level::DEBUG, rank = %hand.rank(), %hand, "Found best hand");
                    return Ok(hand);
                }
                None => {
                    event!(tracing::Level::TRACE, rank = %checker.rank(), "No match");
                }
            }
        }

        event!(tracing::Level::DEBUG, "Falling back to high card");
        self.high_card(cards)
    }

    /// Check for one category only. Asking for `Rank::HighCard` finds the
    /// high card hand whenever the pool is big enough.
    ///
    /// A pool smaller than the hand size is `Ok(None)`; a hand size too
    /// small for a poker hand is always an error.
    pub fn check(&self, rank: Rank, cards: &[Card]) -> Result<Option<PokerHand>, DeckhandError> {
        self.check_hand_size()?;
        match RankChecker::for_rank(rank) {
            Some(checker) => checker.check_hand_with(cards, self.hand_size, self.kicker_order),
            None if cards.len() < self.hand_size => Ok(None),
            None => self.high_card(cards).map(Some),
        }
    }

    fn check_hand_size(&self) -> Result<(), DeckhandError> {
        if self.hand_size < MIN_POKER_HAND_SIZE {
            return Err(DeckhandError::InsufficientCards {
                requested: MIN_POKER_HAND_SIZE,
                available: self.hand_size,
            });
        }
        Ok(())
    }

    fn check_pool(&self, cards: &[Card]) -> Result<(), DeckhandError> {
        self.check_hand_size()?;
        if cards.len() < self.hand_size {
            return Err(DeckhandError::InsufficientCards {
                requested: self.hand_size,
                available: cards.len(),
            });
        }
        Ok(())
    }

    fn high_card(&self, cards: &[Card]) -> Result<PokerHand, DeckhandError> {
        PokerHand::new(cards[..self.hand_size].to_vec(), Rank::HighCard)
    }
}

/// Find the best `hand_size` card poker hand in `cards` using the default
/// evaluator settings.
///
/// ```
/// use deckhand::core::{Hand, Rank};
/// use deckhand::evaluation::find_best_hand;
///
/// let pool: Vec<_> = Hand::new_from_str("7S 7D 7C 2H 2D").unwrap().into_iter().collect();
///
/// assert_eq!(Rank::FullHouse, find_best_hand(&pool, 5).unwrap().rank());
/// ```
pub fn find_best_hand(cards: &[Card], hand_size: usize) -> Result<PokerHand, DeckhandError> {
    HandEvaluator::default()
        .hand_size(hand_size)
        .find_best_hand(cards)
}
