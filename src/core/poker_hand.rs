use std::fmt;

use super::{Card, DeckhandError, Hand, Rank};

/// Fewest cards a poker hand can be made of.
pub const MIN_POKER_HAND_SIZE: usize = 5;

/// A group of at least five cards and the rank they make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokerHand {
    hand: Hand<Card>,
    rank: Rank,
}

impl PokerHand {
    /// Tag `cards` with `rank`. No check is made that the cards actually
    /// form that rank; the only requirement is the card count.
    ///
    /// ```
    /// use deckhand::core::{DeckhandError, Hand, PokerHand, Rank};
    ///
    /// let cards = Hand::new_from_str("2S 3S 4S").unwrap();
    /// assert!(matches!(
    ///     PokerHand::new(cards.into_iter().collect(), Rank::HighCard),
    ///     Err(DeckhandError::InsufficientCards { requested: 5, available: 3 })
    /// ));
    /// ```
    pub fn new(cards: Vec<Card>, rank: Rank) -> Result<Self, DeckhandError> {
        if cards.len() < MIN_POKER_HAND_SIZE {
            return Err(DeckhandError::InsufficientCards {
                requested: MIN_POKER_HAND_SIZE,
                available: cards.len(),
            });
        }
        Ok(Self {
            hand: Hand::new_with_cards(cards),
            rank,
        })
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn hand(&self) -> &Hand<Card> {
        &self.hand
    }

    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Same cards with a different rank.
    pub(crate) fn with_rank(self, rank: Rank) -> Self {
        Self { rank, ..self }
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.rank)?;
        for card in self.hand.iter() {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}
