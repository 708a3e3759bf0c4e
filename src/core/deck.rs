use std::ops::{Deref, DerefMut};

use rand::Rng;
use tracing::event;

use super::{Card, CardCollection, DeckhandError, Hand, Suit, Value};

/// A deck of cards that hands are dealt from.
///
/// `Deck` dereferences to [`CardCollection`], so drawing, shuffling and
/// adding cards work the same as on any other collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<C = Card>(CardCollection<C>);

impl Deck<Card> {
    /// Create the standard 52 card deck. Cards are ordered by value first,
    /// then by suit.
    ///
    /// ```
    /// use deckhand::core::Deck;
    ///
    /// assert_eq!(52, Deck::standard().len());
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for v in Value::values() {
            for s in Suit::suits() {
                cards.push(Card::new(v, s));
            }
        }
        Self(CardCollection::new_with_cards(cards))
    }

    /// Create the standard 52 card deck in a random order.
    pub fn standard_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }
}

impl Default for Deck<Card> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<C> Deck<C> {
    /// An empty deck.
    pub fn new() -> Self {
        Self(CardCollection::new())
    }

    pub fn new_with_cards(cards: Vec<C>) -> Self {
        Self(CardCollection::new_with_cards(cards))
    }

    /// Deal `num_hands` hands of `hand_size` cards each.
    ///
    /// Cards come off the front of the deck one at a time, going round the
    /// hands in order, so with two hands the first hand gets the first,
    /// third, fifth... cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckhand::core::{Deck, DeckhandError};
    ///
    /// let mut deck = Deck::standard();
    /// let hands = deck.deal_hands(5, 4).unwrap();
    ///
    /// assert_eq!(4, hands.len());
    /// assert!(hands.iter().all(|h| h.len() == 5));
    /// assert_eq!(32, deck.len());
    ///
    /// assert!(matches!(
    ///     deck.deal_hands(10, 4),
    ///     Err(DeckhandError::InsufficientCards { .. })
    /// ));
    /// ```
    pub fn deal_hands(
        &mut self,
        hand_size: usize,
        num_hands: usize,
    ) -> Result<Vec<Hand<C>>, DeckhandError> {
        let available = self.len();
        let requested = hand_size
            .checked_mul(num_hands)
            .filter(|needed| *needed <= available)
            .ok_or(DeckhandError::InsufficientCards {
                requested: hand_size.saturating_mul(num_hands),
                available,
            })?;

        event!(
            tracing::Level::DEBUG,
            hand_size,
            num_hands,
            available,
            "Dealing hands"
        );

        let mut hands: Vec<Hand<C>> = (0..num_hands).map(|_| Hand::new()).collect();
        for _ in 0..hand_size {
            for hand in hands.iter_mut() {
                hand.add_card(self.draw()?);
            }
        }
        debug_assert_eq!(available - requested, self.len());
        Ok(hands)
    }

    /// Move every card in `hand` back to the bottom of the deck, leaving the
    /// hand empty. The hand's last card goes back first.
    pub fn gather(&mut self, hand: &mut Hand<C>) {
        // Drawing past the end takes the last card.
        while let Ok(card) = hand.draw_at(usize::MAX) {
            self.add_card(card);
        }
    }
}

impl<C> Deref for Deck<C> {
    type Target = CardCollection<C>;
    fn deref(&self) -> &CardCollection<C> {
        &self.0
    }
}

impl<C> DerefMut for Deck<C> {
    fn deref_mut(&mut self) -> &mut CardCollection<C> {
        &mut self.0
    }
}

impl<C> From<CardCollection<C>> for Deck<C> {
    fn from(collection: CardCollection<C>) -> Self {
        Self(collection)
    }
}

impl<C> IntoIterator for Deck<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
