use std::ops::{Deref, DerefMut};

use super::{Card, CardCollection, DeckhandError};

/// Cards held by a player, built up by drawing from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand<C = Card>(CardCollection<C>);

impl<C> Hand<C> {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use deckhand::core::{Card, Hand};
    ///
    /// let hand: Hand<Card> = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self(CardCollection::new())
    }

    pub fn new_with_cards(cards: Vec<C>) -> Self {
        Self(CardCollection::new_with_cards(cards))
    }
}

impl Hand<Card> {
    /// Parse a list of cards written in short form, separated by
    /// whitespace or commas.
    ///
    /// ```
    /// use deckhand::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("KS, 10d 2H").unwrap();
    ///
    /// assert_eq!(3, hand.len());
    /// assert_eq!(Card::new(Value::Ten, Suit::Diamond), hand[1]);
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, DeckhandError> {
        hand_string
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new_with_cards)
    }
}

impl<C> Default for Hand<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Deref for Hand<C> {
    type Target = CardCollection<C>;
    fn deref(&self) -> &CardCollection<C> {
        &self.0
    }
}

impl<C> DerefMut for Hand<C> {
    fn deref_mut(&mut self) -> &mut CardCollection<C> {
        &mut self.0
    }
}

impl<C> From<Vec<C>> for Hand<C> {
    fn from(cards: Vec<C>) -> Self {
        Self::new_with_cards(cards)
    }
}

impl<C> FromIterator<C> for Hand<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<C> Extend<C> for Hand<C> {
    fn extend<T: IntoIterator<Item = C>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl<C> IntoIterator for Hand<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
