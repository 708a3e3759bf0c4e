use std::ops::Index;
use std::slice::Iter;
use std::vec::IntoIter;

use rand::Rng;
use rand::seq::SliceRandom;

use super::DeckhandError;

/// How `CardCollection::shuffle_with` rearranges cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleStrategy {
    /// Walk forward once, swapping every position but the last with a
    /// position picked from the whole collection. Not uniform over all
    /// orderings.
    #[default]
    StepSwap,
    /// Unbiased Fisher-Yates shuffle.
    FisherYates,
}

/// An ordered group of cards, such as a deck or a player's hand.
///
/// Nothing stops the same card being added twice; a collection is only
/// duplicate free if it was built that way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardCollection<C> {
    cards: Vec<C>,
}

impl<C> CardCollection<C> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn new_with_cards(cards: Vec<C>) -> Self {
        Self { cards }
    }

    /// How many cards are there in the collection.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Are there no cards left?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in order, front first.
    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    pub fn iter(&self) -> Iter<'_, C> {
        self.cards.iter()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Remove and return the front card.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckhand::core::{Card, CardCollection, DeckhandError, Suit, Value};
    ///
    /// let ace = Card::new(Value::Ace, Suit::Spade);
    /// let mut collection = CardCollection::new_with_cards(vec![ace]);
    ///
    /// assert_eq!(Ok(ace), collection.draw());
    /// assert_eq!(Err(DeckhandError::EmptyCollection), collection.draw());
    /// ```
    pub fn draw(&mut self) -> Result<C, DeckhandError> {
        self.draw_at(0)
    }

    /// Remove and return the card at `position`. A position past the end
    /// draws the last card instead.
    pub fn draw_at(&mut self, position: usize) -> Result<C, DeckhandError> {
        if self.cards.is_empty() {
            return Err(DeckhandError::EmptyCollection);
        }
        let position = position.min(self.cards.len() - 1);
        Ok(self.cards.remove(position))
    }

    /// Remove and return a card from a uniformly random position.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<C, DeckhandError> {
        if self.cards.is_empty() {
            return Err(DeckhandError::EmptyCollection);
        }
        let position = rng.random_range(0..self.cards.len());
        self.draw_at(position)
    }

    /// Draw `n` cards from the front, in order. Nothing is removed unless
    /// all `n` cards are available.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<C>, DeckhandError> {
        if n > self.cards.len() {
            return Err(DeckhandError::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Put a card at the end of the collection.
    pub fn add_card(&mut self, card: C) {
        self.cards.push(card);
    }

    /// Insert a card at a uniformly random position.
    pub fn add_card_at_random<R: Rng + ?Sized>(&mut self, card: C, rng: &mut R) {
        if self.cards.is_empty() {
            self.cards.push(card);
            return;
        }
        let position = rng.random_range(0..self.cards.len());
        self.cards.insert(position, card);
    }

    /// Rearrange the cards in place with the step swap shuffle.
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use deckhand::core::Deck;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut deck = Deck::standard();
    /// deck.shuffle(&mut rng);
    ///
    /// assert_eq!(52, deck.len());
    /// ```
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.shuffle_with(ShuffleStrategy::StepSwap, rng);
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, strategy: ShuffleStrategy, rng: &mut R) {
        match strategy {
            ShuffleStrategy::StepSwap => {
                let len = self.cards.len();
                for i in 0..len.saturating_sub(1) {
                    let j = rng.random_range(0..len);
                    self.cards.swap(i, j);
                }
            }
            ShuffleStrategy::FisherYates => self.cards.shuffle(rng),
        }
    }
}

impl<C: PartialEq> CardCollection<C> {
    /// Given a card, is it in the collection?
    pub fn contains(&self, card: &C) -> bool {
        self.cards.contains(card)
    }
}

impl<C> Default for CardCollection<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Index<usize> for CardCollection<C> {
    type Output = C;
    fn index(&self, index: usize) -> &C {
        &self.cards[index]
    }
}

impl<C> From<Vec<C>> for CardCollection<C> {
    fn from(cards: Vec<C>) -> Self {
        Self { cards }
    }
}

impl<C> From<CardCollection<C>> for Vec<C> {
    fn from(collection: CardCollection<C>) -> Self {
        collection.cards
    }
}

impl<C> FromIterator<C> for CardCollection<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<C> Extend<C> for CardCollection<C> {
    fn extend<T: IntoIterator<Item = C>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl<C> IntoIterator for CardCollection<C> {
    type Item = C;
    type IntoIter = IntoIter<C>;
    fn into_iter(self) -> IntoIter<C> {
        self.cards.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a CardCollection<C> {
    type Item = &'a C;
    type IntoIter = Iter<'a, C>;
    fn into_iter(self) -> Iter<'a, C> {
        self.cards.iter()
    }
}
