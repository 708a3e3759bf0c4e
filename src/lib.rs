//! Deckhand is a small library for tabletop card games.
//!
//! It has cards, decks and hands that can be drawn from, shuffled and
//! dealt, along with a poker evaluator that finds the best hand in a pool of
//! cards.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use deckhand::core::Deck;
//! use deckhand::evaluation::find_best_hand;
//!
//! let mut rng = StdRng::seed_from_u64(11);
//! let mut deck = Deck::standard_shuffled(&mut rng);
//! let pool = deck.draw_many(7).unwrap();
//! let best = find_best_hand(&pool, 5).unwrap();
//!
//! assert_eq!(5, best.cards().len());
//! ```

/// Allow all the card and collection functionality to be used
/// externally. Everything in core is agnostic to the game being played.
pub mod core;
/// Poker hand ranking.
pub mod evaluation;
