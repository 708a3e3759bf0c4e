//! This is the core module. It exports the cards, the collections they
//! live in, and the poker hand types the evaluator produces.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, MAX_VALUE, MIN_VALUE, Suit, Value};

/// The trait shared by every card family.
mod game_card;
pub use self::game_card::GameCard;

/// Ordered card storage with draw and shuffle.
mod collection;
pub use self::collection::{CardCollection, ShuffleStrategy};

/// Deck is the normal 52 card deck, plus dealing.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Code related to cards in hands.
mod hand;
pub use self::hand::Hand;

/// Poker hand ranks.
mod rank;
pub use self::rank::Rank;

/// Cards tagged with the rank they make.
mod poker_hand;
pub use self::poker_hand::{MIN_POKER_HAND_SIZE, PokerHand};

mod error;
pub use self::error::DeckhandError;
