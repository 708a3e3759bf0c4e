//! Poker hand evaluation. Given a pool of cards, find the best hand of a
//! given size that can be made from them.

/// Grouping helpers shared by the checkers.
mod groups;
pub use self::groups::DESCENDING_VALUES;

/// Pairs, trips, quads, two pair and full houses.
mod set;

mod flush;

/// Straights, straight flushes and royal flushes.
mod straight;

/// The checker for each hand category.
mod checker;
pub use self::checker::{CHECKERS, RankChecker};

/// Runs the checkers strongest first.
mod evaluator;
pub use self::evaluator::{HandEvaluator, KickerOrder, find_best_hand};
