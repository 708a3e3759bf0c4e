use thiserror::Error;

/// This is the core error type for the
/// deckhand library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeckhandError {
    #[error("Cannot draw a card from an empty card collection")]
    EmptyCollection,
    #[error("Needed {requested} cards but only {available} are available")]
    InsufficientCards { requested: usize, available: usize },
    #[error("No card value exists for rank {0}")]
    InvalidRank(u8),
    #[error("Cannot compare a card of type {found} to a {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
}
