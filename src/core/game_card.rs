use std::any::{Any, type_name};
use std::cmp::Ordering;
use std::fmt::Display;

use super::{Card, DeckhandError};

/// A card from any card family that can live in a deck or a hand.
///
/// Collections themselves are generic and never need this trait; it is the
/// seam for code that wants to handle cards without knowing their family,
/// such as a view layer listing card names.
pub trait GameCard: Any + Display {
    /// Name shown for the card. Defaults to the `Display` form.
    fn name(&self) -> String {
        self.to_string()
    }

    /// Optional flavour text for the card.
    fn description(&self) -> Option<String> {
        None
    }

    /// Compare against another card of possibly a different family.
    ///
    /// Cards from two different families have no ordering, so that returns
    /// `DeckhandError::TypeMismatch`.
    fn compare_to(&self, other: &dyn GameCard) -> Result<Ordering, DeckhandError>;

    /// Upcast used to recover the concrete card type.
    fn as_any(&self) -> &dyn Any;

    /// Rust type name of the card family, used in error messages.
    fn family(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl GameCard for Card {
    fn name(&self) -> String {
        self.to_long_string()
    }

    fn compare_to(&self, other: &dyn GameCard) -> Result<Ordering, DeckhandError> {
        other
            .as_any()
            .downcast_ref::<Card>()
            .map(|o| self.cmp_by_value(o))
            .ok_or_else(|| DeckhandError::TypeMismatch {
                expected: self.family(),
                found: other.family(),
            })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
