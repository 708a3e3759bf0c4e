use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::DeckhandError;

/// Card rank or value.
/// The discriminant is the face value, with the ace played high.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// 10
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Lowest numeric value a card can have.
pub const MIN_VALUE: u8 = 2;
/// Highest numeric value a card can have.
pub const MAX_VALUE: u8 = 14;

/// Constant of all the values, lowest first.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Take a raw face value and convert it to a `Value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckhand::core::{DeckhandError, Value};
    ///
    /// assert_eq!(Value::Ace, Value::from_u8(14).unwrap());
    /// assert!(matches!(Value::from_u8(1), Err(DeckhandError::InvalidRank(1))));
    /// ```
    pub fn from_u8(v: u8) -> Result<Value, DeckhandError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&v) {
            return Err(DeckhandError::InvalidRank(v));
        }
        Ok(VALUES[usize::from(v - MIN_VALUE)])
    }

    /// The numeric face value, 2 through 14.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parse the single character value code. `T` is
    /// accepted for ten since "10" takes two characters.
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The short code used when printing a card.
    pub const fn code(self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }

    /// The full English word for this value.
    pub const fn name(self) -> &'static str {
        match self {
            Value::Two => "Two",
            Value::Three => "Three",
            Value::Four => "Four",
            Value::Five => "Five",
            Value::Six => "Six",
            Value::Seven => "Seven",
            Value::Eight => "Eight",
            Value::Nine => "Nine",
            Value::Ten => "Ten",
            Value::Jack => "Jack",
            Value::Queen => "Queen",
            Value::King => "King",
            Value::Ace => "Ace",
        }
    }
}

impl TryFrom<u8> for Value {
    type Error = DeckhandError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Value::from_u8(v)
    }
}

/// Enum for the four different suits.
/// Suits carry no ordering; nothing in the library ranks one suit
/// over another.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Spades
    Spade,
    /// Diamonds
    Diamond,
    /// Clubs
    Club,
    /// Hearts
    Heart,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_uppercase() {
            'S' => Some(Suit::Spade),
            'D' => Some(Suit::Diamond),
            'C' => Some(Suit::Club),
            'H' => Some(Suit::Heart),
            _ => None,
        }
    }

    /// One letter code used in the short form of a card.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Heart => 'H',
        }
    }

    /// Singular name of the suit.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spade => "Spade",
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
            Suit::Heart => "Heart",
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Equality looks at both the suit and the value. Ordering only looks at
/// the value, so `Card` deliberately has no `Ord` impl; use
/// [`Card::cmp_by_value`] when sorting.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Compare two cards by value alone.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use deckhand::core::{Card, Suit, Value};
    ///
    /// let spade = Card::new(Value::King, Suit::Spade);
    /// let heart = Card::new(Value::King, Suit::Heart);
    ///
    /// assert_eq!(Ordering::Equal, spade.cmp_by_value(&heart));
    /// assert_ne!(spade, heart);
    /// ```
    pub fn cmp_by_value(&self, other: &Card) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// Long form of the card, for example `Ace of Spades`.
    pub fn to_long_string(&self) -> String {
        format!("{} of {}s", self.value.name(), self.suit.name())
    }
}

/// Short form of the card: the value code followed by the suit letter,
/// `3C`, `JD`, `10S`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.code(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = DeckhandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let first = chars.next().ok_or(DeckhandError::TooFewChars)?;

        // "10" is the only two character value code.
        let value = if first == '1' {
            match chars.next() {
                Some('0') => Value::Ten,
                Some(_) => return Err(DeckhandError::UnexpectedValueChar),
                None => return Err(DeckhandError::TooFewChars),
            }
        } else {
            Value::from_char(first).ok_or(DeckhandError::UnexpectedValueChar)?
        };

        let suit = chars
            .next()
            .ok_or(DeckhandError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(DeckhandError::UnexpectedSuitChar))?;

        if chars.next().is_some() {
            return Err(DeckhandError::UnparsedCharsRemaining);
        }

        Ok(Card { value, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
        assert_eq!(c, Card::new(Value::Three, Suit::Spade));
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        // Make sure that equals works
        assert!(c1 == c1);
        // Make sure that the values are ordered
        assert_eq!(Ordering::Less, c1.cmp_by_value(&c2));
        assert_eq!(Ordering::Greater, c2.cmp_by_value(&c1));
        // Suit is ignored for ordering but not for equality.
        assert_eq!(Ordering::Equal, c3.cmp_by_value(&c2));
        assert_ne!(c3, c2);
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(Value::Two, Value::from_u8(2).unwrap());
        assert_eq!(Value::Ace, Value::from_u8(14).unwrap());
        for v in Value::values() {
            assert_eq!(v, Value::from_u8(v.as_u8()).unwrap());
        }
    }

    #[test]
    fn test_from_u8_out_of_range() {
        assert!(matches!(Value::from_u8(0), Err(DeckhandError::InvalidRank(0))));
        assert!(matches!(Value::from_u8(1), Err(DeckhandError::InvalidRank(1))));
        assert!(matches!(
            Value::try_from(15),
            Err(DeckhandError::InvalidRank(15))
        ));
    }

    #[test]
    fn test_short_string() {
        assert_eq!("3C", Card::new(Value::Three, Suit::Club).to_string());
        assert_eq!("JD", Card::new(Value::Jack, Suit::Diamond).to_string());
        assert_eq!("AH", Card::new(Value::Ace, Suit::Heart).to_string());
        assert_eq!("10S", Card::new(Value::Ten, Suit::Spade).to_string());
    }

    #[test]
    fn test_long_string() {
        assert_eq!(
            "Ace of Spades",
            Card::new(Value::Ace, Suit::Spade).to_long_string()
        );
        assert_eq!(
            "Three of Clubs",
            Card::new(Value::Three, Suit::Club).to_long_string()
        );
    }

    #[test]
    fn test_parse_every_card() {
        for v in Value::values() {
            for s in Suit::suits() {
                let c = Card::new(v, s);
                assert_eq!(c, c.to_string().parse::<Card>().unwrap());
            }
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Card::new(Value::Ten, Suit::Heart), "Th".parse().unwrap());
        assert_eq!(Card::new(Value::King, Suit::Club), "kc".parse().unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<Card>(), Err(DeckhandError::TooFewChars)));
        assert!(matches!("A".parse::<Card>(), Err(DeckhandError::TooFewChars)));
        assert!(matches!("1".parse::<Card>(), Err(DeckhandError::TooFewChars)));
        assert!(matches!(
            "11S".parse::<Card>(),
            Err(DeckhandError::UnexpectedValueChar)
        ));
        assert!(matches!(
            "XS".parse::<Card>(),
            Err(DeckhandError::UnexpectedValueChar)
        ));
        assert!(matches!(
            "AX".parse::<Card>(),
            Err(DeckhandError::UnexpectedSuitChar)
        ));
        assert!(matches!(
            "ASS".parse::<Card>(),
            Err(DeckhandError::UnparsedCharsRemaining)
        ));
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}
