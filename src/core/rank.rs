use std::fmt;

/// All the different possible poker hand ranks, weakest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One card matches another.
    Pair,
    /// Two different pairs of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Cards in a sequence
    Straight,
    /// Cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten through ace, all of the same suit.
    RoyalFlush,
}

impl Rank {
    /// Every rank, strongest first. This is the order hands are
    /// searched for when looking for the best one.
    pub const STRENGTH_DESCENDING: [Rank; 10] = [
        Rank::RoyalFlush,
        Rank::StraightFlush,
        Rank::FourOfAKind,
        Rank::FullHouse,
        Rank::Flush,
        Rank::Straight,
        Rank::ThreeOfAKind,
        Rank::TwoPair,
        Rank::Pair,
        Rank::HighCard,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::HighCard => "High Card",
            Rank::Pair => "Pair",
            Rank::TwoPair => "Two Pair",
            Rank::ThreeOfAKind => "Three of a Kind",
            Rank::Straight => "Straight",
            Rank::Flush => "Flush",
            Rank::FullHouse => "Full House",
            Rank::FourOfAKind => "Four of a Kind",
            Rank::StraightFlush => "Straight Flush",
            Rank::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}
