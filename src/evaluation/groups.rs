use crate::core::{Card, Suit, Value};

/// Every value, ace first. Straights are scanned in this order.
pub const DESCENDING_VALUES: [Value; 13] = [
    Value::Ace,
    Value::King,
    Value::Queen,
    Value::Jack,
    Value::Ten,
    Value::Nine,
    Value::Eight,
    Value::Seven,
    Value::Six,
    Value::Five,
    Value::Four,
    Value::Three,
    Value::Two,
];

fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Spade => 0,
        Suit::Diamond => 1,
        Suit::Club => 2,
        Suit::Heart => 3,
    }
}

/// Split cards into one group per value. Groups are ordered by the first
/// time their value shows up and keep the pool order inside.
pub(crate) fn group_by_value(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut groups: Vec<Vec<Card>> = Vec::new();
    for card in cards {
        match groups.iter_mut().find(|g| g[0].value == card.value) {
            Some(group) => group.push(*card),
            None => groups.push(vec![*card]),
        }
    }
    groups
}

/// The first card seen of each value, indexed by face value.
pub(crate) fn first_of_each_value(cards: &[Card]) -> [Option<Card>; 15] {
    let mut firsts = [None; 15];
    for card in cards {
        let slot = &mut firsts[usize::from(card.value.as_u8())];
        if slot.is_none() {
            *slot = Some(*card);
        }
    }
    firsts
}

/// Split cards by suit, indexed in `Suit::suits()` order.
pub(crate) fn group_by_suit(cards: &[Card]) -> [Vec<Card>; 4] {
    let mut groups: [Vec<Card>; 4] = Default::default();
    for card in cards {
        groups[suit_index(card.suit)].push(*card);
    }
    groups
}

/// The suit with the most cards. On a tie the suit that got to that size
/// first while walking the pool wins.
pub(crate) fn largest_suit_group(cards: &[Card]) -> Vec<Card> {
    let mut groups: [Vec<Card>; 4] = Default::default();
    let mut largest: Option<usize> = None;
    for card in cards {
        let idx = suit_index(card.suit);
        groups[idx].push(*card);
        if largest.is_none_or(|l| groups[l].len() < groups[idx].len()) {
            largest = Some(idx);
        }
    }
    largest
        .map(|l| std::mem::take(&mut groups[l]))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hand;

    fn cards(s: &str) -> Vec<Card> {
        Hand::new_from_str(s).unwrap().into_iter().collect()
    }

    #[test]
    fn test_descending_values_sorted() {
        assert!(DESCENDING_VALUES.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(Value::values().len(), DESCENDING_VALUES.len());
    }

    #[test]
    fn test_group_by_value_keeps_order() {
        let groups = group_by_value(&cards("KS 2D KD 9H 2S"));
        assert_eq!(3, groups.len());
        assert_eq!(cards("KS KD"), groups[0]);
        assert_eq!(cards("2D 2S"), groups[1]);
        assert_eq!(cards("9H"), groups[2]);
    }

    #[test]
    fn test_first_of_each_value() {
        let firsts = first_of_each_value(&cards("AS AD 5H"));
        assert_eq!(Some(Card::new(Value::Ace, Suit::Spade)), firsts[14]);
        assert_eq!(Some(Card::new(Value::Five, Suit::Heart)), firsts[5]);
        assert_eq!(None, firsts[2]);
    }

    #[test]
    fn test_group_by_suit() {
        let groups = group_by_suit(&cards("AS 2H 3S 4C"));
        assert_eq!(cards("AS 3S"), groups[0]);
        assert!(groups[1].is_empty());
        assert_eq!(cards("4C"), groups[2]);
        assert_eq!(cards("2H"), groups[3]);
    }

    #[test]
    fn test_largest_suit_group_tie() {
        // Hearts reach two cards before spades do.
        let group = largest_suit_group(&cards("AS 2H 3H 4S"));
        assert_eq!(cards("2H 3H"), group);
        assert!(largest_suit_group(&[]).is_empty());
    }
}
