use tracing::event;

use super::KickerOrder;
use super::groups::group_by_value;
use crate::core::{Card, DeckhandError, PokerHand, Rank};

/// Look for matching values: pairs, trips, quads, two pair and full houses.
///
/// The largest group of equal values has to hold at least `size_one` cards
/// and, when `size_two` is not zero, the next largest at least `size_two`.
/// Groups of the same size are ranked by value so the higher one is used
/// first. Whatever space is left in the hand is filled with kickers.
pub(crate) fn check_sets(
    cards: &[Card],
    hand_size: usize,
    rank: Rank,
    (size_one, size_two): (usize, usize),
    kicker_order: KickerOrder,
) -> Result<Option<PokerHand>, DeckhandError> {
    if cards.len() < hand_size {
        return Ok(None);
    }

    let mut groups = group_by_value(cards);
    // Stable, so same sized groups of the same value keep pool order.
    groups.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| b[0].value.cmp(&a[0].value))
    });

    let high_len = groups.first().map_or(0, Vec::len);
    let second_len = groups.get(1).map_or(0, Vec::len);
    if high_len < size_one || (size_two > 0 && second_len < size_two) {
        return Ok(None);
    }

    let used_groups = if size_two > 0 { 2 } else { 1 };
    let mut in_hand: Vec<Card> = groups.into_iter().take(used_groups).flatten().collect();

    if in_hand.len() >= hand_size {
        in_hand.truncate(hand_size);
        return PokerHand::new(in_hand, rank).map(Some);
    }

    let mut kickers: Vec<Card> = cards.to_vec();
    if kicker_order == KickerOrder::Descending {
        kickers.sort_by(|a, b| b.cmp_by_value(a));
    }
    for card in kickers {
        if in_hand.len() == hand_size {
            break;
        }
        if !in_hand.contains(&card) {
            in_hand.push(card);
        }
    }

    if in_hand.len() < hand_size {
        // Only possible when the pool repeats a card.
        event!(
            tracing::Level::TRACE,
            ?rank,
            found = in_hand.len(),
            hand_size,
            "Not enough distinct cards to fill the hand"
        );
        return Ok(None);
    }
    PokerHand::new(in_hand, rank).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hand, Suit, Value};

    fn cards(s: &str) -> Vec<Card> {
        Hand::new_from_str(s).unwrap().into_iter().collect()
    }

    fn check(s: &str, rank: Rank, sizes: (usize, usize)) -> Option<PokerHand> {
        check_sets(&cards(s), 5, rank, sizes, KickerOrder::PoolOrder).unwrap()
    }

    #[test]
    fn test_pair() {
        let hand = check("9H 3C 9S KD 4H 2C", Rank::Pair, (2, 0)).unwrap();
        assert_eq!(Rank::Pair, hand.rank());
        assert_eq!(cards("9H 9S 3C KD 4H"), hand.cards());
    }

    #[test]
    fn test_pair_missing() {
        assert!(check("9H 3C 8S KD 4H 2C", Rank::Pair, (2, 0)).is_none());
    }

    #[test]
    fn test_higher_pair_first() {
        let hand = check("2D 2S KS KD 9H", Rank::Pair, (2, 0)).unwrap();
        assert_eq!(Value::King, hand.cards()[0].value);
        assert_eq!(Value::King, hand.cards()[1].value);
    }

    #[test]
    fn test_two_pair() {
        let hand = check("KS KD QH QC 2D 2S 9H", Rank::TwoPair, (2, 2)).unwrap();
        assert_eq!(cards("KS KD QH QC 2D"), hand.cards());
    }

    #[test]
    fn test_two_pair_descending_kickers() {
        let hand = check_sets(
            &cards("KS KD QH QC 2D 2S 9H"),
            5,
            Rank::TwoPair,
            (2, 2),
            KickerOrder::Descending,
        )
        .unwrap()
        .unwrap();
        assert_eq!(cards("KS KD QH QC 9H"), hand.cards());
    }

    #[test]
    fn test_two_pair_needs_two() {
        assert!(check("KS KD QH JC 2D", Rank::TwoPair, (2, 2)).is_none());
    }

    #[test]
    fn test_three_of_a_kind() {
        let hand = check("4C 8S 8D AH 8H", Rank::ThreeOfAKind, (3, 0)).unwrap();
        assert_eq!(cards("8S 8D 8H 4C AH"), hand.cards());
    }

    #[test]
    fn test_full_house() {
        let hand = check("7S 7D 7C 2H 2D", Rank::FullHouse, (3, 2)).unwrap();
        assert_eq!(cards("7S 7D 7C 2H 2D"), hand.cards());
    }

    #[test]
    fn test_full_house_picks_higher_pair() {
        let hand = check("2H 7S 2D 9C 7D 9S 7C", Rank::FullHouse, (3, 2)).unwrap();
        assert_eq!(cards("7S 7D 7C 9C 9S"), hand.cards());
    }

    #[test]
    fn test_full_house_two_trips_truncates() {
        let hand = check("3S 3D 3C JH JD JS", Rank::FullHouse, (3, 2)).unwrap();
        assert_eq!(cards("JH JD JS 3S 3D"), hand.cards());
    }

    #[test]
    fn test_four_of_a_kind() {
        let hand = check("QS 5D QD QC 6H QH", Rank::FourOfAKind, (4, 0)).unwrap();
        assert_eq!(cards("QS QD QC QH 5D"), hand.cards());
        assert_eq!(Suit::Diamond, hand.cards()[4].suit);
    }

    #[test]
    fn test_too_few_cards() {
        assert!(check("QS QD QC QH", Rank::FourOfAKind, (4, 0)).is_none());
    }

    #[test]
    fn test_repeated_card_cannot_fill() {
        assert!(check("QS QS 5D 5D 5D", Rank::Pair, (2, 0)).is_none());
    }
}
