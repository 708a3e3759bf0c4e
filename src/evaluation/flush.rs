use super::groups::largest_suit_group;
use crate::core::{Card, DeckhandError, PokerHand, Rank};

/// Checks if the cards contain a flush. The hand is the first `hand_size`
/// cards of the biggest suit, in pool order.
pub(crate) fn check_flush(
    cards: &[Card],
    hand_size: usize,
) -> Result<Option<PokerHand>, DeckhandError> {
    if cards.len() < hand_size {
        return Ok(None);
    }

    let mut suited = largest_suit_group(cards);
    if suited.len() < hand_size {
        return Ok(None);
    }
    suited.truncate(hand_size);
    PokerHand::new(suited, Rank::Flush).map(Some)
}
