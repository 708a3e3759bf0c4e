use super::groups::{DESCENDING_VALUES, first_of_each_value, group_by_suit};
use crate::core::{Card, DeckhandError, PokerHand, Rank, Value};

/// Find the highest run of `hand_size` consecutive values.
///
/// The run is returned highest card first. An ace can also finish a run
/// that ends on a two, the wheel, in which case it is the last card.
pub(crate) fn straight_run(cards: &[Card], hand_size: usize) -> Option<Vec<Card>> {
    if hand_size == 0 || cards.len() < hand_size {
        return None;
    }

    let firsts = first_of_each_value(cards);
    let first_of = |v: Value| firsts[usize::from(v.as_u8())];

    let mut run: Vec<Card> = Vec::with_capacity(hand_size);
    for value in DESCENDING_VALUES {
        match first_of(value) {
            Some(card) => {
                run.push(card);
                if run.len() == hand_size {
                    return Some(run);
                }
            }
            None => run.clear(),
        }
    }

    // Ace low. A run long enough to already hold the ace can't reuse it.
    let ends_on_two = run.last().is_some_and(|c| c.value == Value::Two);
    let holds_ace = run.iter().any(|c| c.value == Value::Ace);
    if run.len() == hand_size - 1 && ends_on_two && !holds_ace {
        if let Some(ace) = first_of(Value::Ace) {
            run.push(ace);
            return Some(run);
        }
    }
    None
}

pub(crate) fn check_straight(
    cards: &[Card],
    hand_size: usize,
) -> Result<Option<PokerHand>, DeckhandError> {
    straight_run(cards, hand_size)
        .map(|run| PokerHand::new(run, Rank::Straight))
        .transpose()
}

/// A straight inside a single suit. When more than one suit has one, the
/// straight with the highest top card wins.
pub(crate) fn check_straight_flush(
    cards: &[Card],
    hand_size: usize,
) -> Result<Option<PokerHand>, DeckhandError> {
    if cards.len() < hand_size {
        return Ok(None);
    }

    let suits = group_by_suit(cards);
    if suits.iter().all(|s| s.len() < hand_size) {
        return Ok(None);
    }

    let mut best: Option<Vec<Card>> = None;
    for run in suits.iter().filter_map(|s| straight_run(s, hand_size)) {
        let beats_best = best
            .as_ref()
            .is_none_or(|b| b[0].value < run[0].value);
        if beats_best {
            best = Some(run);
        }
    }

    best.map(|run| PokerHand::new(run, Rank::StraightFlush))
        .transpose()
}

/// A straight flush made only of ten through ace.
pub(crate) fn check_royal_flush(
    cards: &[Card],
    hand_size: usize,
) -> Result<Option<PokerHand>, DeckhandError> {
    let royal_cards: Vec<Card> = cards
        .iter()
        .filter(|c| c.value >= Value::Ten)
        .copied()
        .collect();
    if royal_cards.len() < hand_size {
        return Ok(None);
    }

    Ok(check_straight_flush(&royal_cards, hand_size)?.map(|h| h.with_rank(Rank::RoyalFlush)))
}
