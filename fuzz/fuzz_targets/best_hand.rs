#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate deckhand;

use deckhand::core::{Card, Rank};
use deckhand::evaluation::{CHECKERS, HandEvaluator, KickerOrder};

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    cards: Vec<Card>,
    hand_size: u8,
    descending_kickers: bool,
}

fuzz_target!(|input: Input| {
    let kicker_order = if input.descending_kickers {
        KickerOrder::Descending
    } else {
        KickerOrder::PoolOrder
    };
    let hand_size = usize::from(input.hand_size % 10);
    let evaluator = HandEvaluator::default()
        .hand_size(hand_size)
        .kicker_order(kicker_order);

    let Ok(best) = evaluator.find_best_hand(&input.cards) else {
        return;
    };
    assert_eq!(hand_size, best.cards().len());
    for card in best.cards() {
        assert!(input.cards.contains(card));
    }
    if best.rank() == Rank::HighCard {
        assert_eq!(&input.cards[..hand_size], best.cards());
    }
    // Nothing stronger than the answer can be found.
    for checker in CHECKERS {
        if checker.rank() > best.rank() {
            assert!(
                checker
                    .check_hand_with(&input.cards, hand_size, kicker_order)
                    .unwrap()
                    .is_none()
            );
        }
    }
});
