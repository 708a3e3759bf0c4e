#[macro_use]
extern crate criterion;
extern crate deckhand;

use deckhand::core::{Deck, ShuffleStrategy};
use rand::{SeedableRng, rngs::StdRng};

fn deal_all_deck(c: &mut criterion::Criterion) {
    c.bench_function("draw all from Deck", |b| {
        b.iter(|| {
            let mut deck = Deck::standard();
            while !deck.is_empty() {
                let _card = deck.draw().unwrap();
            }
        });
    });
}

fn deal_hands(c: &mut criterion::Criterion) {
    c.bench_function("deal 8 hands of 5", |b| {
        b.iter(|| {
            let mut deck = Deck::standard();
            deck.deal_hands(5, 8).unwrap()
        });
    });
}

fn shuffle(c: &mut criterion::Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut deck = Deck::standard();

    c.bench_function("step swap shuffle", |b| {
        b.iter(|| deck.shuffle_with(ShuffleStrategy::StepSwap, &mut rng));
    });
    c.bench_function("fisher yates shuffle", |b| {
        b.iter(|| deck.shuffle_with(ShuffleStrategy::FisherYates, &mut rng));
    });
}

criterion_group!(benches, deal_all_deck, deal_hands, shuffle);
criterion_main!(benches);
