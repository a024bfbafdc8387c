// Property-based tests for the shuffle/deal engine
use deck_simulator::{
    deal, deal_both, CardId, CardRegistry, Deck, DealLayout, GameRng, MatchPhase, Side, Simulator,
    SimulatorConfig,
};
use proptest::prelude::*;

/// Decks of at least 20 cards: 10..20 distinct ids with 2..=4 copies each.
fn startable_deck() -> impl Strategy<Value = Deck> {
    prop::collection::btree_map(1u32..60, 2u32..=4, 10..20).prop_map(|counts| {
        counts
            .into_iter()
            .map(|(id, copies)| (CardId::new(id), copies))
            .collect()
    })
}

proptest! {
    #[test]
    fn proptest_deal_partitions_deck(deck in startable_deck(), seed in any::<u64>()) {
        let before = deck.clone();
        let dealt = deal(&deck, DealLayout::default(), &mut GameRng::new(seed));

        prop_assert_eq!(dealt.guardians.len(), 4);
        prop_assert_eq!(dealt.hand.len(), 6);
        prop_assert_eq!(dealt.library.len(), deck.total() as usize - 10);
        prop_assert_eq!(dealt.as_deck(), deck.clone());
        prop_assert_eq!(deck, before);
    }

    #[test]
    fn proptest_no_card_dealt_beyond_its_count(deck in startable_deck(), seed in any::<u64>()) {
        let deals = deal_both(&deck, DealLayout::default(), &mut GameRng::new(seed));

        for (_, dealt) in deals.iter() {
            let recount = dealt.as_deck();
            for (card, copies) in recount.iter() {
                prop_assert!(copies <= deck.count(card));
            }
        }
    }

    #[test]
    fn proptest_start_deals_each_side_a_full_copy(deck in startable_deck(), seed in any::<u64>()) {
        let mut sim = Simulator::with_rng(
            SimulatorConfig::default(),
            CardRegistry::new(),
            GameRng::new(seed),
        )
        .unwrap();

        prop_assert_eq!(sim.start(&deck), Ok(MatchPhase::Running));
        for side in Side::ALL {
            let board = sim.board(side).unwrap();
            let held: Deck = board.guardians().iter()
                .chain(board.hand().iter())
                .chain(board.library().iter())
                .copied()
                .collect();
            prop_assert_eq!(held, deck.clone());
        }
    }

    #[test]
    fn proptest_small_decks_never_deal(copies in 1u32..=19, seed in any::<u64>()) {
        let deck: Deck = [(CardId::new(1), copies)].into_iter().collect();
        let mut sim = Simulator::with_rng(
            SimulatorConfig::default(),
            CardRegistry::new(),
            GameRng::new(seed),
        )
        .unwrap();

        prop_assert_eq!(sim.start(&deck), Ok(MatchPhase::LessThanTen));
        prop_assert!(sim.board(Side::Human).is_none());
    }
}

fn distinct_twenty() -> Deck {
    (1..=20).map(CardId::new).collect()
}

#[test]
fn test_unseeded_deals_differ() {
    let deck = distinct_twenty();
    let first = deal(&deck, DealLayout::default(), &mut GameRng::from_entropy());

    let all_same = (0..8).all(|_| {
        deal(&deck, DealLayout::default(), &mut GameRng::from_entropy()) == first
    });
    assert!(!all_same, "entropy-seeded deals should not repeat");
}

#[test]
fn test_sides_shuffle_independently() {
    let deck = distinct_twenty();
    let mut rng = GameRng::new(3);

    let identical = (0..8)
        .filter(|_| {
            let deals = deal_both(&deck, DealLayout::default(), &mut rng);
            deals[Side::Human] == deals[Side::Opponent]
        })
        .count();
    assert!(identical < 8);
}

#[test]
fn test_every_card_reaches_the_first_guardian_slot() {
    let deck = distinct_twenty();
    let mut rng = GameRng::new(99);
    let mut seen = Deck::new();

    for _ in 0..2000 {
        let dealt = deal(&deck, DealLayout::default(), &mut rng);
        seen.add(dealt.guardians[0], 1);
    }

    for card in deck.expand() {
        assert!(seen.contains(card), "{card} never dealt first");
    }
}
