//! Codec round-trip laws and reference encodings.

use proptest::prelude::*;

use tchu::{
    Card, ChMap, Codecs, Multiset, PlayerId, PlayerMap, PlayerState, PublicCardState, PublicGameState, PublicPlayerState,
    TurnKind,
};

fn card() -> impl Strategy<Value = Card> {
    (0..Card::COUNT).prop_map(|i| Card::ALL[i])
}

fn bag_of_card(max: usize) -> impl Strategy<Value = Multiset<Card>> {
    prop::collection::vec(card(), 0..max).prop_map(|cards| cards.into_iter().collect())
}

fn route_index() -> impl Strategy<Value = usize> {
    0..ChMap::get().routes().len()
}

fn player_id() -> impl Strategy<Value = PlayerId> {
    any::<bool>().prop_map(|second| if second { PlayerId::PLAYER_2 } else { PlayerId::PLAYER_1 })
}

fn public_player_state() -> impl Strategy<Value = PublicPlayerState> {
    (0usize..20, 0usize..50, prop::collection::vec(route_index(), 0..10)).prop_map(|(tickets, cards, routes)| {
        let all = ChMap::get().routes();
        PublicPlayerState::new(tickets, cards, routes.iter().map(|&i| all[i]).collect())
    })
}

proptest! {
    #[test]
    fn prop_int_round_trip(value in any::<i32>()) {
        let codec = &Codecs::get().int;
        prop_assert_eq!(codec.decode(&codec.encode(&value)), Ok(value));
    }

    #[test]
    fn prop_string_round_trip(value in ".*") {
        let codec = &Codecs::get().string;
        let encoded = codec.encode(&value);
        prop_assert!(encoded.is_ascii());
        prop_assert!(!encoded.contains(' ') && !encoded.contains(',') && !encoded.contains(';'));
        prop_assert_eq!(codec.decode(&encoded), Ok(value));
    }

    #[test]
    fn prop_list_of_string_round_trip(values in prop::collection::vec(".+", 1..5)) {
        let codec = &Codecs::get().list_of_string;
        prop_assert_eq!(codec.decode(&codec.encode(&values)), Ok(values));
    }

    #[test]
    fn prop_bag_of_card_round_trip(bag in bag_of_card(12)) {
        let codec = &Codecs::get().bag_of_card;
        prop_assert_eq!(codec.decode(&codec.encode(&bag)), Ok(bag));
    }

    #[test]
    fn prop_list_of_bag_of_card_round_trip(
        options in prop::collection::vec(bag_of_card(4).prop_filter("non-empty", |b| !b.is_empty()), 1..5)
    ) {
        let codec = &Codecs::get().list_of_bag_of_card;
        prop_assert_eq!(codec.decode(&codec.encode(&options)), Ok(options));
    }

    #[test]
    fn prop_public_card_state_round_trip(
        face_up in prop::array::uniform5(card()),
        deck_size in 0usize..110,
        discards_size in 0usize..110,
    ) {
        let state = PublicCardState::new(face_up, deck_size, discards_size);
        let codec = &Codecs::get().public_card_state;
        prop_assert_eq!(codec.decode(&codec.encode(&state)), Ok(state));
    }

    #[test]
    fn prop_public_player_state_round_trip(
        tickets in 0usize..20,
        cards in 0usize..50,
        routes in prop::collection::vec(route_index(), 0..10),
    ) {
        let all = ChMap::get().routes();
        let state = PublicPlayerState::new(tickets, cards, routes.iter().map(|&i| all[i]).collect());
        let codec = &Codecs::get().public_player_state;
        prop_assert_eq!(codec.decode(&codec.encode(&state)), Ok(state));
    }

    #[test]
    fn prop_player_state_round_trip(
        tickets in prop::collection::vec(0..ChMap::get().tickets().len(), 0..8),
        cards in bag_of_card(30),
        routes in prop::collection::vec(route_index(), 0..10),
    ) {
        let map = ChMap::get();
        let state = PlayerState::new(
            tickets.iter().map(|&i| map.tickets()[i].clone()).collect(),
            cards,
            routes.iter().map(|&i| map.routes()[i]).collect(),
        );
        let codec = &Codecs::get().player_state;
        prop_assert_eq!(codec.decode(&codec.encode(&state)), Ok(state));
    }

    #[test]
    fn prop_public_game_state_round_trip(
        ticket_count in 0usize..50,
        face_up in prop::array::uniform5(card()),
        deck_size in 0usize..100,
        discards_size in 0usize..100,
        current in player_id(),
        first in public_player_state(),
        second in public_player_state(),
        last in prop::option::of(player_id()),
    ) {
        let state = PublicGameState::new(
            ticket_count,
            PublicCardState::new(face_up, deck_size, discards_size),
            current,
            PlayerMap::from_array([first, second]),
            last,
        );
        let codec = &Codecs::get().public_game_state;
        prop_assert_eq!(codec.decode(&codec.encode(&state)), Ok(state));
    }

    #[test]
    fn prop_ticket_bag_round_trip(indices in prop::collection::vec(0..ChMap::get().tickets().len(), 0..6)) {
        let all = ChMap::get().tickets();
        let bag: Multiset<_> = indices.iter().map(|&i| all[i].clone()).collect();
        let codec = &Codecs::get().bag_of_ticket;
        prop_assert_eq!(codec.decode(&codec.encode(&bag)), Ok(bag));
    }
}

/// The integer 2021 is encoded as its decimal digits.
#[test]
fn test_int_reference() {
    let codec = &Codecs::get().int;
    assert_eq!(codec.encode(&2021), "2021");
    assert_eq!(codec.decode("2021"), Ok(2021));
}

/// Face-up cards are card ordinals, then deck and discard sizes.
#[test]
fn test_public_card_state_reference() {
    let state = PublicCardState::new([Card::Black, Card::Violet, Card::Black, Card::Black, Card::Black], 12, 11);
    assert_eq!(Codecs::get().public_card_state.encode(&state), "0,1,0,0,0;12;11");
}

/// Every turn kind and every route survives the trip.
#[test]
fn test_enumerations_round_trip() {
    let codecs = Codecs::get();
    for kind in TurnKind::ALL {
        assert_eq!(codecs.turn_kind.decode(&codecs.turn_kind.encode(&kind)), Ok(kind));
    }
    for route in ChMap::get().routes() {
        assert_eq!(codecs.route.decode(&codecs.route.encode(route)), Ok(*route));
    }
    for ticket in ChMap::get().tickets() {
        assert_eq!(codecs.ticket.decode(&codecs.ticket.encode(ticket)).as_ref(), Ok(ticket));
    }
}
