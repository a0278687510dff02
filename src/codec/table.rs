//! The codec of every type sent over the wire.
//!
//! | Type                | Encoding                                            |
//! |---------------------|-----------------------------------------------------|
//! | integer             | decimal                                             |
//! | string              | base64 of the UTF-8 bytes                           |
//! | player id, turn kind, card | ordinal in declared order                    |
//! | route, ticket       | index in the map's canonical list                   |
//! | list, bag           | elements joined by `,` (`;` for lists of bags)      |
//! | public card state   | `face-up;deck size;discards size`                   |
//! | public player state | `tickets;cards;routes` (counts for the first two)   |
//! | player state        | `tickets;cards;routes`                              |
//! | public game state   | `tickets:cards:current:player 1:player 2:last`      |

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::framework::{fields, parse_index, Codec};
use super::CodecError;
use crate::cards::Card;
use crate::core::constants::FACE_UP_CARDS_COUNT;
use crate::core::{Multiset, PlayerId, PlayerMap};
use crate::game::{DrawSlot, TurnKind};
use crate::map::{ChMap, Route, Ticket};
use crate::state::{PlayerState, PublicCardState, PublicGameState, PublicPlayerState};

/// Shared codec instances.
#[derive(Debug)]
pub struct Codecs {
    pub int: Codec<i32>,
    pub count: Codec<usize>,
    pub string: Codec<String>,
    pub player_id: Codec<PlayerId>,
    pub turn_kind: Codec<TurnKind>,
    pub card: Codec<Card>,
    pub route: Codec<Route>,
    pub ticket: Codec<Ticket>,
    pub draw_slot: Codec<DrawSlot>,
    pub list_of_string: Codec<Vec<String>>,
    pub list_of_route: Codec<Vec<Route>>,
    pub bag_of_card: Codec<Multiset<Card>>,
    pub bag_of_ticket: Codec<Multiset<Ticket>>,
    pub list_of_bag_of_card: Codec<Vec<Multiset<Card>>>,
    pub public_card_state: Codec<PublicCardState>,
    pub public_player_state: Codec<PublicPlayerState>,
    pub player_state: Codec<PlayerState>,
    pub public_game_state: Codec<PublicGameState>,
}

impl Codecs {
    /// The codecs, built on first use.
    pub fn get() -> &'static Codecs {
        static CODECS: OnceLock<Codecs> = OnceLock::new();
        CODECS.get_or_init(Codecs::build)
    }

    fn build() -> Self {
        let map = ChMap::get();

        let int = Codec::new(
            |value: &i32| value.to_string(),
            |text| text.parse().map_err(|_| CodecError::InvalidInteger(text.to_string())),
        );
        let count = Codec::new(|value: &usize| value.to_string(), parse_index);
        let string = Codec::new(
            |value: &String| STANDARD.encode(value.as_bytes()),
            |text| {
                let bytes = STANDARD
                    .decode(text)
                    .map_err(|_| CodecError::InvalidBase64(text.to_string()))?;
                String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
            },
        );
        let player_id = Codec::one_of(PlayerId::ALL.to_vec());
        let turn_kind = Codec::one_of(TurnKind::ALL.to_vec());
        let card = Codec::one_of(Card::ALL.to_vec());
        let route = Codec::one_of(map.routes().to_vec());
        let ticket = Codec::one_of(map.tickets().to_vec());

        let slot_int = int.clone();
        let draw_slot = Codec::new(
            move |slot: &DrawSlot| slot_int.encode(&slot.to_wire()),
            move |text| {
                let value: i32 = text.parse().map_err(|_| CodecError::InvalidInteger(text.to_string()))?;
                DrawSlot::from_wire(value).ok_or(CodecError::OutOfRange {
                    index: value.unsigned_abs() as usize,
                    len: FACE_UP_CARDS_COUNT,
                })
            },
        );

        let list_of_string = Codec::list_of(&string, ',');
        let list_of_route = Codec::list_of(&route, ',');
        let list_of_card = Codec::list_of(&card, ',');
        let bag_of_card = Codec::bag_of(&card, ',');
        let bag_of_ticket = Codec::bag_of(&ticket, ',');
        let list_of_bag_of_card = Codec::list_of(&bag_of_card, ';');

        let public_card_state = {
            let (cards, count) = (list_of_card.clone(), count.clone());
            let (cards_in, count_in) = (list_of_card, count.clone());
            Codec::new(
                move |state: &PublicCardState| {
                    [
                        cards.encode(&state.face_up_cards().to_vec()),
                        count.encode(&state.deck_size()),
                        count.encode(&state.discards_size()),
                    ]
                    .join(";")
                },
                move |text| {
                    let [face_up, deck, discards] = fields(text, ';')?;
                    let face_up = cards_in.decode(face_up)?;
                    let found = face_up.len();
                    let face_up: [Card; FACE_UP_CARDS_COUNT] = face_up
                        .try_into()
                        .map_err(|_| CodecError::FieldCount { expected: FACE_UP_CARDS_COUNT, found })?;
                    Ok(PublicCardState::new(face_up, count_in.decode(deck)?, count_in.decode(discards)?))
                },
            )
        };

        let public_player_state = {
            let (routes, count) = (list_of_route.clone(), count.clone());
            let (routes_in, count_in) = (list_of_route.clone(), count.clone());
            Codec::new(
                move |state: &PublicPlayerState| {
                    let claimed: Vec<Route> = state.routes().iter().copied().collect();
                    [
                        count.encode(&state.ticket_count()),
                        count.encode(&state.card_count()),
                        routes.encode(&claimed),
                    ]
                    .join(";")
                },
                move |text| {
                    let [tickets, cards, routes] = fields(text, ';')?;
                    Ok(PublicPlayerState::new(
                        count_in.decode(tickets)?,
                        count_in.decode(cards)?,
                        routes_in.decode(routes)?.into_iter().collect(),
                    ))
                },
            )
        };

        let player_state = {
            let (tickets, cards, routes) = (bag_of_ticket.clone(), bag_of_card.clone(), list_of_route.clone());
            let (tickets_in, cards_in, routes_in) = (bag_of_ticket.clone(), bag_of_card.clone(), list_of_route.clone());
            Codec::new(
                move |state: &PlayerState| {
                    let claimed: Vec<Route> = state.routes().iter().copied().collect();
                    [
                        tickets.encode(state.tickets()),
                        cards.encode(state.cards()),
                        routes.encode(&claimed),
                    ]
                    .join(";")
                },
                move |text| {
                    let [tickets, cards, routes] = fields(text, ';')?;
                    Ok(PlayerState::new(
                        tickets_in.decode(tickets)?,
                        cards_in.decode(cards)?,
                        routes_in.decode(routes)?.into_iter().collect(),
                    ))
                },
            )
        };

        let public_game_state = {
            let enc = (
                count.clone(),
                public_card_state.clone(),
                player_id.clone(),
                public_player_state.clone(),
                Codec::optional(&player_id),
            );
            let dec = enc.clone();
            Codec::new(
                move |state: &PublicGameState| {
                    let (count, card_state, player_id, player_state, last_player) = &enc;
                    let mut parts = vec![
                        count.encode(&state.ticket_count()),
                        card_state.encode(state.card_state()),
                        player_id.encode(&state.current_player()),
                    ];
                    parts.extend(state.player_states().iter().map(|(_, s)| player_state.encode(s)));
                    parts.push(last_player.encode(&state.last_player()));
                    parts.join(":")
                },
                move |text| {
                    let (count, card_state, player_id, player_state, last_player) = &dec;
                    let [tickets, cards, current, first, second, last] = fields(text, ':')?;
                    Ok(PublicGameState::new(
                        count.decode(tickets)?,
                        card_state.decode(cards)?,
                        player_id.decode(current)?,
                        PlayerMap::from_array([player_state.decode(first)?, player_state.decode(second)?]),
                        last_player.decode(last)?,
                    ))
                },
            )
        };

        Self {
            int,
            count,
            string,
            player_id,
            turn_kind,
            card,
            route,
            ticket,
            draw_slot,
            list_of_string,
            list_of_route,
            bag_of_card,
            bag_of_ticket,
            list_of_bag_of_card,
            public_card_state,
            public_player_state,
            player_state,
            public_game_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::state::GameState;

    #[test]
    fn test_int() {
        let codecs = Codecs::get();
        assert_eq!(codecs.int.encode(&2021), "2021");
        assert_eq!(codecs.int.decode("2021"), Ok(2021));
        assert_eq!(codecs.int.decode("-1"), Ok(-1));
        assert!(codecs.int.decode("20x1").is_err());
    }

    #[test]
    fn test_string_is_base64() {
        let codecs = Codecs::get();
        assert_eq!(codecs.string.encode(&"Charles".to_string()), "Q2hhcmxlcw==");
        assert_eq!(codecs.string.decode("Q2hhcmxlcw=="), Ok("Charles".to_string()));
        assert!(matches!(codecs.string.decode("not base64!"), Err(CodecError::InvalidBase64(_))));
    }

    #[test]
    fn test_ordinals() {
        let codecs = Codecs::get();
        assert_eq!(codecs.card.encode(&Card::Locomotive), "8");
        assert_eq!(codecs.turn_kind.encode(&TurnKind::ClaimRoute), "2");
        assert_eq!(codecs.player_id.decode("1"), Ok(PlayerId::PLAYER_2));
        let last = ChMap::get().routes().len() - 1;
        assert_eq!(codecs.route.encode(&ChMap::get().routes()[last]), last.to_string());
    }

    #[test]
    fn test_draw_slot() {
        let codecs = Codecs::get();
        assert_eq!(codecs.draw_slot.encode(&DrawSlot::Deck), "-1");
        assert_eq!(codecs.draw_slot.decode("2"), Ok(DrawSlot::FaceUp(2)));
        assert!(codecs.draw_slot.decode("5").is_err());
    }

    #[test]
    fn test_public_card_state() {
        let state = PublicCardState::new([Card::Black, Card::Violet, Card::Black, Card::Black, Card::Black], 12, 11);
        let codec = &Codecs::get().public_card_state;
        assert_eq!(codec.encode(&state), "0,1,0,0,0;12;11");
        assert_eq!(codec.decode("0,1,0,0,0;12;11"), Ok(state));
        assert_eq!(
            codec.decode("0,1,0,0;12;11"),
            Err(CodecError::FieldCount { expected: 5, found: 4 })
        );
    }

    #[test]
    fn test_public_player_state() {
        let routes = ChMap::get().routes();
        let state = PublicPlayerState::new(3, 5, [routes[0], routes[4]].into_iter().collect());
        let codec = &Codecs::get().public_player_state;
        assert_eq!(codec.encode(&state), "3;5;0,4");
        assert_eq!(codec.decode("3;5;0,4"), Ok(state));
        assert_eq!(codec.decode("0;0;").map(|s| s.routes().len()), Ok(0));
    }

    #[test]
    fn test_list_of_bag_of_card() {
        let codec = &Codecs::get().list_of_bag_of_card;
        let options = vec![
            Multiset::of_n(2, Card::Red),
            [Card::Red, Card::Locomotive].into_iter().collect(),
        ];
        assert_eq!(codec.encode(&options), "6,6;6,8");
        assert_eq!(codec.decode("6,6;6,8"), Ok(options));
    }

    #[test]
    fn test_public_game_state() {
        let state = GameState::initial(&ChMap::get().ticket_pool(), &mut GameRng::new(4)).redact();
        let codec = &Codecs::get().public_game_state;
        let encoded = codec.encode(&state);

        assert!(encoded.ends_with(':'), "no last player yet: {}", encoded);
        assert_eq!(encoded.split(':').count(), 6);
        assert_eq!(codec.decode(&encoded), Ok(state));
    }

    #[test]
    fn test_public_game_state_mid_game() {
        let map = ChMap::get();
        let state = GameState::initial(&map.ticket_pool(), &mut GameRng::new(9));
        let ada = PublicPlayerState::new(2, 7, [map.routes()[3], map.routes()[40]].into_iter().collect());
        let charles = PublicPlayerState::new(4, 1, [map.routes()[86]].into_iter().collect());
        let public = PublicGameState::new(
            state.ticket_count(),
            state.card_state().redact(),
            PlayerId::PLAYER_2,
            PlayerMap::from_array([ada, charles]),
            Some(PlayerId::PLAYER_1),
        );
        let codec = &Codecs::get().public_game_state;
        let encoded = codec.encode(&public);

        assert!(encoded.ends_with(":0"), "last player is the first one: {}", encoded);
        assert!(encoded.contains(":2;7;3,40:4;1;86:"), "player fields: {}", encoded);
        assert_eq!(codec.decode(&encoded), Ok(public));
    }

    #[test]
    fn test_player_state_with_tickets_and_routes() {
        let map = ChMap::get();
        // Bags encode in ticket order, which is text order.
        let tickets: Multiset<Ticket> = [map.tickets()[34].clone(), map.tickets()[6].clone()].into_iter().collect();
        let cards: Multiset<Card> = [Card::Blue, Card::Blue, Card::Locomotive].into_iter().collect();
        let own = PlayerState::new(tickets, cards, [map.routes()[1], map.routes()[2]].into_iter().collect());
        let codec = &Codecs::get().player_state;

        assert_eq!(codec.encode(&own), "6,34;2,2,8;1,2");
        assert_eq!(codec.decode("6,34;2,2,8;1,2"), Ok(own));
    }

    #[test]
    fn test_player_state() {
        let state = GameState::initial(&ChMap::get().ticket_pool(), &mut GameRng::new(4));
        let own = state.player_state(PlayerId::PLAYER_1).clone();
        let codec = &Codecs::get().player_state;
        assert_eq!(codec.decode(&codec.encode(&own)), Ok(own));
    }
}
