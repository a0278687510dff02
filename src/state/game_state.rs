//! Match state and its turn transitions.
//!
//! ## PublicGameState
//!
//! What every player sees: ticket deck size, the public card state, whose
//! turn it is, the public state of both players, and the last player once
//! the end of the match has been triggered.
//!
//! ## GameState
//!
//! The authoritative state held by the engine: the ticket deck, the full
//! card state and both complete player states. Every transition returns a
//! new value.
//!
//! ## End of match
//!
//! When a player ends a turn with at most two cars left, `for_next_turn`
//! records them as the last player. The match is over once the turn comes
//! back to that player.

use serde::Serialize;

use super::card_state::{CardState, PublicCardState};
use super::player_state::{PlayerState, PublicPlayerState};
use crate::cards::Card;
use crate::core::constants::{INITIAL_CARDS_COUNT, LAST_TURN_CAR_THRESHOLD, MIN_CARDS_TO_DRAW};
use crate::core::{Deck, GameRng, Multiset, PlayerId, PlayerMap};
use crate::map::{Route, Ticket};

/// Redacted match state, visible to every player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicGameState {
    ticket_count: usize,
    card_state: PublicCardState,
    current_player: PlayerId,
    player_states: PlayerMap<PublicPlayerState>,
    last_player: Option<PlayerId>,
}

impl PublicGameState {
    #[must_use]
    pub fn new(
        ticket_count: usize,
        card_state: PublicCardState,
        current_player: PlayerId,
        player_states: PlayerMap<PublicPlayerState>,
        last_player: Option<PlayerId>,
    ) -> Self {
        Self {
            ticket_count,
            card_state,
            current_player,
            player_states,
            last_player,
        }
    }

    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.ticket_count
    }

    #[must_use]
    pub fn can_draw_tickets(&self) -> bool {
        self.ticket_count > 0
    }

    #[must_use]
    pub fn card_state(&self) -> &PublicCardState {
        &self.card_state
    }

    /// Check if deck and discards together hold enough cards to draw.
    #[must_use]
    pub fn can_draw_cards(&self) -> bool {
        self.card_state.total_size() >= MIN_CARDS_TO_DRAW
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn player_state(&self, player: PlayerId) -> &PublicPlayerState {
        &self.player_states[player]
    }

    #[must_use]
    pub fn player_states(&self) -> &PlayerMap<PublicPlayerState> {
        &self.player_states
    }

    #[must_use]
    pub fn current_player_state(&self) -> &PublicPlayerState {
        &self.player_states[self.current_player]
    }

    /// Routes claimed by either player.
    #[must_use]
    pub fn claimed_routes(&self) -> Vec<Route> {
        self.player_states
            .iter()
            .flat_map(|(_, state)| state.routes().iter().copied())
            .collect()
    }

    #[must_use]
    pub fn last_player(&self) -> Option<PlayerId> {
        self.last_player
    }
}

/// Authoritative match state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    tickets: Deck<Ticket>,
    card_state: CardState,
    current_player: PlayerId,
    player_states: PlayerMap<PlayerState>,
    last_player: Option<PlayerId>,
}

impl GameState {
    /// Shuffle the cards and the ticket pool, deal every player an initial
    /// hand and pick the first player at random.
    #[must_use]
    pub fn initial(tickets: &Multiset<Ticket>, rng: &mut GameRng) -> Self {
        let mut deck = Deck::of(&Card::full_set(), rng);
        let player_states = PlayerMap::new(|_| {
            let hand = deck.top_cards(INITIAL_CARDS_COUNT);
            deck = deck.without_top_cards(INITIAL_CARDS_COUNT);
            PlayerState::initial(hand)
        });
        let card_state = CardState::of(&deck);
        let tickets = Deck::of(tickets, rng);
        let current_player = PlayerId::ALL[rng.gen_index(PlayerId::COUNT)];

        Self {
            tickets,
            card_state,
            current_player,
            player_states,
            last_player: None,
        }
    }

    /// Project to what every player may see.
    #[must_use]
    pub fn redact(&self) -> PublicGameState {
        PublicGameState::new(
            self.tickets.size(),
            self.card_state.redact(),
            self.current_player,
            self.player_states.map(|_, state| state.redact()),
            self.last_player,
        )
    }

    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.tickets.size()
    }

    #[must_use]
    pub fn card_state(&self) -> &CardState {
        &self.card_state
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn last_player(&self) -> Option<PlayerId> {
        self.last_player
    }

    #[must_use]
    pub fn player_state(&self, player: PlayerId) -> &PlayerState {
        &self.player_states[player]
    }

    #[must_use]
    pub fn current_player_state(&self) -> &PlayerState {
        &self.player_states[self.current_player]
    }

    #[must_use]
    pub fn can_draw_tickets(&self) -> bool {
        !self.tickets.is_empty()
    }

    /// Check if deck and discards together hold enough cards to draw.
    #[must_use]
    pub fn can_draw_cards(&self) -> bool {
        self.card_state.deck_size() + self.card_state.discards_size() >= MIN_CARDS_TO_DRAW
    }

    /// The `count` top tickets. Panics unless `count <= ticket_count()`.
    #[must_use]
    pub fn top_tickets(&self, count: usize) -> Multiset<Ticket> {
        self.tickets.top_cards(count)
    }

    #[must_use]
    pub fn without_top_tickets(&self, count: usize) -> Self {
        Self {
            tickets: self.tickets.without_top_cards(count),
            ..self.clone()
        }
    }

    /// Top of the card deck. Panics if the deck is empty.
    #[must_use]
    pub fn top_card(&self) -> Card {
        self.card_state.top_deck_card()
    }

    #[must_use]
    pub fn without_top_card(&self) -> Self {
        self.with_card_state(self.card_state.without_top_deck_card())
    }

    #[must_use]
    pub fn with_more_discarded_cards(&self, cards: &Multiset<Card>) -> Self {
        self.with_card_state(self.card_state.with_more_discarded_cards(cards))
    }

    /// Reshuffle the discards into the deck if the deck is empty.
    #[must_use]
    pub fn with_cards_deck_recreated_if_needed(&self, rng: &mut GameRng) -> Self {
        if self.card_state.is_deck_empty() {
            self.with_card_state(self.card_state.with_deck_recreated_from_discards(rng))
        } else {
            self.clone()
        }
    }

    /// Give `player` their initial tickets.
    ///
    /// Panics if the player already holds tickets.
    #[must_use]
    pub fn with_initially_chosen_tickets(&self, player: PlayerId, chosen: &Multiset<Ticket>) -> Self {
        let state = &self.player_states[player];
        assert!(state.tickets().is_empty(), "{} already chose their initial tickets", player);
        self.with_player_state(player, state.with_added_tickets(chosen))
    }

    /// The current player keeps `chosen` out of the `drawn` tickets.
    ///
    /// Every drawn ticket leaves the ticket deck, kept or not.
    /// Panics unless `chosen` is a sub-multiset of `drawn`.
    #[must_use]
    pub fn with_chosen_additional_tickets(&self, drawn: &Multiset<Ticket>, chosen: &Multiset<Ticket>) -> Self {
        assert!(drawn.contains_all(chosen), "Chosen tickets must come from the drawn ones");
        let player = self.current_player;
        let next = self.with_player_state(player, self.player_states[player].with_added_tickets(chosen));
        Self {
            tickets: self.tickets.without_top_cards(drawn.size()),
            ..next
        }
    }

    /// The current player takes the face-up card in `slot`.
    ///
    /// Panics unless `can_draw_cards()`.
    #[must_use]
    pub fn with_drawn_face_up_card(&self, slot: usize) -> Self {
        assert!(self.can_draw_cards(), "Not enough cards left to draw");
        let card = self.card_state.face_up_card(slot);
        self.with_card_state(self.card_state.with_drawn_face_up_card(slot))
            .with_current_player_card(card)
    }

    /// The current player takes the top card of the deck.
    ///
    /// Panics unless `can_draw_cards()`.
    #[must_use]
    pub fn with_blindly_drawn_card(&self) -> Self {
        assert!(self.can_draw_cards(), "Not enough cards left to draw");
        let card = self.card_state.top_deck_card();
        self.with_card_state(self.card_state.without_top_deck_card())
            .with_current_player_card(card)
    }

    /// The current player claims `route`, discarding `cards`.
    #[must_use]
    pub fn with_claimed_route(&self, route: Route, cards: &Multiset<Card>) -> Self {
        let player = self.current_player;
        self.with_player_state(player, self.player_states[player].with_claimed_route(route, cards))
            .with_more_discarded_cards(cards)
    }

    /// Check if the current player's turn triggers the end of the match.
    #[must_use]
    pub fn last_turn_begins(&self) -> bool {
        self.last_player.is_none() && self.current_player_state().car_count() <= LAST_TURN_CAR_THRESHOLD
    }

    /// Hand the turn to the next player, recording the current one as the
    /// last player if the end of the match was just triggered.
    #[must_use]
    pub fn for_next_turn(&self) -> Self {
        let last_player = if self.last_turn_begins() {
            Some(self.current_player)
        } else {
            self.last_player
        };
        Self {
            current_player: self.current_player.next(),
            last_player,
            ..self.clone()
        }
    }

    /// Check if the turn has come back to the last player.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.last_player == Some(self.current_player)
    }

    fn with_card_state(&self, card_state: CardState) -> Self {
        Self {
            card_state,
            ..self.clone()
        }
    }

    fn with_player_state(&self, player: PlayerId, state: PlayerState) -> Self {
        Self {
            player_states: self.player_states.with(player, state),
            ..self.clone()
        }
    }

    fn with_current_player_card(&self, card: Card) -> Self {
        let player = self.current_player;
        self.with_player_state(player, self.player_states[player].with_added_card(card))
    }
}
