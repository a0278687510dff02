//! A bot that plays random legal moves.
//!
//! It claims a route whenever it can afford one, and otherwise draws cards
//! or tickets. Decisions only depend on its seed and on what the engine
//! tells it, so two bots with the same seed play the same match whether
//! they run locally or behind a socket.

use crate::cards::Card;
use crate::core::constants::{FACE_UP_CARDS_COUNT, MIN_INITIAL_TICKETS_KEPT};
use crate::core::{GameRng, Multiset, PlayerId, PlayerMap};
use crate::game::{DrawSlot, Player, PlayerError, PlayerResult, TurnKind};
use crate::map::{ChMap, Route, Ticket};
use crate::state::{PlayerState, PublicGameState};

/// Seeded random bot.
#[derive(Debug)]
pub struct RandomPlayer {
    rng: GameRng,
    own_id: Option<PlayerId>,
    state: Option<(PublicGameState, PlayerState)>,
    initial_tickets: Multiset<Ticket>,
    planned_claim: Option<(Route, Multiset<Card>)>,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            own_id: None,
            state: None,
            initial_tickets: Multiset::new(),
            planned_claim: None,
        }
    }

    /// Identity assigned by `init_players`, if any yet.
    #[must_use]
    pub fn own_id(&self) -> Option<PlayerId> {
        self.own_id
    }

    fn state(&self) -> PlayerResult<&(PublicGameState, PlayerState)> {
        self.state
            .as_ref()
            .ok_or_else(|| PlayerError::IllegalDecision("asked to play before receiving any state".to_string()))
    }

    /// A random non-empty sub-multiset of `options` of at least `min` elements.
    fn keep_some(&mut self, options: &Multiset<Ticket>, min: usize) -> Multiset<Ticket> {
        let mut tickets = options.to_vec();
        if tickets.is_empty() {
            return Multiset::new();
        }
        self.rng.shuffle(&mut tickets);
        let min = min.clamp(1, tickets.len());
        let count = min + self.rng.gen_index(tickets.len() - min + 1);
        tickets.into_iter().take(count).collect()
    }
}

impl Player for RandomPlayer {
    fn init_players(&mut self, own_id: PlayerId, _names: &PlayerMap<String>) -> PlayerResult<()> {
        self.own_id = Some(own_id);
        Ok(())
    }

    fn receive_info(&mut self, _info: &str) -> PlayerResult<()> {
        Ok(())
    }

    fn update_state(&mut self, state: &PublicGameState, own_state: &PlayerState) -> PlayerResult<()> {
        self.state = Some((state.clone(), own_state.clone()));
        Ok(())
    }

    fn set_initial_ticket_choice(&mut self, tickets: &Multiset<Ticket>) -> PlayerResult<()> {
        self.initial_tickets = tickets.clone();
        Ok(())
    }

    fn choose_initial_tickets(&mut self) -> PlayerResult<Multiset<Ticket>> {
        let offered = self.initial_tickets.clone();
        Ok(self.keep_some(&offered, MIN_INITIAL_TICKETS_KEPT))
    }

    fn next_turn(&mut self) -> PlayerResult<TurnKind> {
        let (public, own) = self.state()?;
        let claimed = public.claimed_routes();
        let claimable: Vec<Route> = ChMap::get()
            .routes()
            .iter()
            .filter(|r| !claimed.iter().any(|c| c.id() == r.id()))
            .filter(|r| own.can_claim_route(r))
            .copied()
            .collect();
        let can_draw_cards = public.can_draw_cards();
        let can_draw_tickets = public.can_draw_tickets();

        if let Some(&route) = self.rng.choose(&claimable) {
            let (_, own) = self.state()?;
            let options = own.possible_claim_cards(&route);
            self.planned_claim = options.into_iter().next().map(|cards| (route, cards));
            return Ok(TurnKind::ClaimRoute);
        }
        if can_draw_cards && (!can_draw_tickets || self.rng.gen_bool(0.9)) {
            return Ok(TurnKind::DrawCards);
        }
        if can_draw_tickets {
            return Ok(TurnKind::DrawTickets);
        }
        Ok(TurnKind::DrawCards)
    }

    fn choose_tickets(&mut self, options: &Multiset<Ticket>) -> PlayerResult<Multiset<Ticket>> {
        Ok(self.keep_some(options, 1))
    }

    fn draw_slot(&mut self) -> PlayerResult<DrawSlot> {
        let slot = self.rng.gen_index(FACE_UP_CARDS_COUNT + 1);
        Ok(if slot == FACE_UP_CARDS_COUNT {
            DrawSlot::Deck
        } else {
            DrawSlot::FaceUp(slot)
        })
    }

    fn claimed_route(&mut self) -> PlayerResult<Route> {
        self.planned_claim
            .as_ref()
            .map(|(route, _)| *route)
            .ok_or_else(|| PlayerError::IllegalDecision("no route was planned".to_string()))
    }

    fn initial_claim_cards(&mut self) -> PlayerResult<Multiset<Card>> {
        self.planned_claim
            .take()
            .map(|(_, cards)| cards)
            .ok_or_else(|| PlayerError::IllegalDecision("no route was planned".to_string()))
    }

    fn choose_additional_cards(&mut self, options: &[Multiset<Card>]) -> PlayerResult<Multiset<Card>> {
        Ok(options.first().cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    #[test]
    fn test_keeps_enough_initial_tickets() {
        let state = GameState::initial(&ChMap::get().ticket_pool(), &mut GameRng::new(1));
        let offered = state.top_tickets(5);
        for seed in 0..20 {
            let mut player = RandomPlayer::new(seed);
            player.set_initial_ticket_choice(&offered).unwrap();
            let kept = player.choose_initial_tickets().unwrap();
            assert!(kept.size() >= 3 && kept.size() <= 5);
            assert!(offered.contains_all(&kept));
        }
    }

    #[test]
    fn test_claims_affordable_route() {
        let state = GameState::initial(&ChMap::get().ticket_pool(), &mut GameRng::new(1));
        let own = state.current_player_state().with_added_cards(&Multiset::of_n(6, Card::Locomotive));
        let mut player = RandomPlayer::new(3);
        player.update_state(&state.redact(), &own).unwrap();

        assert_eq!(player.next_turn().unwrap(), TurnKind::ClaimRoute);
        let route = player.claimed_route().unwrap();
        let cards = player.initial_claim_cards().unwrap();
        assert!(own.possible_claim_cards(&route).contains(&cards));
    }

    #[test]
    fn test_needs_state_before_playing() {
        let mut player = RandomPlayer::new(0);
        assert!(matches!(player.next_turn(), Err(PlayerError::IllegalDecision(_))));
    }

    #[test]
    fn test_same_seed_same_decisions() {
        let mut a = RandomPlayer::new(9);
        let mut b = RandomPlayer::new(9);
        for _ in 0..10 {
            assert_eq!(a.draw_slot().unwrap(), b.draw_slot().unwrap());
        }
    }
}
