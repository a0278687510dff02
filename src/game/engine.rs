//! Plays one complete match.
//!
//! `play` holds the only authoritative `GameState`. It asks the current
//! player for decisions, checks them against the rules and derives the next
//! state. After every change the players receive the public state and
//! their own private state.
//!
//! ## Turn structure
//!
//! 1. Initial tickets: each player is offered five and keeps at least three.
//! 2. Turns: draw tickets, draw two cards, or claim a route (tunnels reveal
//!    three extra cards that may raise the cost).
//! 3. Once a player ends a turn with two cars or fewer, the match ends when
//!    the turn comes back to them.
//! 4. Scoring: claim points, ticket points, and the longest trail bonus.

use crate::cards::Card;
use crate::core::constants::{
    ADDITIONAL_TUNNEL_CARDS, IN_GAME_TICKETS_COUNT, INITIAL_TICKETS_COUNT, LONGEST_TRAIL_BONUS_POINTS,
    MIN_INITIAL_TICKETS_KEPT,
};
use crate::core::{GameRng, MatchConfig, Multiset, PlayerId, PlayerMap};
use crate::map::{ChMap, Level, Route, Ticket, Trail};
use crate::state::GameState;

use super::info::GameEvent;
use super::player::{DrawSlot, Player, PlayerError, PlayerResult, TurnKind};

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(PlayerId),
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Final scores of a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub result: GameResult,
    /// Final points, longest trail bonus included.
    pub points: PlayerMap<i32>,
    pub longest_trails: PlayerMap<Trail>,
    /// Number of turns played.
    pub turns: u32,
}

fn illegal<T>(message: impl Into<String>) -> PlayerResult<T> {
    Err(PlayerError::IllegalDecision(message.into()))
}

/// Drives a single match.
struct Match<'a, P: Player> {
    players: &'a mut PlayerMap<P>,
    names: PlayerMap<String>,
    state: GameState,
    rng: GameRng,
}

impl<P: Player> Match<'_, P> {
    fn name(&self, player: PlayerId) -> String {
        self.names[player].clone()
    }

    fn current_name(&self) -> String {
        self.name(self.state.current_player())
    }

    fn current(&mut self) -> &mut P {
        self.players.get_mut(self.state.current_player())
    }

    fn announce(&mut self, event: GameEvent) -> PlayerResult<()> {
        let text = event.to_string();
        log::debug!("{}", text);
        for (_, player) in self.players.iter_mut() {
            player.receive_info(&text)?;
        }
        Ok(())
    }

    fn broadcast_state(&mut self) -> PlayerResult<()> {
        let public = self.state.redact();
        for (id, player) in self.players.iter_mut() {
            player.update_state(&public, self.state.player_state(id))?;
        }
        Ok(())
    }

    fn choose_initial_tickets(&mut self) -> PlayerResult<()> {
        let mut offers = Vec::with_capacity(PlayerId::COUNT);
        for id in PlayerId::all() {
            let offered = self.state.top_tickets(INITIAL_TICKETS_COUNT);
            self.players.get_mut(id).set_initial_ticket_choice(&offered)?;
            self.state = self.state.without_top_tickets(INITIAL_TICKETS_COUNT);
            offers.push((id, offered));
        }
        self.broadcast_state()?;

        let mut kept = Vec::with_capacity(PlayerId::COUNT);
        for (id, offered) in offers {
            let chosen = self.players.get_mut(id).choose_initial_tickets()?;
            if !offered.contains_all(&chosen) || chosen.size() < MIN_INITIAL_TICKETS_KEPT {
                return illegal(format!("{} kept an invalid set of initial tickets", id));
            }
            self.state = self.state.with_initially_chosen_tickets(id, &chosen);
            kept.push((id, chosen.size()));
        }
        for (id, count) in kept {
            self.announce(GameEvent::KeptTickets {
                player: self.name(id),
                count,
            })?;
        }
        Ok(())
    }

    fn draw_tickets(&mut self) -> PlayerResult<()> {
        if !self.state.can_draw_tickets() {
            return illegal("no ticket left to draw");
        }
        let drawn = self.state.top_tickets(IN_GAME_TICKETS_COUNT.min(self.state.ticket_count()));
        self.announce(GameEvent::DrewTickets {
            player: self.current_name(),
            count: drawn.size(),
        })?;
        let chosen = self.current().choose_tickets(&drawn)?;
        if chosen.is_empty() || !drawn.contains_all(&chosen) {
            return illegal("kept tickets must be a non-empty subset of the drawn ones");
        }
        self.state = self.state.with_chosen_additional_tickets(&drawn, &chosen);
        self.announce(GameEvent::KeptTickets {
            player: self.current_name(),
            count: chosen.size(),
        })
    }

    fn draw_cards(&mut self) -> PlayerResult<()> {
        if !self.state.can_draw_cards() {
            return illegal("not enough cards left to draw");
        }
        for draw in 0..2 {
            if draw == 1 {
                if !self.state.can_draw_cards() {
                    log::debug!("skipping second draw, not enough cards left");
                    break;
                }
                self.broadcast_state()?;
            }
            self.state = self.state.with_cards_deck_recreated_if_needed(&mut self.rng);
            let slot = self.current().draw_slot()?;
            match slot {
                DrawSlot::Deck => {
                    self.state = self.state.with_blindly_drawn_card();
                    self.announce(GameEvent::DrewBlindCard {
                        player: self.current_name(),
                    })?;
                }
                DrawSlot::FaceUp(slot) => {
                    let card = self.state.card_state().face_up_card(slot);
                    self.state = self.state.with_drawn_face_up_card(slot);
                    self.announce(GameEvent::DrewVisibleCard {
                        player: self.current_name(),
                        card,
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Reveal the tunnel cards; they go to the discards once counted.
    fn reveal_tunnel_cards(&mut self) -> Multiset<Card> {
        let mut builder = Multiset::builder();
        for _ in 0..ADDITIONAL_TUNNEL_CARDS {
            self.state = self.state.with_cards_deck_recreated_if_needed(&mut self.rng);
            builder.add(self.state.top_card());
            self.state = self.state.without_top_card();
        }
        let drawn = builder.build();
        self.state = self.state.with_more_discarded_cards(&drawn);
        drawn
    }

    fn claim_route(&mut self) -> PlayerResult<()> {
        let route = self.current().claimed_route()?;
        let cards = self.current().initial_claim_cards()?;
        self.check_claim(&route, &cards)?;

        if route.level() == Level::Surface {
            self.state = self.state.with_claimed_route(route, &cards);
            return self.announce(GameEvent::ClaimedRoute {
                player: self.current_name(),
                route,
                cards,
            });
        }

        self.announce(GameEvent::AttemptsTunnelClaim {
            player: self.current_name(),
            route,
            cards: cards.clone(),
        })?;
        let card_state = self.state.card_state();
        if card_state.deck_size() + card_state.discards_size() < ADDITIONAL_TUNNEL_CARDS {
            log::debug!("too few cards left to reveal for tunnel {}", route.id());
            return self.announce(GameEvent::DidNotClaimRoute {
                player: self.current_name(),
                route,
            });
        }
        let drawn = self.reveal_tunnel_cards();
        let additional_cost = route.additional_claim_cards_count(&cards, &drawn);
        self.announce(GameEvent::DrewAdditionalCards {
            player: self.current_name(),
            cards: drawn.clone(),
            additional_cost,
        })?;

        let mut paid = cards.clone();
        if additional_cost > 0 {
            let options = self
                .state
                .current_player_state()
                .possible_additional_cards(additional_cost, &cards, &drawn);
            let chosen = if options.is_empty() {
                Multiset::new()
            } else {
                self.current().choose_additional_cards(&options)?
            };
            if chosen.is_empty() {
                return self.announce(GameEvent::DidNotClaimRoute {
                    player: self.current_name(),
                    route,
                });
            }
            if !options.contains(&chosen) {
                return illegal("additional cards must be one of the offered options");
            }
            paid = paid.union(&chosen);
        }

        self.state = self.state.with_claimed_route(route, &paid);
        self.announce(GameEvent::ClaimedRoute {
            player: self.current_name(),
            route,
            cards: paid,
        })
    }

    fn check_claim(&self, route: &Route, cards: &Multiset<Card>) -> PlayerResult<()> {
        let map = ChMap::get();
        if map.route_index(route).map(|i| map.routes()[i] == *route) != Some(true) {
            return illegal(format!("route {} is not on the map", route.id()));
        }
        if self.state.redact().claimed_routes().iter().any(|r| r.id() == route.id()) {
            return illegal(format!("route {} is already claimed", route.id()));
        }
        if !self.state.current_player_state().possible_claim_cards(route).contains(cards) {
            return illegal(format!("cards cannot pay for route {}", route.id()));
        }
        Ok(())
    }

    fn play_turn(&mut self) -> PlayerResult<()> {
        self.announce(GameEvent::CanPlay {
            player: self.current_name(),
        })?;
        self.broadcast_state()?;
        let kind = self.current().next_turn()?;
        log::debug!("{} chose {:?}", self.state.current_player(), kind);
        match kind {
            TurnKind::DrawTickets => self.draw_tickets(),
            TurnKind::DrawCards => self.draw_cards(),
            TurnKind::ClaimRoute => self.claim_route(),
        }
    }

    fn finish(&mut self, turns: u32) -> PlayerResult<GameOutcome> {
        self.broadcast_state()?;

        let longest_trails = PlayerMap::new(|id| {
            let routes: Vec<Route> = self.state.player_state(id).routes().iter().copied().collect();
            Trail::longest(&routes)
        });
        let best = longest_trails.iter().map(|(_, t)| t.length()).max().unwrap_or(0);
        let mut points = PlayerMap::new(|id| self.state.player_state(id).final_points());
        for id in PlayerId::all() {
            if longest_trails[id].length() == best {
                *points.get_mut(id) += LONGEST_TRAIL_BONUS_POINTS;
                self.announce(GameEvent::GetsLongestTrailBonus {
                    player: self.name(id),
                    trail: longest_trails[id].clone(),
                })?;
            }
        }

        let [first, second] = PlayerId::ALL;
        let result = if points[first] == points[second] {
            self.announce(GameEvent::Draw {
                players: PlayerId::all().map(|id| self.name(id)).collect(),
                points: points[first],
            })?;
            GameResult::Draw
        } else {
            let (winner, loser) = if points[first] > points[second] {
                (first, second)
            } else {
                (second, first)
            };
            self.announce(GameEvent::Won {
                player: self.name(winner),
                points: points[winner],
                loser_points: points[loser],
            })?;
            GameResult::Winner(winner)
        };
        log::info!("match over after {} turns: {:?}", turns, result);

        Ok(GameOutcome {
            result,
            points,
            longest_trails,
            turns,
        })
    }
}

/// Play a complete match between `players`, drawing tickets from `tickets`.
///
/// Returns the outcome, or the first error a player reported. A player that
/// breaks the rules ends the match with `PlayerError::IllegalDecision`.
pub fn play<P: Player>(
    config: &MatchConfig,
    players: &mut PlayerMap<P>,
    tickets: &Multiset<Ticket>,
) -> PlayerResult<GameOutcome> {
    let mut rng = config.rng();
    log::info!("starting match with seed {}", rng.seed());

    for (id, player) in players.iter_mut() {
        player.init_players(id, &config.player_names)?;
    }
    let state = GameState::initial(tickets, &mut rng);
    let mut game = Match {
        players,
        names: config.player_names.clone(),
        state,
        rng,
    };

    game.announce(GameEvent::WillPlayFirst {
        player: game.current_name(),
    })?;
    game.choose_initial_tickets()?;

    let mut turns = 0;
    loop {
        game.play_turn()?;
        turns += 1;
        if game.state.last_turn_begins() {
            let car_count = game.state.current_player_state().car_count();
            game.announce(GameEvent::LastTurnBegins {
                player: game.current_name(),
                car_count,
            })?;
        }
        game.state = game.state.for_next_turn();
        if game.state.is_terminal() {
            break;
        }
    }
    game.finish(turns)
}
