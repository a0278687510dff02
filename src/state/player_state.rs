//! Per-player state.
//!
//! `PlayerState` holds a player's tickets, hand and claimed routes.
//! `PublicPlayerState` keeps only counts for the hidden parts; claimed routes
//! are public. Both derive the car count and the claim points.

use im::Vector;
use serde::Serialize;

use crate::cards::Card;
use crate::core::constants::{ADDITIONAL_TUNNEL_CARDS, INITIAL_CARDS_COUNT, INITIAL_CAR_COUNT};
use crate::core::Multiset;
use crate::map::{Route, StationPartitionBuilder, Ticket};

fn car_count(routes: &Vector<Route>) -> u32 {
    let used: u32 = routes.iter().map(|r| u32::from(r.length())).sum();
    INITIAL_CAR_COUNT.saturating_sub(used)
}

fn claim_points(routes: &Vector<Route>) -> u32 {
    routes.iter().map(Route::claim_points).sum()
}

/// Redacted player state, visible to every player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicPlayerState {
    ticket_count: usize,
    card_count: usize,
    routes: Vector<Route>,
    car_count: u32,
    claim_points: u32,
}

impl PublicPlayerState {
    #[must_use]
    pub fn new(ticket_count: usize, card_count: usize, routes: Vector<Route>) -> Self {
        let car_count = car_count(&routes);
        let claim_points = claim_points(&routes);
        Self {
            ticket_count,
            card_count,
            routes,
            car_count,
            claim_points,
        }
    }

    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.ticket_count
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Claimed routes, in claim order.
    #[must_use]
    pub fn routes(&self) -> &Vector<Route> {
        &self.routes
    }

    /// Cars left to claim routes with.
    #[must_use]
    pub fn car_count(&self) -> u32 {
        self.car_count
    }

    /// Points earned by claimed routes alone.
    #[must_use]
    pub fn claim_points(&self) -> u32 {
        self.claim_points
    }
}

/// Authoritative player state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    tickets: Multiset<Ticket>,
    cards: Multiset<Card>,
    routes: Vector<Route>,
    car_count: u32,
    claim_points: u32,
}

impl PlayerState {
    #[must_use]
    pub fn new(tickets: Multiset<Ticket>, cards: Multiset<Card>, routes: Vector<Route>) -> Self {
        let car_count = car_count(&routes);
        let claim_points = claim_points(&routes);
        Self {
            tickets,
            cards,
            routes,
            car_count,
            claim_points,
        }
    }

    /// State of a player holding only their initial hand.
    ///
    /// Panics unless `cards` is a full initial hand.
    #[must_use]
    pub fn initial(cards: Multiset<Card>) -> Self {
        assert!(
            cards.size() == INITIAL_CARDS_COUNT,
            "An initial hand holds {} cards, got {}",
            INITIAL_CARDS_COUNT,
            cards.size()
        );
        Self::new(Multiset::new(), cards, Vector::new())
    }

    /// Project to what every player may see.
    #[must_use]
    pub fn redact(&self) -> PublicPlayerState {
        PublicPlayerState::new(self.tickets.size(), self.cards.size(), self.routes.clone())
    }

    #[must_use]
    pub fn tickets(&self) -> &Multiset<Ticket> {
        &self.tickets
    }

    #[must_use]
    pub fn cards(&self) -> &Multiset<Card> {
        &self.cards
    }

    #[must_use]
    pub fn routes(&self) -> &Vector<Route> {
        &self.routes
    }

    #[must_use]
    pub fn car_count(&self) -> u32 {
        self.car_count
    }

    #[must_use]
    pub fn claim_points(&self) -> u32 {
        self.claim_points
    }

    #[must_use]
    pub fn with_added_tickets(&self, tickets: &Multiset<Ticket>) -> Self {
        Self::new(self.tickets.union(tickets), self.cards.clone(), self.routes.clone())
    }

    #[must_use]
    pub fn with_added_card(&self, card: Card) -> Self {
        self.with_added_cards(&Multiset::of_n(1, card))
    }

    #[must_use]
    pub fn with_added_cards(&self, cards: &Multiset<Card>) -> Self {
        Self::new(self.tickets.clone(), self.cards.union(cards), self.routes.clone())
    }

    /// Check if the player has the cars and the cards to claim `route`.
    #[must_use]
    pub fn can_claim_route(&self, route: &Route) -> bool {
        !self.possible_claim_cards(route).is_empty()
    }

    /// Every combination from the hand that pays for `route`.
    ///
    /// Ordered by ascending locomotive count. Empty when the player lacks
    /// the cars.
    #[must_use]
    pub fn possible_claim_cards(&self, route: &Route) -> Vec<Multiset<Card>> {
        if self.car_count < u32::from(route.length()) {
            return Vec::new();
        }
        route
            .possible_claim_cards()
            .into_iter()
            .filter(|option| self.cards.contains_all(option))
            .collect()
    }

    /// Every way to pay `additional_count` extra cards for a tunnel.
    ///
    /// Extra cards come from the hand left after `initial_cards` and must be
    /// locomotives or of the initial payment's color. Options are ordered
    /// by ascending locomotive count.
    ///
    /// Panics unless `additional_count` is between 1 and 3, `initial_cards`
    /// is non-empty with at most one car color, and `drawn_cards` holds the
    /// three revealed cards.
    #[must_use]
    pub fn possible_additional_cards(
        &self,
        additional_count: usize,
        initial_cards: &Multiset<Card>,
        drawn_cards: &Multiset<Card>,
    ) -> Vec<Multiset<Card>> {
        assert!(
            (1..=ADDITIONAL_TUNNEL_CARDS).contains(&additional_count),
            "Additional card count {} out of range",
            additional_count
        );
        assert!(!initial_cards.is_empty(), "The initial payment cannot be empty");
        let cars: Vec<Card> = initial_cards.distinct().copied().filter(|c| !c.is_locomotive()).collect();
        assert!(cars.len() <= 1, "The initial payment mixes {} car colors", cars.len());
        assert!(
            drawn_cards.size() == ADDITIONAL_TUNNEL_CARDS,
            "Expected {} revealed cards, got {}",
            ADDITIONAL_TUNNEL_CARDS,
            drawn_cards.size()
        );

        let car = cars.first().copied();
        let usable = self
            .cards
            .difference(initial_cards)
            .filter(|&c| c.is_locomotive() || Some(c) == car);

        let mut options = usable.subsets_of_size(additional_count);
        options.sort_by_key(|option| option.count(&Card::Locomotive));
        options
    }

    /// Spend `cards` on `route`.
    ///
    /// Panics if the hand does not hold `cards`.
    #[must_use]
    pub fn with_claimed_route(&self, route: Route, cards: &Multiset<Card>) -> Self {
        assert!(self.cards.contains_all(cards), "Cannot spend cards the player does not hold");
        let mut routes = self.routes.clone();
        routes.push_back(route);
        Self::new(self.tickets.clone(), self.cards.difference(cards), routes)
    }

    /// Net score of all tickets against the claimed network.
    #[must_use]
    pub fn ticket_points(&self) -> i32 {
        let size = self
            .routes
            .iter()
            .flat_map(|r| r.stations())
            .map(|s| s.id() + 1)
            .max()
            .unwrap_or(0);
        let mut builder = StationPartitionBuilder::new(size);
        for route in &self.routes {
            builder.connect(route.station1(), route.station2());
        }
        let partition = builder.build();
        self.tickets.iter().map(|t| t.points(&partition)).sum()
    }

    /// Claim points plus ticket points, without the trail bonus.
    #[must_use]
    pub fn final_points(&self) -> i32 {
        self.claim_points as i32 + self.ticket_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::map::{Level, Station};

    const LAU: Station = Station::new(0, "Lausanne");
    const FRI: Station = Station::new(1, "Fribourg");
    const BER: Station = Station::new(2, "Berne");
    const ZUR: Station = Station::new(3, "Zürich");

    fn bag(cards: &[Card]) -> Multiset<Card> {
        cards.iter().copied().collect()
    }

    fn surface(id: &'static str, s1: Station, s2: Station, length: u8, color: Option<Color>) -> Route {
        Route::new(id, s1, s2, length, Level::Surface, color)
    }

    fn tunnel(id: &'static str, s1: Station, s2: Station, length: u8, color: Option<Color>) -> Route {
        Route::new(id, s1, s2, length, Level::Tunnel, color)
    }

    #[test]
    #[should_panic(expected = "initial hand")]
    fn test_initial_requires_four_cards() {
        let _ = PlayerState::initial(bag(&[Card::Red]));
    }

    #[test]
    fn test_initial_counts() {
        let state = PlayerState::initial(bag(&[Card::Red, Card::Red, Card::Blue, Card::Locomotive]));
        assert_eq!(state.car_count(), 40);
        assert_eq!(state.claim_points(), 0);
        assert!(state.tickets().is_empty());
        assert_eq!(state.redact().card_count(), 4);
    }

    #[test]
    fn test_surface_route_ignores_locomotives() {
        let state = PlayerState::initial(bag(&[Card::Black, Card::Locomotive, Card::Orange, Card::Orange]));
        let route = surface("LAU_FRI_1", LAU, FRI, 2, Some(Color::Orange));

        assert_eq!(state.possible_claim_cards(&route), vec![bag(&[Card::Orange, Card::Orange])]);
        assert!(state.can_claim_route(&route));
    }

    #[test]
    fn test_tunnel_route_accepts_locomotives() {
        let state = PlayerState::initial(bag(&[Card::Black, Card::Locomotive, Card::Orange, Card::Orange]));
        let route = tunnel("LAU_FRI_1", LAU, FRI, 2, None);

        assert_eq!(
            state.possible_claim_cards(&route),
            vec![
                bag(&[Card::Orange, Card::Orange]),
                bag(&[Card::Black, Card::Locomotive]),
                bag(&[Card::Orange, Card::Locomotive]),
            ]
        );
    }

    #[test]
    fn test_cannot_claim_without_cars() {
        let mut state = PlayerState::initial(bag(&[Card::Red, Card::Red, Card::Red, Card::Red]));
        let long = surface("LAU_FRI_1", LAU, FRI, 6, None);
        for _ in 0..6 {
            state = state.with_added_cards(&Multiset::of_n(6, Card::Red));
            state = state.with_claimed_route(long, &Multiset::of_n(6, Card::Red));
        }
        assert_eq!(state.car_count(), 4);

        let five = surface("BER_ZUR_1", BER, ZUR, 5, None);
        assert!(!state.can_claim_route(&five));
        assert!(state.possible_claim_cards(&five).is_empty());
    }

    #[test]
    fn test_possible_additional_cards() {
        let state = PlayerState::initial(bag(&[Card::Red, Card::Red, Card::Blue, Card::Locomotive]))
            .with_added_cards(&bag(&[Card::Red, Card::Locomotive]));
        let initial = bag(&[Card::Red]);
        let drawn = bag(&[Card::Red, Card::Locomotive, Card::Green]);

        assert_eq!(
            state.possible_additional_cards(2, &initial, &drawn),
            vec![
                bag(&[Card::Red, Card::Red]),
                bag(&[Card::Red, Card::Locomotive]),
                bag(&[Card::Locomotive, Card::Locomotive]),
            ]
        );
    }

    #[test]
    fn test_possible_additional_cards_after_locomotive_payment() {
        let state = PlayerState::initial(bag(&[Card::Red, Card::Locomotive, Card::Locomotive, Card::Locomotive]));
        let initial = bag(&[Card::Locomotive, Card::Locomotive]);
        let drawn = bag(&[Card::Locomotive, Card::Blue, Card::Green]);

        assert_eq!(state.possible_additional_cards(1, &initial, &drawn), vec![bag(&[Card::Locomotive])]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_possible_additional_cards_count_checked() {
        let state = PlayerState::initial(bag(&[Card::Red, Card::Red, Card::Red, Card::Red]));
        let _ = state.possible_additional_cards(4, &bag(&[Card::Red]), &bag(&[Card::Red, Card::Red, Card::Red]));
    }

    #[test]
    #[should_panic(expected = "mixes")]
    fn test_possible_additional_cards_single_color() {
        let state = PlayerState::initial(bag(&[Card::Red, Card::Red, Card::Blue, Card::Blue]));
        let _ = state.possible_additional_cards(1, &bag(&[Card::Red, Card::Blue]), &bag(&[Card::Red, Card::Red, Card::Red]));
    }

    #[test]
    fn test_claim_and_points() {
        let state = PlayerState::initial(bag(&[Card::Red, Card::Red, Card::Red, Card::Blue]))
            .with_added_tickets(&[Ticket::single(LAU, BER, 5), Ticket::single(LAU, ZUR, 7)].into_iter().collect());
        let state = state
            .with_claimed_route(surface("LAU_FRI_1", LAU, FRI, 2, None), &bag(&[Card::Red, Card::Red]))
            .with_claimed_route(surface("FRI_BER_1", FRI, BER, 1, None), &bag(&[Card::Red]));

        assert_eq!(state.cards(), &bag(&[Card::Blue]));
        assert_eq!(state.car_count(), 37);
        assert_eq!(state.claim_points(), 3);
        assert_eq!(state.ticket_points(), 5 - 7);
        assert_eq!(state.final_points(), 3 - 2);

        let public = state.redact();
        assert_eq!(public.ticket_count(), 2);
        assert_eq!(public.routes().len(), 2);
        assert_eq!(public.car_count(), 37);
    }

    #[test]
    fn test_ticket_points_without_routes() {
        let state = PlayerState::initial(bag(&[Card::Red, Card::Red, Card::Red, Card::Blue]))
            .with_added_tickets(&Multiset::of_n(1, Ticket::single(LAU, BER, 5)));
        assert_eq!(state.ticket_points(), -5);
    }
}
