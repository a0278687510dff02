//! Routes between two stations, and the cards that pay for them.
//!
//! ## Payment rules
//!
//! - A surface route of length `n` is paid with `n` car cards of its color,
//!   or of any single color when the route is neutral.
//! - A tunnel additionally accepts locomotives in place of any car card.
//! - Claiming a tunnel reveals three cards from the deck; each revealed card
//!   that is a locomotive or matches the color of the initial payment adds one
//!   card to the cost.

use serde::Serialize;

use super::station::Station;
use crate::cards::{Card, Color};
use crate::core::constants::{ADDITIONAL_TUNNEL_CARDS, MAX_ROUTE_LENGTH, MIN_ROUTE_LENGTH, ROUTE_CLAIM_POINTS};
use crate::core::Multiset;

/// Whether a route runs on the surface or through a tunnel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    Surface,
    Tunnel,
}

/// A claimable route of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    id: &'static str,
    station1: Station,
    station2: Station,
    length: u8,
    level: Level,
    color: Option<Color>,
}

impl Route {
    /// Create a route.
    ///
    /// `color` is `None` for neutral routes, which accept any single color.
    /// Panics if both stations are the same or if `length` is out of range.
    #[must_use]
    pub fn new(
        id: &'static str,
        station1: Station,
        station2: Station,
        length: u8,
        level: Level,
        color: Option<Color>,
    ) -> Self {
        assert!(
            (MIN_ROUTE_LENGTH..=MAX_ROUTE_LENGTH).contains(&length),
            "Route length {} out of range",
            length
        );
        assert!(station1 != station2, "Route {} links a station to itself", id);
        Self {
            id,
            station1,
            station2,
            length,
            level,
            color,
        }
    }

    /// Stable identifier, e.g. `"BER_FRI_1"`.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn station1(&self) -> Station {
        self.station1
    }

    #[must_use]
    pub fn station2(&self) -> Station {
        self.station2
    }

    /// Both ends, in declared order.
    #[must_use]
    pub fn stations(&self) -> [Station; 2] {
        [self.station1, self.station2]
    }

    /// The end opposite to `station`.
    ///
    /// Panics if `station` is not an end of this route.
    #[must_use]
    pub fn station_opposite(&self, station: Station) -> Station {
        if station == self.station1 {
            self.station2
        } else if station == self.station2 {
            self.station1
        } else {
            panic!("Station {} is not an end of route {}", station, self.id)
        }
    }

    #[must_use]
    pub fn length(&self) -> u8 {
        self.length
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Required color; `None` for neutral routes.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Points earned by claiming this route.
    #[must_use]
    pub fn claim_points(&self) -> u32 {
        ROUTE_CLAIM_POINTS[self.length as usize]
    }

    /// Every card combination that can pay for this route, ignoring any hand.
    ///
    /// Ordered by ascending locomotive count, then by color.
    #[must_use]
    pub fn possible_claim_cards(&self) -> Vec<Multiset<Card>> {
        let length = self.length as usize;
        let cars: Vec<Card> = match self.color {
            Some(color) => vec![Card::of(color)],
            None => Card::CARS.to_vec(),
        };

        let max_locomotives = match self.level {
            Level::Surface => 0,
            Level::Tunnel => length,
        };

        let mut options = Vec::new();
        for locomotives in 0..=max_locomotives {
            if locomotives == length {
                options.push(Multiset::of_n(length, Card::Locomotive));
                continue;
            }
            for &car in &cars {
                let mut builder = Multiset::builder();
                builder.add_n(length - locomotives, car).add_n(locomotives, Card::Locomotive);
                options.push(builder.build());
            }
        }
        options
    }

    /// Number of additional cards a tunnel costs, given the initial payment
    /// and the three revealed cards.
    ///
    /// Panics if this is not a tunnel or if `drawn_cards` does not hold
    /// exactly three cards.
    #[must_use]
    pub fn additional_claim_cards_count(&self, claim_cards: &Multiset<Card>, drawn_cards: &Multiset<Card>) -> usize {
        assert!(self.level == Level::Tunnel, "Route {} is not a tunnel", self.id);
        assert!(
            drawn_cards.size() == ADDITIONAL_TUNNEL_CARDS,
            "Expected {} revealed cards, got {}",
            ADDITIONAL_TUNNEL_CARDS,
            drawn_cards.size()
        );
        let claim_car = claim_cards.distinct().copied().find(|c| !c.is_locomotive());
        drawn_cards
            .iter()
            .filter(|&&card| card.is_locomotive() || Some(card) == claim_car)
            .count()
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.station1, self.station2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAU: Station = Station::new(0, "Lausanne");
    const FRI: Station = Station::new(1, "Fribourg");

    fn bag(cards: &[Card]) -> Multiset<Card> {
        cards.iter().copied().collect()
    }

    #[test]
    fn test_station_opposite() {
        let route = Route::new("LAU_FRI_1", LAU, FRI, 3, Level::Surface, Some(Color::Red));
        assert_eq!(route.station_opposite(LAU), FRI);
        assert_eq!(route.station_opposite(FRI), LAU);
        assert_eq!(route.claim_points(), 4);
    }

    #[test]
    #[should_panic(expected = "itself")]
    fn test_same_station_rejected() {
        let _ = Route::new("LAU_LAU_1", LAU, LAU, 1, Level::Surface, None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_length_out_of_range() {
        let _ = Route::new("LAU_FRI_1", LAU, FRI, 7, Level::Surface, None);
    }

    #[test]
    fn test_surface_colored_claim_cards() {
        let route = Route::new("LAU_FRI_1", LAU, FRI, 2, Level::Surface, Some(Color::Orange));
        assert_eq!(route.possible_claim_cards(), vec![bag(&[Card::Orange, Card::Orange])]);
    }

    #[test]
    fn test_surface_neutral_claim_cards() {
        let route = Route::new("LAU_FRI_1", LAU, FRI, 1, Level::Surface, None);
        let options = route.possible_claim_cards();
        assert_eq!(options.len(), 8);
        assert_eq!(options[0], bag(&[Card::Black]));
        assert_eq!(options[7], bag(&[Card::White]));
    }

    #[test]
    fn test_tunnel_claim_cards_ordered_by_locomotives() {
        let route = Route::new("LAU_FRI_1", LAU, FRI, 2, Level::Tunnel, Some(Color::Blue));
        assert_eq!(
            route.possible_claim_cards(),
            vec![
                bag(&[Card::Blue, Card::Blue]),
                bag(&[Card::Blue, Card::Locomotive]),
                bag(&[Card::Locomotive, Card::Locomotive]),
            ]
        );

        let neutral = Route::new("LAU_FRI_2", LAU, FRI, 2, Level::Tunnel, None);
        // 8 all-colored, 8 mixed, 1 all-locomotive
        assert_eq!(neutral.possible_claim_cards().len(), 17);
    }

    #[test]
    fn test_additional_claim_cards_count() {
        let route = Route::new("LAU_FRI_1", LAU, FRI, 2, Level::Tunnel, None);
        let claim = bag(&[Card::Red, Card::Locomotive]);

        assert_eq!(route.additional_claim_cards_count(&claim, &bag(&[Card::Red, Card::Blue, Card::Locomotive])), 2);
        assert_eq!(route.additional_claim_cards_count(&claim, &bag(&[Card::Blue, Card::Blue, Card::Green])), 0);

        let only_locomotives = bag(&[Card::Locomotive, Card::Locomotive]);
        assert_eq!(
            route.additional_claim_cards_count(&only_locomotives, &bag(&[Card::Red, Card::Locomotive, Card::Locomotive])),
            2
        );
    }
}
