//! Tickets: scoring objectives made of one or more trips.
//!
//! A city-to-city ticket holds a single trip. A ticket naming a country holds
//! one trip per border station of that country; it scores the best connected
//! trip, or loses the smallest value when no trip is connected.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::station::{Station, StationConnectivity};

/// A station pair worth `points` when connected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Trip {
    from: Station,
    to: Station,
    points: u32,
}

impl Trip {
    /// Create a trip. Panics if `points` is zero.
    #[must_use]
    pub fn new(from: Station, to: Station, points: u32) -> Self {
        assert!(points > 0, "A trip must be worth at least one point");
        Self { from, to, points }
    }

    /// Every trip from a station of `from` to a station of `to`.
    ///
    /// Panics if either side is empty.
    #[must_use]
    pub fn all(from: &[Station], to: &[Station], points: u32) -> Vec<Trip> {
        assert!(!from.is_empty() && !to.is_empty(), "Trips need stations on both ends");
        from.iter()
            .flat_map(|&f| to.iter().map(move |&t| Trip::new(f, t, points)))
            .collect()
    }

    #[must_use]
    pub fn from(&self) -> Station {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Station {
        self.to
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Signed score of this trip under `connectivity`.
    #[must_use]
    pub fn score(&self, connectivity: &impl StationConnectivity) -> i32 {
        let points = self.points as i32;
        if connectivity.connected(self.from, self.to) {
            points
        } else {
            -points
        }
    }
}

/// A ticket; cheap to clone.
///
/// Tickets order by their text, which is also their display form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket {
    text: Arc<str>,
    trips: Arc<[Trip]>,
}

impl Ticket {
    /// Create a ticket from its trips.
    ///
    /// Panics if `trips` is empty or if the trips do not all leave from
    /// stations of the same name.
    #[must_use]
    pub fn new(trips: Vec<Trip>) -> Self {
        assert!(!trips.is_empty(), "A ticket needs at least one trip");
        let from = trips[0].from.name();
        assert!(
            trips.iter().all(|t| t.from.name() == from),
            "All trips of a ticket must leave from {}",
            from
        );
        let text = Self::compute_text(from, &trips);
        Self {
            text: text.into(),
            trips: trips.into(),
        }
    }

    /// Ticket with a single trip.
    #[must_use]
    pub fn single(from: Station, to: Station, points: u32) -> Self {
        Self::new(vec![Trip::new(from, to, points)])
    }

    fn compute_text(from: &str, trips: &[Trip]) -> String {
        let destinations: BTreeSet<String> = trips
            .iter()
            .map(|t| format!("{} ({})", t.to.name(), t.points))
            .collect();
        let joined = destinations.into_iter().collect::<Vec<_>>().join(", ");
        if trips.iter().all(|t| t.to.name() == trips[0].to.name() && t.points == trips[0].points) {
            format!("{} - {}", from, joined)
        } else {
            format!("{} - {{{}}}", from, joined)
        }
    }

    /// Display text, e.g. `"Lausanne - Zürich (6)"`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Signed score of this ticket under `connectivity`.
    ///
    /// The best connected trip counts; with none connected, the smallest
    /// trip value is lost.
    #[must_use]
    pub fn points(&self, connectivity: &impl StationConnectivity) -> i32 {
        self.trips
            .iter()
            .map(|t| t.score(connectivity))
            .max()
            .filter(|&best| best > 0)
            .unwrap_or_else(|| -(self.trips.iter().map(|t| t.points).min().unwrap_or(0) as i32))
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAU: Station = Station::new(0, "Lausanne");
    const BER: Station = Station::new(1, "Berne");
    const DE1: Station = Station::new(2, "Allemagne");
    const DE2: Station = Station::new(3, "Allemagne");
    const FR1: Station = Station::new(4, "France");

    struct Linked(Vec<(Station, Station)>);

    impl StationConnectivity for Linked {
        fn connected(&self, s1: Station, s2: Station) -> bool {
            s1 == s2 || self.0.iter().any(|&(a, b)| (a, b) == (s1, s2) || (b, a) == (s1, s2))
        }
    }

    #[test]
    fn test_single_trip_text_and_points() {
        let ticket = Ticket::single(LAU, BER, 4);
        assert_eq!(ticket.text(), "Lausanne - Berne (4)");
        assert_eq!(ticket.points(&Linked(vec![(LAU, BER)])), 4);
        assert_eq!(ticket.points(&Linked(vec![])), -4);
    }

    #[test]
    fn test_country_ticket_text() {
        let mut trips = Trip::all(&[BER], &[DE1, DE2], 6);
        trips.extend(Trip::all(&[BER], &[FR1], 5));
        let ticket = Ticket::new(trips);
        assert_eq!(ticket.text(), "Berne - {Allemagne (6), France (5)}");
    }

    #[test]
    fn test_country_ticket_same_destination_text() {
        let ticket = Ticket::new(Trip::all(&[FR1], &[DE1, DE2], 5));
        assert_eq!(ticket.text(), "France - Allemagne (5)");
        assert_eq!(ticket.trips().len(), 2);
    }

    #[test]
    fn test_country_ticket_points() {
        let mut trips = Trip::all(&[BER], &[DE1, DE2], 6);
        trips.extend(Trip::all(&[BER], &[FR1], 5));
        let ticket = Ticket::new(trips);

        assert_eq!(ticket.points(&Linked(vec![(BER, DE2)])), 6);
        assert_eq!(ticket.points(&Linked(vec![(BER, FR1)])), 5);
        assert_eq!(ticket.points(&Linked(vec![])), -5);
    }

    #[test]
    #[should_panic(expected = "leave from")]
    fn test_mixed_origins_rejected() {
        let _ = Ticket::new(vec![Trip::new(LAU, BER, 3), Trip::new(BER, LAU, 3)]);
    }
}
