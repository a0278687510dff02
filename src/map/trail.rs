//! Longest trail search.
//!
//! A trail is a path through a player's claimed routes in which no route is
//! used twice. Trails are edge-simple, not vertex-simple: a trail may pass
//! through the same station more than once, so a loop of routes followed by
//! a spur counts in full. The longest trail, by total route length, earns a
//! bonus at the end of the match.
//!
//! ## Search
//!
//! Breadth-first extension: start with every route in both directions, then
//! repeatedly extend each trail by every unused route leaving its last
//! station. Candidates are enumerated in the order routes are given, forward
//! direction first, and a trail only replaces the best one found so far when
//! it is strictly longer. Among equally long trails the first enumerated one
//! wins.

use super::route::Route;
use super::station::Station;

/// A path of routes through the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trail {
    routes: Vec<Route>,
    stations: Vec<Station>,
    length: u32,
}

impl Trail {
    /// The empty trail (no route, no station).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            stations: Vec::new(),
            length: 0,
        }
    }

    fn single(route: Route, from: Station) -> Self {
        Self {
            routes: vec![route],
            stations: vec![from, route.station_opposite(from)],
            length: u32::from(route.length()),
        }
    }

    fn extended(&self, route: Route) -> Self {
        let mut routes = self.routes.clone();
        routes.push(route);
        let mut stations = self.stations.clone();
        // A trail under extension always has a last station.
        let last = stations[stations.len() - 1];
        stations.push(route.station_opposite(last));
        Self {
            routes,
            stations,
            length: self.length + u32::from(route.length()),
        }
    }

    /// The longest trail through `routes`.
    #[must_use]
    pub fn longest(routes: &[Route]) -> Trail {
        let mut longest = Trail::empty();
        let mut frontier: Vec<Trail> = routes
            .iter()
            .flat_map(|&r| [Trail::single(r, r.station1()), Trail::single(r, r.station2())])
            .collect();

        while !frontier.is_empty() {
            let mut next = Vec::new();
            for trail in frontier {
                let Some(end) = trail.station2() else {
                    continue;
                };
                for &route in routes {
                    let touches = route.station1() == end || route.station2() == end;
                    if touches && !trail.routes.iter().any(|r| r.id() == route.id()) {
                        next.push(trail.extended(route));
                    }
                }
                if trail.length > longest.length {
                    longest = trail;
                }
            }
            frontier = next;
        }
        longest
    }

    /// Total length of the routes in this trail.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// First station, if any.
    #[must_use]
    pub fn station1(&self) -> Option<Station> {
        self.stations.first().copied()
    }

    /// Last station, if any.
    #[must_use]
    pub fn station2(&self) -> Option<Station> {
        self.stations.last().copied()
    }

    /// Routes in travel order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl std::fmt::Display for Trail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.stations.is_empty() {
            return write!(f, "(empty trail)");
        }
        let names: Vec<&str> = self.stations.iter().map(|s| s.name()).collect();
        write!(f, "{} ({})", names.join(" - "), self.length)
    }
}
