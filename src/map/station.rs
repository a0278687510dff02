//! Stations and the connectivity seam used to score tickets.

use serde::Serialize;

/// A station of the map.
///
/// Identifiers are dense, starting at 0. Several stations may share a name:
/// each neighbouring country is represented by a handful of border stations
/// all named after the country.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Station {
    id: usize,
    name: &'static str,
}

impl Station {
    /// Create a station.
    #[must_use]
    pub const fn new(id: usize, name: &'static str) -> Self {
        Self { id, name }
    }

    /// Dense identifier of the station.
    #[must_use]
    pub const fn id(self) -> usize {
        self.id
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Answers whether two stations are linked by a player's network.
pub trait StationConnectivity {
    /// Check if `s1` and `s2` are connected.
    fn connected(&self, s1: Station, s2: Station) -> bool;
}
