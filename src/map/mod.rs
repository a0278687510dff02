//! Static map data and the graph algorithms over it.
//!
//! - `station`, `route`, `ticket`: value types of the map
//! - `partition`: union-find used to score tickets
//! - `trail`: longest-trail search for the end-of-match bonus
//! - `ch_map`: the fixed Swiss map with its canonical route and ticket order

pub mod ch_map;
pub mod partition;
pub mod route;
pub mod station;
pub mod ticket;
pub mod trail;

pub use ch_map::ChMap;
pub use partition::{StationPartition, StationPartitionBuilder};
pub use route::{Level, Route};
pub use station::{Station, StationConnectivity};
pub use ticket::{Ticket, Trip};
pub use trail::Trail;
