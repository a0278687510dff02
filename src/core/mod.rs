//! Core building blocks: players, RNG, configuration, containers.
//!
//! Nothing in this module knows about the map or the cards; the state
//! layers build on these generic pieces.

pub mod config;
pub mod constants;
pub mod deck;
pub mod multiset;
pub mod player;
pub mod rng;

pub use config::MatchConfig;
pub use deck::Deck;
pub use multiset::{Multiset, MultisetBuilder};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
