//! # tchu
//!
//! Authoritative engine and line protocol for a two-player route-claiming
//! board game played on a map of Switzerland.
//!
//! ## Design Principles
//!
//! 1. **Immutable State**: every transition returns a new state value.
//!    `im` persistent structures make each snapshot cheap to keep.
//!
//! 2. **Public and Private Views**: each state layer has an authoritative
//!    record and a redacted public record obtained with `redact()`.
//!
//! 3. **Explicit Configuration**: seed and player names travel in a
//!    `MatchConfig`; nothing is global.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, `Multiset` and `Deck`
//! - `cards`: card and color types
//! - `map`: stations, routes, tickets, connectivity and the fixed map
//! - `state`: card, player and game state
//! - `game`: the `Player` interface and the turn engine
//! - `players`: a random bot and a threaded player wrapper
//! - `codec`: text encodings of every wire value
//! - `net`: message kinds, line framing, proxy and client roles

pub mod cards;
pub mod codec;
pub mod core;
pub mod game;
pub mod map;
pub mod net;
pub mod players;
pub mod state;

// Re-export commonly used types
pub use crate::core::{Deck, GameRng, MatchConfig, Multiset, MultisetBuilder, PlayerId, PlayerMap};

pub use crate::cards::{Card, Color};

pub use crate::map::{ChMap, Level, Route, Station, StationPartition, StationPartitionBuilder, Ticket, Trail, Trip};

pub use crate::state::{CardState, GameState, PlayerState, PublicCardState, PublicGameState, PublicPlayerState};

pub use crate::game::{play, DrawSlot, GameEvent, GameOutcome, GameResult, Player, PlayerError, PlayerResult, TurnKind};

pub use crate::players::{DispatchedPlayer, RandomPlayer};

pub use crate::codec::{Codec, CodecError, Codecs};

pub use crate::net::{Message, MessageId, ProtocolError, RemotePlayerClient, RemotePlayerProxy, DEFAULT_PORT};
