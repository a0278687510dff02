//! Line protocol between the engine and a remote player.
//!
//! The engine side holds a `RemotePlayerProxy`, which is just another
//! `Player`. The remote side runs a `RemotePlayerClient` around its local
//! player. Requests and responses are single ASCII lines; every value is
//! encoded with the codecs in `crate::codec`.

pub mod client;
pub mod error;
pub mod framing;
pub mod message;
pub mod proxy;

pub use client::RemotePlayerClient;
pub use error::ProtocolError;
pub use message::{Message, MessageId};
pub use proxy::RemotePlayerProxy;

/// Port a match is served on unless told otherwise.
pub const DEFAULT_PORT: u16 = 5108;
