//! Bundled `Player` implementations.

pub mod dispatch;
pub mod random;

pub use dispatch::DispatchedPlayer;
pub use random::RandomPlayer;
