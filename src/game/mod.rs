//! The turn engine and the player interface it drives.

pub mod engine;
pub mod info;
pub mod player;

pub use engine::{play, GameOutcome, GameResult};
pub use info::GameEvent;
pub use player::{DrawSlot, Player, PlayerError, PlayerResult, TurnKind};
