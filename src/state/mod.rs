//! Immutable match state, in three layers.
//!
//! Each layer comes as an authoritative record (`CardState`, `PlayerState`,
//! `GameState`) and a public record (`PublicCardState`, ...). The public
//! record is obtained with `redact()` and never exposes hidden cards or
//! tickets.

pub mod card_state;
pub mod game_state;
pub mod player_state;

pub use card_state::{CardState, PublicCardState};
pub use game_state::{GameState, PublicGameState};
pub use player_state::{PlayerState, PublicPlayerState};
