//! Train cards.
//!
//! Eight colored car kinds plus the locomotive wildcard.

pub mod card;

pub use card::{Card, Color};
