//! Text codecs for everything that crosses the wire.
//!
//! `framework` holds the generic `Codec` combinators; `table` instantiates
//! them once for every type of the game.

pub mod framework;
pub mod table;

use thiserror::Error;

pub use framework::Codec;
pub use table::Codecs;

/// A string that does not decode to a value of the expected type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid integer {0:?}")]
    InvalidInteger(String),

    #[error("invalid base64 text {0:?}")]
    InvalidBase64(String),

    #[error("decoded text is not valid UTF-8")]
    InvalidUtf8,

    #[error("index {index} out of range for {len} values")]
    OutOfRange { index: usize, len: usize },

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}
