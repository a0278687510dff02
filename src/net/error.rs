use std::io;

use thiserror::Error;

use super::message::MessageId;
use crate::codec::CodecError;

/// A failure that ends the connection.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed value: {0}")]
    Codec(#[from] CodecError),

    #[error("connection closed by peer")]
    Closed,

    #[error("unknown message kind {0:?}")]
    UnknownMessage(String),

    #[error("{id} expects {expected} arguments, got {found}")]
    ArgumentCount {
        id: MessageId,
        expected: usize,
        found: usize,
    },

    #[error("line is not ASCII: {0:?}")]
    NotAscii(String),
}
