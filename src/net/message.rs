//! Message kinds and request lines.
//!
//! A request is one line: the message kind followed by its arguments, each
//! preceded by a single space. An argument may be empty. A response is a
//! bare encoded value on its own line.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use super::error::ProtocolError;

/// The eleven kinds of request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageId {
    InitPlayers,
    ReceiveInfo,
    UpdateState,
    SetInitialTickets,
    ChooseInitialTickets,
    NextTurn,
    ChooseTickets,
    DrawSlot,
    Route,
    Cards,
    ChooseAdditionalCards,
}

impl MessageId {
    pub const ALL: [MessageId; 11] = [
        MessageId::InitPlayers,
        MessageId::ReceiveInfo,
        MessageId::UpdateState,
        MessageId::SetInitialTickets,
        MessageId::ChooseInitialTickets,
        MessageId::NextTurn,
        MessageId::ChooseTickets,
        MessageId::DrawSlot,
        MessageId::Route,
        MessageId::Cards,
        MessageId::ChooseAdditionalCards,
    ];

    /// Name on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MessageId::InitPlayers => "INIT_PLAYERS",
            MessageId::ReceiveInfo => "RECEIVE_INFO",
            MessageId::UpdateState => "UPDATE_STATE",
            MessageId::SetInitialTickets => "SET_INITIAL_TICKETS",
            MessageId::ChooseInitialTickets => "CHOOSE_INITIAL_TICKETS",
            MessageId::NextTurn => "NEXT_TURN",
            MessageId::ChooseTickets => "CHOOSE_TICKETS",
            MessageId::DrawSlot => "DRAW_SLOT",
            MessageId::Route => "ROUTE",
            MessageId::Cards => "CARDS",
            MessageId::ChooseAdditionalCards => "CHOOSE_ADDITIONAL_CARDS",
        }
    }

    /// Number of arguments a request of this kind carries.
    #[must_use]
    pub const fn argument_count(self) -> usize {
        match self {
            MessageId::InitPlayers | MessageId::UpdateState => 2,
            MessageId::ReceiveInfo
            | MessageId::SetInitialTickets
            | MessageId::ChooseTickets
            | MessageId::ChooseAdditionalCards => 1,
            MessageId::ChooseInitialTickets
            | MessageId::NextTurn
            | MessageId::DrawSlot
            | MessageId::Route
            | MessageId::Cards => 0,
        }
    }

    /// Check if the peer answers this kind with a response line.
    #[must_use]
    pub const fn expects_response(self) -> bool {
        !matches!(
            self,
            MessageId::InitPlayers | MessageId::ReceiveInfo | MessageId::UpdateState | MessageId::SetInitialTickets
        )
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MessageId {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| ProtocolError::UnknownMessage(s.to_string()))
    }
}

/// One request: a kind and its encoded arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub args: SmallVec<[String; 2]>,
}

impl Message {
    /// Build a request. Panics if the argument count does not match `id`.
    #[must_use]
    pub fn new(id: MessageId, args: impl IntoIterator<Item = String>) -> Self {
        let args: SmallVec<[String; 2]> = args.into_iter().collect();
        assert_eq!(args.len(), id.argument_count(), "Wrong argument count for {}", id);
        Self { id, args }
    }

    /// Parse a request line (without its newline).
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        let mut parts = line.split(' ');
        let id: MessageId = parts.next().unwrap_or_default().parse()?;
        let args: SmallVec<[String; 2]> = parts.map(str::to_string).collect();
        if args.len() != id.argument_count() {
            return Err(ProtocolError::ArgumentCount {
                id,
                expected: id.argument_count(),
                found: args.len(),
            });
        }
        Ok(Self { id, args })
    }

    /// Render as a request line (without its newline).
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = self.id.name().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
