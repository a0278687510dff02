//! The seam between the engine and whoever makes the decisions.
//!
//! The engine only talks to players through `Player`. A local bot, a
//! player running on its own thread and a remote player behind a socket all
//! implement it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::core::constants::{DECK_SLOT, FACE_UP_CARDS_COUNT};
use crate::core::{Multiset, PlayerId, PlayerMap};
use crate::map::{Route, Ticket};
use crate::net::ProtocolError;
use crate::state::{PlayerState, PublicGameState};

/// The three kinds of turn a player may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TurnKind {
    DrawTickets,
    DrawCards,
    ClaimRoute,
}

impl TurnKind {
    /// Every kind, in declared order.
    pub const ALL: [TurnKind; 3] = [TurnKind::DrawTickets, TurnKind::DrawCards, TurnKind::ClaimRoute];
}

/// Where a player draws a card from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawSlot {
    /// Blindly, from the top of the deck.
    Deck,
    /// The face-up card in the given slot.
    FaceUp(usize),
}

impl DrawSlot {
    /// Wire value: the face-up slot index, or `DECK_SLOT` for the deck.
    #[must_use]
    pub fn to_wire(self) -> i32 {
        match self {
            DrawSlot::Deck => DECK_SLOT,
            DrawSlot::FaceUp(slot) => slot as i32,
        }
    }

    /// Parse a wire value; `None` if it names no slot.
    #[must_use]
    pub fn from_wire(value: i32) -> Option<Self> {
        if value == DECK_SLOT {
            return Some(DrawSlot::Deck);
        }
        usize::try_from(value)
            .ok()
            .filter(|&slot| slot < FACE_UP_CARDS_COUNT)
            .map(DrawSlot::FaceUp)
    }
}

/// Why a player could not answer.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The player's decision thread is gone.
    #[error("player is no longer available")]
    Unavailable,

    /// The answer breaks the rules of the game.
    #[error("illegal decision: {0}")]
    IllegalDecision(String),
}

pub type PlayerResult<T> = Result<T, PlayerError>;

/// A participant in a match.
///
/// Notifications (`init_players`, `receive_info`, `update_state`,
/// `set_initial_ticket_choice`) expect no answer; every other method is a
/// question the engine blocks on.
pub trait Player {
    /// Tell the player who they are and what everyone is called.
    fn init_players(&mut self, own_id: PlayerId, names: &PlayerMap<String>) -> PlayerResult<()>;

    /// Deliver a line of match commentary.
    fn receive_info(&mut self, info: &str) -> PlayerResult<()>;

    /// Deliver the public state along with the player's own full state.
    fn update_state(&mut self, state: &PublicGameState, own_state: &PlayerState) -> PlayerResult<()>;

    /// Offer the initial tickets.
    fn set_initial_ticket_choice(&mut self, tickets: &Multiset<Ticket>) -> PlayerResult<()>;

    /// Which of the offered initial tickets to keep.
    fn choose_initial_tickets(&mut self) -> PlayerResult<Multiset<Ticket>>;

    fn next_turn(&mut self) -> PlayerResult<TurnKind>;

    /// Which of the drawn tickets to keep (at least one).
    fn choose_tickets(&mut self, options: &Multiset<Ticket>) -> PlayerResult<Multiset<Ticket>>;

    fn draw_slot(&mut self) -> PlayerResult<DrawSlot>;

    fn claimed_route(&mut self) -> PlayerResult<Route>;

    fn initial_claim_cards(&mut self) -> PlayerResult<Multiset<Card>>;

    /// Pick one of `options` to pay for a tunnel, or the empty multiset to
    /// give up.
    fn choose_additional_cards(&mut self, options: &[Multiset<Card>]) -> PlayerResult<Multiset<Card>>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn init_players(&mut self, own_id: PlayerId, names: &PlayerMap<String>) -> PlayerResult<()> {
        (**self).init_players(own_id, names)
    }

    fn receive_info(&mut self, info: &str) -> PlayerResult<()> {
        (**self).receive_info(info)
    }

    fn update_state(&mut self, state: &PublicGameState, own_state: &PlayerState) -> PlayerResult<()> {
        (**self).update_state(state, own_state)
    }

    fn set_initial_ticket_choice(&mut self, tickets: &Multiset<Ticket>) -> PlayerResult<()> {
        (**self).set_initial_ticket_choice(tickets)
    }

    fn choose_initial_tickets(&mut self) -> PlayerResult<Multiset<Ticket>> {
        (**self).choose_initial_tickets()
    }

    fn next_turn(&mut self) -> PlayerResult<TurnKind> {
        (**self).next_turn()
    }

    fn choose_tickets(&mut self, options: &Multiset<Ticket>) -> PlayerResult<Multiset<Ticket>> {
        (**self).choose_tickets(options)
    }

    fn draw_slot(&mut self) -> PlayerResult<DrawSlot> {
        (**self).draw_slot()
    }

    fn claimed_route(&mut self) -> PlayerResult<Route> {
        (**self).claimed_route()
    }

    fn initial_claim_cards(&mut self) -> PlayerResult<Multiset<Card>> {
        (**self).initial_claim_cards()
    }

    fn choose_additional_cards(&mut self, options: &[Multiset<Card>]) -> PlayerResult<Multiset<Card>> {
        (**self).choose_additional_cards(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_slot_wire_values() {
        assert_eq!(DrawSlot::Deck.to_wire(), -1);
        assert_eq!(DrawSlot::FaceUp(3).to_wire(), 3);
        assert_eq!(DrawSlot::from_wire(-1), Some(DrawSlot::Deck));
        assert_eq!(DrawSlot::from_wire(4), Some(DrawSlot::FaceUp(4)));
        assert_eq!(DrawSlot::from_wire(5), None);
        assert_eq!(DrawSlot::from_wire(-2), None);
    }
}
