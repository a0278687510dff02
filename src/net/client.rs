//! The player side of a remote match.
//!
//! `RemotePlayerClient` reads request lines, hands each one to a local
//! player running on its own thread, and writes back the answer for every
//! question. It stops cleanly when the engine closes the stream.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::{TcpStream, ToSocketAddrs};

use super::error::ProtocolError;
use super::framing::{read_line, write_line};
use super::message::{Message, MessageId};
use crate::codec::{CodecError, Codecs};
use crate::core::PlayerMap;
use crate::game::{Player, PlayerResult};
use crate::players::DispatchedPlayer;

/// Serves a local player to a remote engine.
pub struct RemotePlayerClient<P, R, W> {
    player: DispatchedPlayer<P>,
    reader: R,
    writer: W,
}

impl<P: Player + Send + 'static> RemotePlayerClient<P, BufReader<TcpStream>, BufWriter<TcpStream>> {
    /// Connect to an engine listening on `addr`.
    pub fn connect(addr: impl ToSocketAddrs, player: P) -> Result<Self, ProtocolError> {
        let stream = TcpStream::connect(addr)?;
        log::info!("connected to {}", stream.peer_addr()?);
        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self::new(player, reader, BufWriter::new(stream)))
    }
}

impl<P: Player + Send + 'static, R: BufRead, W: Write> RemotePlayerClient<P, R, W> {
    #[must_use]
    pub fn new(player: P, reader: R, writer: W) -> Self {
        Self {
            player: DispatchedPlayer::spawn(player),
            reader,
            writer,
        }
    }

    /// Serve requests until the engine closes the stream.
    pub fn run(&mut self) -> PlayerResult<()> {
        while let Some(line) = read_line(&mut self.reader)? {
            log::debug!("<- {}", line);
            let message = Message::parse(&line)?;
            if let Some(response) = self.handle(&message)? {
                log::debug!("-> {}", response);
                write_line(&mut self.writer, &response)?;
            }
        }
        log::info!("engine closed the connection");
        Ok(())
    }

    /// Apply one request to the player; `Some` holds the response line.
    fn handle(&mut self, message: &Message) -> PlayerResult<Option<String>> {
        let codecs = Codecs::get();
        let args = &message.args;
        let response = match message.id {
            MessageId::InitPlayers => {
                let own_id = codecs.player_id.decode(&args[0]).map_err(ProtocolError::from)?;
                let names = codecs.list_of_string.decode(&args[1]).map_err(ProtocolError::from)?;
                let names: [String; 2] = names.try_into().map_err(|names: Vec<String>| {
                    ProtocolError::from(CodecError::FieldCount {
                        expected: 2,
                        found: names.len(),
                    })
                })?;
                self.player.init_players(own_id, &PlayerMap::from_array(names))?;
                None
            }
            MessageId::ReceiveInfo => {
                let info = codecs.string.decode(&args[0]).map_err(ProtocolError::from)?;
                self.player.receive_info(&info)?;
                None
            }
            MessageId::UpdateState => {
                let state = codecs.public_game_state.decode(&args[0]).map_err(ProtocolError::from)?;
                let own_state = codecs.player_state.decode(&args[1]).map_err(ProtocolError::from)?;
                self.player.update_state(&state, &own_state)?;
                None
            }
            MessageId::SetInitialTickets => {
                let tickets = codecs.bag_of_ticket.decode(&args[0]).map_err(ProtocolError::from)?;
                self.player.set_initial_ticket_choice(&tickets)?;
                None
            }
            MessageId::ChooseInitialTickets => {
                Some(codecs.bag_of_ticket.encode(&self.player.choose_initial_tickets()?))
            }
            MessageId::NextTurn => Some(codecs.turn_kind.encode(&self.player.next_turn()?)),
            MessageId::ChooseTickets => {
                let options = codecs.bag_of_ticket.decode(&args[0]).map_err(ProtocolError::from)?;
                Some(codecs.bag_of_ticket.encode(&self.player.choose_tickets(&options)?))
            }
            MessageId::DrawSlot => Some(codecs.draw_slot.encode(&self.player.draw_slot()?)),
            MessageId::Route => Some(codecs.route.encode(&self.player.claimed_route()?)),
            MessageId::Cards => Some(codecs.bag_of_card.encode(&self.player.initial_claim_cards()?)),
            MessageId::ChooseAdditionalCards => {
                let options = codecs.list_of_bag_of_card.decode(&args[0]).map_err(ProtocolError::from)?;
                Some(codecs.bag_of_card.encode(&self.player.choose_additional_cards(&options)?))
            }
        };
        Ok(response)
    }
}
