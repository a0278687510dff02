//! The engine side of a remote player.
//!
//! `RemotePlayerProxy` implements `Player` by writing one request line per
//! call and, for questions, blocking on exactly one response line.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::{TcpListener, TcpStream, ToSocketAddrs};

use super::error::ProtocolError;
use super::framing::{read_line, write_line};
use super::message::{Message, MessageId};
use crate::cards::Card;
use crate::codec::{Codec, Codecs};
use crate::core::{Multiset, PlayerId, PlayerMap};
use crate::game::{DrawSlot, Player, PlayerResult, TurnKind};
use crate::map::{Route, Ticket};
use crate::state::{PlayerState, PublicGameState};

/// A `Player` living at the other end of a stream.
#[derive(Debug)]
pub struct RemotePlayerProxy<R, W> {
    reader: R,
    writer: W,
}

impl RemotePlayerProxy<BufReader<TcpStream>, BufWriter<TcpStream>> {
    /// Wrap an established connection.
    pub fn from_stream(stream: TcpStream) -> Result<Self, ProtocolError> {
        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self::new(reader, BufWriter::new(stream)))
    }

    /// Wait for one client on `listener`.
    pub fn accept(listener: &TcpListener) -> Result<Self, ProtocolError> {
        let (stream, peer) = listener.accept()?;
        log::info!("remote player connected from {}", peer);
        Self::from_stream(stream)
    }

    /// Listen on `addr` and wait for one client.
    pub fn listen(addr: impl ToSocketAddrs) -> Result<Self, ProtocolError> {
        let listener = TcpListener::bind(addr)?;
        Self::accept(&listener)
    }
}

impl<R: BufRead, W: Write> RemotePlayerProxy<R, W> {
    #[must_use]
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn send(&mut self, id: MessageId, args: impl IntoIterator<Item = String>) -> Result<(), ProtocolError> {
        let line = Message::new(id, args).to_line();
        log::debug!("-> {}", line);
        write_line(&mut self.writer, &line)
    }

    fn ask<T: 'static>(
        &mut self,
        id: MessageId,
        args: impl IntoIterator<Item = String>,
        codec: &Codec<T>,
    ) -> PlayerResult<T> {
        self.send(id, args)?;
        let line = read_line(&mut self.reader)?.ok_or(ProtocolError::Closed)?;
        log::debug!("<- {}", line);
        Ok(codec.decode(&line).map_err(ProtocolError::from)?)
    }
}

impl<R: BufRead, W: Write> Player for RemotePlayerProxy<R, W> {
    fn init_players(&mut self, own_id: PlayerId, names: &PlayerMap<String>) -> PlayerResult<()> {
        let codecs = Codecs::get();
        let names: Vec<String> = names.iter().map(|(_, name)| name.clone()).collect();
        self.send(
            MessageId::InitPlayers,
            [codecs.player_id.encode(&own_id), codecs.list_of_string.encode(&names)],
        )?;
        Ok(())
    }

    fn receive_info(&mut self, info: &str) -> PlayerResult<()> {
        let info = Codecs::get().string.encode(&info.to_string());
        self.send(MessageId::ReceiveInfo, [info])?;
        Ok(())
    }

    fn update_state(&mut self, state: &PublicGameState, own_state: &PlayerState) -> PlayerResult<()> {
        let codecs = Codecs::get();
        self.send(
            MessageId::UpdateState,
            [codecs.public_game_state.encode(state), codecs.player_state.encode(own_state)],
        )?;
        Ok(())
    }

    fn set_initial_ticket_choice(&mut self, tickets: &Multiset<Ticket>) -> PlayerResult<()> {
        let tickets = Codecs::get().bag_of_ticket.encode(tickets);
        self.send(MessageId::SetInitialTickets, [tickets])?;
        Ok(())
    }

    fn choose_initial_tickets(&mut self) -> PlayerResult<Multiset<Ticket>> {
        self.ask(MessageId::ChooseInitialTickets, [], &Codecs::get().bag_of_ticket)
    }

    fn next_turn(&mut self) -> PlayerResult<TurnKind> {
        self.ask(MessageId::NextTurn, [], &Codecs::get().turn_kind)
    }

    fn choose_tickets(&mut self, options: &Multiset<Ticket>) -> PlayerResult<Multiset<Ticket>> {
        let codec = &Codecs::get().bag_of_ticket;
        self.ask(MessageId::ChooseTickets, [codec.encode(options)], codec)
    }

    fn draw_slot(&mut self) -> PlayerResult<DrawSlot> {
        self.ask(MessageId::DrawSlot, [], &Codecs::get().draw_slot)
    }

    fn claimed_route(&mut self) -> PlayerResult<Route> {
        self.ask(MessageId::Route, [], &Codecs::get().route)
    }

    fn initial_claim_cards(&mut self) -> PlayerResult<Multiset<Card>> {
        self.ask(MessageId::Cards, [], &Codecs::get().bag_of_card)
    }

    fn choose_additional_cards(&mut self, options: &[Multiset<Card>]) -> PlayerResult<Multiset<Card>> {
        let codecs = Codecs::get();
        let options = codecs.list_of_bag_of_card.encode(&options.to_vec());
        self.ask(MessageId::ChooseAdditionalCards, [options], &codecs.bag_of_card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerError;
    use std::io::Cursor;

    fn proxy(responses: &str) -> RemotePlayerProxy<Cursor<Vec<u8>>, Vec<u8>> {
        RemotePlayerProxy::new(Cursor::new(responses.as_bytes().to_vec()), Vec::new())
    }

    fn written(proxy: &RemotePlayerProxy<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(proxy.writer.clone()).unwrap()
    }

    #[test]
    fn test_notification_reads_nothing() {
        let mut proxy = proxy("");
        proxy.receive_info("Ada can play.").unwrap();
        assert_eq!(written(&proxy), "RECEIVE_INFO QWRhIGNhbiBwbGF5Lg==\n");
    }

    #[test]
    fn test_init_players() {
        let mut proxy = proxy("");
        let names = PlayerMap::from_array(["Ada".to_string(), "Charles".to_string()]);
        proxy.init_players(PlayerId::PLAYER_2, &names).unwrap();
        assert_eq!(written(&proxy), "INIT_PLAYERS 1 QWRh,Q2hhcmxlcw==\n");
    }

    #[test]
    fn test_questions_read_one_line_each() {
        let mut proxy = proxy("1\n-1\n3\n");
        assert_eq!(proxy.next_turn().unwrap(), TurnKind::DrawCards);
        assert_eq!(proxy.draw_slot().unwrap(), DrawSlot::Deck);
        assert_eq!(proxy.draw_slot().unwrap(), DrawSlot::FaceUp(3));
        assert_eq!(written(&proxy), "NEXT_TURN\nDRAW_SLOT\nDRAW_SLOT\n");
    }

    #[test]
    fn test_give_up_is_empty_line() {
        let mut proxy = proxy("\n");
        let options = vec![Multiset::of_n(1, Card::Red)];
        assert!(proxy.choose_additional_cards(&options).unwrap().is_empty());
        assert_eq!(written(&proxy), "CHOOSE_ADDITIONAL_CARDS 6\n");
    }

    #[test]
    fn test_closed_stream() {
        let mut proxy = proxy("");
        assert!(matches!(proxy.next_turn(), Err(PlayerError::Protocol(ProtocolError::Closed))));
    }

    #[test]
    fn test_malformed_response() {
        let mut proxy = proxy("7\n");
        assert!(matches!(proxy.next_turn(), Err(PlayerError::Protocol(ProtocolError::Codec(_)))));
    }
}
