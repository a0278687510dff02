//! Match commentary.
//!
//! The engine describes what happens as `GameEvent`s and sends their text to
//! every player through `Player::receive_info`.

use std::fmt;

use crate::cards::Card;
use crate::core::Multiset;
use crate::map::{Route, Trail};

/// Something that happened during a match, worded for the players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    WillPlayFirst { player: String },
    KeptTickets { player: String, count: usize },
    CanPlay { player: String },
    DrewTickets { player: String, count: usize },
    DrewBlindCard { player: String },
    DrewVisibleCard { player: String, card: Card },
    ClaimedRoute { player: String, route: Route, cards: Multiset<Card> },
    AttemptsTunnelClaim { player: String, route: Route, cards: Multiset<Card> },
    DrewAdditionalCards { player: String, cards: Multiset<Card>, additional_cost: usize },
    DidNotClaimRoute { player: String, route: Route },
    LastTurnBegins { player: String, car_count: u32 },
    GetsLongestTrailBonus { player: String, trail: Trail },
    Won { player: String, points: i32, loser_points: i32 },
    Draw { players: Vec<String>, points: i32 },
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// `"2 red cards and 1 locomotive"`.
fn describe_cards(cards: &Multiset<Card>) -> String {
    let parts: Vec<String> = cards
        .counts()
        .map(|(card, n)| match card {
            Card::Locomotive => format!("{} locomotive{}", n, plural(n)),
            car => format!("{} {} card{}", n, car, plural(n)),
        })
        .collect();
    match parts.split_last() {
        None => "no card".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::WillPlayFirst { player } => write!(f, "{} will play first.", player),
            GameEvent::KeptTickets { player, count } => {
                write!(f, "{} kept {} ticket{}.", player, count, plural(*count))
            }
            GameEvent::CanPlay { player } => write!(f, "{} can play.", player),
            GameEvent::DrewTickets { player, count } => {
                write!(f, "{} drew {} ticket{}.", player, count, plural(*count))
            }
            GameEvent::DrewBlindCard { player } => write!(f, "{} drew a card from the deck.", player),
            GameEvent::DrewVisibleCard { player, card } => write!(f, "{} drew a face-up {} card.", player, card),
            GameEvent::ClaimedRoute { player, route, cards } => {
                write!(f, "{} claimed {} with {}.", player, route, describe_cards(cards))
            }
            GameEvent::AttemptsTunnelClaim { player, route, cards } => {
                write!(f, "{} attempts to claim the tunnel {} with {}.", player, route, describe_cards(cards))
            }
            GameEvent::DrewAdditionalCards { cards, additional_cost, .. } => {
                write!(f, "The additional cards are {}. ", describe_cards(cards))?;
                if *additional_cost == 0 {
                    write!(f, "They cost nothing more.")
                } else {
                    write!(f, "They cost {} more card{}.", additional_cost, plural(*additional_cost))
                }
            }
            GameEvent::DidNotClaimRoute { player, route } => write!(f, "{} did not claim {}.", player, route),
            GameEvent::LastTurnBegins { player, car_count } => write!(
                f,
                "{} has only {} car{} left; the last turn begins!",
                player,
                car_count,
                plural(*car_count as usize)
            ),
            GameEvent::GetsLongestTrailBonus { player, trail } => {
                write!(f, "{} gets the longest trail bonus with {}.", player, trail)
            }
            GameEvent::Won { player, points, loser_points } => {
                write!(f, "{} wins with {} points against {}!", player, points, loser_points)
            }
            GameEvent::Draw { players, points } => {
                write!(f, "{} are tied with {} points each!", players.join(" and "), points)
            }
        }
    }
}
