//! Fixed rule constants.
//!
//! These never vary between matches; anything that does (seed, names) lives
//! in `MatchConfig`.

/// Number of car cards of each color in the full card set.
pub const CAR_CARDS_COUNT: usize = 12;

/// Number of locomotive cards in the full card set.
pub const LOCOMOTIVE_CARDS_COUNT: usize = 14;

/// Number of cards dealt to each player at the start.
pub const INITIAL_CARDS_COUNT: usize = 4;

/// Number of tickets offered to each player at the start.
pub const INITIAL_TICKETS_COUNT: usize = 5;

/// Minimum number of initial tickets a player must keep.
pub const MIN_INITIAL_TICKETS_KEPT: usize = 3;

/// Number of tickets offered when drawing tickets during play.
pub const IN_GAME_TICKETS_COUNT: usize = 3;

/// Number of cars each player starts with.
pub const INITIAL_CAR_COUNT: u32 = 40;

/// Number of face-up cards.
pub const FACE_UP_CARDS_COUNT: usize = 5;

/// Wire value of the "draw blindly from the deck" slot.
pub const DECK_SLOT: i32 = -1;

/// Minimum deck + discard size for a player to be allowed to draw cards.
pub const MIN_CARDS_TO_DRAW: usize = 5;

/// Number of cards revealed when attempting to claim a tunnel.
pub const ADDITIONAL_TUNNEL_CARDS: usize = 3;

/// Shortest possible route.
pub const MIN_ROUTE_LENGTH: u8 = 1;

/// Longest possible route.
pub const MAX_ROUTE_LENGTH: u8 = 6;

/// Points for claiming a route, indexed by its length.
pub const ROUTE_CLAIM_POINTS: [u32; MAX_ROUTE_LENGTH as usize + 1] = [0, 1, 2, 4, 7, 10, 15];

/// Bonus awarded for the longest trail (shared on ties).
pub const LONGEST_TRAIL_BONUS_POINTS: i32 = 10;

/// The last turns begin once a player has at most this many cars left.
pub const LAST_TURN_CAR_THRESHOLD: u32 = 2;
