//! Rules for four-handed partnership euchre: dealing, bidding for trump,
//! the dealer's discard, trick play with bowers and loners, and scoring.
//!
//! [`Game`] is the only way to change a match. Every action is checked
//! against the current [`Phase`] and either applies completely or returns an
//! [`Error`] without touching the [`GameState`].

mod card;
mod config;
mod engine;
mod error;
mod notify;
mod player;
pub mod ranking;
pub mod record;
mod round;
pub mod scoring;
mod seat;
mod state;

pub use card::{Card, Color, Rank, Suit, HAND_SIZE};
pub use config::{DealerRule, MatchConfig};
pub use engine::{Action, Game, PlayOutcome};
pub use error::Error;
pub use notify::{ListenerId, PhaseListeners};
pub use player::Player;
pub use round::{Play, Round, Trick};
pub use seat::{nth_player_from, Partnership, Ring, Seat, SEATS};
pub use state::{GameState, Phase};
