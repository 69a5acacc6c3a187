use crate::round::Round;
use crate::seat::SEATS;
use crate::{Card, Error, Partnership, Player, Seat};
use enum_iterator::all;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Hash)]
pub enum Phase {
    /// Nothing has been dealt yet.
    #[default]
    None,
    /// The up-card is on offer as trump.
    OrderUp,
    /// The up-card was turned down; any other suit may be named.
    PickTrump,
    /// The dealer picked up the up-card and owes a discard.
    DealerDiscard,
    Play,
}

/// The whole match: seats, scores and every round dealt so far. Only the
/// engine mutates it; everything here is readable for display and saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: [Player; SEATS],
    scores: [u32; SEATS],
    rounds: Vec<Round>,
    dealer_offset: Option<usize>,
    phase: Phase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            players: [
                Player::new(Seat::North),
                Player::new(Seat::East),
                Player::new(Seat::South),
                Player::new(Seat::West),
            ],
            scores: [0; SEATS],
            rounds: vec![],
            dealer_offset: None,
            phase: Phase::None,
        }
    }

    pub fn players(&self) -> &[Player; SEATS] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub(crate) fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.player(seat).hand
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub(crate) fn round_mut(&mut self) -> Result<&mut Round, Error> {
        self.rounds
            .last_mut()
            .ok_or_else(|| Error::invariant("no round has been dealt"))
    }

    pub(crate) fn round(&self) -> Result<&Round, Error> {
        self.current_round()
            .ok_or_else(|| Error::invariant("no round has been dealt"))
    }

    /// `None` until the first deal; then counts deals, dealer seat being the
    /// offset modulo four.
    pub fn dealer_offset(&self) -> Option<usize> {
        self.dealer_offset
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }

    /// Both seats of a partnership are credited identically, so either one
    /// holds the partnership's points.
    pub fn partnership_score(&self, partnership: Partnership) -> u32 {
        let [a, b] = partnership.seats();
        self.score(a).max(self.score(b))
    }

    pub(crate) fn add_points(&mut self, partnership: Partnership, points: u32) {
        for seat in partnership.seats() {
            self.scores[seat.index()] += points;
        }
    }

    /// Deals the hands and appends a new round with the next dealer.
    pub(crate) fn create_new_round(
        &mut self,
        hands: [Vec<Card>; SEATS],
        kitty: Vec<Card>,
    ) -> Result<&Round, Error> {
        let offset = self.dealer_offset.map_or(0, |offset| offset + 1);
        let dealer = Seat::from_index(offset);
        let round = Round::new(dealer, kitty)?;
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.hand = hand;
        }
        self.dealer_offset = Some(offset);
        self.rounds.push(round);
        self.round()
    }

    /// Every card held or in the kitty, for checking no card is in two places.
    pub fn cards_in_play(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = all::<Seat>()
            .flat_map(|seat| self.hand(seat).iter().copied())
            .collect();
        if let Some(round) = self.current_round() {
            cards.extend(round.kitty());
            cards.extend(round.tricks().iter().flat_map(|t| t.plays().map(|p| p.card)));
        }
        cards
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for player in self.players.iter() {
            writeln!(f, "{player}")?;
        }
        for partnership in all::<Partnership>() {
            writeln!(f, "{partnership:?}: {}", self.partnership_score(partnership))?;
        }
        write!(f, "{:?}", self.phase)
    }
}
