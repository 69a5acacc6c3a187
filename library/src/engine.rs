use crate::card::{dealt, shuffled};
use crate::notify::{ListenerId, PhaseListeners};
use crate::ranking::follows_suit;
use crate::round::{Play, Trick};
use crate::scoring::score_round;
use crate::{Card, DealerRule, Error, GameState, MatchConfig, Partnership, Phase, Seat, Suit};
use enum_iterator::all;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Pass,
    CallTrump { alone: bool, suit: Option<Suit> },
    Discard(Card),
    Play(Card),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Pass => "pass",
            Action::CallTrump { .. } => "call_trump",
            Action::Discard(_) => "discard",
            Action::Play(_) => "play_card",
        }
    }
}

/// What a single play completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayOutcome {
    pub trick_winner: Option<Seat>,
    /// Set when the play finished the hand; a new hand has been dealt.
    pub round_score: Option<(Partnership, u32)>,
}

/// Validates and applies actions against the one `GameState` it owns.
/// Nothing is mutated until an action has passed every check.
#[derive(Debug)]
pub struct Game<R: Rng> {
    state: GameState,
    rng: R,
    config: MatchConfig,
    listeners: PhaseListeners,
}

impl Default for Game<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, MatchConfig::default())
    }

    pub fn with_config(rng: R, config: MatchConfig) -> Self {
        Self::restore(GameState::new(), rng, config)
    }

    /// Picks a saved match back up. Listeners are not part of the saved state.
    pub fn restore(state: GameState, rng: R, config: MatchConfig) -> Self {
        Self {
            state,
            rng,
            config,
            listeners: PhaseListeners::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn register_phase_listener(
        &mut self,
        listener: impl FnMut(Phase) + 'static,
    ) -> ListenerId {
        self.listeners.register(listener)
    }

    pub fn unregister_phase_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    fn set_phase(&mut self, phase: Phase) {
        self.state.set_phase(phase);
        self.listeners.notify(phase);
    }

    fn require_phase(&self, action: &'static str, allowed: &[Phase]) -> Result<Phase, Error> {
        let phase = self.state.phase();
        if allowed.contains(&phase) {
            Ok(phase)
        } else {
            Err(Error::WrongPhase { action, phase })
        }
    }

    pub fn start_game(&mut self) -> Result<(), Error> {
        self.require_phase("start_game", &[Phase::None])?;
        let name = |seat: Seat| self.state.player(seat).name.as_str();
        info!(
            "starting match: {} & {} vs {} & {}",
            name(Seat::North),
            name(Seat::South),
            name(Seat::East),
            name(Seat::West)
        );
        self.deal()
    }

    /// Deals a fresh hand. Mid-hand this abandons the current round, which
    /// stays in the history unscored.
    pub fn new_round(&mut self) -> Result<(), Error> {
        if self.state.phase() == Phase::None {
            return Err(Error::WrongPhase {
                action: "new_round",
                phase: Phase::None,
            });
        }
        self.deal()
    }

    fn deal(&mut self) -> Result<(), Error> {
        let (hands, kitty) = dealt(shuffled(&mut self.rng));
        let round = self.state.create_new_round(hands, kitty)?;
        debug!(dealer = ?round.dealer(), up_card = %round.up_card(), "dealt");
        self.set_phase(Phase::OrderUp);
        Ok(())
    }

    pub fn rename_player(&mut self, seat: Seat, name: impl Into<String>) {
        self.state.player_mut(seat).name = name.into();
    }

    /// Whose action the game is waiting on.
    pub fn current_player(&self) -> Result<Seat, Error> {
        self.turn("current_player")
    }

    /// The seat to act, with errors naming `action`.
    fn turn(&self, action: &'static str) -> Result<Seat, Error> {
        let phase = self.state.phase();
        match phase {
            Phase::None => Err(Error::WrongPhase { action, phase }),
            Phase::OrderUp | Phase::PickTrump => {
                let round = self.state.round()?;
                round.nth_player_from(round.dealer(), round.trump_passes() + 1)
            }
            Phase::DealerDiscard => Ok(self.state.round()?.dealer()),
            Phase::Play => self.state.round()?.next_player(),
        }
    }

    /// Whether the player to bid may pass. With `StickTheDealer`, the dealer
    /// may not pass once everyone else has passed twice around.
    pub fn can_pass(&self) -> bool {
        let Ok(round) = self.state.round() else {
            return false;
        };
        matches!(self.state.phase(), Phase::OrderUp | Phase::PickTrump)
            && (self.config.dealer_rule == DealerRule::Redeal
                || round.trump_passes() + 1 < round.active_player_count() * 2)
    }

    pub fn pass(&mut self) -> Result<(), Error> {
        let phase = self.require_phase("pass", &[Phase::OrderUp, Phase::PickTrump])?;
        let passer = self.turn("pass")?;
        let round = self.state.round()?;
        let active = round.active_player_count();
        let passes = round.trump_passes() + 1;

        if passes == active * 2 {
            return match self.config.dealer_rule {
                DealerRule::StickTheDealer => Err(Error::DealerMustCall),
                DealerRule::Redeal => {
                    info!(dealer = ?round.dealer(), "everyone passed, hand thrown in");
                    self.deal()
                }
            };
        }
        if passes == active && phase != Phase::OrderUp {
            return Err(Error::invariant("all passed outside of the order up"));
        }

        self.state.round_mut()?.trump_passes = passes;
        debug!(?passer, passes, "pass");
        if passes == active {
            self.set_phase(Phase::PickTrump);
        }
        Ok(())
    }

    /// The bidder names trump: the up-card's suit while it is on offer
    /// (`suit` may be omitted, or must match it), otherwise `suit`. Whether
    /// `suit` differs from the turned-down card is left to the caller.
    pub fn call_trump(&mut self, alone: bool, suit: Option<Suit>) -> Result<(), Error> {
        let phase = self.require_phase("call_trump", &[Phase::OrderUp, Phase::PickTrump])?;
        let maker = self.turn("call_trump")?;
        let round = self.state.round()?;
        let dealer = round.dealer();
        let offered = round.up_card().suit;
        let trump = match (phase, suit) {
            (Phase::OrderUp, Some(named)) if named != offered => {
                return Err(Error::SuitNotOnOffer { offered, named });
            }
            (Phase::OrderUp, _) => offered,
            (_, suit) => suit.ok_or(Error::MissingTrumpSuit)?,
        };
        // the dealer sits this one out, so the up-card stays where it is
        let pick_up = phase == Phase::OrderUp && !(alone && maker == dealer.partner());

        let round = self.state.round_mut()?;
        round.maker = Some(maker);
        round.alone = alone;
        round.trump = trump;
        round.start_trick();
        info!(?maker, alone, %trump, "trump called");

        if pick_up {
            let up_card = round.up_card();
            round.kitty.retain(|card| *card != up_card);
            self.state.player_mut(dealer).hand.push(up_card);
            self.set_phase(Phase::DealerDiscard);
        } else {
            self.set_phase(Phase::Play);
        }
        Ok(())
    }

    pub fn discard(&mut self, card: Card) -> Result<(), Error> {
        self.require_phase("discard", &[Phase::DealerDiscard])?;
        let dealer = self.state.round()?.dealer();
        let card = self.state.player_mut(dealer).take_card(card)?;
        self.state.round_mut()?.kitty.push(card);
        debug!(?dealer, %card, "discard");
        self.set_phase(Phase::Play);
        Ok(())
    }

    /// The cards `seat` may play right now. Empty outside of play.
    pub fn legal_plays(&self, seat: Seat) -> Vec<Card> {
        let Ok(round) = self.state.round() else {
            return vec![];
        };
        if self.state.phase() != Phase::Play {
            return vec![];
        }
        let hand = self.state.hand(seat);
        let led = round.current_trick().and_then(Trick::lead).map(|play| play.card);
        hand.iter()
            .copied()
            .filter(|card| {
                !self.config.follow_suit || follows_suit(hand, *card, led, round.trump())
            })
            .collect()
    }

    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, Error> {
        self.require_phase("play_card", &[Phase::Play])?;
        let expected = self.turn("play_card")?;
        if seat != expected {
            return Err(Error::NotTheCurrentPlayer {
                expected,
                actual: seat,
            });
        }
        let round = self.state.round()?;
        let hand = self.state.hand(seat);
        if !hand.contains(&card) {
            return Err(Error::CardNotInHand(card));
        }
        let led = round.current_trick().and_then(Trick::lead).map(|play| play.card);
        if self.config.follow_suit && !follows_suit(hand, card, led, round.trump()) {
            return Err(Error::MustFollowSuit(card));
        }
        if !round.current_trick().is_some_and(|trick| !trick.is_complete()) {
            return Err(Error::invariant("no open trick to play into"));
        }

        let card = self.state.player_mut(seat).take_card(card)?;
        let round = self.state.round_mut()?;
        round.add_play(Play { player: seat, card })?;
        debug!(?seat, %card, "play");

        let mut outcome = PlayOutcome::default();
        if !round.is_current_trick_complete() {
            return Ok(outcome);
        }

        let winner = round
            .current_trick()
            .and_then(|trick| trick.winner(round.trump()))
            .ok_or_else(|| Error::invariant("complete trick without a winner"))?
            .player;
        let captured = round.add_captured_trick(winner);
        debug!(?winner, captured, "trick taken");
        outcome.trick_winner = Some(winner);

        if !round.is_complete() {
            round.start_trick();
            return Ok(outcome);
        }

        let (partnership, points) = score_round(round)?;
        self.state.add_points(partnership, points);
        info!(
            ?partnership,
            points,
            total = self.state.partnership_score(partnership),
            "round scored"
        );
        outcome.round_score = Some((partnership, points));
        self.deal()?;
        Ok(outcome)
    }

    /// Applies `action` on behalf of `seat`, which must be the seat the game
    /// is waiting on.
    pub fn act(&mut self, seat: Seat, action: Action) -> Result<(), Error> {
        let expected = self.turn(action.name())?;
        if seat != expected {
            return Err(Error::NotTheCurrentPlayer {
                expected,
                actual: seat,
            });
        }
        match action {
            Action::Pass => self.pass(),
            Action::CallTrump { alone, suit } => self.call_trump(alone, suit),
            Action::Discard(card) => self.discard(card),
            Action::Play(card) => self.play_card(seat, card).map(|_| ()),
        }
    }

    pub fn partnership_score(&self, partnership: Partnership) -> u32 {
        self.state.partnership_score(partnership)
    }

    /// The first partnership to reach the configured target, if any. The
    /// engine keeps accepting actions either way.
    pub fn winning_partnership(&self) -> Option<Partnership> {
        all::<Partnership>().find(|p| self.partnership_score(*p) >= self.config.points_to_win)
    }
}
