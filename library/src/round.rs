use crate::ranking::trick_winner;
use crate::seat::{nth_player_from, Ring, SEATS};
use crate::{Card, Error, Seat, Suit, HAND_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Play {
    pub player: Seat,
    pub card: Card,
}

/// One slot per active player, filled in playing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    slots: Vec<Option<Play>>,
}

impl Trick {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn plays(&self) -> impl Iterator<Item = Play> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.plays().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lead().is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn lead(&self) -> Option<Play> {
        self.plays().next()
    }

    /// Puts `play` in the first empty slot. Returns `false` when the trick is
    /// already full.
    pub(crate) fn push(&mut self, play: Play) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(play);
                true
            }
            None => false,
        }
    }

    /// The winner once trump is known; the led card decides the lead suit.
    pub fn winner(&self, trump: Suit) -> Option<Play> {
        let lead = self.lead()?.card.effective_suit(trump);
        trick_winner(self, lead, trump)
    }
}

/// Everything that happens between one deal and the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) dealer: Seat,
    pub(crate) maker: Option<Seat>,
    /// Speculatively the up-card's suit until someone names trump.
    pub(crate) trump: Suit,
    pub(crate) up_card: Card,
    /// Undealt cards. Holds the up-card until the dealer takes it, and the
    /// dealer's discard afterwards.
    pub(crate) kitty: Vec<Card>,
    pub(crate) alone: bool,
    pub(crate) trump_passes: usize,
    pub(crate) tricks: Vec<Trick>,
    pub(crate) captured: [usize; SEATS],
}

impl Round {
    pub(crate) fn new(dealer: Seat, kitty: Vec<Card>) -> Result<Self, Error> {
        let up_card = *kitty
            .first()
            .ok_or_else(|| Error::invariant("nothing left to turn up"))?;
        Ok(Self {
            dealer,
            maker: None,
            trump: up_card.suit,
            up_card,
            kitty,
            alone: false,
            trump_passes: 0,
            tricks: vec![],
            captured: [0; SEATS],
        })
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn maker(&self) -> Option<Seat> {
        self.maker
    }

    /// The round's trump. Before anyone calls, this is the up-card's suit.
    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn up_card(&self) -> Card {
        self.up_card
    }

    pub fn kitty(&self) -> &[Card] {
        &self.kitty
    }

    pub fn alone(&self) -> bool {
        self.alone
    }

    pub fn trump_passes(&self) -> usize {
        self.trump_passes
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn captured(&self, seat: Seat) -> usize {
        self.captured[seat.index()]
    }

    pub fn ring(&self) -> Ring {
        Ring::for_maker(self.maker, self.alone)
    }

    pub fn active_player_count(&self) -> usize {
        self.ring().len()
    }

    pub fn total_plays(&self) -> usize {
        self.tricks.iter().map(Trick::len).sum()
    }

    pub fn current_trick(&self) -> Option<&Trick> {
        self.tricks.last()
    }

    pub fn is_current_trick_complete(&self) -> bool {
        self.current_trick().is_some_and(Trick::is_complete)
    }

    pub fn last_completed_trick(&self) -> Option<&Trick> {
        self.tricks.iter().rev().find(|trick| trick.is_complete())
    }

    pub fn is_complete(&self) -> bool {
        self.total_plays() == self.active_player_count() * HAND_SIZE
    }

    /// `seats` places after `start` in this round's rotation.
    pub fn nth_player_from(&self, start: Seat, seats: usize) -> Result<Seat, Error> {
        nth_player_from(start, seats, self.maker, self.alone)
    }

    pub(crate) fn start_trick(&mut self) {
        self.tricks.push(Trick::new(self.active_player_count()));
    }

    pub(crate) fn add_play(&mut self, play: Play) -> Result<(), Error> {
        let pushed = self
            .tricks
            .last_mut()
            .map(|trick| trick.push(play))
            .unwrap_or(false);
        if pushed {
            Ok(())
        } else {
            Err(Error::invariant("no open trick to play into"))
        }
    }

    pub(crate) fn add_captured_trick(&mut self, seat: Seat) -> usize {
        self.captured[seat.index()] += 1;
        self.captured[seat.index()]
    }

    fn last_trick_winner(&self) -> Result<Seat, Error> {
        self.last_completed_trick()
            .and_then(|trick| trick.winner(self.trump))
            .map(|play| play.player)
            .ok_or_else(|| Error::invariant("no completed trick to lead from"))
    }

    /// Who plays next once trump is settled.
    pub fn next_player(&self) -> Result<Seat, Error> {
        let active = self.active_player_count();
        let total_plays = self.total_plays();

        if self.is_current_trick_complete() && total_plays >= active {
            return self.last_trick_winner();
        }

        if total_plays < active {
            let mut start = self.dealer;
            let mut offset = total_plays + 1;
            // the dealer sits out when their partner goes alone, so count
            // from the first live seat instead
            if self.alone && self.maker == Some(self.dealer.partner()) {
                start = self.dealer.offset(1);
                offset -= 1;
            }
            return self.nth_player_from(start, offset);
        }

        self.nth_player_from(self.last_trick_winner()?, total_plays % active)
    }
}
