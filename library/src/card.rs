use crate::Error;
use enum_iterator::{all, Sequence};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Sequence, Serialize, Deserialize, Hash,
)]
pub enum Rank {
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    Red,
    Black,
}

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Sequence, Serialize, Deserialize, Hash,
)]
pub enum Suit {
    Diamonds,
    Clubs,
    Hearts,
    Spades,
}

impl Suit {
    pub fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// The other suit of the same color. Its jack is the left bower when
    /// `self` is trump.
    pub fn same_color(self) -> Suit {
        match self {
            Suit::Diamonds => Suit::Hearts,
            Suit::Hearts => Suit::Diamonds,
            Suit::Clubs => Suit::Spades,
            Suit::Spades => Suit::Clubs,
        }
    }

    /// The letter used in the short card form.
    pub fn letter(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Diamonds => "♦",
                Suit::Clubs => "♣",
                Suit::Hearts => "♥",
                Suit::Spades => "♠",
            }
        )
    }
}

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Sequence, Serialize, Deserialize, Hash,
)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn is_right_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump
    }

    pub fn is_left_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump.same_color()
    }

    /// The suit this card belongs to once trump is known: the left bower is
    /// a trump card, everything else keeps its printed suit.
    pub fn effective_suit(self, trump: Suit) -> Suit {
        if self.is_left_bower(trump) {
            trump
        } else {
            self.suit
        }
    }

    pub fn is_trump(self, trump: Suit) -> bool {
        self.effective_suit(trump) == trump
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.letter())
    }
}

/// Parses what `Display` prints, e.g. `"JS"`. Case is ignored.
impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(Error::ParseCard(s.to_owned()));
        };
        let rank = match rank.to_ascii_uppercase() {
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(Error::ParseCard(s.to_owned())),
        };
        let suit = all::<Suit>()
            .find(|candidate| candidate.letter() == suit.to_ascii_uppercase())
            .ok_or_else(|| Error::ParseCard(s.to_owned()))?;
        Ok(Card::new(suit, rank))
    }
}

pub const HAND_SIZE: usize = 5;

pub(crate) fn shuffled<R>(rng: &mut R) -> Vec<Card>
where
    R: Rng + ?Sized,
{
    let mut deck = all::<Card>().collect::<Vec<_>>();
    deck.shuffle(rng);
    deck
}

/// Splits a shuffled deck into four hands of five and the four card kitty.
/// The first card of the kitty is the up-card.
pub(crate) fn dealt(mut deck: Vec<Card>) -> ([Vec<Card>; 4], Vec<Card>) {
    let range = 0..HAND_SIZE;
    let hands = [
        deck.drain(range.clone()).collect(),
        deck.drain(range.clone()).collect(),
        deck.drain(range.clone()).collect(),
        deck.drain(range).collect(),
    ];
    (hands, deck)
}
