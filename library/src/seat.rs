use crate::Error;
use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const SEATS: usize = 4;

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Sequence, Serialize, Deserialize, Hash,
)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Seat {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Seat {
        match index % SEATS {
            0 => Seat::North,
            1 => Seat::East,
            2 => Seat::South,
            _ => Seat::West,
        }
    }

    /// The seat `n` places to the left, ignoring anyone sitting out.
    pub fn offset(self, n: usize) -> Seat {
        Seat::from_index(self.index() + n)
    }

    pub fn partner(self) -> Seat {
        self.offset(2)
    }

    pub fn partnership(self) -> Partnership {
        if self.index() % 2 == 0 {
            Partnership::NorthSouth
        } else {
            Partnership::EastWest
        }
    }
}

impl TryFrom<usize> for Seat {
    type Error = ();

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            value if value < SEATS => Ok(Seat::from_index(value)),
            _ => Err(()),
        }
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Seat::North => "N",
                Seat::East => "E",
                Seat::South => "S",
                Seat::West => "W",
            }
        )
    }
}

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Sequence, Serialize, Deserialize, Hash,
)]
pub enum Partnership {
    NorthSouth,
    EastWest,
}

impl Partnership {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn seats(self) -> [Seat; 2] {
        match self {
            Partnership::NorthSouth => [Seat::North, Seat::South],
            Partnership::EastWest => [Seat::East, Seat::West],
        }
    }

    pub fn opponents(self) -> Partnership {
        match self {
            Partnership::NorthSouth => Partnership::EastWest,
            Partnership::EastWest => Partnership::NorthSouth,
        }
    }
}

/// The seats taking part in the current rotation. Sitting a seat out keeps
/// every other seat's identity; only the arithmetic shrinks to the active
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    active: [bool; SEATS],
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            active: [true; SEATS],
        }
    }
}

impl Ring {
    /// The ring for a hand where `maker` may be going alone.
    pub fn for_maker(maker: Option<Seat>, alone: bool) -> Self {
        let mut ring = Ring::default();
        if let (Some(maker), true) = (maker, alone) {
            ring.sit_out(maker.partner());
        }
        ring
    }

    pub fn sit_out(&mut self, seat: Seat) {
        self.active[seat.index()] = false;
    }

    pub fn is_active(&self, seat: Seat) -> bool {
        self.active[seat.index()]
    }

    pub fn len(&self) -> usize {
        self.active.iter().filter(|x| **x).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn members(&self) -> impl Iterator<Item = Seat> + '_ {
        all::<Seat>().filter(|seat| self.is_active(*seat))
    }

    /// The member `n` places after `start`, counting only active seats.
    /// `None` when `start` is sitting out.
    pub fn nth_from(&self, start: Seat, n: usize) -> Option<Seat> {
        let members: Vec<_> = self.members().collect();
        let position = members.iter().position(|seat| *seat == start)?;
        Some(members[(position + n) % members.len()])
    }
}

/// Resolves `seats` places after `start` in the hand's rotation. When `start`
/// is the partner sitting out, the answer is the live seat behind the loner,
/// i.e. two active places after the maker.
pub fn nth_player_from(
    start: Seat,
    seats: usize,
    maker: Option<Seat>,
    alone: bool,
) -> Result<Seat, Error> {
    let ring = Ring::for_maker(maker, alone);
    if let Some(seat) = ring.nth_from(start, seats) {
        return Ok(seat);
    }
    maker
        .and_then(|maker| ring.nth_from(maker, 2))
        .ok_or_else(|| Error::invariant(format!("{start:?} has no seat in the active ring")))
}

#[test]
fn test_seat_cardinality() {
    assert_eq!(enum_iterator::cardinality::<Seat>(), SEATS);
    assert_eq!(Seat::West.offset(1), Seat::North);
    assert_eq!(Seat::East.partner(), Seat::West);
    assert_eq!(Seat::South.partnership(), Partnership::NorthSouth);
    assert_eq!(Partnership::EastWest.opponents(), Partnership::NorthSouth);
}

#[test]
fn test_ring_alone() {
    let ring = Ring::for_maker(Some(Seat::North), true);
    assert_eq!(ring.len(), 3);
    assert!(!ring.is_active(Seat::South));
    assert_eq!(ring.nth_from(Seat::East, 1), Some(Seat::West));
    assert_eq!(ring.nth_from(Seat::West, 1), Some(Seat::North));
    assert_eq!(ring.nth_from(Seat::South, 1), None);
}

#[test]
fn test_nth_player_from_sitting_out_seat() {
    for maker in all::<Seat>() {
        let behind = nth_player_from(maker.partner(), 1, Some(maker), true).unwrap();
        assert_eq!(behind, maker.partner().offset(1));
        assert_eq!(nth_player_from(maker.partner(), 3, Some(maker), true), Ok(behind));
    }
}

#[test]
fn test_nth_player_from_without_maker() {
    assert_eq!(nth_player_from(Seat::West, 2, None, false), Ok(Seat::East));
    assert_eq!(nth_player_from(Seat::West, 2, None, true), Ok(Seat::East));
}
