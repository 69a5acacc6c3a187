use crate::{Card, Phase, Seat, Suit};
use thiserror::Error;

/// Every way an action can be rejected. A rejected action never mutates the
/// game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{action} is not allowed during {phase:?}")]
    WrongPhase { action: &'static str, phase: Phase },
    #[error("it is {expected:?}'s turn, not {actual:?}'s")]
    NotTheCurrentPlayer { expected: Seat, actual: Seat },
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("{0} does not follow the led suit")]
    MustFollowSuit(Card),
    #[error("the dealer must name trump")]
    DealerMustCall,
    #[error("a suit must be named once the up-card is turned down")]
    MissingTrumpSuit,
    #[error("only {offered} can be ordered up, not {named}")]
    SuitNotOnOffer { offered: Suit, named: Suit },
    #[error("cannot parse card {0:?}")]
    ParseCard(String),
    #[error("no converter for record type {0:?}")]
    UnknownRecordType(String),
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl Error {
    pub(crate) fn invariant(detail: impl Into<String>) -> Self {
        Error::Invariant(detail.into())
    }
}
