use crate::round::Round;
use crate::{Error, Partnership, HAND_SIZE};

/// Tricks the makers need to avoid being set.
pub const WIN_THRESHOLD: usize = 3;
pub const POINTS_MAKE: u32 = 1;
pub const POINTS_MARCH: u32 = 2;
pub const POINTS_MARCH_ALONE: u32 = 4;
pub const POINTS_SET: u32 = 2;

pub fn partnership_tricks(round: &Round, partnership: Partnership) -> usize {
    partnership
        .seats()
        .iter()
        .map(|seat| round.captured(*seat))
        .sum()
}

/// Which partnership a finished round awards, and how many points. Depends
/// only on the maker, the alone flag and the captured trick counts.
pub fn score_round(round: &Round) -> Result<(Partnership, u32), Error> {
    let makers = round
        .maker()
        .ok_or_else(|| Error::invariant("scoring a round without a maker"))?
        .partnership();
    let maker_tricks = partnership_tricks(round, makers);

    Ok(if maker_tricks < WIN_THRESHOLD {
        (makers.opponents(), POINTS_SET)
    } else if maker_tricks == HAND_SIZE && round.alone() {
        (makers, POINTS_MARCH_ALONE)
    } else if maker_tricks == HAND_SIZE {
        (makers, POINTS_MARCH)
    } else {
        (makers, POINTS_MAKE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Rank, Seat, Suit};
    use Seat::*;

    fn finished(maker: Seat, alone: bool, captured: [usize; 4]) -> Round {
        let mut round = Round::new(North, vec![Card::new(Suit::Clubs, Rank::Ace)]).unwrap();
        round.maker = Some(maker);
        round.alone = alone;
        round.captured = captured;
        round
    }

    #[test]
    fn test_three_tricks_from_one_partner_makes_one() {
        let round = finished(North, false, [3, 1, 0, 1]);
        assert_eq!(score_round(&round), Ok((Partnership::NorthSouth, POINTS_MAKE)));
    }

    #[test]
    fn test_march_alone_scores_four() {
        let round = finished(East, true, [0, 5, 0, 0]);
        assert_eq!(score_round(&round), Ok((Partnership::EastWest, POINTS_MARCH_ALONE)));
    }

    #[test]
    fn test_march_with_partner_scores_two() {
        let round = finished(West, false, [0, 2, 0, 3]);
        assert_eq!(score_round(&round), Ok((Partnership::EastWest, POINTS_MARCH)));
    }

    #[test]
    fn test_euchred_makers_give_two_to_opponents() {
        let round = finished(South, false, [1, 2, 1, 1]);
        assert_eq!(score_round(&round), Ok((Partnership::EastWest, POINTS_SET)));
        let round = finished(South, true, [0, 3, 2, 0]);
        assert_eq!(score_round(&round), Ok((Partnership::EastWest, POINTS_SET)));
    }

    #[test]
    fn test_four_tricks_alone_scores_one() {
        let round = finished(North, true, [4, 1, 0, 0]);
        assert_eq!(score_round(&round), Ok((Partnership::NorthSouth, POINTS_MAKE)));
    }

    #[test]
    fn test_scoring_is_a_pure_function() {
        let round = finished(East, false, [2, 2, 0, 1]);
        assert_eq!(score_round(&round), score_round(&round.clone()));
        assert_eq!(score_round(&round), Ok((Partnership::EastWest, POINTS_MAKE)));
    }

    #[test]
    fn test_missing_maker_is_an_invariant_violation() {
        let mut round = finished(East, false, [2, 2, 0, 1]);
        round.maker = None;
        assert!(matches!(score_round(&round), Err(Error::Invariant(_))));
    }
}
