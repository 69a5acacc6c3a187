//! Card strength under a trump suit, and trick resolution.

use crate::round::{Play, Trick};
use crate::{Card, Rank, Suit};
use std::cmp::Ordering;

/// Strength of a trump card: 9 < 10 < Q < K < A < left bower < right bower.
fn trump_strength(card: Card, trump: Suit) -> u8 {
    if card.is_right_bower(trump) {
        7
    } else if card.is_left_bower(trump) {
        6
    } else {
        match card.rank {
            Rank::Nine => 0,
            Rank::Ten => 1,
            Rank::Queen => 2,
            Rank::King => 3,
            Rank::Ace => 4,
            // both jacks of this color are bowers
            Rank::Jack => 5,
        }
    }
}

/// Orders two cards played to the same trick. `Equal` means neither can beat
/// the other (two off-suit discards).
pub fn compare(a: Card, b: Card, trump: Suit, lead: Suit) -> Ordering {
    match (a.is_trump(trump), b.is_trump(trump)) {
        (true, true) => trump_strength(a, trump).cmp(&trump_strength(b, trump)),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match (a.suit == lead, b.suit == lead) {
            (true, true) => a.rank.cmp(&b.rank),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => Ordering::Equal,
        },
    }
}

/// The winning play of a trick. Slots are taken left to right and the
/// current best is only replaced on a strict improvement, so the earlier play
/// wins a tie. Empty slots are skipped.
pub fn trick_winner(trick: &Trick, lead: Suit, trump: Suit) -> Option<Play> {
    trick.plays().fold(None, |best, play| match best {
        Some(best) if compare(play.card, best.card, trump, lead) != Ordering::Greater => {
            Some(best)
        }
        _ => Some(play),
    })
}

/// Whether `card` may be played from `hand` onto a trick led with `led`.
pub fn follows_suit(hand: &[Card], card: Card, led: Option<Card>, trump: Suit) -> bool {
    let Some(led) = led else {
        return true;
    };
    let lead = led.effective_suit(trump);
    card.effective_suit(trump) == lead || !hand.iter().any(|c| c.effective_suit(trump) == lead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seat;
    use Rank::*;
    use Suit::*;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn trick(cards: &[Card]) -> Trick {
        let mut trick = Trick::new(4);
        for (i, card) in cards.iter().enumerate() {
            trick.push(Play {
                player: Seat::from_index(i),
                card: *card,
            });
        }
        trick
    }

    #[test]
    fn test_compare() {
        let ah = card(Hearts, Ace);
        let kh = card(Hearts, King);
        let ac = card(Clubs, Ace);

        assert_eq!(compare(ah, kh, Diamonds, Hearts), Ordering::Greater);
        assert_eq!(compare(kh, ac, Hearts, Hearts), Ordering::Greater);
        assert_eq!(compare(kh, ac, Clubs, Hearts), Ordering::Less);
        assert_eq!(compare(ac, card(Spades, Ace), Diamonds, Hearts), Ordering::Equal);
    }

    #[test]
    fn test_bowers_outrank_trump_ace() {
        let right = card(Spades, Jack);
        let left = card(Clubs, Jack);
        let ace = card(Spades, Ace);

        assert_eq!(compare(right, left, Spades, Hearts), Ordering::Greater);
        assert_eq!(compare(left, ace, Spades, Hearts), Ordering::Greater);
        assert_eq!(compare(card(Spades, Nine), card(Hearts, Ace), Spades, Hearts), Ordering::Greater);
        // the left bower is not a club once spades are trump
        assert_eq!(compare(card(Clubs, Ace), left, Spades, Clubs), Ordering::Less);
    }

    #[test]
    fn test_trick_winner() {
        let t = trick(&[card(Hearts, Nine), card(Hearts, Ace), card(Diamonds, Jack), card(Clubs, Ace)]);
        assert_eq!(trick_winner(&t, Hearts, Spades).map(|p| p.player), Some(Seat::East));
        // jack of diamonds is the left bower with hearts trump
        assert_eq!(trick_winner(&t, Hearts, Hearts).map(|p| p.player), Some(Seat::South));
        assert_eq!(trick_winner(&t, Hearts, Clubs).map(|p| p.player), Some(Seat::West));
    }

    #[test]
    fn test_trick_winner_skips_empty_slots() {
        let t = trick(&[card(Clubs, Ten), card(Diamonds, Ace)]);
        assert_eq!(trick_winner(&t, Clubs, Hearts).map(|p| p.player), Some(Seat::North));
        assert_eq!(trick_winner(&Trick::new(3), Clubs, Hearts), None);
    }

    #[test]
    fn test_follows_suit() {
        let hand = vec![card(Clubs, Jack), card(Hearts, Nine)];
        let led = Some(card(Spades, Ace));
        // the left bower is a spade when spades are trump
        assert!(!follows_suit(&hand, card(Hearts, Nine), led, Spades));
        assert!(follows_suit(&hand, card(Clubs, Jack), led, Spades));
        // with hearts trump the club jack is a club and no spade is held
        assert!(follows_suit(&hand, card(Hearts, Nine), led, Hearts));
        assert!(follows_suit(&hand, card(Hearts, Nine), None, Hearts));
    }
}

#[cfg(test)]
mod props {
    use super::*;
    use crate::Seat;
    use enum_iterator::all;
    use proptest::prelude::*;
    use proptest::sample::subsequence;

    fn suit() -> impl Strategy<Value = Suit> {
        prop_oneof![
            Just(Suit::Diamonds),
            Just(Suit::Clubs),
            Just(Suit::Hearts),
            Just(Suit::Spades),
        ]
    }

    /// Distinct cards for a trick of two to four plays, in shuffled order.
    fn plays() -> impl Strategy<Value = Vec<Card>> {
        subsequence(all::<Card>().collect::<Vec<_>>(), 2..=4).prop_shuffle()
    }

    /// Total order used as an oracle: trump strength above lead rank above
    /// everything else.
    fn oracle_key(card: Card, lead: Suit, trump: Suit) -> (u8, u8) {
        if card.is_right_bower(trump) {
            (3, 8)
        } else if card.is_left_bower(trump) {
            (3, 7)
        } else if card.suit == trump {
            (3, card.rank as u8)
        } else if card.suit == lead {
            (2, card.rank as u8)
        } else {
            (1, 0)
        }
    }

    proptest! {
        #[test]
        fn prop_trick_winner_is_strictly_highest(cards in plays(), lead in suit(), trump in suit()) {
            let mut trick = Trick::new(4);
            for (i, card) in cards.iter().enumerate() {
                trick.push(Play { player: Seat::from_index(i), card: *card });
            }
            let winner = trick_winner(&trick, lead, trump).unwrap();
            let best = cards.iter().map(|c| oracle_key(*c, lead, trump)).max().unwrap();
            let first_best = cards
                .iter()
                .position(|c| oracle_key(*c, lead, trump) == best)
                .unwrap();
            prop_assert_eq!(winner.player, Seat::from_index(first_best));
        }

        #[test]
        fn prop_any_trump_beats_any_non_trump(a in plays(), lead in suit(), trump in suit()) {
            let (x, y) = (a[0], a[1]);
            if x.is_trump(trump) && !y.is_trump(trump) {
                prop_assert_eq!(compare(x, y, trump, lead), Ordering::Greater);
                prop_assert_eq!(compare(y, x, trump, lead), Ordering::Less);
            }
        }
    }
}
