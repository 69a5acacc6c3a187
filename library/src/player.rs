use crate::{Card, Error, Seat};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Seat,
    pub name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(id: Seat) -> Self {
        Self {
            id,
            name: format!("Player {}", id.index() + 1),
            hand: vec![],
        }
    }

    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    pub(crate) fn take_card(&mut self, card: Card) -> Result<Card, Error> {
        let index = self
            .hand
            .iter()
            .position(|c| *c == card)
            .ok_or(Error::CardNotInHand(card))?;
        Ok(self.hand.remove(index))
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.name,
            self.id,
            self.hand.iter().sorted().join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn test_take_card() {
        let nine = Card::new(Suit::Hearts, Rank::Nine);
        let ace = Card::new(Suit::Spades, Rank::Ace);
        let mut player = Player::new(Seat::East);
        player.hand = vec![ace, nine];

        assert_eq!(player.take_card(nine), Ok(nine));
        assert_eq!(player.take_card(nine), Err(Error::CardNotInHand(nine)));
        assert_eq!(player.hand, vec![ace]);
        assert_eq!(player.to_string(), "Player 2 (E): AS");
    }
}
