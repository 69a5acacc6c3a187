//! Type-keyed conversion between domain values and structured records, for
//! whatever transport or save format sits outside the engine.

use crate::round::Play;
use crate::{Card, Error, Player};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::marker::PhantomData;

pub const TYPE_CARD: &str = "card";
pub const TYPE_PLAYER: &str = "player";
pub const TYPE_PLAY: &str = "play";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Card(Card),
    Player(Player),
    Play(Play),
}

impl Entity {
    pub fn type_name(&self) -> &'static str {
        match self {
            Entity::Card(_) => TYPE_CARD,
            Entity::Player(_) => TYPE_PLAYER,
            Entity::Play(_) => TYPE_PLAY,
        }
    }
}

pub trait Converter {
    fn type_name(&self) -> &'static str;
    fn to_record(&self, entity: &Entity) -> Result<Value, Error>;
    fn from_record(&self, record: Value) -> Result<Entity, Error>;
}

/// A domain type with a record form.
trait Recorded: Serialize + DeserializeOwned {
    const TYPE_NAME: &'static str;
    fn into_entity(self) -> Entity;
    fn from_entity(entity: &Entity) -> Option<&Self>;
}

impl Recorded for Card {
    const TYPE_NAME: &'static str = TYPE_CARD;

    fn into_entity(self) -> Entity {
        Entity::Card(self)
    }

    fn from_entity(entity: &Entity) -> Option<&Self> {
        match entity {
            Entity::Card(card) => Some(card),
            _ => None,
        }
    }
}

impl Recorded for Player {
    const TYPE_NAME: &'static str = TYPE_PLAYER;

    fn into_entity(self) -> Entity {
        Entity::Player(self)
    }

    fn from_entity(entity: &Entity) -> Option<&Self> {
        match entity {
            Entity::Player(player) => Some(player),
            _ => None,
        }
    }
}

impl Recorded for Play {
    const TYPE_NAME: &'static str = TYPE_PLAY;

    fn into_entity(self) -> Entity {
        Entity::Play(self)
    }

    fn from_entity(entity: &Entity) -> Option<&Self> {
        match entity {
            Entity::Play(play) => Some(play),
            _ => None,
        }
    }
}

struct FieldConverter<T>(PhantomData<T>);

impl<T: Recorded> Converter for FieldConverter<T> {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn to_record(&self, entity: &Entity) -> Result<Value, Error> {
        let value = T::from_entity(entity).ok_or_else(|| {
            Error::MalformedRecord(format!(
                "{} converter given a {}",
                T::TYPE_NAME,
                entity.type_name()
            ))
        })?;
        serde_json::to_value(value).map_err(|err| Error::MalformedRecord(err.to_string()))
    }

    fn from_record(&self, record: Value) -> Result<Entity, Error> {
        serde_json::from_value::<T>(record)
            .map(T::into_entity)
            .map_err(|err| Error::MalformedRecord(format!("{}: {err}", T::TYPE_NAME)))
    }
}

pub struct ConverterRegistry {
    converters: HashMap<&'static str, Box<dyn Converter>>,
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        let mut registry = Self {
            converters: HashMap::new(),
        };
        registry.register(Box::new(FieldConverter::<Card>(PhantomData)));
        registry.register(Box::new(FieldConverter::<Player>(PhantomData)));
        registry.register(Box::new(FieldConverter::<Play>(PhantomData)));
        registry
    }
}

impl ConverterRegistry {
    pub fn register(&mut self, converter: Box<dyn Converter>) {
        self.converters.insert(converter.type_name(), converter);
    }

    pub fn converter(&self, type_name: &str) -> Result<&dyn Converter, Error> {
        self.converters
            .get(type_name)
            .map(|converter| converter.as_ref())
            .ok_or_else(|| Error::UnknownRecordType(type_name.to_owned()))
    }

    pub fn encode(&self, entity: &Entity) -> Result<Value, Error> {
        self.converter(entity.type_name())?.to_record(entity)
    }

    pub fn decode(&self, type_name: &str, record: Value) -> Result<Entity, Error> {
        self.converter(type_name)?.from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Seat, Suit};
    use serde_json::json;

    #[test]
    fn test_card_record_is_field_for_field() {
        let registry = ConverterRegistry::default();
        let card = Card::new(Suit::Clubs, Rank::Jack);
        let record = registry.encode(&Entity::Card(card)).unwrap();
        assert_eq!(record, json!({"suit": "Clubs", "rank": "Jack"}));
        assert_eq!(registry.decode(TYPE_CARD, record), Ok(Entity::Card(card)));
    }

    #[test]
    fn test_play_refers_to_its_player_by_seat() {
        let registry = ConverterRegistry::default();
        let play = Play {
            player: Seat::West,
            card: Card::new(Suit::Hearts, Rank::Ace),
        };
        let record = registry.encode(&Entity::Play(play)).unwrap();
        assert_eq!(
            record,
            json!({"player": "West", "card": {"suit": "Hearts", "rank": "Ace"}})
        );
    }

    #[test]
    fn test_player_record() {
        let registry = ConverterRegistry::default();
        let record = json!({
            "id": "South",
            "name": "Ada",
            "hand": [{"suit": "Spades", "rank": "Nine"}],
        });
        let Ok(Entity::Player(player)) = registry.decode(TYPE_PLAYER, record) else {
            panic!("player record did not decode");
        };
        assert_eq!(player.id, Seat::South);
        assert_eq!(player.name, "Ada");
        assert_eq!(player.hand, vec![Card::new(Suit::Spades, Rank::Nine)]);
    }

    #[test]
    fn test_unknown_and_malformed_records() {
        let registry = ConverterRegistry::default();
        assert_eq!(
            registry.decode("trick", json!({})).err(),
            Some(Error::UnknownRecordType("trick".to_owned()))
        );
        assert!(matches!(
            registry.decode(TYPE_CARD, json!({"suit": "Stars"})),
            Err(Error::MalformedRecord(_))
        ));
        let card = Entity::Card(Card::new(Suit::Clubs, Rank::Ace));
        assert!(matches!(
            registry.converter(TYPE_PLAY).unwrap().to_record(&card),
            Err(Error::MalformedRecord(_))
        ));
    }
}
