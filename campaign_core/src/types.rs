//! Core identifiers and enums shared across the campaign model

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(v: u32) -> Self {
                $name(v)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a player character
    PlayerId
);
id_type!(
    /// Identifier of an effect definition
    EffectId
);
id_type!(
    /// Identifier of an item definition
    ItemId
);
id_type!(
    /// Identifier of an ability definition
    AbilityId
);
id_type!(
    /// Identifier of an active effect instance
    ActiveEffectId
);

/// Numeric player attribute an effect can modify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Health,
    MaxHealth,
    Armor,
    Strength,
    Agility,
    Intelligence,
    Physique,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// All attributes in display order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Health,
            Attribute::MaxHealth,
            Attribute::Armor,
            Attribute::Strength,
            Attribute::Agility,
            Attribute::Intelligence,
            Attribute::Physique,
            Attribute::Wisdom,
            Attribute::Charisma,
        ]
    }

    /// Column/wire name of the attribute
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Health => "health",
            Attribute::MaxHealth => "max_health",
            Attribute::Armor => "armor",
            Attribute::Strength => "strength",
            Attribute::Agility => "agility",
            Attribute::Intelligence => "intelligence",
            Attribute::Physique => "physique",
            Attribute::Wisdom => "wisdom",
            Attribute::Charisma => "charisma",
        }
    }

    /// Short label for tables
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Health => "Health",
            Attribute::MaxHealth => "Max Health",
            Attribute::Armor => "Armor",
            Attribute::Strength => "Strength",
            Attribute::Agility => "Agility",
            Attribute::Intelligence => "Intelligence",
            Attribute::Physique => "Physique",
            Attribute::Wisdom => "Wisdom",
            Attribute::Charisma => "Charisma",
        }
    }

    /// Parse a wire name, returning `None` for unknown keys
    pub fn from_key(key: &str) -> Option<Attribute> {
        Attribute::all().iter().copied().find(|a| a.key() == key)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Item rarity. Ordering is cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythical,
    Story,
}

impl Rarity {
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Mythical,
            Rarity::Story,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Mythical => "mythical",
            Rarity::Story => "story",
        }
    }
}

/// Player gender as stored on the character sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Whether an ability is triggered or always on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityType {
    #[default]
    Active,
    Passive,
}

/// Which counter a tick advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickKind {
    Turn,
    Day,
}

impl fmt::Display for TickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickKind::Turn => f.write_str("turn"),
            TickKind::Day => f.write_str("day"),
        }
    }
}

/// Provenance of an active effect instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source_type", content = "source_id", rename_all = "snake_case")]
pub enum EffectSource {
    Ability(AbilityId),
    Item(ItemId),
    Admin,
}

impl EffectSource {
    /// Wire name of the source kind
    pub fn kind(&self) -> &'static str {
        match self {
            EffectSource::Ability(_) => "ability",
            EffectSource::Item(_) => "item",
            EffectSource::Admin => "admin",
        }
    }

    /// Identifier of the granting ability/item, `None` for admin grants
    pub fn source_id(&self) -> Option<u32> {
        match self {
            EffectSource::Ability(id) => Some(id.0),
            EffectSource::Item(id) => Some(id.0),
            EffectSource::Admin => None,
        }
    }
}

impl fmt::Display for EffectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectSource::Ability(id) => write!(f, "ability #{}", id),
            EffectSource::Item(id) => write!(f, "item #{}", id),
            EffectSource::Admin => f.write_str("admin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_keys_round_trip() {
        for attr in Attribute::all() {
            assert_eq!(Attribute::from_key(attr.key()), Some(*attr));
        }
        assert_eq!(Attribute::from_key("mana"), None);
    }

    #[test]
    fn test_attribute_serde_name() {
        let json = serde_json::to_string(&Attribute::MaxHealth).unwrap();
        assert_eq!(json, "\"max_health\"");
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Mythical < Rarity::Story);
        assert_eq!(Rarity::all().len(), 7);
    }

    #[test]
    fn test_effect_source_wire_shape() {
        let json = serde_json::to_value(EffectSource::Item(ItemId(4))).unwrap();
        assert_eq!(json["source_type"], "item");
        assert_eq!(json["source_id"], 4);

        let admin = serde_json::to_value(EffectSource::Admin).unwrap();
        assert_eq!(admin["source_type"], "admin");
        assert_eq!(EffectSource::Admin.source_id(), None);
    }
}
