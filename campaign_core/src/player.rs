//! Players: character sheets with base attributes

use crate::effect::definition::validate_name;
use crate::error::ValidationError;
use crate::stat_block::Attributes;
use crate::types::{Attribute, Gender, PlayerId};
use serde::{Deserialize, Serialize};

/// Maximum length of a player name
pub const MAX_PLAYER_NAME: usize = 50;

/// A player character as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub gender: Gender,
    #[serde(flatten)]
    pub attributes: Attributes,
    pub history: String,
    pub in_battle: bool,
    pub is_online: bool,
    pub is_card_shown: bool,
}

/// Data for creating a player; missing attributes take sheet defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(flatten)]
    pub attributes: Attributes,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default = "default_card_shown")]
    pub is_card_shown: bool,
}

fn default_card_shown() -> bool {
    true
}

impl NewPlayer {
    pub fn named(name: impl Into<String>) -> Self {
        NewPlayer {
            name: name.into(),
            gender: Gender::default(),
            attributes: Attributes::default(),
            history: String::new(),
            is_online: false,
            is_card_shown: true,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("player", &self.name, MAX_PLAYER_NAME)?;
        if self.attributes.health <= 0 {
            return Err(ValidationError::NonPositive { field: "health" });
        }
        if self.attributes.max_health <= 0 {
            return Err(ValidationError::NonPositive { field: "max_health" });
        }
        check_health(&self.attributes)
    }

    /// Build the stored record under the given id
    pub fn into_player(self, id: PlayerId) -> Player {
        Player {
            id,
            name: self.name.trim().to_string(),
            gender: self.gender,
            attributes: self.attributes,
            history: self.history,
            in_battle: false,
            is_online: self.is_online,
            is_card_shown: self.is_card_shown,
        }
    }
}

/// Partial update of a player; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub health: Option<i32>,
    pub max_health: Option<i32>,
    pub armor: Option<i32>,
    pub strength: Option<i32>,
    pub agility: Option<i32>,
    pub intelligence: Option<i32>,
    pub physique: Option<i32>,
    pub wisdom: Option<i32>,
    pub charisma: Option<i32>,
    pub history: Option<String>,
    pub in_battle: Option<bool>,
    pub is_online: Option<bool>,
    pub is_card_shown: Option<bool>,
}

impl PlayerPatch {
    /// Patch setting a single attribute
    pub fn attribute(attribute: Attribute, value: i32) -> Self {
        let mut patch = PlayerPatch::default();
        *patch.attribute_slot(attribute) = Some(value);
        patch
    }

    fn attribute_slot(&mut self, attribute: Attribute) -> &mut Option<i32> {
        match attribute {
            Attribute::Health => &mut self.health,
            Attribute::MaxHealth => &mut self.max_health,
            Attribute::Armor => &mut self.armor,
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Physique => &mut self.physique,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        }
    }

    fn attribute_value(&self, attribute: Attribute) -> Option<i32> {
        match attribute {
            Attribute::Health => self.health,
            Attribute::MaxHealth => self.max_health,
            Attribute::Armor => self.armor,
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
            Attribute::Physique => self.physique,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == PlayerPatch::default()
    }

    /// Produce the patched player, enforcing the player rules on the result
    pub fn apply(&self, player: &Player) -> Result<Player, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyPatch);
        }

        let mut updated = player.clone();
        if let Some(name) = &self.name {
            validate_name("player", name, MAX_PLAYER_NAME)?;
            updated.name = name.trim().to_string();
        }
        if let Some(gender) = self.gender {
            updated.gender = gender;
        }

        for attribute in Attribute::all() {
            if let Some(value) = self.attribute_value(*attribute) {
                updated.attributes.set(*attribute, value);
            }
        }

        if let Some(history) = &self.history {
            updated.history = history.clone();
        }
        if let Some(in_battle) = self.in_battle {
            updated.in_battle = in_battle;
        }
        if let Some(is_online) = self.is_online {
            updated.is_online = is_online;
        }
        if let Some(is_card_shown) = self.is_card_shown {
            updated.is_card_shown = is_card_shown;
        }

        check_health(&updated.attributes)?;
        Ok(updated)
    }
}

fn check_health(attributes: &Attributes) -> Result<(), ValidationError> {
    if attributes.health > attributes.max_health {
        return Err(ValidationError::HealthExceedsMax {
            health: attributes.health,
            max_health: attributes.max_health,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Player {
        NewPlayer::named("Arin").into_player(PlayerId(1))
    }

    #[test]
    fn test_new_player_defaults() {
        let player = stored();
        assert_eq!(player.attributes, Attributes::default());
        assert!(player.is_card_shown);
        assert!(!player.in_battle);
    }

    #[test]
    fn test_new_player_rules() {
        assert!(NewPlayer::named("Arin").validate().is_ok());
        assert_eq!(
            NewPlayer::named("  ").validate(),
            Err(ValidationError::EmptyName { entity: "player" })
        );
        assert!(matches!(
            NewPlayer::named("a".repeat(51)).validate(),
            Err(ValidationError::NameTooLong { max: 50, .. })
        ));

        let over = NewPlayer::named("Arin").with_attributes(Attributes {
            health: 60,
            max_health: 50,
            ..Attributes::default()
        });
        assert_eq!(
            over.validate(),
            Err(ValidationError::HealthExceedsMax { health: 60, max_health: 50 })
        );

        let dead = NewPlayer::named("Arin").with_attributes(Attributes {
            health: 0,
            ..Attributes::default()
        });
        assert_eq!(dead.validate(), Err(ValidationError::NonPositive { field: "health" }));
    }

    #[test]
    fn test_name_is_trimmed() {
        let player = NewPlayer::named("  Arin ").into_player(PlayerId(2));
        assert_eq!(player.name, "Arin");
    }

    #[test]
    fn test_patch_checks_merged_health() {
        let player = stored();
        // Health alone above the stored max is rejected
        assert!(PlayerPatch::attribute(Attribute::Health, 51).apply(&player).is_err());

        // Raising both together is fine
        let patch = PlayerPatch {
            health: Some(70),
            max_health: Some(80),
            ..PlayerPatch::default()
        };
        let updated = patch.apply(&player).unwrap();
        assert_eq!(updated.attributes.health, 70);
        assert_eq!(updated.attributes.max_health, 80);

        // Lowering max below current health is rejected
        assert!(PlayerPatch::attribute(Attribute::MaxHealth, 40).apply(&player).is_err());
    }

    #[test]
    fn test_patch_updates_flags_and_stats() {
        let player = stored();
        let patch = PlayerPatch {
            strength: Some(4),
            in_battle: Some(true),
            history: Some("Born in the marshes".to_string()),
            ..PlayerPatch::default()
        };
        let updated = patch.apply(&player).unwrap();
        assert_eq!(updated.attributes.strength, 4);
        assert!(updated.in_battle);
        assert_eq!(updated.history, "Born in the marshes");
        assert_eq!(updated.id, player.id);
    }

    #[test]
    fn test_empty_patch_rejected() {
        assert_eq!(PlayerPatch::default().apply(&stored()), Err(ValidationError::EmptyPatch));
    }

    #[test]
    fn test_player_wire_shape_is_flat() {
        let json = serde_json::to_value(stored()).unwrap();
        assert_eq!(json["health"], 50);
        assert_eq!(json["armor"], 10);
        assert_eq!(json["gender"], "male");
    }
}
