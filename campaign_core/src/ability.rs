//! Abilities and the player-ability links that gate them

use crate::effect::definition::validate_name;
use crate::effect::EffectDefinition;
use crate::error::ValidationError;
use crate::types::{AbilityId, AbilityType, EffectId, PlayerId};
use serde::{Deserialize, Serialize};

/// Maximum length of an ability name
pub const MAX_ABILITY_NAME: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    #[serde(default)]
    pub id: AbilityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ability_type: AbilityType,
    #[serde(default)]
    pub cooldown_turns: u32,
    #[serde(default)]
    pub cooldown_days: u32,
    #[serde(default)]
    pub effect_id: Option<EffectId>,
}

impl Ability {
    pub fn new(name: impl Into<String>, ability_type: AbilityType) -> Self {
        Ability {
            id: AbilityId::default(),
            name: name.into(),
            description: String::new(),
            ability_type,
            cooldown_turns: 0,
            cooldown_days: 0,
            effect_id: None,
        }
    }

    pub fn with_cooldown(mut self, turns: u32, days: u32) -> Self {
        self.cooldown_turns = turns;
        self.cooldown_days = days;
        self
    }

    pub fn with_effect(mut self, effect: EffectId) -> Self {
        self.effect_id = Some(effect);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("ability", &self.name, MAX_ABILITY_NAME)?;
        if self.ability_type == AbilityType::Active && self.cooldown_turns == 0 && self.cooldown_days == 0 {
            return Err(ValidationError::ActiveWithoutCooldown);
        }
        Ok(())
    }
}

/// A player's claim on an ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAbility {
    pub player_id: PlayerId,
    pub ability_id: AbilityId,
    pub is_active: bool,
}

impl PlayerAbility {
    pub fn new(player_id: PlayerId, ability_id: AbilityId) -> Self {
        PlayerAbility {
            player_id,
            ability_id,
            is_active: true,
        }
    }

    /// Only an active link may grant the ability's effect
    pub fn can_grant(&self) -> bool {
        self.is_active
    }
}

/// A player-ability link joined with the ability and its effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEntry {
    pub link: PlayerAbility,
    pub ability: Ability,
    pub effect: Option<EffectDefinition>,
}
