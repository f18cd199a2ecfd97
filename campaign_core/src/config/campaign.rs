//! Campaign seed content loading

use super::{ConfigError, Settings};
use crate::ability::Ability;
use crate::effect::{ActiveEffect, EffectDefinition};
use crate::inventory::Item;
use crate::player::NewPlayer;
use crate::store::{CampaignStore, StoreError};
use crate::types::{AbilityId, AbilityType, EffectId, EffectSource, ItemId, Rarity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A campaign file: settings plus the definitions and players to seed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub effects: Vec<EffectDefinition>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(default)]
    pub abilities: Vec<AbilityConfig>,
    #[serde(default)]
    pub players: Vec<PlayerConfig>,
}

/// Item definition referencing its effects by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default = "default_quantity")]
    pub base_quantity: u32,
    #[serde(default)]
    pub active_effect: Option<String>,
    #[serde(default)]
    pub passive_effect: Option<String>,
}

/// Ability definition referencing its effect by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityConfig {
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
    pub effect: Option<String>,
}

/// A player with starting inventory, abilities and effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(flatten)]
    pub player: NewPlayer,
    #[serde(default)]
    pub inventory: Vec<InventoryConfig>,
    /// Ability names granted with an active link
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Effect names applied as admin grants
    #[serde(default)]
    pub active_effects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub item: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub equipped: bool,
}

fn default_quantity() -> u32 {
    1
}

/// What a seed run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub effects: usize,
    pub items: usize,
    pub abilities: usize,
    pub players: usize,
}

fn rejected(kind: &str, name: &str, err: StoreError) -> ConfigError {
    ConfigError::ValidationError(format!("{} \"{}\": {}", kind, name, err))
}

fn lookup<Id: Copy>(table: &HashMap<String, Id>, kind: &str, name: &str, owner: &str) -> Result<Id, ConfigError> {
    table
        .get(name)
        .copied()
        .ok_or_else(|| ConfigError::ValidationError(format!("{} references unknown {} \"{}\"", owner, kind, name)))
}

impl CampaignConfig {
    /// Insert every definition and player into `store`
    ///
    /// Names are resolved against everything in the store once the
    /// definitions have been inserted, so a seed can build on earlier content.
    pub fn seed<S: CampaignStore + ?Sized>(&self, store: &S) -> Result<SeedReport, ConfigError> {
        let mut report = SeedReport::default();

        for effect in &self.effects {
            store
                .create_effect(effect.clone())
                .map_err(|e| rejected("effect", &effect.name, e))?;
            report.effects += 1;
        }
        let effects: HashMap<String, EffectId> = store
            .effects()
            .map_err(|e| rejected("store", "effects", e))?
            .into_iter()
            .map(|e| (e.name, e.id))
            .collect();
        let effect_ref = |name: &Option<String>, owner: &str| -> Result<Option<EffectId>, ConfigError> {
            name.as_deref()
                .map(|n| lookup(&effects, "effect", n, owner))
                .transpose()
        };

        let mut items: HashMap<String, ItemId> = HashMap::new();
        for config in &self.items {
            let item = Item {
                id: ItemId::default(),
                name: config.name.clone(),
                description: config.description.clone(),
                rarity: config.rarity,
                base_quantity: config.base_quantity,
                active_effect_id: effect_ref(&config.active_effect, &config.name)?,
                passive_effect_id: effect_ref(&config.passive_effect, &config.name)?,
            };
            let item = store.create_item(item).map_err(|e| rejected("item", &config.name, e))?;
            items.insert(item.name, item.id);
            report.items += 1;
        }

        let mut abilities: HashMap<String, AbilityId> = HashMap::new();
        for config in &self.abilities {
            let ability = Ability {
                id: AbilityId::default(),
                name: config.name.clone(),
                description: config.description.clone(),
                ability_type: config.ability_type,
                cooldown_turns: config.cooldown_turns,
                cooldown_days: config.cooldown_days,
                effect_id: effect_ref(&config.effect, &config.name)?,
            };
            let ability = store
                .create_ability(ability)
                .map_err(|e| rejected("ability", &config.name, e))?;
            abilities.insert(ability.name, ability.id);
            report.abilities += 1;
        }

        for config in &self.players {
            let name = config.player.name.as_str();
            let player = store
                .create_player(config.player.clone())
                .map_err(|e| rejected("player", name, e))?;

            for entry in &config.inventory {
                let item = lookup(&items, "item", &entry.item, name)?;
                store
                    .grant_item(player.id, item, entry.quantity)
                    .map_err(|e| rejected("inventory entry", &entry.item, e))?;
                if entry.equipped {
                    store
                        .set_item_equipped(player.id, item, true)
                        .map_err(|e| rejected("inventory entry", &entry.item, e))?;
                }
            }

            for ability_name in &config.abilities {
                let ability = lookup(&abilities, "ability", ability_name, name)?;
                store
                    .grant_ability(player.id, ability)
                    .map_err(|e| rejected("ability grant", ability_name, e))?;
            }

            for effect_name in &config.active_effects {
                let id = lookup(&effects, "effect", effect_name, name)?;
                let definition = store
                    .effect(id)
                    .map_err(|e| rejected("effect", effect_name, e))?
                    .ok_or_else(|| ConfigError::ValidationError(format!("effect \"{}\" vanished", effect_name)))?;
                store
                    .upsert_active_effect(ActiveEffect::from_definition(player.id, &definition, EffectSource::Admin))
                    .map_err(|e| rejected("active effect", effect_name, e))?;
            }
            report.players += 1;
        }

        tracing::info!(
            effects = report.effects,
            items = report.items,
            abilities = report.abilities,
            players = report.players,
            "campaign seeded"
        );
        Ok(report)
    }
}

/// Load a campaign from a TOML file
pub fn load_campaign(path: &Path) -> Result<CampaignConfig, ConfigError> {
    super::load_toml(path)
}

/// Load a campaign from a TOML string
pub fn parse_campaign(content: &str) -> Result<CampaignConfig, ConfigError> {
    super::parse_toml(content)
}

/// Get the bundled starter campaign
pub fn default_campaign() -> CampaignConfig {
    let toml = include_str!("../../config/campaign.toml");
    parse_campaign(toml).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "bundled campaign failed to parse");
        CampaignConfig::default()
    })
}
