//! PlayerSnapshot - a consistent view of one player for stat resolution

use crate::ability::AbilityEntry;
use crate::effect::{AppliedEffect, EffectDefinition};
use crate::inventory::{EquipmentSet, InventoryEntry};
use crate::player::Player;
use crate::stat_block::{resolve, resolve_with_breakdown, Attributes, StatBreakdown};
use serde::{Deserialize, Serialize};

/// Everything needed to resolve a player's stats, read at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player: Player,
    pub active_effects: Vec<AppliedEffect>,
    pub inventory: Vec<InventoryEntry>,
    pub abilities: Vec<AbilityEntry>,
}

/// Counts shown on a player card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// Abilities with an active link
    pub total_abilities: usize,
    /// Sum of quantities across the inventory
    pub total_items: u32,
    pub active_effects_count: usize,
    pub equipped_items_count: usize,
}

impl PlayerSnapshot {
    pub fn equipment(&self) -> EquipmentSet<'_> {
        EquipmentSet::new(&self.inventory)
    }

    /// Passive effect definitions of equipped items
    pub fn equipped_passives(&self) -> Vec<EffectDefinition> {
        self.equipment().passives().map(|(_, def)| def.clone()).collect()
    }

    /// Resolved attributes
    pub fn final_stats(&self) -> Attributes {
        resolve(&self.player.attributes, &self.active_effects, &self.equipped_passives())
    }

    /// Resolved attributes with per-source contributions
    pub fn breakdown(&self) -> StatBreakdown {
        let passives: Vec<_> = self.equipment().passives().collect();
        resolve_with_breakdown(&self.player.attributes, &self.active_effects, &passives)
    }

    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            total_abilities: self.abilities.iter().filter(|a| a.link.is_active).count(),
            total_items: self
                .inventory
                .iter()
                .fold(0u32, |sum, e| sum.saturating_add(e.link.quantity)),
            active_effects_count: self.active_effects.len(),
            equipped_items_count: self.equipment().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{Ability, PlayerAbility};
    use crate::effect::ActiveEffect;
    use crate::inventory::{Item, PlayerItem};
    use crate::player::NewPlayer;
    use crate::types::{AbilityId, AbilityType, Attribute, EffectSource, ItemId, PlayerId, Rarity};

    fn snapshot() -> PlayerSnapshot {
        let player = NewPlayer::named("Mira").into_player(PlayerId(1));

        let rage = EffectDefinition::timed("Rage", Some(Attribute::Strength), 3, Some(2), None);
        let instance = ActiveEffect::from_definition(player.id, &rage, EffectSource::Admin);

        let might = EffectDefinition::permanent("Might", Some(Attribute::Strength), 2);
        let inventory = vec![
            InventoryEntry {
                link: PlayerItem::new(player.id, ItemId(1), 1).set_equipped(true),
                item: Item::new("Gauntlets", Rarity::Rare),
                active_effect: None,
                passive_effect: Some(might.clone()),
            },
            InventoryEntry {
                link: PlayerItem::new(player.id, ItemId(2), 4),
                item: Item::new("Spare Gauntlets", Rarity::Common),
                active_effect: None,
                passive_effect: Some(might),
            },
        ];

        let abilities = vec![
            AbilityEntry {
                link: PlayerAbility::new(player.id, AbilityId(1)),
                ability: Ability::new("Roar", AbilityType::Passive),
                effect: None,
            },
            AbilityEntry {
                link: PlayerAbility {
                    is_active: false,
                    ..PlayerAbility::new(player.id, AbilityId(2))
                },
                ability: Ability::new("Sleep", AbilityType::Passive),
                effect: None,
            },
        ];

        PlayerSnapshot {
            player,
            active_effects: vec![AppliedEffect::new(instance, Some(rage))],
            inventory,
            abilities,
        }
    }

    #[test]
    fn test_only_equipped_passives_count() {
        let snap = snapshot();
        assert_eq!(snap.equipped_passives().len(), 1);
        assert_eq!(snap.final_stats().strength, 5);
    }

    #[test]
    fn test_breakdown_labels_items() {
        let breakdown = snapshot().breakdown();
        let sources: Vec<_> = breakdown
            .for_attribute(Attribute::Strength)
            .map(|c| c.source.as_str())
            .collect();
        assert_eq!(sources, vec!["Rage", "Gauntlets"]);
    }

    #[test]
    fn test_summary_counts() {
        let summary = snapshot().summary();
        assert_eq!(summary.total_abilities, 1);
        assert_eq!(summary.total_items, 5);
        assert_eq!(summary.active_effects_count, 1);
        assert_eq!(summary.equipped_items_count, 1);
    }
}
