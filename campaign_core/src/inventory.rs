//! Items, inventory links and equipment

use crate::effect::definition::validate_name;
use crate::effect::EffectDefinition;
use crate::error::ValidationError;
use crate::types::{EffectId, ItemId, PlayerId, Rarity};
use serde::{Deserialize, Serialize};

/// Maximum length of an item name
pub const MAX_ITEM_NAME: usize = 100;

/// An item definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default = "default_base_quantity")]
    pub base_quantity: u32,
    /// Applied when the item is used
    #[serde(default)]
    pub active_effect_id: Option<EffectId>,
    /// Applies while the item is equipped
    #[serde(default)]
    pub passive_effect_id: Option<EffectId>,
}

fn default_base_quantity() -> u32 {
    1
}

impl Item {
    pub fn new(name: impl Into<String>, rarity: Rarity) -> Self {
        Item {
            id: ItemId::default(),
            name: name.into(),
            description: String::new(),
            rarity,
            base_quantity: 1,
            active_effect_id: None,
            passive_effect_id: None,
        }
    }

    pub fn with_active_effect(mut self, effect: EffectId) -> Self {
        self.active_effect_id = Some(effect);
        self
    }

    pub fn with_passive_effect(mut self, effect: EffectId) -> Self {
        self.passive_effect_id = Some(effect);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("item", &self.name, MAX_ITEM_NAME)?;
        if self.base_quantity < 1 {
            return Err(ValidationError::ZeroQuantity);
        }
        Ok(())
    }
}

/// Inventory link between a player and an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerItem {
    pub player_id: PlayerId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub is_equipped: bool,
}

impl PlayerItem {
    pub fn new(player_id: PlayerId, item_id: ItemId, quantity: u32) -> Self {
        PlayerItem {
            player_id,
            item_id,
            quantity,
            is_equipped: false,
        }
    }

    /// Equip or unequip. Does not touch active effect instances: the passive
    /// effect is picked up by the next resolution.
    pub fn set_equipped(mut self, equipped: bool) -> Self {
        self.is_equipped = equipped;
        self
    }

    /// Merge another grant of the same item into this link
    pub fn accumulate(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    /// Take up to `quantity` units, returning how many were taken
    pub fn take(&mut self, quantity: u32) -> u32 {
        let taken = quantity.min(self.quantity);
        self.quantity -= taken;
        taken
    }
}

/// An inventory link joined with its item and effect definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub link: PlayerItem,
    pub item: Item,
    pub active_effect: Option<EffectDefinition>,
    pub passive_effect: Option<EffectDefinition>,
}

impl InventoryEntry {
    /// The passive effect, only if the item is equipped
    pub fn equipped_passive(&self) -> Option<&EffectDefinition> {
        if self.link.is_equipped {
            self.passive_effect.as_ref()
        } else {
            None
        }
    }
}

/// The equipped subset of an inventory
#[derive(Debug, Clone, Copy)]
pub struct EquipmentSet<'a> {
    entries: &'a [InventoryEntry],
}

impl<'a> EquipmentSet<'a> {
    pub fn new(entries: &'a [InventoryEntry]) -> Self {
        EquipmentSet { entries }
    }

    /// Equipped entries, in inventory order
    pub fn equipped(&self) -> impl Iterator<Item = &'a InventoryEntry> + 'a {
        self.entries.iter().filter(|e| e.link.is_equipped)
    }

    /// Passive effects of equipped items, paired with the item name
    pub fn passives(&self) -> impl Iterator<Item = (&'a str, &'a EffectDefinition)> + 'a {
        self.entries
            .iter()
            .filter_map(|e| e.equipped_passive().map(|def| (e.item.name.as_str(), def)))
    }

    pub fn len(&self) -> usize {
        self.equipped().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Attribute;

    fn entry(name: &str, equipped: bool, passive: Option<EffectDefinition>) -> InventoryEntry {
        InventoryEntry {
            link: PlayerItem::new(PlayerId(1), ItemId(1), 1).set_equipped(equipped),
            item: Item::new(name, Rarity::Common),
            active_effect: None,
            passive_effect: passive,
        }
    }

    #[test]
    fn test_set_equipped_only_flips_flag() {
        let link = PlayerItem::new(PlayerId(1), ItemId(2), 3);
        let equipped = link.clone().set_equipped(true);
        assert!(equipped.is_equipped);
        assert_eq!(equipped.quantity, 3);
        assert_eq!(equipped.set_equipped(false), link);
    }

    #[test]
    fn test_accumulate_and_take() {
        let mut link = PlayerItem::new(PlayerId(1), ItemId(2), 2);
        link.accumulate(3);
        assert_eq!(link.quantity, 5);
        assert_eq!(link.take(2), 2);
        assert_eq!(link.take(10), 3);
        assert_eq!(link.quantity, 0);
    }

    #[test]
    fn test_unequipped_passive_ignored() {
        let ring = EffectDefinition::permanent("Might", Some(Attribute::Strength), 2);
        let entries = vec![
            entry("Ring", false, Some(ring.clone())),
            entry("Belt", true, Some(ring)),
            entry("Cloak", true, None),
        ];
        let set = EquipmentSet::new(&entries);
        assert_eq!(set.len(), 2);

        let passives: Vec<_> = set.passives().map(|(name, _)| name).collect();
        assert_eq!(passives, vec!["Belt"]);
    }

    #[test]
    fn test_item_rules() {
        assert!(Item::new("Rope", Rarity::Common).validate().is_ok());
        assert!(Item::new("", Rarity::Common).validate().is_err());

        let mut empty = Item::new("Arrows", Rarity::Common);
        empty.base_quantity = 0;
        assert_eq!(empty.validate(), Err(ValidationError::ZeroQuantity));
    }
}
