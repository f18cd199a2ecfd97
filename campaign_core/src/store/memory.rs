//! MemoryStore - in-memory campaign repository

use super::{CampaignStore, StoreError};
use crate::ability::{Ability, AbilityEntry, PlayerAbility};
use crate::effect::{ActiveEffect, AppliedEffect, EffectDefinition};
use crate::error::ValidationError;
use crate::inventory::{InventoryEntry, Item, PlayerItem};
use crate::player::{NewPlayer, Player, PlayerPatch};
use crate::snapshot::PlayerSnapshot;
use crate::types::{AbilityId, ActiveEffectId, EffectId, EffectSource, ItemId, PlayerId};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Tables {
    next_id: u32,
    players: BTreeMap<PlayerId, Player>,
    effects: BTreeMap<EffectId, EffectDefinition>,
    items: BTreeMap<ItemId, Item>,
    abilities: BTreeMap<AbilityId, Ability>,
    player_items: Vec<PlayerItem>,
    player_abilities: Vec<PlayerAbility>,
    active_effects: BTreeMap<ActiveEffectId, ActiveEffect>,
}

impl Tables {
    fn allocate(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn require_player(&self, id: PlayerId) -> Result<&Player, StoreError> {
        self.players.get(&id).ok_or_else(|| StoreError::not_found("player", id))
    }

    fn require_item(&self, id: ItemId) -> Result<&Item, StoreError> {
        self.items.get(&id).ok_or_else(|| StoreError::not_found("item", id))
    }

    fn require_ability(&self, id: AbilityId) -> Result<&Ability, StoreError> {
        self.abilities.get(&id).ok_or_else(|| StoreError::not_found("ability", id))
    }

    fn require_effect_ref(&self, id: Option<EffectId>) -> Result<(), StoreError> {
        match id {
            Some(id) if !self.effects.contains_key(&id) => Err(StoreError::not_found("effect", id)),
            _ => Ok(()),
        }
    }

    /// An item or ability source must still exist to grant an instance
    fn require_source(&self, source: EffectSource) -> Result<(), StoreError> {
        match source {
            EffectSource::Item(id) => self.require_item(id).map(|_| ()),
            EffectSource::Ability(id) => self.require_ability(id).map(|_| ()),
            EffectSource::Admin => Ok(()),
        }
    }

    fn remove_sourced(&mut self, source: EffectSource) -> Vec<ActiveEffect> {
        let ids: Vec<_> = self
            .active_effects
            .values()
            .filter(|i| i.source == source)
            .map(|i| i.id)
            .collect();
        let removed: Vec<_> = ids.iter().filter_map(|id| self.active_effects.remove(id)).collect();
        if !removed.is_empty() {
            tracing::debug!(%source, count = removed.len(), "removed effects from source");
        }
        removed
    }

    fn player_item_mut(&mut self, player: PlayerId, item: ItemId) -> Result<&mut PlayerItem, StoreError> {
        self.player_items
            .iter_mut()
            .find(|l| l.player_id == player && l.item_id == item)
            .ok_or_else(|| StoreError::not_found("inventory entry", item))
    }

    /// Look up a referenced definition, logging when it is gone
    fn definition(&self, id: Option<EffectId>, owner: &str) -> Option<EffectDefinition> {
        let id = id?;
        let found = self.effects.get(&id).cloned();
        if found.is_none() {
            tracing::warn!(effect_id = %id, owner, "skipping dangling effect reference");
        }
        found
    }
}

/// Thread-safe in-memory implementation of [`CampaignStore`]
///
/// Ids are allocated from a single counter shared by every table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::Conflict("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::Conflict("store lock poisoned".to_string()))
    }
}

impl CampaignStore for MemoryStore {
    fn player_snapshot(&self, id: PlayerId) -> Result<PlayerSnapshot, StoreError> {
        let tables = self.read()?;
        let player = tables.require_player(id)?.clone();

        let active_effects = tables
            .active_effects
            .values()
            .filter(|i| i.player_id == id)
            .map(|i| {
                let owner = format!("active effect #{}", i.id);
                AppliedEffect::new(i.clone(), tables.definition(Some(i.effect_id), &owner))
            })
            .collect();

        let inventory = tables
            .player_items
            .iter()
            .filter(|l| l.player_id == id)
            .filter_map(|l| {
                let item = tables.items.get(&l.item_id)?.clone();
                Some(InventoryEntry {
                    active_effect: tables.definition(item.active_effect_id, &item.name),
                    passive_effect: tables.definition(item.passive_effect_id, &item.name),
                    link: l.clone(),
                    item,
                })
            })
            .collect();

        let abilities = tables
            .player_abilities
            .iter()
            .filter(|l| l.player_id == id)
            .filter_map(|l| {
                let ability = tables.abilities.get(&l.ability_id)?.clone();
                Some(AbilityEntry {
                    effect: tables.definition(ability.effect_id, &ability.name),
                    link: l.clone(),
                    ability,
                })
            })
            .collect();

        Ok(PlayerSnapshot {
            player,
            active_effects,
            inventory,
            abilities,
        })
    }

    fn upsert_active_effect(&self, mut instance: ActiveEffect) -> Result<ActiveEffect, StoreError> {
        let mut tables = self.write()?;
        tables.require_player(instance.player_id)?;
        tables.require_source(instance.source)?;

        if instance.id == ActiveEffectId::default() {
            instance.id = ActiveEffectId(tables.allocate());
        } else if instance.id.0 > tables.next_id {
            tables.next_id = instance.id.0;
        }

        tracing::debug!(
            id = %instance.id,
            player_id = %instance.player_id,
            effect_id = %instance.effect_id,
            "upserted active effect"
        );
        tables.active_effects.insert(instance.id, instance.clone());
        Ok(instance)
    }

    fn remove_active_effect(&self, id: ActiveEffectId) -> Result<Option<ActiveEffect>, StoreError> {
        let mut tables = self.write()?;
        let removed = tables.active_effects.remove(&id);
        if removed.is_some() {
            tracing::debug!(id = %id, "removed active effect");
        }
        Ok(removed)
    }

    fn set_item_equipped(&self, player: PlayerId, item: ItemId, equipped: bool) -> Result<PlayerItem, StoreError> {
        let mut tables = self.write()?;
        let link = tables.player_item_mut(player, item)?;
        *link = link.clone().set_equipped(equipped);
        tracing::debug!(player_id = %player, item_id = %item, equipped, "set equipped");
        Ok(link.clone())
    }

    fn create_effect(&self, mut effect: EffectDefinition) -> Result<EffectDefinition, StoreError> {
        effect.validate()?;
        effect.name = effect.name.trim().to_string();
        let mut tables = self.write()?;
        if tables.effects.values().any(|e| e.name == effect.name) {
            return Err(StoreError::Conflict(format!("effect \"{}\" already exists", effect.name)));
        }
        effect.id = EffectId(tables.allocate());
        tables.effects.insert(effect.id, effect.clone());
        tracing::debug!(id = %effect.id, name = %effect.name, "created effect");
        Ok(effect)
    }

    fn effect(&self, id: EffectId) -> Result<Option<EffectDefinition>, StoreError> {
        Ok(self.read()?.effects.get(&id).cloned())
    }

    fn effects(&self) -> Result<Vec<EffectDefinition>, StoreError> {
        Ok(self.read()?.effects.values().cloned().collect())
    }

    fn create_item(&self, mut item: Item) -> Result<Item, StoreError> {
        item.validate()?;
        item.name = item.name.trim().to_string();
        let mut tables = self.write()?;
        tables.require_effect_ref(item.active_effect_id)?;
        tables.require_effect_ref(item.passive_effect_id)?;
        item.id = ItemId(tables.allocate());
        tables.items.insert(item.id, item.clone());
        tracing::debug!(id = %item.id, name = %item.name, "created item");
        Ok(item)
    }

    fn item(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        Ok(self.read()?.items.get(&id).cloned())
    }

    fn items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.read()?.items.values().cloned().collect())
    }

    fn delete_item(&self, id: ItemId) -> Result<(Item, Vec<ActiveEffect>), StoreError> {
        let mut tables = self.write()?;
        let item = tables.items.remove(&id).ok_or_else(|| StoreError::not_found("item", id))?;
        tables.player_items.retain(|l| l.item_id != id);
        let removed = tables.remove_sourced(EffectSource::Item(id));
        tracing::debug!(id = %id, name = %item.name, "deleted item");
        Ok((item, removed))
    }

    fn create_ability(&self, mut ability: Ability) -> Result<Ability, StoreError> {
        ability.validate()?;
        ability.name = ability.name.trim().to_string();
        let mut tables = self.write()?;
        if tables.abilities.values().any(|a| a.name == ability.name) {
            return Err(StoreError::Conflict(format!("ability \"{}\" already exists", ability.name)));
        }
        tables.require_effect_ref(ability.effect_id)?;
        ability.id = AbilityId(tables.allocate());
        tables.abilities.insert(ability.id, ability.clone());
        tracing::debug!(id = %ability.id, name = %ability.name, "created ability");
        Ok(ability)
    }

    fn ability(&self, id: AbilityId) -> Result<Option<Ability>, StoreError> {
        Ok(self.read()?.abilities.get(&id).cloned())
    }

    fn abilities(&self) -> Result<Vec<Ability>, StoreError> {
        Ok(self.read()?.abilities.values().cloned().collect())
    }

    fn delete_ability(&self, id: AbilityId) -> Result<(Ability, Vec<ActiveEffect>), StoreError> {
        let mut tables = self.write()?;
        let ability = tables
            .abilities
            .remove(&id)
            .ok_or_else(|| StoreError::not_found("ability", id))?;
        tables.player_abilities.retain(|l| l.ability_id != id);
        let removed = tables.remove_sourced(EffectSource::Ability(id));
        tracing::debug!(id = %id, name = %ability.name, "deleted ability");
        Ok((ability, removed))
    }

    fn create_player(&self, player: NewPlayer) -> Result<Player, StoreError> {
        player.validate()?;
        let mut tables = self.write()?;
        let name = player.name.trim();
        if tables.players.values().any(|p| p.name == name) {
            return Err(StoreError::Conflict(format!("player \"{}\" already exists", name)));
        }
        let id = PlayerId(tables.allocate());
        let player = player.into_player(id);
        tables.players.insert(id, player.clone());
        tracing::debug!(id = %id, name = %player.name, "created player");
        Ok(player)
    }

    fn player(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.read()?.players.get(&id).cloned())
    }

    fn players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.read()?.players.values().cloned().collect())
    }

    fn update_player(&self, id: PlayerId, patch: &PlayerPatch) -> Result<Player, StoreError> {
        let mut tables = self.write()?;
        let updated = patch.apply(tables.require_player(id)?)?;
        if tables.players.values().any(|p| p.id != id && p.name == updated.name) {
            return Err(StoreError::Conflict(format!("player \"{}\" already exists", updated.name)));
        }
        tables.players.insert(id, updated.clone());
        tracing::debug!(id = %id, "updated player");
        Ok(updated)
    }

    fn delete_player(&self, id: PlayerId) -> Result<Player, StoreError> {
        let mut tables = self.write()?;
        let player = tables.players.remove(&id).ok_or_else(|| StoreError::not_found("player", id))?;
        tables.player_items.retain(|l| l.player_id != id);
        tables.player_abilities.retain(|l| l.player_id != id);
        tables.active_effects.retain(|_, i| i.player_id != id);
        tracing::debug!(id = %id, name = %player.name, "deleted player");
        Ok(player)
    }

    fn grant_item(&self, player: PlayerId, item: ItemId, quantity: u32) -> Result<PlayerItem, StoreError> {
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity.into());
        }
        let mut tables = self.write()?;
        tables.require_player(player)?;
        tables.require_item(item)?;

        let existing = tables
            .player_items
            .iter()
            .position(|l| l.player_id == player && l.item_id == item);
        let link = match existing {
            Some(index) => {
                let existing = &mut tables.player_items[index];
                existing.accumulate(quantity);
                existing.clone()
            }
            None => {
                let link = PlayerItem::new(player, item, quantity);
                tables.player_items.push(link.clone());
                link
            }
        };
        tracing::debug!(player_id = %player, item_id = %item, quantity = link.quantity, "granted item");
        Ok(link)
    }

    fn take_item(&self, player: PlayerId, item: ItemId, quantity: u32) -> Result<PlayerItem, StoreError> {
        let mut tables = self.write()?;
        let link = tables.player_item_mut(player, item)?;
        if link.quantity < quantity {
            return Err(StoreError::Conflict(format!(
                "player #{} holds {} of item #{}, cannot take {}",
                player, link.quantity, item, quantity
            )));
        }
        link.take(quantity);
        let left = link.clone();
        if left.quantity == 0 {
            tables.player_items.retain(|l| !(l.player_id == player && l.item_id == item));
        }
        tracing::debug!(player_id = %player, item_id = %item, left = left.quantity, "took item");
        Ok(left)
    }

    fn grant_ability(&self, player: PlayerId, ability: AbilityId) -> Result<PlayerAbility, StoreError> {
        let mut tables = self.write()?;
        tables.require_player(player)?;
        tables.require_ability(ability)?;
        if tables
            .player_abilities
            .iter()
            .any(|l| l.player_id == player && l.ability_id == ability)
        {
            return Err(StoreError::Conflict(format!(
                "player #{} already has ability #{}",
                player, ability
            )));
        }
        let link = PlayerAbility::new(player, ability);
        tables.player_abilities.push(link.clone());
        tracing::debug!(player_id = %player, ability_id = %ability, "granted ability");
        Ok(link)
    }

    fn set_ability_active(&self, player: PlayerId, ability: AbilityId, active: bool) -> Result<PlayerAbility, StoreError> {
        let mut tables = self.write()?;
        let link = tables
            .player_abilities
            .iter_mut()
            .find(|l| l.player_id == player && l.ability_id == ability)
            .ok_or_else(|| StoreError::not_found("player ability", ability))?;
        link.is_active = active;
        tracing::debug!(player_id = %player, ability_id = %ability, active, "set ability active");
        Ok(link.clone())
    }

    fn player_ability(&self, player: PlayerId, ability: AbilityId) -> Result<Option<PlayerAbility>, StoreError> {
        Ok(self
            .read()?
            .player_abilities
            .iter()
            .find(|l| l.player_id == player && l.ability_id == ability)
            .cloned())
    }

    fn active_effects_for(&self, player: PlayerId) -> Result<Vec<ActiveEffect>, StoreError> {
        Ok(self
            .read()?
            .active_effects
            .values()
            .filter(|i| i.player_id == player)
            .cloned()
            .collect())
    }

    fn all_active_effects(&self) -> Result<Vec<ActiveEffect>, StoreError> {
        Ok(self.read()?.active_effects.values().cloned().collect())
    }

    fn remove_effects_from_source(&self, source: EffectSource) -> Result<Vec<ActiveEffect>, StoreError> {
        Ok(self.write()?.remove_sourced(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AbilityType, Attribute, Rarity};

    fn store_with_player() -> (MemoryStore, Player) {
        let store = MemoryStore::new();
        let player = store.create_player(NewPlayer::named("Tess")).unwrap();
        (store, player)
    }

    #[test]
    fn test_duplicate_effect_name_conflicts() {
        let store = MemoryStore::new();
        store
            .create_effect(EffectDefinition::permanent("Blessed", Some(Attribute::Wisdom), 1))
            .unwrap();
        let err = store
            .create_effect(EffectDefinition::permanent("Blessed", None, 0))
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[test]
    fn test_invalid_effect_rejected() {
        let store = MemoryStore::new();
        let err = store
            .create_effect(EffectDefinition::timed("Rage", None, 0, None, None))
            .unwrap_err();
        assert_eq!(err, StoreError::Invalid(ValidationError::MissingDuration));
    }

    #[test]
    fn test_duplicate_player_name_conflicts() {
        let (store, _) = store_with_player();
        assert!(matches!(
            store.create_player(NewPlayer::named(" Tess ")),
            Err(StoreError::Conflict(_))
        ));
    }

    #[test]
    fn test_grant_item_accumulates() {
        let (store, player) = store_with_player();
        let item = store.create_item(Item::new("Torch", Rarity::Common)).unwrap();

        store.grant_item(player.id, item.id, 2).unwrap();
        let link = store.grant_item(player.id, item.id, 3).unwrap();
        assert_eq!(link.quantity, 5);

        let snapshot = store.player_snapshot(player.id).unwrap();
        assert_eq!(snapshot.inventory.len(), 1);
    }

    #[test]
    fn test_take_item_removes_link_at_zero() {
        let (store, player) = store_with_player();
        let item = store.create_item(Item::new("Potion", Rarity::Common)).unwrap();
        store.grant_item(player.id, item.id, 2).unwrap();

        assert_eq!(store.take_item(player.id, item.id, 1).unwrap().quantity, 1);
        assert!(matches!(
            store.take_item(player.id, item.id, 2),
            Err(StoreError::Conflict(_))
        ));
        assert_eq!(store.take_item(player.id, item.id, 1).unwrap().quantity, 0);
        assert!(store.player_snapshot(player.id).unwrap().inventory.is_empty());
    }

    #[test]
    fn test_item_with_unknown_effect_rejected() {
        let store = MemoryStore::new();
        let item = Item::new("Amulet", Rarity::Epic).with_passive_effect(EffectId(99));
        assert_eq!(
            store.create_item(item),
            Err(StoreError::NotFound { entity: "effect", id: 99 })
        );
    }

    #[test]
    fn test_set_equipped_requires_link() {
        let (store, player) = store_with_player();
        let item = store.create_item(Item::new("Sword", Rarity::Rare)).unwrap();
        assert!(store.set_item_equipped(player.id, item.id, true).is_err());

        store.grant_item(player.id, item.id, 1).unwrap();
        let link = store.set_item_equipped(player.id, item.id, true).unwrap();
        assert!(link.is_equipped);
    }

    #[test]
    fn test_upsert_assigns_and_replaces() {
        let (store, player) = store_with_player();
        let def = store
            .create_effect(EffectDefinition::timed("Slow", Some(Attribute::Agility), -2, Some(3), None))
            .unwrap();

        let created = store
            .upsert_active_effect(ActiveEffect::from_definition(player.id, &def, EffectSource::Admin))
            .unwrap();
        assert_ne!(created.id, ActiveEffectId::default());

        let mut ticked = created.clone();
        ticked.remaining_turns = Some(2);
        store.upsert_active_effect(ticked).unwrap();

        let stored = store.active_effects_for(player.id).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].remaining_turns, Some(2));
    }

    #[test]
    fn test_delete_player_cascades() {
        let (store, player) = store_with_player();
        let def = store
            .create_effect(EffectDefinition::permanent("Marked", None, 0))
            .unwrap();
        let item = store.create_item(Item::new("Coin", Rarity::Common)).unwrap();
        let ability = store
            .create_ability(Ability::new("Dodge", AbilityType::Passive))
            .unwrap();

        store.grant_item(player.id, item.id, 1).unwrap();
        store.grant_ability(player.id, ability.id).unwrap();
        store
            .upsert_active_effect(ActiveEffect::from_definition(player.id, &def, EffectSource::Admin))
            .unwrap();

        store.delete_player(player.id).unwrap();
        assert!(store.all_active_effects().unwrap().is_empty());
        assert!(store.player_snapshot(player.id).is_err());
        assert_eq!(store.player_ability(player.id, ability.id).unwrap(), None);
    }

    #[test]
    fn test_remove_effects_from_source() {
        let (store, player) = store_with_player();
        let def = store
            .create_effect(EffectDefinition::permanent("Warded", Some(Attribute::Armor), 2))
            .unwrap();
        let item = store.create_item(Item::new("Warding Stone", Rarity::Rare)).unwrap();
        let source = EffectSource::Item(item.id);
        store
            .upsert_active_effect(ActiveEffect::from_definition(player.id, &def, source))
            .unwrap();
        store
            .upsert_active_effect(ActiveEffect::from_definition(player.id, &def, EffectSource::Admin))
            .unwrap();

        let removed = store.remove_effects_from_source(source).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(store.active_effects_for(player.id).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_item_removes_sourced_instances() {
        let (store, player) = store_with_player();
        let def = store
            .create_effect(EffectDefinition::timed("Glow", Some(Attribute::Charisma), 1, Some(3), None))
            .unwrap();
        let lamp = store.create_item(Item::new("Lamp", Rarity::Common)).unwrap();
        store.grant_item(player.id, lamp.id, 1).unwrap();
        store
            .upsert_active_effect(ActiveEffect::from_definition(player.id, &def, EffectSource::Item(lamp.id)))
            .unwrap();
        store
            .upsert_active_effect(ActiveEffect::from_definition(player.id, &def, EffectSource::Admin))
            .unwrap();

        let (deleted, removed) = store.delete_item(lamp.id).unwrap();
        assert_eq!(deleted.id, lamp.id);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].source, EffectSource::Item(lamp.id));
        assert_eq!(store.active_effects_for(player.id).unwrap().len(), 1);
        assert!(store.player_snapshot(player.id).unwrap().inventory.is_empty());
    }

    #[test]
    fn test_upsert_rejects_deleted_source() {
        let (store, player) = store_with_player();
        let def = store
            .create_effect(EffectDefinition::timed("Focus", Some(Attribute::Wisdom), 2, Some(2), None))
            .unwrap();
        let ability = store
            .create_ability(Ability::new("Meditate", AbilityType::Active).with_cooldown(1, 0))
            .unwrap();
        store.delete_ability(ability.id).unwrap();

        assert_eq!(
            store.upsert_active_effect(ActiveEffect::from_definition(
                player.id,
                &def,
                EffectSource::Ability(ability.id)
            )),
            Err(StoreError::NotFound {
                entity: "ability",
                id: ability.id.0
            })
        );
        assert_eq!(
            store.upsert_active_effect(ActiveEffect::from_definition(player.id, &def, EffectSource::Item(ItemId(404)))),
            Err(StoreError::NotFound { entity: "item", id: 404 })
        );
        assert!(store.all_active_effects().unwrap().is_empty());
    }

    #[test]
    fn test_definition_names_trimmed_before_uniqueness() {
        let store = MemoryStore::new();
        let first = store
            .create_effect(EffectDefinition::permanent(" Blessed ", Some(Attribute::Wisdom), 1))
            .unwrap();
        assert_eq!(first.name, "Blessed");
        assert!(matches!(
            store.create_effect(EffectDefinition::permanent("Blessed", None, 0)),
            Err(StoreError::Conflict(_))
        ));

        store
            .create_ability(Ability::new("Dodge ", AbilityType::Passive))
            .unwrap();
        assert!(matches!(
            store.create_ability(Ability::new(" Dodge", AbilityType::Passive)),
            Err(StoreError::Conflict(_))
        ));
    }

    #[test]
    fn test_update_player_enforces_health() {
        let (store, player) = store_with_player();
        let err = store
            .update_player(player.id, &PlayerPatch::attribute(Attribute::Health, 80))
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(ValidationError::HealthExceedsMax { .. })));
    }

    #[test]
    fn test_duplicate_ability_grant_conflicts() {
        let (store, player) = store_with_player();
        let ability = store
            .create_ability(Ability::new("Sprint", AbilityType::Active).with_cooldown(2, 0))
            .unwrap();
        store.grant_ability(player.id, ability.id).unwrap();
        assert!(matches!(
            store.grant_ability(player.id, ability.id),
            Err(StoreError::Conflict(_))
        ));
    }
}
