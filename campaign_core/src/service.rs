//! GameMaster - serialized per-player mutations over a store and a notifier

use crate::ability::{Ability, PlayerAbility};
use crate::effect::{tick, ActiveEffect, EffectDefinition};
use crate::events::{DomainEvent, Notifier};
use crate::inventory::{Item, PlayerItem};
use crate::player::{NewPlayer, Player, PlayerPatch};
use crate::snapshot::PlayerSnapshot;
use crate::stat_block::Attributes;
use crate::store::{CampaignStore, StoreError};
use crate::types::{AbilityId, ActiveEffectId, EffectId, EffectSource, ItemId, PlayerId, TickKind};
use dashmap::DashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Result of advancing time by one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub kind: TickKind,
    /// Instances still running after the tick
    pub retained: usize,
    /// Instances removed by the tick
    pub expired: Vec<ActiveEffect>,
}

impl TickReport {
    fn new(kind: TickKind) -> Self {
        TickReport {
            kind,
            retained: 0,
            expired: Vec::new(),
        }
    }
}

/// Applies game-master actions to a campaign
///
/// Every read-modify-write touching a player's instances or links runs
/// inside that player's critical section, so a tick and an admin action on
/// the same player never interleave. Events go out after the store write.
pub struct GameMaster<S, N> {
    store: S,
    notifier: N,
    locks: DashMap<PlayerId, Arc<Mutex<()>>>,
}

fn acquire(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: CampaignStore, N: Notifier> GameMaster<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        GameMaster {
            store,
            notifier,
            locks: DashMap::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn player_lock(&self, player: PlayerId) -> Arc<Mutex<()>> {
        self.locks.entry(player).or_default().clone()
    }

    fn with_player<T>(&self, player: PlayerId, f: impl FnOnce() -> Result<T, StoreError>) -> Result<T, StoreError> {
        let lock = self.player_lock(player);
        let _guard = acquire(&lock);
        f()
    }

    fn require_player(&self, player: PlayerId) -> Result<Player, StoreError> {
        self.store
            .player(player)?
            .ok_or_else(|| StoreError::not_found("player", player))
    }

    fn require_effect(&self, effect: EffectId) -> Result<EffectDefinition, StoreError> {
        self.store
            .effect(effect)?
            .ok_or_else(|| StoreError::not_found("effect", effect))
    }

    /// Create and persist an instance; caller holds the player's lock
    fn instantiate(
        &self,
        player: PlayerId,
        definition: &EffectDefinition,
        source: EffectSource,
    ) -> Result<ActiveEffect, StoreError> {
        let instance = self
            .store
            .upsert_active_effect(ActiveEffect::from_definition(player, definition, source))?;
        tracing::info!(
            player_id = %player,
            effect = %definition.name,
            %source,
            remaining = %instance.remaining_label(),
            "effect applied"
        );
        self.notifier.notify(DomainEvent::EffectApplied {
            player_id: player,
            instance: instance.clone(),
        });
        Ok(instance)
    }

    /// Apply an effect definition to a player
    pub fn apply_effect(
        &self,
        player: PlayerId,
        effect: EffectId,
        source: EffectSource,
    ) -> Result<ActiveEffect, StoreError> {
        self.with_player(player, || {
            self.require_player(player)?;
            let definition = self.require_effect(effect)?;
            self.instantiate(player, &definition, source)
        })
    }

    /// Apply an ability's effect; the player must hold the ability with an active link
    ///
    /// Returns `None` when the ability carries no effect.
    pub fn trigger_ability(&self, player: PlayerId, ability: AbilityId) -> Result<Option<ActiveEffect>, StoreError> {
        self.with_player(player, || {
            match self.store.player_ability(player, ability)? {
                Some(link) if link.can_grant() => {}
                Some(_) => {
                    return Err(StoreError::Conflict(format!(
                        "ability #{} is inactive for player #{}",
                        ability, player
                    )))
                }
                None => {
                    return Err(StoreError::Conflict(format!(
                        "player #{} does not have ability #{}",
                        player, ability
                    )))
                }
            }

            let definition = self
                .store
                .ability(ability)?
                .ok_or_else(|| StoreError::not_found("ability", ability))?;
            let Some(effect) = definition.effect_id else {
                return Ok(None);
            };
            match self.store.effect(effect)? {
                Some(def) => self.instantiate(player, &def, EffectSource::Ability(ability)).map(Some),
                None => {
                    tracing::warn!(ability = %definition.name, effect_id = %effect, "ability effect is missing");
                    Ok(None)
                }
            }
        })
    }

    /// Consume one unit of an owned item and apply its active effect, if any
    pub fn use_item(&self, player: PlayerId, item: ItemId) -> Result<Option<ActiveEffect>, StoreError> {
        self.with_player(player, || {
            let definition = self
                .store
                .item(item)?
                .ok_or_else(|| StoreError::not_found("item", item))?;
            self.store.take_item(player, item, 1)?;

            let Some(effect) = definition.active_effect_id else {
                return Ok(None);
            };
            match self.store.effect(effect)? {
                Some(def) => self.instantiate(player, &def, EffectSource::Item(item)).map(Some),
                None => {
                    tracing::warn!(item = %definition.name, effect_id = %effect, "item effect is missing");
                    Ok(None)
                }
            }
        })
    }

    /// Equip or unequip an owned item
    pub fn set_equipped(&self, player: PlayerId, item: ItemId, equipped: bool) -> Result<PlayerItem, StoreError> {
        self.with_player(player, || {
            let before = self
                .store
                .player_snapshot(player)?
                .inventory
                .iter()
                .find(|e| e.link.item_id == item)
                .map(|e| e.link.is_equipped);

            let link = self.store.set_item_equipped(player, item, equipped)?;
            if before != Some(equipped) {
                tracing::info!(player_id = %player, item_id = %item, equipped, "equipment changed");
                self.notifier.notify(DomainEvent::EquipmentChanged {
                    player_id: player,
                    item_id: item,
                    is_equipped: equipped,
                });
            }
            Ok(link)
        })
    }

    /// Remove an active effect instance regardless of its counters
    pub fn remove_effect(&self, id: ActiveEffectId) -> Result<ActiveEffect, StoreError> {
        let owner = self
            .store
            .all_active_effects()?
            .into_iter()
            .find(|i| i.id == id)
            .map(|i| i.player_id)
            .ok_or_else(|| StoreError::not_found("active effect", id))?;

        self.with_player(owner, || {
            let removed = self
                .store
                .remove_active_effect(id)?
                .ok_or_else(|| StoreError::not_found("active effect", id))?;
            tracing::info!(player_id = %owner, id = %id, "effect removed");
            self.notifier.notify(DomainEvent::EffectRemoved {
                player_id: owner,
                instance: removed.clone(),
            });
            Ok(removed)
        })
    }

    /// Advance every player's instances by one tick of `kind`
    pub fn advance(&self, kind: TickKind) -> Result<TickReport, StoreError> {
        let mut report = TickReport::new(kind);

        for player in self.store.players()? {
            self.with_player(player.id, || {
                let outcome = tick(kind, self.store.active_effects_for(player.id)?);

                for instance in outcome.retained {
                    if instance.counter(kind).is_some() {
                        self.store.upsert_active_effect(instance)?;
                    }
                    report.retained += 1;
                }

                for instance in outcome.expired {
                    self.store.remove_active_effect(instance.id)?;
                    tracing::info!(player_id = %player.id, id = %instance.id, "effect expired");
                    self.notifier.notify(DomainEvent::EffectExpired {
                        player_id: player.id,
                        instance: instance.clone(),
                    });
                    report.expired.push(instance);
                }
                Ok(())
            })?;
        }

        tracing::info!(
            %kind,
            retained = report.retained,
            expired = report.expired.len(),
            "time advanced"
        );
        Ok(report)
    }

    pub fn snapshot(&self, player: PlayerId) -> Result<PlayerSnapshot, StoreError> {
        self.store.player_snapshot(player)
    }

    /// Resolved attributes of a player
    pub fn final_stats(&self, player: PlayerId) -> Result<Attributes, StoreError> {
        Ok(self.store.player_snapshot(player)?.final_stats())
    }

    /// Run `f` holding every player's lock, acquired in id order
    fn with_all_players<T>(&self, f: impl FnOnce() -> Result<T, StoreError>) -> Result<T, StoreError> {
        let mut players: Vec<PlayerId> = self.store.players()?.iter().map(|p| p.id).collect();
        players.sort();

        let locks: Vec<_> = players.iter().map(|p| self.player_lock(*p)).collect();
        let _guards: Vec<_> = locks.iter().map(|l| acquire(l)).collect();
        f()
    }

    fn notify_removed(&self, removed: &[ActiveEffect]) {
        for instance in removed {
            self.notifier.notify(DomainEvent::EffectRemoved {
                player_id: instance.player_id,
                instance: instance.clone(),
            });
        }
    }

    /// Delete an item definition along with the instances it granted
    pub fn delete_item(&self, item: ItemId) -> Result<Item, StoreError> {
        let (deleted, removed) = self.with_all_players(|| self.store.delete_item(item))?;
        self.notify_removed(&removed);
        tracing::info!(item = %deleted.name, removed = removed.len(), "item deleted");
        Ok(deleted)
    }

    /// Delete an ability definition along with the instances it granted
    pub fn delete_ability(&self, ability: AbilityId) -> Result<Ability, StoreError> {
        let (deleted, removed) = self.with_all_players(|| self.store.delete_ability(ability))?;
        self.notify_removed(&removed);
        tracing::info!(ability = %deleted.name, removed = removed.len(), "ability deleted");
        Ok(deleted)
    }

    pub fn create_player(&self, player: NewPlayer) -> Result<Player, StoreError> {
        let player = self.store.create_player(player)?;
        self.notifier.notify(DomainEvent::PlayerCreated { player: player.clone() });
        Ok(player)
    }

    pub fn update_player(&self, id: PlayerId, patch: &PlayerPatch) -> Result<Player, StoreError> {
        self.with_player(id, || {
            let player = self.store.update_player(id, patch)?;
            self.notifier.notify(DomainEvent::PlayerUpdated { player: player.clone() });
            Ok(player)
        })
    }

    pub fn delete_player(&self, id: PlayerId) -> Result<Player, StoreError> {
        let player = self.with_player(id, || self.store.delete_player(id))?;
        self.locks.remove(&id);
        self.notifier.notify(DomainEvent::PlayerDeleted { id });
        Ok(player)
    }

    pub fn grant_item(&self, player: PlayerId, item: ItemId, quantity: u32) -> Result<PlayerItem, StoreError> {
        self.with_player(player, || self.store.grant_item(player, item, quantity))
    }

    pub fn grant_ability(&self, player: PlayerId, ability: AbilityId) -> Result<PlayerAbility, StoreError> {
        self.with_player(player, || self.store.grant_ability(player, ability))
    }

    pub fn set_ability_active(
        &self,
        player: PlayerId,
        ability: AbilityId,
        active: bool,
    ) -> Result<PlayerAbility, StoreError> {
        self.with_player(player, || self.store.set_ability_active(player, ability, active))
    }

    pub fn create_effect(&self, effect: EffectDefinition) -> Result<EffectDefinition, StoreError> {
        let effect = self.store.create_effect(effect)?;
        self.notifier.notify(DomainEvent::EffectCreated { effect: effect.clone() });
        Ok(effect)
    }

    pub fn create_item(&self, item: Item) -> Result<Item, StoreError> {
        let item = self.store.create_item(item)?;
        self.notifier.notify(DomainEvent::ItemCreated { item: item.clone() });
        Ok(item)
    }

    pub fn create_ability(&self, ability: Ability) -> Result<Ability, StoreError> {
        let ability = self.store.create_ability(ability)?;
        self.notifier.notify(DomainEvent::AbilityCreated {
            ability: ability.clone(),
        });
        Ok(ability)
    }
}
