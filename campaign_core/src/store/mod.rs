//! Repository interface for campaign entities

mod memory;

pub use memory::MemoryStore;

use crate::ability::{Ability, PlayerAbility};
use crate::effect::{ActiveEffect, EffectDefinition};
use crate::error::ValidationError;
use crate::inventory::{Item, PlayerItem};
use crate::player::{NewPlayer, Player, PlayerPatch};
use crate::snapshot::PlayerSnapshot;
use crate::types::{AbilityId, ActiveEffectId, EffectId, EffectSource, ItemId, PlayerId};
use thiserror::Error;

/// Repository operation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} #{id} not found")]
    NotFound { entity: &'static str, id: u32 },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<u32>) -> Self {
        StoreError::NotFound { entity, id: id.into() }
    }
}

/// Storage of players, definitions, links and active effect instances
///
/// Implementations enforce uniqueness and creation rules and cascade
/// deletions the way a relational store with foreign keys would.
pub trait CampaignStore: Send + Sync {
    // Snapshot and core capabilities

    /// Player with active effects, inventory and abilities, read consistently
    fn player_snapshot(&self, id: PlayerId) -> Result<PlayerSnapshot, StoreError>;
    /// Insert (id 0) or replace an active effect instance
    ///
    /// Fails with `NotFound` when the instance's item or ability source no longer exists.
    fn upsert_active_effect(&self, instance: ActiveEffect) -> Result<ActiveEffect, StoreError>;
    fn remove_active_effect(&self, id: ActiveEffectId) -> Result<Option<ActiveEffect>, StoreError>;
    fn set_item_equipped(&self, player: PlayerId, item: ItemId, equipped: bool) -> Result<PlayerItem, StoreError>;

    // Effect definitions
    fn create_effect(&self, effect: EffectDefinition) -> Result<EffectDefinition, StoreError>;
    fn effect(&self, id: EffectId) -> Result<Option<EffectDefinition>, StoreError>;
    fn effects(&self) -> Result<Vec<EffectDefinition>, StoreError>;

    // Items
    fn create_item(&self, item: Item) -> Result<Item, StoreError>;
    fn item(&self, id: ItemId) -> Result<Option<Item>, StoreError>;
    fn items(&self) -> Result<Vec<Item>, StoreError>;
    /// Delete an item with its links and every instance it granted, in one step
    fn delete_item(&self, id: ItemId) -> Result<(Item, Vec<ActiveEffect>), StoreError>;

    // Abilities
    fn create_ability(&self, ability: Ability) -> Result<Ability, StoreError>;
    fn ability(&self, id: AbilityId) -> Result<Option<Ability>, StoreError>;
    fn abilities(&self) -> Result<Vec<Ability>, StoreError>;
    /// Delete an ability with its links and every instance it granted, in one step
    fn delete_ability(&self, id: AbilityId) -> Result<(Ability, Vec<ActiveEffect>), StoreError>;

    // Players
    fn create_player(&self, player: NewPlayer) -> Result<Player, StoreError>;
    fn player(&self, id: PlayerId) -> Result<Option<Player>, StoreError>;
    fn players(&self) -> Result<Vec<Player>, StoreError>;
    fn update_player(&self, id: PlayerId, patch: &PlayerPatch) -> Result<Player, StoreError>;
    fn delete_player(&self, id: PlayerId) -> Result<Player, StoreError>;

    // Links
    fn grant_item(&self, player: PlayerId, item: ItemId, quantity: u32) -> Result<PlayerItem, StoreError>;
    /// Take units from an inventory link; returns the link as left (quantity 0 once removed)
    fn take_item(&self, player: PlayerId, item: ItemId, quantity: u32) -> Result<PlayerItem, StoreError>;
    fn grant_ability(&self, player: PlayerId, ability: AbilityId) -> Result<PlayerAbility, StoreError>;
    fn set_ability_active(&self, player: PlayerId, ability: AbilityId, active: bool) -> Result<PlayerAbility, StoreError>;
    fn player_ability(&self, player: PlayerId, ability: AbilityId) -> Result<Option<PlayerAbility>, StoreError>;

    // Instances
    fn active_effects_for(&self, player: PlayerId) -> Result<Vec<ActiveEffect>, StoreError>;
    fn all_active_effects(&self) -> Result<Vec<ActiveEffect>, StoreError>;
    /// Remove every instance granted by `source`, returning what was removed
    fn remove_effects_from_source(&self, source: EffectSource) -> Result<Vec<ActiveEffect>, StoreError>;
}
