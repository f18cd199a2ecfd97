//! campaign_core - Effect and stat management for a tabletop campaign
//!
//! This library provides:
//! - Attributes and the Stat Resolver: base stats plus active and equipped effects
//! - Duration Ticker: turn/day countdown of active effect instances
//! - Equipment: toggling items whose passive effects apply while equipped
//! - CampaignStore: repository of players, definitions and links
//! - GameMaster: per-player serialized actions emitting domain events

pub mod ability;
pub mod config;
pub mod effect;
pub mod error;
pub mod events;
pub mod inventory;
pub mod player;
pub mod prelude;
pub mod service;
pub mod snapshot;
pub mod source;
pub mod stat_block;
pub mod store;
pub mod types;

// Re-export core types for convenience
pub use ability::{Ability, AbilityEntry, PlayerAbility};
pub use config::{default_campaign, CampaignConfig, ConfigError, Settings};
pub use effect::{ActiveEffect, AppliedEffect, EffectDefinition, TickOutcome};
pub use error::ValidationError;
pub use events::{DomainEvent, Notifier, Outbox};
pub use inventory::{EquipmentSet, InventoryEntry, Item, PlayerItem};
pub use player::{NewPlayer, Player, PlayerPatch};
pub use service::{GameMaster, TickReport};
pub use snapshot::{PlayerSnapshot, PlayerSummary};
pub use source::{ActiveEffectSource, PassiveEffectSource, StatSource};
pub use stat_block::{resolve, resolve_with_breakdown, Attributes, StatAccumulator, StatBreakdown};
pub use store::{CampaignStore, MemoryStore, StoreError};
pub use types::{
    AbilityId, AbilityType, ActiveEffectId, Attribute, EffectId, EffectSource, Gender, ItemId, PlayerId, Rarity,
    TickKind,
};
