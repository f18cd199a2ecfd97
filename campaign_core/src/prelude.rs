//! Prelude module for convenient imports
//!
//! ```rust
//! use campaign_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{Attributes, StatBreakdown};
pub use crate::types::{AbilityId, Attribute, EffectId, EffectSource, ItemId, PlayerId, Rarity, TickKind};

// Definitions and instances
pub use crate::ability::Ability;
pub use crate::effect::{ActiveEffect, EffectDefinition};
pub use crate::inventory::Item;
pub use crate::player::{NewPlayer, Player, PlayerPatch};

// Service
pub use crate::events::{DomainEvent, Notifier, Outbox};
pub use crate::service::{GameMaster, TickReport};
pub use crate::store::{CampaignStore, MemoryStore, StoreError};

// Config
pub use crate::config::default_campaign;
