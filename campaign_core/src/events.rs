//! Domain events and the outbox that carries them to connected viewers

use crate::ability::Ability;
use crate::effect::{ActiveEffect, EffectDefinition};
use crate::inventory::Item;
use crate::player::Player;
use crate::types::{ItemId, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Something viewers need to know about to refresh derived state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    EffectApplied {
        player_id: PlayerId,
        instance: ActiveEffect,
    },
    EffectExpired {
        player_id: PlayerId,
        instance: ActiveEffect,
    },
    EffectRemoved {
        player_id: PlayerId,
        instance: ActiveEffect,
    },
    EquipmentChanged {
        player_id: PlayerId,
        item_id: ItemId,
        is_equipped: bool,
    },
    PlayerCreated {
        player: Player,
    },
    PlayerUpdated {
        player: Player,
    },
    PlayerDeleted {
        id: PlayerId,
    },
    EffectCreated {
        effect: EffectDefinition,
    },
    ItemCreated {
        item: Item,
    },
    AbilityCreated {
        ability: Ability,
    },
}

impl DomainEvent {
    /// Push channel the event is broadcast on
    pub fn channel(&self) -> &'static str {
        match self {
            DomainEvent::EffectApplied { .. } => "effect:applied",
            DomainEvent::EffectExpired { .. } => "effect:expired",
            DomainEvent::EffectRemoved { .. } => "effect:removed",
            DomainEvent::EquipmentChanged { .. } => "item:equipped",
            DomainEvent::PlayerCreated { .. } => "player:created",
            DomainEvent::PlayerUpdated { .. } => "player:updated",
            DomainEvent::PlayerDeleted { .. } => "player:deleted",
            DomainEvent::EffectCreated { .. } => "effectCreated",
            DomainEvent::ItemCreated { .. } => "itemCreated",
            DomainEvent::AbilityCreated { .. } => "abilityCreated",
        }
    }

    /// Player whose derived stats this event invalidates, if any
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            DomainEvent::EffectApplied { player_id, .. }
            | DomainEvent::EffectExpired { player_id, .. }
            | DomainEvent::EffectRemoved { player_id, .. }
            | DomainEvent::EquipmentChanged { player_id, .. } => Some(*player_id),
            DomainEvent::PlayerCreated { player } | DomainEvent::PlayerUpdated { player } => Some(player.id),
            DomainEvent::PlayerDeleted { id } => Some(*id),
            DomainEvent::EffectCreated { .. } | DomainEvent::ItemCreated { .. } | DomainEvent::AbilityCreated { .. } => {
                None
            }
        }
    }

    /// JSON payload pushed to viewers
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Receives events; delivery is fire-and-forget
pub trait Notifier: Send + Sync {
    fn notify(&self, event: DomainEvent);
}

/// Queue of events waiting to be drained by a transport
#[derive(Debug, Default)]
pub struct Outbox {
    queue: Mutex<VecDeque<DomainEvent>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending event, oldest first
    pub fn drain(&self) -> Vec<DomainEvent> {
        match self.queue.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self.queue.lock() {
            Ok(queue) => queue.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for Outbox {
    fn notify(&self, event: DomainEvent) {
        tracing::trace!(channel = event.channel(), "queued event");
        match self.queue.lock() {
            Ok(mut queue) => queue.push_back(event),
            Err(poisoned) => poisoned.into_inner().push_back(event),
        }
    }
}
