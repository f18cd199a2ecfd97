//! ActiveEffect - an effect definition applied to one player

use crate::effect::EffectDefinition;
use crate::types::{ActiveEffectId, EffectId, EffectSource, PlayerId, TickKind};
use serde::{Deserialize, Serialize};

/// A live, per-player application of an effect definition
///
/// Each counter is independent; the instance expires as soon as any present
/// counter runs out. With both counters absent the instance never expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    #[serde(default)]
    pub id: ActiveEffectId,
    pub player_id: PlayerId,
    pub effect_id: EffectId,
    #[serde(flatten)]
    pub source: EffectSource,
    pub remaining_turns: Option<i32>,
    pub remaining_days: Option<i32>,
}

impl ActiveEffect {
    /// Bind a definition to a player, copying its duration into the counters
    pub fn from_definition(player_id: PlayerId, definition: &EffectDefinition, source: EffectSource) -> Self {
        let (remaining_turns, remaining_days) = if definition.is_permanent {
            (None, None)
        } else {
            (
                definition.duration_turns.map(to_counter),
                definition.duration_days.map(to_counter),
            )
        };

        ActiveEffect {
            id: ActiveEffectId::default(),
            player_id,
            effect_id: definition.id,
            source,
            remaining_turns,
            remaining_days,
        }
    }

    /// Counter advanced by the given tick kind
    pub fn counter(&self, kind: TickKind) -> Option<i32> {
        match kind {
            TickKind::Turn => self.remaining_turns,
            TickKind::Day => self.remaining_days,
        }
    }

    pub(crate) fn counter_mut(&mut self, kind: TickKind) -> &mut Option<i32> {
        match kind {
            TickKind::Turn => &mut self.remaining_turns,
            TickKind::Day => &mut self.remaining_days,
        }
    }

    /// No counter present: never ticks down
    pub fn is_indefinite(&self) -> bool {
        self.remaining_turns.is_none() && self.remaining_days.is_none()
    }

    /// Any present counter already at or below zero
    pub fn is_expired(&self) -> bool {
        self.remaining_turns.is_some_and(|t| t <= 0) || self.remaining_days.is_some_and(|d| d <= 0)
    }

    /// Human-readable remaining time, e.g. "2 turns / 1 day"
    pub fn remaining_label(&self) -> String {
        let mut parts = Vec::new();
        if let Some(turns) = self.remaining_turns {
            parts.push(crate::effect::definition::plural(turns.max(0) as u32, "turn"));
        }
        if let Some(days) = self.remaining_days {
            parts.push(crate::effect::definition::plural(days.max(0) as u32, "day"));
        }
        if parts.is_empty() {
            "indefinite".to_string()
        } else {
            parts.join(" / ")
        }
    }
}

/// An instance joined with its definition
///
/// The definition is `None` when the instance references a definition that no
/// longer exists; such an instance contributes nothing to resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedEffect {
    pub instance: ActiveEffect,
    pub definition: Option<EffectDefinition>,
}

impl AppliedEffect {
    pub fn new(instance: ActiveEffect, definition: Option<EffectDefinition>) -> Self {
        AppliedEffect { instance, definition }
    }

    /// Display name, falling back to the dangling effect id
    pub fn name(&self) -> String {
        match &self.definition {
            Some(def) => def.name.clone(),
            None => format!("missing effect #{}", self.instance.effect_id),
        }
    }
}

fn to_counter(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
