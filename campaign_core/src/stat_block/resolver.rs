//! Stat resolution: base attributes + active effects + equipped passives

use crate::effect::{AppliedEffect, EffectDefinition};
use crate::source::{ActiveEffectSource, PassiveEffectSource, StatSource};
use crate::stat_block::{Attributes, Contribution, StatAccumulator};
use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// Compute final attributes from a player's base, their active effect
/// instances and the passive effects of their equipped items.
///
/// Modifiers are added without clamping; health may end below zero or above
/// max health. Instances without a definition, and definitions without an
/// attribute, contribute nothing.
pub fn resolve(base: &Attributes, active: &[AppliedEffect], passives: &[EffectDefinition]) -> Attributes {
    accumulate(active, passives).apply_to(base)
}

/// Resolve against an arbitrary set of sources
pub fn resolve_sources(base: &Attributes, sources: &[&dyn StatSource]) -> Attributes {
    let mut accumulator = StatAccumulator::new();
    for source in sources {
        source.apply(&mut accumulator);
    }
    accumulator.apply_to(base)
}

/// Base and final values plus every contribution that separates them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBreakdown {
    pub base: Attributes,
    pub final_stats: Attributes,
    pub contributions: Vec<Contribution>,
}

impl StatBreakdown {
    /// Contributions affecting one attribute
    pub fn for_attribute(&self, attribute: Attribute) -> impl Iterator<Item = &Contribution> {
        self.contributions.iter().filter(move |c| c.attribute == attribute)
    }

    /// Net modifier on one attribute
    pub fn net(&self, attribute: Attribute) -> i32 {
        self.final_stats.get(attribute).saturating_sub(self.base.get(attribute))
    }
}

/// Same as [`resolve`], also returning the per-source contributions
pub fn resolve_with_breakdown(
    base: &Attributes,
    active: &[AppliedEffect],
    passives: &[(&str, &EffectDefinition)],
) -> StatBreakdown {
    let mut accumulator = StatAccumulator::new();
    for effect in active {
        ActiveEffectSource::new(effect).apply(&mut accumulator);
    }
    for (item_name, definition) in passives {
        PassiveEffectSource::from_item(definition, item_name).apply(&mut accumulator);
    }

    let final_stats = accumulator.apply_to(base);
    StatBreakdown {
        base: *base,
        final_stats,
        contributions: accumulator.into_contributions(),
    }
}

fn accumulate(active: &[AppliedEffect], passives: &[EffectDefinition]) -> StatAccumulator {
    let mut accumulator = StatAccumulator::new();
    for effect in active {
        ActiveEffectSource::new(effect).apply(&mut accumulator);
    }
    for definition in passives {
        PassiveEffectSource::new(definition).apply(&mut accumulator);
    }
    accumulator
}
