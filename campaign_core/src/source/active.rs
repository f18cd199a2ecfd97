//! ActiveEffectSource - Deltas from effect instances applied to a player

use crate::effect::AppliedEffect;
use crate::source::StatSource;
use crate::stat_block::{ContributionKind, StatAccumulator};

/// An applied effect instance viewed as a stat source
pub struct ActiveEffectSource<'a> {
    effect: &'a AppliedEffect,
}

impl<'a> ActiveEffectSource<'a> {
    pub fn new(effect: &'a AppliedEffect) -> Self {
        ActiveEffectSource { effect }
    }
}

impl StatSource for ActiveEffectSource<'_> {
    fn name(&self) -> &str {
        self.effect
            .definition
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("missing effect")
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        // Dangling definition: nothing to add
        let Some(definition) = &self.effect.definition else {
            return;
        };

        if let Some((attribute, modifier)) = definition.contribution() {
            stats.add(attribute, modifier, ContributionKind::Active, &definition.name);
        }
    }
}
