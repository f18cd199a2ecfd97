//! PassiveEffectSource - Deltas from equipped items' passive effects

use crate::effect::EffectDefinition;
use crate::source::StatSource;
use crate::stat_block::{ContributionKind, StatAccumulator};

/// The passive effect of an equipped item
pub struct PassiveEffectSource<'a> {
    definition: &'a EffectDefinition,
    /// Name of the granting item, when known
    item_name: Option<&'a str>,
}

impl<'a> PassiveEffectSource<'a> {
    pub fn new(definition: &'a EffectDefinition) -> Self {
        PassiveEffectSource {
            definition,
            item_name: None,
        }
    }

    pub fn from_item(definition: &'a EffectDefinition, item_name: &'a str) -> Self {
        PassiveEffectSource {
            definition,
            item_name: Some(item_name),
        }
    }
}

impl StatSource for PassiveEffectSource<'_> {
    fn name(&self) -> &str {
        self.item_name.unwrap_or(self.definition.name.as_str())
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        if let Some((attribute, modifier)) = self.definition.contribution() {
            stats.add(attribute, modifier, ContributionKind::Passive, self.name());
        }
    }
}
