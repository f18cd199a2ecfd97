//! StatAccumulator - Collects attribute deltas before applying them to a base block

use crate::stat_block::Attributes;
use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// Where a contribution came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionKind {
    /// A timed or permanent instance applied to the player
    Active,
    /// A passive effect of an equipped item
    Passive,
}

/// One attribute delta and the source that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub attribute: Attribute,
    pub modifier: i32,
    pub kind: ContributionKind,
    pub source: String,
}

/// Accumulates attribute deltas from any number of sources
///
/// Deltas are summed per attribute, so the order sources are applied in
/// never changes the result.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    deltas: [i32; 9],
    contributions: Vec<Contribution>,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a delta on one attribute
    pub fn add(&mut self, attribute: Attribute, modifier: i32, kind: ContributionKind, source: &str) {
        let slot = &mut self.deltas[index(attribute)];
        *slot = slot.saturating_add(modifier);
        self.contributions.push(Contribution {
            attribute,
            modifier,
            kind,
            source: source.to_string(),
        });
    }

    /// Net delta accumulated on an attribute
    pub fn delta(&self, attribute: Attribute) -> i32 {
        self.deltas[index(attribute)]
    }

    /// Every recorded contribution, in application order
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn into_contributions(self) -> Vec<Contribution> {
        self.contributions
    }

    /// Apply the accumulated deltas to a copy of `base`
    pub fn apply_to(&self, base: &Attributes) -> Attributes {
        let mut result = *base;
        for attribute in Attribute::all() {
            result.add(*attribute, self.delta(*attribute));
        }
        result
    }
}

fn index(attribute: Attribute) -> usize {
    match attribute {
        Attribute::Health => 0,
        Attribute::MaxHealth => 1,
        Attribute::Armor => 2,
        Attribute::Strength => 3,
        Attribute::Agility => 4,
        Attribute::Intelligence => 5,
        Attribute::Physique => 6,
        Attribute::Wisdom => 7,
        Attribute::Charisma => 8,
    }
}
