//! Player attribute blocks and the stat resolver

mod aggregator;
mod resolver;

pub use aggregator::{Contribution, ContributionKind, StatAccumulator};
pub use resolver::{resolve, resolve_sources, resolve_with_breakdown, StatBreakdown};

use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// The nine numeric attributes of a player
///
/// Used both for base attributes stored on the player and for the final
/// values produced by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub health: i32,
    pub max_health: i32,
    pub armor: i32,
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub physique: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Attributes {
            health: 50,
            max_health: 50,
            armor: 10,
            strength: 0,
            agility: 0,
            intelligence: 0,
            physique: 0,
            wisdom: 0,
            charisma: 0,
        }
    }
}

impl Attributes {
    /// All attributes zero
    pub fn zero() -> Self {
        Attributes {
            health: 0,
            max_health: 0,
            armor: 0,
            strength: 0,
            agility: 0,
            intelligence: 0,
            physique: 0,
            wisdom: 0,
            charisma: 0,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Health => self.health,
            Attribute::MaxHealth => self.max_health,
            Attribute::Armor => self.armor,
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
            Attribute::Physique => self.physique,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut i32 {
        match attribute {
            Attribute::Health => &mut self.health,
            Attribute::MaxHealth => &mut self.max_health,
            Attribute::Armor => &mut self.armor,
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Physique => &mut self.physique,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: i32) {
        *self.get_mut(attribute) = value;
    }

    /// Add a delta to one attribute (saturating)
    pub fn add(&mut self, attribute: Attribute, delta: i32) {
        let slot = self.get_mut(attribute);
        *slot = slot.saturating_add(delta);
    }

    /// Iterate over (attribute, value) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::all().iter().map(move |a| (*a, self.get(*a)))
    }
}
