//! StatSource - Trait and implementations for attribute providers

mod active;
mod passive;

pub use active::ActiveEffectSource;
pub use passive::PassiveEffectSource;

use crate::stat_block::StatAccumulator;

/// Anything that contributes attribute deltas to a resolution
pub trait StatSource {
    /// Display name used in stat breakdowns
    fn name(&self) -> &str;

    /// Record this source's deltas
    fn apply(&self, stats: &mut StatAccumulator);
}
