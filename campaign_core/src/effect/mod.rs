//! Effects: definitions, per-player instances and the duration ticker

mod active;
pub(crate) mod definition;
pub mod tick;

pub use active::{ActiveEffect, AppliedEffect};
pub use definition::{EffectDefinition, MAX_EFFECT_NAME, MAX_MODIFIER};
pub use tick::{tick, tick_in_place, TickOutcome};
