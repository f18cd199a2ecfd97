//! Duration ticker - advances turn/day counters and retires expired instances

use super::ActiveEffect;
use crate::types::TickKind;

/// Instances split by a tick into those still running and those that ran out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub retained: Vec<ActiveEffect>,
    pub expired: Vec<ActiveEffect>,
}

impl TickOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.retained.is_empty() && self.expired.is_empty()
    }
}

/// Advance a single instance by one tick of `kind`
///
/// Returns `true` if the instance is still active afterwards.
pub fn advance(instance: &mut ActiveEffect, kind: TickKind) -> bool {
    // Already run out on either counter
    if instance.is_expired() {
        return false;
    }

    let counter = instance.counter_mut(kind);
    match *counter {
        None => true,
        Some(remaining) if remaining > 1 => {
            *counter = Some(remaining - 1);
            true
        }
        Some(_) => {
            *counter = Some(0);
            false
        }
    }
}

/// Advance every instance by one tick of `kind`
pub fn tick(kind: TickKind, instances: Vec<ActiveEffect>) -> TickOutcome {
    let mut outcome = TickOutcome::new();

    for mut instance in instances {
        if advance(&mut instance, kind) {
            outcome.retained.push(instance);
        } else {
            outcome.expired.push(instance);
        }
    }

    outcome
}

/// Tick a list in place, returning the instances that expired
pub fn tick_in_place(instances: &mut Vec<ActiveEffect>, kind: TickKind) -> Vec<ActiveEffect> {
    let outcome = tick(kind, std::mem::take(instances));
    *instances = outcome.retained;
    outcome.expired
}
