//! Validation errors raised when definitions and players are created or updated

use thiserror::Error;

/// A record failed one of its creation/update rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{entity} name is required")]
    EmptyName { entity: &'static str },
    #[error("{entity} name must not exceed {max} characters")]
    NameTooLong { entity: &'static str, max: usize },
    #[error("modifier {0} is outside the range -100..=100")]
    ModifierOutOfRange(i32),
    #[error("permanent effects cannot have a duration")]
    PermanentWithDuration,
    #[error("non-permanent effects need a duration in turns or days")]
    MissingDuration,
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
    #[error("health {health} cannot exceed max health {max_health}")]
    HealthExceedsMax { health: i32, max_health: i32 },
    #[error("active abilities must have a cooldown")]
    ActiveWithoutCooldown,
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    #[error("nothing to update")]
    EmptyPatch,
}
