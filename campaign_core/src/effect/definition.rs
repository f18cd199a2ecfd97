//! Effect definitions - immutable stat modifier templates

use crate::error::ValidationError;
use crate::types::{Attribute, EffectId};
use serde::{Deserialize, Serialize};

/// Maximum length of an effect name
pub const MAX_EFFECT_NAME: usize = 100;
/// Inclusive bound on the absolute value of a modifier
pub const MAX_MODIFIER: i32 = 100;

/// Template describing a stat modifier and how long it lasts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDefinition {
    #[serde(default)]
    pub id: EffectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `None` for narrative-only effects
    #[serde(default)]
    pub attribute: Option<Attribute>,
    #[serde(default)]
    pub modifier: i32,
    #[serde(default)]
    pub is_permanent: bool,
    #[serde(default)]
    pub duration_turns: Option<u32>,
    #[serde(default)]
    pub duration_days: Option<u32>,
}

impl EffectDefinition {
    /// Create a permanent effect on an attribute
    pub fn permanent(name: impl Into<String>, attribute: Option<Attribute>, modifier: i32) -> Self {
        EffectDefinition {
            id: EffectId::default(),
            name: name.into(),
            description: None,
            attribute,
            modifier,
            is_permanent: true,
            duration_turns: None,
            duration_days: None,
        }
    }

    /// Create a timed effect lasting the given number of turns and/or days
    pub fn timed(
        name: impl Into<String>,
        attribute: Option<Attribute>,
        modifier: i32,
        turns: Option<u32>,
        days: Option<u32>,
    ) -> Self {
        EffectDefinition {
            id: EffectId::default(),
            name: name.into(),
            description: None,
            attribute,
            modifier,
            is_permanent: false,
            duration_turns: turns,
            duration_days: days,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The attribute delta this definition contributes, if any
    pub fn contribution(&self) -> Option<(Attribute, i32)> {
        match self.attribute {
            Some(attribute) if self.modifier != 0 => Some((attribute, self.modifier)),
            _ => None,
        }
    }

    /// Check the creation rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("effect", &self.name, MAX_EFFECT_NAME)?;

        if !(-MAX_MODIFIER..=MAX_MODIFIER).contains(&self.modifier) {
            return Err(ValidationError::ModifierOutOfRange(self.modifier));
        }

        if self.is_permanent {
            if self.duration_turns.is_some() || self.duration_days.is_some() {
                return Err(ValidationError::PermanentWithDuration);
            }
            return Ok(());
        }

        if self.duration_turns.is_none() && self.duration_days.is_none() {
            return Err(ValidationError::MissingDuration);
        }
        if self.duration_turns == Some(0) {
            return Err(ValidationError::NonPositive { field: "duration_turns" });
        }
        if self.duration_days == Some(0) {
            return Err(ValidationError::NonPositive { field: "duration_days" });
        }
        Ok(())
    }

    /// Human-readable duration, e.g. "3 turns / 1 day"
    pub fn duration_label(&self) -> String {
        if self.is_permanent {
            return "permanent".to_string();
        }
        let mut parts = Vec::new();
        if let Some(turns) = self.duration_turns {
            parts.push(plural(turns, "turn"));
        }
        if let Some(days) = self.duration_days {
            parts.push(plural(days, "day"));
        }
        if parts.is_empty() {
            "indefinite".to_string()
        } else {
            parts.join(" / ")
        }
    }
}

pub(crate) fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Shared name rule: non-empty after trim and at most `max` characters
pub(crate) fn validate_name(entity: &'static str, name: &str, max: usize) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { entity });
    }
    if name.chars().count() > max {
        return Err(ValidationError::NameTooLong { entity, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_timed_effect() {
        let effect = EffectDefinition::timed("Haste", Some(Attribute::Agility), 2, Some(3), None);
        assert!(effect.validate().is_ok());
        assert_eq!(effect.duration_label(), "3 turns");
    }

    #[test]
    fn test_permanent_with_duration_rejected() {
        let mut effect = EffectDefinition::permanent("Blessing", Some(Attribute::Wisdom), 1);
        effect.duration_days = Some(2);
        assert_eq!(effect.validate(), Err(ValidationError::PermanentWithDuration));
    }

    #[test]
    fn test_timed_without_duration_rejected() {
        let effect = EffectDefinition::timed("Rage", Some(Attribute::Strength), 4, None, None);
        assert_eq!(effect.validate(), Err(ValidationError::MissingDuration));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let effect = EffectDefinition::timed("Blink", None, 0, Some(0), Some(1));
        assert_eq!(
            effect.validate(),
            Err(ValidationError::NonPositive { field: "duration_turns" })
        );
    }

    #[test]
    fn test_modifier_bounds() {
        let ok = EffectDefinition::permanent("Edge", Some(Attribute::Armor), -100);
        assert!(ok.validate().is_ok());

        let bad = EffectDefinition::permanent("Too much", Some(Attribute::Armor), 101);
        assert_eq!(bad.validate(), Err(ValidationError::ModifierOutOfRange(101)));
    }

    #[test]
    fn test_name_rules() {
        let empty = EffectDefinition::permanent("   ", None, 0);
        assert_eq!(empty.validate(), Err(ValidationError::EmptyName { entity: "effect" }));

        let long = EffectDefinition::permanent("x".repeat(101), None, 0);
        assert!(matches!(long.validate(), Err(ValidationError::NameTooLong { max: 100, .. })));
    }

    #[test]
    fn test_contribution_skips_narrative_and_zero() {
        let narrative = EffectDefinition::permanent("Cursed mark", None, 5);
        assert_eq!(narrative.contribution(), None);

        let zero = EffectDefinition::permanent("Nothing", Some(Attribute::Strength), 0);
        assert_eq!(zero.contribution(), None);

        let strong = EffectDefinition::permanent("Giant", Some(Attribute::Strength), 3);
        assert_eq!(strong.contribution(), Some((Attribute::Strength, 3)));
    }

    #[test]
    fn test_parse_from_toml() {
        let toml = r#"
name = "Poisoned"
attribute = "health"
modifier = -5
duration_turns = 3
"#;
        let effect: EffectDefinition = toml::from_str(toml).unwrap();
        assert_eq!(effect.attribute, Some(Attribute::Health));
        assert!(!effect.is_permanent);
        assert!(effect.validate().is_ok());
    }
}
