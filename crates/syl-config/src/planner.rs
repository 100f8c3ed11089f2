//! Plan partitioning configuration.

use serde::{Deserialize, Serialize};
use syl_core::partition::DEFAULT_MAX_DAYS;

use crate::error::ConfigError;

const fn default_max_days() -> u32 {
    DEFAULT_MAX_DAYS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlannerConfig {
    /// Longest plan, in days, that `syl plan` will build.
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_days: default_max_days(),
        }
    }
}

impl PlannerConfig {
    /// Reject a zero ceiling, which would make every plan invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `max_days` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "planner.max_days".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_days, 365);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_ceiling_rejected() {
        let config = PlannerConfig { max_days: 0 };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("planner.max_days"));
    }
}
