//! Balance constants configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Tunable balance constants
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BalanceConstants {
    #[serde(default)]
    pub damage: DamageConstants,
    #[serde(default)]
    pub crit: CritConstants,
}

impl BalanceConstants {
    /// Reject parameter combinations the formulas are not defined for
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.damage.minimum_damage <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "minimum_damage must be positive, got {}",
                self.damage.minimum_damage
            )));
        }
        if self.damage.defense_constant <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "defense_constant must be positive, got {}",
                self.damage.defense_constant
            )));
        }
        if !(0.0..=1.0).contains(&self.crit.base_chance) {
            return Err(ConfigError::ValidationError(format!(
                "crit base_chance must be within [0, 1], got {}",
                self.crit.base_chance
            )));
        }
        if self.crit.base_multiplier < 1.0 {
            return Err(ConfigError::ValidationError(format!(
                "crit base_multiplier must be at least 1.0, got {}",
                self.crit.base_multiplier
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Floor applied to every computed damage amount
    #[serde(default = "default_minimum_damage")]
    pub minimum_damage: f64,
    /// Formula constant: reduction = defense / (defense + constant).
    /// Defense equal to this value gives exactly 50% mitigation.
    #[serde(default = "default_defense_constant")]
    pub defense_constant: f64,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            minimum_damage: 1.0,
            defense_constant: 100.0,
        }
    }
}

fn default_minimum_damage() -> f64 {
    1.0
}
fn default_defense_constant() -> f64 {
    100.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CritConstants {
    /// Default critical chance seeded into new attack descriptors
    #[serde(default = "default_base_chance")]
    pub base_chance: f64,
    /// Default critical damage multiplier (1.5 = 150%)
    #[serde(default = "default_base_multiplier")]
    pub base_multiplier: f64,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants {
            base_chance: 0.05,
            base_multiplier: 1.5,
        }
    }
}

fn default_base_chance() -> f64 {
    0.05
}
fn default_base_multiplier() -> f64 {
    1.5
}
