//! AttackDescriptor - Immutable parameters of one attack instance

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::BalanceConstants;
use crate::types::{DamageCategory, DamageSourceKind, TeamId};

/// Everything the engine needs to know about a single attack
///
/// Constructed per attack event by the caller (projectile, melee
/// hitbox, area effect) and discarded once the hit is resolved. Crit
/// fields default from [`BalanceConstants`] and can be overwritten per
/// descriptor before resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackDescriptor {
    /// Attacker's raw attack power, read by the attack-scaled formula
    pub attack_power: f64,
    /// Formula-specific base value (flat amount or health fraction)
    pub base_value: f64,
    /// Formula-specific multiplier
    pub multiplier: f64,
    /// Probability of a critical hit, in [0, 1]
    pub crit_chance: f64,
    /// Damage multiplier applied on a critical hit (>= 1)
    pub crit_multiplier: f64,
    /// Which base-damage formula resolves this attack
    pub source: DamageSourceKind,
    /// Whether defense mitigation applies
    pub category: DamageCategory,
    /// Attacker's team, transported for the caller's friendly-fire checks
    pub team: TeamId,
    /// Attacker's world position when the attack was issued
    pub origin: Vec3,
}

impl Default for AttackDescriptor {
    fn default() -> Self {
        AttackDescriptor {
            attack_power: 0.0,
            base_value: 1.0,
            multiplier: 1.0,
            crit_chance: 0.05,
            crit_multiplier: 1.5,
            source: DamageSourceKind::AttackScaled,
            category: DamageCategory::Normal,
            team: TeamId(0),
            origin: Vec3::ZERO,
        }
    }
}

impl AttackDescriptor {
    /// Create a descriptor with crit fields seeded from balance constants
    pub fn new(
        source: DamageSourceKind,
        category: DamageCategory,
        constants: &BalanceConstants,
    ) -> Self {
        AttackDescriptor {
            source,
            category,
            crit_chance: constants.crit.base_chance,
            crit_multiplier: constants.crit.base_multiplier,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crit_defaults_from_constants() {
        let mut constants = BalanceConstants::default();
        constants.crit.base_chance = 0.25;
        constants.crit.base_multiplier = 3.0;

        let attack = AttackDescriptor::new(
            DamageSourceKind::Fixed,
            DamageCategory::True,
            &constants,
        );

        assert!((attack.crit_chance - 0.25).abs() < f64::EPSILON);
        assert!((attack.crit_multiplier - 3.0).abs() < f64::EPSILON);
        assert_eq!(attack.source, DamageSourceKind::Fixed);
        assert_eq!(attack.category, DamageCategory::True);
    }
}
