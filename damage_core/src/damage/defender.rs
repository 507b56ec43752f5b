//! DefenderDescriptor - The optional capabilities of the entity being hit

use std::fmt;

use crate::types::{CombatCapability, HealthCapability};

/// Borrowed view of the defender for one resolution
///
/// Both capabilities are independently optional: a training dummy may
/// expose health but no combat stats, a destructible prop may expose
/// neither. Absence is a supported state, not an error - missing
/// combat means zero defense, missing health zeroes the percent-based
/// formulas.
#[derive(Clone, Copy, Default)]
pub struct DefenderDescriptor<'a> {
    pub combat: Option<&'a dyn CombatCapability>,
    pub health: Option<&'a dyn HealthCapability>,
}

impl<'a> DefenderDescriptor<'a> {
    pub fn new(
        combat: Option<&'a dyn CombatCapability>,
        health: Option<&'a dyn HealthCapability>,
    ) -> Self {
        DefenderDescriptor { combat, health }
    }

    /// A defender exposing no capabilities at all
    pub fn absent() -> Self {
        DefenderDescriptor {
            combat: None,
            health: None,
        }
    }

    /// Defense rating, zero when no combat capability is present
    pub fn defense(&self) -> f64 {
        self.combat.map(|c| c.defense()).unwrap_or(0.0)
    }
}

impl fmt::Debug for DefenderDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefenderDescriptor")
            .field("combat", &self.combat.is_some())
            .field("health", &self.health.is_some())
            .finish()
    }
}
