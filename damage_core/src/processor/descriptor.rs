//! RawHitInfo and DamageDescriptor - processor input and output

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::HitGeometry;
use crate::damage::DefenderDescriptor;
use crate::types::{CombatCapability, HealthCapability};

/// Raw collision data handed in by projectiles, melee hitboxes, and
/// area effects
#[derive(Clone, Copy)]
pub struct RawHitInfo<'a> {
    /// Collision contact point in world space
    pub contact_point: Vec3,
    /// The target's combat capability, if it has one
    pub combat: Option<&'a dyn CombatCapability>,
    /// The target's health capability, if it has one
    pub health: Option<&'a dyn HealthCapability>,
}

impl<'a> RawHitInfo<'a> {
    pub fn new(
        contact_point: Vec3,
        combat: Option<&'a dyn CombatCapability>,
        health: Option<&'a dyn HealthCapability>,
    ) -> Self {
        RawHitInfo {
            contact_point,
            combat,
            health,
        }
    }

    /// View the hit target as a defender
    pub fn defender(&self) -> DefenderDescriptor<'a> {
        DefenderDescriptor::new(self.combat, self.health)
    }
}

impl fmt::Debug for RawHitInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawHitInfo")
            .field("contact_point", &self.contact_point)
            .field("combat", &self.combat.is_some())
            .field("health", &self.health.is_some())
            .finish()
    }
}

/// The finished damage descriptor handed to a [`DamageReceiver`]
///
/// [`DamageReceiver`]: crate::types::DamageReceiver
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DamageDescriptor {
    /// Final damage amount
    pub amount: f64,
    /// Whether the hit was critical
    pub is_critical: bool,
    /// Where and how the hit landed
    pub geometry: HitGeometry,
}

impl DamageDescriptor {
    pub fn new(amount: f64, is_critical: bool, geometry: HitGeometry) -> Self {
        DamageDescriptor {
            amount,
            is_critical,
            geometry,
        }
    }
}
