//! Core types specific to damage resolution

use serde::{Deserialize, Serialize};

use crate::processor::DamageDescriptor;

/// Where the base damage number of an attack comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageSourceKind {
    /// Scales with the attacker's raw attack power
    AttackScaled,
    /// A flat number independent of either entity
    Fixed,
    /// A fraction of the defender's maximum health
    MaxHealthPercent,
    /// A fraction of the defender's current health
    CurrentHealthPercent,
}

impl DamageSourceKind {
    /// Get all damage source kinds
    pub fn all() -> &'static [DamageSourceKind] {
        &[
            DamageSourceKind::AttackScaled,
            DamageSourceKind::Fixed,
            DamageSourceKind::MaxHealthPercent,
            DamageSourceKind::CurrentHealthPercent,
        ]
    }

    /// Whether this kind reads the defender's health pool
    pub fn needs_health(&self) -> bool {
        matches!(
            self,
            DamageSourceKind::MaxHealthPercent | DamageSourceKind::CurrentHealthPercent
        )
    }
}

/// Whether defense mitigation applies to a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageCategory {
    /// Reduced by the defender's defense curve
    Normal,
    /// Bypasses mitigation entirely
    True,
}

impl DamageCategory {
    /// Check if this category ignores defense
    pub fn bypasses_defense(&self) -> bool {
        matches!(self, DamageCategory::True)
    }
}

/// Identifier for an entity's team (friendly-fire filtering is the caller's job)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl From<u32> for TeamId {
    fn from(id: u32) -> Self {
        TeamId(id)
    }
}

/// Combat-side view of a defender: defense rating and team membership
pub trait CombatCapability {
    /// Defense rating fed into the mitigation curve
    fn defense(&self) -> f64;

    /// Team this entity fights for
    fn team(&self) -> TeamId;
}

/// Health-side view of a defender, read by the percent-based strategies
pub trait HealthCapability {
    fn current_health(&self) -> f64;

    fn max_health(&self) -> f64;
}

/// Anything that can be handed a finished damage descriptor
///
/// Implementors own health deduction, hit reactions, and whatever else
/// follows a hit; the engine only produces the descriptor.
pub trait DamageReceiver {
    fn receive_damage(&mut self, damage: &DamageDescriptor);
}
