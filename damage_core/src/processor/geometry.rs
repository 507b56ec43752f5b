//! Hit geometry - where and how a hit landed

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::DamageCategory;

/// Spatial description of a hit, attached to the damage descriptor
/// for downstream presentation (VFX, hit reactions)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitGeometry {
    /// Contact point adjusted for attacker motion since the attack
    /// was issued
    pub point: Vec3,
    /// Normalized direction from the attack origin toward the point.
    /// Zero when origin and point coincide.
    pub direction: Vec3,
    /// Damage category, carried for presentation choices
    pub category: DamageCategory,
}

impl HitGeometry {
    pub fn new(point: Vec3, direction: Vec3, category: DamageCategory) -> Self {
        HitGeometry {
            point,
            direction,
            category,
        }
    }
}

/// Shift the raw contact point by the attacker's displacement since
/// the attack began
///
/// A projectile records its origin when fired; by the time the
/// collision arrives the attacker may have moved, so the visual hit
/// point tracks the displacement rather than the stale contact.
pub fn adjusted_hit_point(contact: Vec3, origin: Vec3, current_attacker_position: Vec3) -> Vec3 {
    contact + (current_attacker_position - origin)
}

/// Normalized direction from the attack origin to the hit point
pub fn hit_direction(origin: Vec3, hit_point: Vec3) -> Vec3 {
    (hit_point - origin).normalize_or_zero()
}
