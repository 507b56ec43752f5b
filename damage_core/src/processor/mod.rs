//! Damage processing - from raw collision data to a DamageDescriptor
//!
//! The processor is the only component that touches geometry; the
//! calculator underneath stays purely numeric.

mod descriptor;
mod geometry;

pub use descriptor::{DamageDescriptor, RawHitInfo};
pub use geometry::{adjusted_hit_point, hit_direction, HitGeometry};

use glam::Vec3;
use rand::Rng;

use crate::config::BalanceConstants;
use crate::damage::{calculate_damage_with, AttackDescriptor};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::strategy::StrategyTable;

/// Process a hit with the ambient RNG and tracing diagnostics
///
/// Convenience wrapper over [`process_hit_with`].
pub fn process_hit(
    attack: &AttackDescriptor,
    hit: &RawHitInfo,
    current_attacker_position: Vec3,
    strategies: &StrategyTable,
    constants: &BalanceConstants,
) -> DamageDescriptor {
    let mut rng = rand::thread_rng();
    let mut sink = TracingSink;
    process_hit_with(
        attack,
        hit,
        current_attacker_position,
        strategies,
        constants,
        &mut rng,
        &mut sink,
    )
}

/// Process a hit with a provided RNG and diagnostic sink
///
/// Builds the defender from the hit's capabilities, runs the
/// calculator, then attaches geometry: the contact point shifted by
/// the attacker's displacement since the attack began, and the
/// normalized direction from the attack origin to that point.
pub fn process_hit_with(
    attack: &AttackDescriptor,
    hit: &RawHitInfo,
    current_attacker_position: Vec3,
    strategies: &StrategyTable,
    constants: &BalanceConstants,
    rng: &mut impl Rng,
    sink: &mut dyn DiagnosticSink,
) -> DamageDescriptor {
    let defender = hit.defender();
    let outcome = calculate_damage_with(attack, &defender, strategies, constants, rng, sink);

    let point = adjusted_hit_point(hit.contact_point, attack.origin, current_attacker_position);
    let direction = hit_direction(attack.origin, point);
    let geometry = HitGeometry::new(point, direction, attack.category);

    DamageDescriptor::new(outcome.amount, outcome.is_critical, geometry)
}
