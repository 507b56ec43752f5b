//! Base-damage formulas - one pure function per damage source kind
//!
//! Each formula turns an attack/defender pair into an unmitigated,
//! pre-crit base number. Keeping the source of the base number apart
//! from crit and mitigation means a new attack type is one new
//! function and one table entry, nothing else.

use crate::damage::{AttackDescriptor, DefenderDescriptor};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::types::DamageSourceKind;

/// Signature shared by every base-damage formula
pub type BaseDamageFn =
    fn(&AttackDescriptor, &DefenderDescriptor, &mut dyn DiagnosticSink) -> f64;

/// attack_power * base_value * multiplier
pub fn attack_scaled(
    attack: &AttackDescriptor,
    _defender: &DefenderDescriptor,
    _sink: &mut dyn DiagnosticSink,
) -> f64 {
    attack.attack_power * attack.base_value * attack.multiplier
}

/// base_value * multiplier, independent of both entities
pub fn fixed(
    attack: &AttackDescriptor,
    _defender: &DefenderDescriptor,
    _sink: &mut dyn DiagnosticSink,
) -> f64 {
    attack.base_value * attack.multiplier
}

/// defender max health * base_value * multiplier
///
/// Degrades to 0 with a diagnostic when the defender has no health
/// capability.
pub fn max_health_percent(
    attack: &AttackDescriptor,
    defender: &DefenderDescriptor,
    sink: &mut dyn DiagnosticSink,
) -> f64 {
    match defender.health {
        Some(health) => health.max_health() * attack.base_value * attack.multiplier,
        None => {
            sink.emit(Diagnostic::MissingHealthCapability(
                DamageSourceKind::MaxHealthPercent,
            ));
            0.0
        }
    }
}

/// defender current health * base_value * multiplier
///
/// Degrades to 0 with a diagnostic when the defender has no health
/// capability.
pub fn current_health_percent(
    attack: &AttackDescriptor,
    defender: &DefenderDescriptor,
    sink: &mut dyn DiagnosticSink,
) -> f64 {
    match defender.health {
        Some(health) => health.current_health() * attack.base_value * attack.multiplier,
        None => {
            sink.emit(Diagnostic::MissingHealthCapability(
                DamageSourceKind::CurrentHealthPercent,
            ));
            0.0
        }
    }
}
