//! damage_core - Damage resolution engine for real-time combat
//!
//! This library provides:
//! - Base-damage strategies: four formulas selected by damage source kind
//! - Damage Calculator: crit roll, defense mitigation, floor clamp
//! - Damage Processor: raw collision data in, damage descriptor out
//!
//! The engine is a pure computation stage between "an attack
//! occurred" and "damage was applied": it never owns health state,
//! never applies damage, and never aborts mid-fight - anomalous
//! inputs degrade to bounded defaults and surface as diagnostics.

pub mod config;
pub mod damage;
pub mod defense;
pub mod diagnostics;
pub mod prelude;
pub mod processor;
pub mod strategy;
pub mod types;

// Re-export core types for convenience
pub use config::{BalanceConstants, ConfigError, CritConstants, DamageConstants};
pub use damage::{
    calculate_damage, calculate_damage_with, AttackDescriptor, DamageOutcome, DefenderDescriptor,
};
pub use defense::{apply_mitigation, mitigation_fraction};
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, TracingSink, VecSink};
pub use processor::{process_hit, process_hit_with, DamageDescriptor, HitGeometry, RawHitInfo};
pub use strategy::{BaseDamageFn, StrategyTable};
pub use types::{
    CombatCapability, DamageCategory, DamageReceiver, DamageSourceKind, HealthCapability, TeamId,
};
