//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Core types
pub use crate::types::{
    CombatCapability, DamageCategory, DamageReceiver, DamageSourceKind, HealthCapability, TeamId,
};

// Damage pipeline
pub use crate::damage::{
    calculate_damage, calculate_damage_with, AttackDescriptor, DamageOutcome, DefenderDescriptor,
};

// Processor
pub use crate::processor::{process_hit, process_hit_with, DamageDescriptor, HitGeometry, RawHitInfo};

// Defense curve
pub use crate::defense::{apply_mitigation, mitigation_fraction};

// Strategies
pub use crate::strategy::{BaseDamageFn, StrategyTable};

// Diagnostics
pub use crate::diagnostics::{Diagnostic, DiagnosticSink, NullSink, TracingSink, VecSink};

// Config
pub use crate::config::BalanceConstants;
