//! StrategyTable - Maps a damage source kind to its formula
//!
//! The table is built once at startup and passed by reference into
//! the calculator, so there is no process-wide mutable state and
//! tests can swap formulas freely.

use std::collections::HashMap;

use super::base_damage::{self, BaseDamageFn};
use crate::types::DamageSourceKind;

/// Lookup from damage source kind to base-damage formula
#[derive(Clone, Default)]
pub struct StrategyTable {
    entries: HashMap<DamageSourceKind, BaseDamageFn>,
}

impl StrategyTable {
    /// The standard mapping covering every kind in the closed set
    pub fn standard() -> Self {
        let mut table = StrategyTable::empty();
        for &kind in DamageSourceKind::all() {
            // Exhaustive: adding a kind without a formula is a compile error here
            let formula: BaseDamageFn = match kind {
                DamageSourceKind::AttackScaled => base_damage::attack_scaled,
                DamageSourceKind::Fixed => base_damage::fixed,
                DamageSourceKind::MaxHealthPercent => base_damage::max_health_percent,
                DamageSourceKind::CurrentHealthPercent => base_damage::current_health_percent,
            };
            table.set(kind, formula);
        }
        table
    }

    /// A table with no entries; every resolve degrades to base 0
    pub fn empty() -> Self {
        StrategyTable {
            entries: HashMap::new(),
        }
    }

    /// Register or replace the formula for a kind
    pub fn set(&mut self, kind: DamageSourceKind, formula: BaseDamageFn) {
        self.entries.insert(kind, formula);
    }

    /// Look up the formula for a kind
    pub fn resolve(&self, kind: DamageSourceKind) -> Option<BaseDamageFn> {
        self.entries.get(&kind).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::{AttackDescriptor, DefenderDescriptor};
    use crate::diagnostics::VecSink;

    #[test]
    fn test_standard_resolves_every_kind() {
        let table = StrategyTable::standard();
        for &kind in DamageSourceKind::all() {
            assert!(table.resolve(kind).is_some(), "{kind:?} unresolved");
        }
    }

    #[test]
    fn test_empty_table_resolves_nothing() {
        let table = StrategyTable::empty();
        for &kind in DamageSourceKind::all() {
            assert!(table.resolve(kind).is_none());
        }
    }

    #[test]
    fn test_formula_swappable() {
        fn always_seven(
            _: &AttackDescriptor,
            _: &DefenderDescriptor,
            _: &mut dyn crate::diagnostics::DiagnosticSink,
        ) -> f64 {
            7.0
        }

        let mut table = StrategyTable::standard();
        table.set(DamageSourceKind::Fixed, always_seven);

        let formula = table.resolve(DamageSourceKind::Fixed).unwrap();
        let mut sink = VecSink::new();
        let base = formula(
            &AttackDescriptor::default(),
            &DefenderDescriptor::absent(),
            &mut sink,
        );
        assert!((base - 7.0).abs() < f64::EPSILON);
    }
}
