//! Damage calculation - turning an attack + defender into a DamageOutcome

use rand::Rng;

use super::{AttackDescriptor, DamageOutcome, DefenderDescriptor};
use crate::config::BalanceConstants;
use crate::defense::apply_mitigation;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::strategy::StrategyTable;
use crate::types::DamageCategory;

/// Calculate damage with the ambient RNG and tracing diagnostics
///
/// Convenience wrapper over [`calculate_damage_with`]. For
/// deterministic or concurrent use, call the explicit variant with a
/// seeded or per-context RNG instead; `rand::thread_rng()` is
/// per-thread, so concurrent callers through this wrapper stay safe
/// but not reproducible.
pub fn calculate_damage(
    attack: &AttackDescriptor,
    defender: &DefenderDescriptor,
    strategies: &StrategyTable,
    constants: &BalanceConstants,
) -> DamageOutcome {
    let mut rng = rand::thread_rng();
    let mut sink = TracingSink;
    calculate_damage_with(attack, defender, strategies, constants, &mut rng, &mut sink)
}

/// Calculate damage with a provided RNG and diagnostic sink
///
/// Pipeline, in order:
/// 1. Resolve the base-damage formula and compute the base amount
/// 2. Roll one uniform sample in [0, 1) against the crit chance
/// 3. Multiply by the crit multiplier on a successful roll
/// 4. Read defense from the combat capability (absent = 0)
/// 5. Apply the mitigation curve unless the category is True
/// 6. Clamp to the configured minimum damage
///
/// No input aborts the pipeline: an unresolvable source or missing
/// capability degrades to base 0 with a diagnostic, and the floor
/// clamp still yields a usable outcome. Each call draws exactly one
/// crit sample and shares no state with other calls.
pub fn calculate_damage_with(
    attack: &AttackDescriptor,
    defender: &DefenderDescriptor,
    strategies: &StrategyTable,
    constants: &BalanceConstants,
    rng: &mut impl Rng,
    sink: &mut dyn DiagnosticSink,
) -> DamageOutcome {
    // Step 1: Base damage from the resolved strategy
    let base = match strategies.resolve(attack.source) {
        Some(formula) => formula(attack, defender, sink),
        None => {
            sink.emit(Diagnostic::UnknownDamageSource(attack.source));
            0.0
        }
    };

    // Step 2: One crit roll per invocation
    let is_critical = rng.gen::<f64>() < attack.crit_chance;

    // Step 3: Crit amplification
    let after_crit = if is_critical {
        base * attack.crit_multiplier
    } else {
        base
    };

    // Steps 4-5: Category-gated mitigation
    let mitigated = match attack.category {
        DamageCategory::True => after_crit,
        DamageCategory::Normal => apply_mitigation(
            after_crit,
            defender.defense(),
            constants.damage.defense_constant,
        ),
    };

    // Step 6: Floor clamp
    let amount = mitigated.max(constants.damage.minimum_damage);

    DamageOutcome::new(amount, is_critical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::VecSink;
    use crate::types::{CombatCapability, DamageSourceKind, TeamId};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Guard {
        defense: f64,
    }

    impl CombatCapability for Guard {
        fn defense(&self) -> f64 {
            self.defense
        }

        fn team(&self) -> TeamId {
            TeamId(1)
        }
    }

    fn make_test_rng() -> StdRng {
        StdRng::seed_from_u64(12345)
    }

    fn run(
        attack: &AttackDescriptor,
        defender: &DefenderDescriptor,
        constants: &BalanceConstants,
    ) -> (DamageOutcome, VecSink) {
        let table = StrategyTable::standard();
        let mut rng = make_test_rng();
        let mut sink = VecSink::new();
        let outcome =
            calculate_damage_with(attack, defender, &table, constants, &mut rng, &mut sink);
        (outcome, sink)
    }

    #[test]
    fn test_attack_scaled_with_half_mitigation() {
        // Defense equal to the constant mitigates exactly half:
        // base = 10 * 1 * 1 = 10, final = 5
        let constants = BalanceConstants::default();
        let guard = Guard {
            defense: constants.damage.defense_constant,
        };
        let attack = AttackDescriptor {
            attack_power: 10.0,
            base_value: 1.0,
            multiplier: 1.0,
            crit_chance: 0.0,
            source: DamageSourceKind::AttackScaled,
            ..Default::default()
        };
        let defender = DefenderDescriptor::new(Some(&guard), None);

        let (outcome, sink) = run(&attack, &defender, &constants);

        assert!((outcome.amount - 5.0).abs() < 1e-9);
        assert!(!outcome.is_critical);
        assert!(sink.emitted.is_empty());
    }

    #[test]
    fn test_true_damage_ignores_defense() {
        // 20 fixed true damage through 1000 defense stays 20
        let constants = BalanceConstants::default();
        let guard = Guard { defense: 1000.0 };
        let attack = AttackDescriptor {
            base_value: 20.0,
            multiplier: 1.0,
            crit_chance: 0.0,
            source: DamageSourceKind::Fixed,
            category: DamageCategory::True,
            ..Default::default()
        };
        let defender = DefenderDescriptor::new(Some(&guard), None);

        let (outcome, _) = run(&attack, &defender, &constants);

        assert!((outcome.amount - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_health_floors_at_minimum() {
        // Percent formula with no health pool: base 0, floor applies
        let constants = BalanceConstants::default();
        let attack = AttackDescriptor {
            base_value: 0.5,
            multiplier: 1.0,
            crit_chance: 0.0,
            source: DamageSourceKind::MaxHealthPercent,
            ..Default::default()
        };

        let (outcome, sink) = run(&attack, &DefenderDescriptor::absent(), &constants);

        assert!((outcome.amount - constants.damage.minimum_damage).abs() < f64::EPSILON);
        assert_eq!(sink.emitted.len(), 1);
        assert_eq!(
            sink.emitted[0],
            Diagnostic::MissingHealthCapability(DamageSourceKind::MaxHealthPercent)
        );
    }

    #[test]
    fn test_forced_crit_doubles_damage() {
        // crit_chance 1.0 always passes since the sample is in [0, 1)
        let constants = BalanceConstants::default();
        let attack = AttackDescriptor {
            attack_power: 10.0,
            base_value: 1.0,
            multiplier: 1.0,
            crit_chance: 1.0,
            crit_multiplier: 2.0,
            source: DamageSourceKind::AttackScaled,
            ..Default::default()
        };

        let (outcome, _) = run(&attack, &DefenderDescriptor::absent(), &constants);

        assert!(outcome.is_critical);
        assert!((outcome.amount - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_crit_chance_never_crits() {
        let constants = BalanceConstants::default();
        let table = StrategyTable::standard();
        let attack = AttackDescriptor {
            attack_power: 5.0,
            crit_chance: 0.0,
            source: DamageSourceKind::AttackScaled,
            ..Default::default()
        };

        let mut rng = make_test_rng();
        let mut sink = VecSink::new();
        for _ in 0..1000 {
            let outcome = calculate_damage_with(
                &attack,
                &DefenderDescriptor::absent(),
                &table,
                &constants,
                &mut rng,
                &mut sink,
            );
            assert!(!outcome.is_critical);
        }
    }

    #[test]
    fn test_unresolved_source_degrades_to_minimum() {
        let constants = BalanceConstants::default();
        let table = StrategyTable::empty();
        let attack = AttackDescriptor {
            attack_power: 100.0,
            source: DamageSourceKind::AttackScaled,
            ..Default::default()
        };

        let mut rng = make_test_rng();
        let mut sink = VecSink::new();
        let outcome = calculate_damage_with(
            &attack,
            &DefenderDescriptor::absent(),
            &table,
            &constants,
            &mut rng,
            &mut sink,
        );

        assert!((outcome.amount - constants.damage.minimum_damage).abs() < f64::EPSILON);
        assert_eq!(
            sink.emitted,
            vec![Diagnostic::UnknownDamageSource(DamageSourceKind::AttackScaled)]
        );
    }

    #[test]
    fn test_crit_still_rolls_on_zero_base() {
        // An unresolvable source degrades through the same pipeline,
        // so a forced crit flag survives even when the amount floors
        let constants = BalanceConstants::default();
        let table = StrategyTable::empty();
        let attack = AttackDescriptor {
            crit_chance: 1.0,
            ..Default::default()
        };

        let mut rng = make_test_rng();
        let mut sink = VecSink::new();
        let outcome = calculate_damage_with(
            &attack,
            &DefenderDescriptor::absent(),
            &table,
            &constants,
            &mut rng,
            &mut sink,
        );

        assert!(outcome.is_critical);
        assert!((outcome.amount - constants.damage.minimum_damage).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_amount_never_below_minimum(
            attack_power in -1e6..1e6f64,
            base_value in -1e3..1e3f64,
            multiplier in -10.0..10.0f64,
            crit_chance in 0.0..=1.0f64,
            defense in 0.0..1e6f64,
            seed in any::<u64>(),
        ) {
            let constants = BalanceConstants::default();
            let table = StrategyTable::standard();
            let guard = Guard { defense };
            let attack = AttackDescriptor {
                attack_power,
                base_value,
                multiplier,
                crit_chance,
                source: DamageSourceKind::AttackScaled,
                ..Default::default()
            };
            let defender = DefenderDescriptor::new(Some(&guard), None);

            let mut rng = StdRng::seed_from_u64(seed);
            let mut sink = VecSink::new();
            let outcome = calculate_damage_with(
                &attack, &defender, &table, &constants, &mut rng, &mut sink,
            );

            prop_assert!(outcome.amount >= constants.damage.minimum_damage);
        }
    }
}
