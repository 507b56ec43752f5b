//! Defense mitigation - diminishing-returns damage reduction

/// Calculate the mitigation fraction for a defense rating
///
/// Uses the asymptotic formula:
/// `Reduction = Defense / (Defense + Constant)`
///
/// Zero defense gives zero reduction, defense equal to the constant
/// gives exactly 50%, and the fraction approaches but never reaches
/// 100% as defense grows. Non-positive defense is treated as zero.
///
/// # Arguments
/// * `defense` - The defender's defense rating
/// * `defense_constant` - The rating at which mitigation hits 50%
///
/// # Returns
/// The reduction fraction, bounded in [0, 1)
pub fn mitigation_fraction(defense: f64, defense_constant: f64) -> f64 {
    if defense <= 0.0 {
        return 0.0;
    }

    defense / (defense + defense_constant)
}

/// Apply defense mitigation to a damage amount
pub fn apply_mitigation(damage: f64, defense: f64, defense_constant: f64) -> f64 {
    damage * (1.0 - mitigation_fraction(defense, defense_constant))
}

/// Calculate how much defense is needed for a target mitigation fraction
pub fn defense_needed_for_mitigation(target_fraction: f64, defense_constant: f64) -> f64 {
    if target_fraction <= 0.0 {
        return 0.0;
    }
    if target_fraction >= 1.0 {
        return f64::INFINITY;
    }

    // Solving: fraction = defense / (defense + C)
    // fraction * defense + fraction * C = defense
    // defense = (fraction * C) / (1 - fraction)
    (target_fraction * defense_constant) / (1.0 - target_fraction)
}
