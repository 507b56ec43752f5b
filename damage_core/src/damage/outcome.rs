//! DamageOutcome - The scalar result of damage calculation

use serde::{Deserialize, Serialize};

/// Result of running one attack through the calculator
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Final damage after crit and mitigation, never below the
    /// configured minimum
    pub amount: f64,
    /// Whether the critical roll succeeded
    pub is_critical: bool,
}

impl DamageOutcome {
    pub fn new(amount: f64, is_critical: bool) -> Self {
        DamageOutcome {
            amount,
            is_critical,
        }
    }
}
