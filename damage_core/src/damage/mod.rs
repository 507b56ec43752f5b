//! Damage calculation pipeline

mod attack;
mod calculator;
mod defender;
mod outcome;

pub use attack::AttackDescriptor;
pub use calculator::{calculate_damage, calculate_damage_with};
pub use defender::DefenderDescriptor;
pub use outcome::DamageOutcome;
