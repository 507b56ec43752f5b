//! Base-damage strategy set and its resolver

mod base_damage;
mod resolver;

pub use base_damage::{
    attack_scaled, current_health_percent, fixed, max_health_percent, BaseDamageFn,
};
pub use resolver::StrategyTable;
