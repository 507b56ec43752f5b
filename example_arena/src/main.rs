//! Example Arena - a minimal demo driving the damage_core pipeline
//!
//! This demo shows:
//! - Attack descriptors for each damage source kind
//! - Processing raw hits into damage descriptors
//! - Applying descriptors through the DamageReceiver capability
//!
//! Runs with a seeded RNG so every invocation prints the same fight.

use damage_core::prelude::*;
use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A target exposing every capability the engine consumes
struct Sentinel {
    name: &'static str,
    team: TeamId,
    defense: f64,
    current_health: f64,
    max_health: f64,
}

impl Sentinel {
    fn new(name: &'static str, team: TeamId, defense: f64, health: f64) -> Self {
        Sentinel {
            name,
            team,
            defense,
            current_health: health,
            max_health: health,
        }
    }

    fn is_alive(&self) -> bool {
        self.current_health > 0.0
    }
}

impl CombatCapability for Sentinel {
    fn defense(&self) -> f64 {
        self.defense
    }

    fn team(&self) -> TeamId {
        self.team
    }
}

impl HealthCapability for Sentinel {
    fn current_health(&self) -> f64 {
        self.current_health
    }

    fn max_health(&self) -> f64 {
        self.max_health
    }
}

impl DamageReceiver for Sentinel {
    fn receive_damage(&mut self, damage: &DamageDescriptor) {
        self.current_health = (self.current_health - damage.amount).max(0.0);
    }
}

/// The demo attack loadout, one entry per damage source kind
fn loadout(constants: &BalanceConstants) -> Vec<(&'static str, AttackDescriptor)> {
    let mut rifle = AttackDescriptor::new(
        DamageSourceKind::AttackScaled,
        DamageCategory::Normal,
        constants,
    );
    rifle.attack_power = 25.0;
    rifle.crit_chance = 0.2;
    rifle.crit_multiplier = 2.0;

    let mut grenade =
        AttackDescriptor::new(DamageSourceKind::Fixed, DamageCategory::Normal, constants);
    grenade.base_value = 60.0;
    grenade.crit_chance = 0.0;

    let mut rail_lance =
        AttackDescriptor::new(DamageSourceKind::MaxHealthPercent, DamageCategory::True, constants);
    rail_lance.base_value = 0.15;

    let mut reaper = AttackDescriptor::new(
        DamageSourceKind::CurrentHealthPercent,
        DamageCategory::Normal,
        constants,
    );
    reaper.base_value = 0.30;

    vec![
        ("rifle", rifle),
        ("grenade", grenade),
        ("rail lance", rail_lance),
        ("reaper", reaper),
    ]
}

fn main() {
    tracing_subscriber::fmt::init();

    let constants = BalanceConstants::default();
    let strategies = StrategyTable::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut sink = TracingSink;

    let mut target = Sentinel::new("Sentinel", TeamId(2), 150.0, 500.0);
    let attacker_origin = Vec3::ZERO;
    let contact = Vec3::new(12.0, 1.5, 0.0);

    println!(
        "{} enters: {:.0} health, {:.0} defense ({:.0}% mitigation)\n",
        target.name,
        target.max_health,
        target.defense,
        mitigation_fraction(target.defense, constants.damage.defense_constant) * 100.0,
    );

    let weapons = loadout(&constants);
    let mut round = 0;

    'fight: loop {
        round += 1;
        println!("-- round {round} --");

        for (name, attack) in &weapons {
            let mut attack = attack.clone();
            attack.team = TeamId(1);
            attack.origin = attacker_origin;

            let hit = RawHitInfo::new(contact, Some(&target), Some(&target));
            // Attacker strafes a little each round
            let current_position = attacker_origin + Vec3::new(0.0, 0.0, round as f32 * 0.5);
            let descriptor = process_hit_with(
                &attack,
                &hit,
                current_position,
                &strategies,
                &constants,
                &mut rng,
                &mut sink,
            );

            target.receive_damage(&descriptor);

            let crit_tag = if descriptor.is_critical { " CRIT!" } else { "" };
            println!(
                "  {name:>10}: {amount:6.1} damage{crit_tag}  ({health:.1} health left)",
                amount = descriptor.amount,
                health = target.current_health,
            );

            if !target.is_alive() {
                println!("\n{} goes down in round {round}.", target.name);
                break 'fight;
            }
        }
    }
}
