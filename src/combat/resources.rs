//! Combat domain: tuning resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct EnemyTuning {
    pub move_speed: f32,
    pub chase_speed: f32,
    /// Patrol walks at this fraction of normal speed.
    pub patrol_speed_factor: f32,
    pub stagger_duration: f32,
    pub aggro_tint: Color,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            move_speed: 80.0,
            chase_speed: 150.0,
            patrol_speed_factor: 0.5,
            stagger_duration: 0.25,
            aggro_tint: Color::srgb(1.0, 0.2, 0.2),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct BossTuning {
    pub base_speed: f32,
    pub attack_cooldown: f32,
    pub orbit_radius: f32,
    /// Radians per second around the arena center.
    pub orbit_rate: f32,
    pub orbit_speed_factor: f32,
    /// Chase patterns hold off at this range instead of colliding.
    pub chase_stop: f32,
    pub aggressive_mult: f32,
    pub berserker_stop: f32,
    pub berserker_mult: f32,
    /// Per-axis jitter added before normalizing the berserker heading.
    pub berserker_jitter: f32,
    /// Seconds between swim heading refreshes.
    pub swim_retarget: f32,
    pub swim_mult: f32,
    pub aggressive_swim_mult: f32,
    pub frenzy_mult: f32,
    pub zigzag_amplitude: f32,
    pub blast_knockback: f32,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            base_speed: 120.0,
            attack_cooldown: 2.5,
            orbit_radius: 100.0,
            orbit_rate: 1.0,
            orbit_speed_factor: 0.7,
            chase_stop: 60.0,
            aggressive_mult: 1.2,
            berserker_stop: 40.0,
            berserker_mult: 1.5,
            berserker_jitter: 25.0,
            swim_retarget: 2.0,
            swim_mult: 0.8,
            aggressive_swim_mult: 1.1,
            frenzy_mult: 2.0,
            zigzag_amplitude: 30.0,
            blast_knockback: 350.0,
        }
    }
}
