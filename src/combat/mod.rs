//! Combat domain: enemy aggro behavior, the boss state machine, and damage
//! plumbing.

mod ai;
mod attacks;
mod components;
mod events;
mod resources;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use attacks::{AttackSequence, AttackStep, BlastAnchor, BossAttackId};
pub use components::{
    ActiveAttack, AggroPhase, AggroState, BossPhaseDef, BossPhases, BossRuntime, Combatant,
    DEAGGRO_FACTOR, Dying, Enemy, EnemyArchetype, Health, Hitbox, HitboxLifetime, MovementPattern,
    PatrolRoute, Stagger, Team, WAYPOINT_RADIUS,
};
pub use events::{
    BossDefeatedEvent, BossFightStartedEvent, BossPhaseChangedEvent, DamageEvent, DeathEvent,
};
pub use resources::{BossTuning, EnemyTuning};
pub use spawn::{EnemyBundle, MAX_ACTIVE_ENEMIES, archetype_for_boss, spawn_boss};

use bevy::prelude::*;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .init_resource::<BossTuning>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_message::<BossFightStartedEvent>()
            .add_message::<BossPhaseChangedEvent>()
            .add_message::<BossDefeatedEvent>()
            .add_systems(
                Update,
                (
                    ai::enemy::update_enemy_aggro,
                    ai::enemy::apply_enemy_movement,
                    systems::detect_hitbox_collisions,
                    systems::apply_damage,
                    systems::apply_knockback,
                    systems::process_deaths,
                    systems::update_combat_timers,
                    systems::cleanup_expired_hitboxes,
                    systems::cleanup_telegraphs,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    ai::boss::tick_attack_cooldowns,
                    ai::boss::update_boss_phase,
                    ai::boss::apply_boss_movement,
                    ai::boss::select_boss_attack,
                    ai::boss::run_attack_scripts,
                )
                    .chain(),
            );
    }
}
