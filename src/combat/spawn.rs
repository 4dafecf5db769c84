//! Combat domain: enemy and boss spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{
    AggroState, BossPhases, BossRuntime, Combatant, Enemy, EnemyArchetype, Health, Stagger, Team,
};
use crate::combat::resources::BossTuning;
use crate::player::GameLayer;
use crate::zones::BossZoneConfig;

/// Hard cap on concurrently live regular enemies.
pub const MAX_ACTIVE_ENEMIES: usize = 200;

/// Bundle for spawning regular zone enemies
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub archetype: EnemyArchetype,
    pub combatant: Combatant,
    pub team: Team,
    pub health: Health,
    pub stagger: Stagger,
    pub aggro: AggroState,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub damping: LinearDamping,
    pub locked_axes: LockedAxes,
}

impl EnemyBundle {
    pub fn new(archetype: EnemyArchetype, position: Vec2, aggro: AggroState) -> Self {
        let radius = archetype.radius();
        Self {
            enemy: Enemy,
            archetype,
            combatant: Combatant,
            team: Team::Enemy,
            health: Health::new(archetype.base_health()),
            stagger: Stagger::default(),
            aggro,
            sprite: Sprite {
                color: archetype.color(),
                custom_size: Some(Vec2::splat(radius * 2.0)),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::circle(radius),
            collision_layers: CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player]),
            // High damping so knockback velocity decays quickly
            velocity: LinearVelocity::default(),
            damping: LinearDamping(5.0),
            locked_axes: LockedAxes::ROTATION_LOCKED,
        }
    }
}

/// Placeholder body archetype for a boss kind.
pub fn archetype_for_boss(kind: &str) -> EnemyArchetype {
    match kind {
        "swarm-king" => EnemyArchetype::Elite,
        "desert-bomber" => EnemyArchetype::Tank,
        "ice-shark" => EnemyArchetype::Elite,
        _ => EnemyArchetype::Elite,
    }
}

const BOSS_SCALE: f32 = 2.0;

/// Spawn a boss from its zone config. The boss carries the `Enemy` marker so
/// downstream collision code treats it like any other enemy.
pub fn spawn_boss(commands: &mut Commands, config: &BossZoneConfig, tuning: &BossTuning) -> Entity {
    let archetype = archetype_for_boss(config.kind);
    let radius = archetype.radius() * BOSS_SCALE;

    commands
        .spawn((
            (
                Enemy,
                archetype,
                Combatant,
                Team::Enemy,
                Health::new(config.health),
                Stagger::default(),
            ),
            (
                BossRuntime::new(
                    config.kind,
                    config.name,
                    config.position,
                    config.arena_radius,
                    tuning.base_speed,
                    tuning.attack_cooldown,
                ),
                BossPhases(config.phases.clone()),
            ),
            (
                Sprite {
                    color: archetype.color(),
                    custom_size: Some(Vec2::splat(radius * 2.0)),
                    ..default()
                },
                Transform::from_xyz(config.position.x, config.position.y, 0.0),
            ),
            (
                RigidBody::Dynamic,
                Collider::circle(radius),
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player]),
                LinearVelocity::default(),
                LinearDamping(3.0),
                LockedAxes::ROTATION_LOCKED,
            ),
        ))
        .id()
}
