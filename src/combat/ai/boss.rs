//! Combat domain: boss phase transitions, movement dispatch, and attack
//! scripting. All of this runs on the fixed 16 ms tick.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::combat::attacks::{AttackStep, BlastAnchor};
use crate::combat::components::{
    ActiveAttack, BossPhases, BossRuntime, Dying, Health, Hitbox, HitboxLifetime, MovementPattern,
    Team, TelegraphIndicator,
};
use crate::combat::events::BossPhaseChangedEvent;
use crate::combat::resources::BossTuning;
use crate::core::SimRng;
use crate::player::{GameLayer, Player};

pub(crate) fn tick_attack_cooldowns(
    time: Res<Time>,
    mut boss_query: Query<&mut BossRuntime, Without<Dying>>,
) {
    let dt = time.delta_secs();
    for mut runtime in &mut boss_query {
        if runtime.attack_timer > 0.0 {
            runtime.attack_timer -= dt;
        }
    }
}

/// Compare the health fraction against the next phase threshold and advance
/// by at most one phase per tick.
pub(crate) fn update_boss_phase(
    mut phase_events: MessageWriter<BossPhaseChangedEvent>,
    mut boss_query: Query<(Entity, &Health, &mut BossRuntime, &BossPhases), Without<Dying>>,
) {
    for (entity, health, mut runtime, phases) in &mut boss_query {
        if let Some(index) = runtime.advance_phase(health.fraction(), &phases.0) {
            info!(
                "Boss '{}' entered phase {} ({:?})",
                runtime.name, index, phases.0[index].movement
            );
            phase_events.write(BossPhaseChangedEvent {
                boss: entity,
                phase_index: index,
            });
        }
    }
}

pub(crate) fn apply_boss_movement(
    time: Res<Time>,
    tuning: Res<BossTuning>,
    mut rng: ResMut<SimRng>,
    player_query: Query<&Transform, (With<Player>, Without<BossRuntime>)>,
    mut boss_query: Query<
        (&Transform, &mut LinearVelocity, &mut BossRuntime, &BossPhases),
        Without<Dying>,
    >,
) {
    let dt = time.delta_secs();
    let elapsed = time.elapsed_secs();
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, mut velocity, mut runtime, phases) in &mut boss_query {
        // Dash scripts own the velocity while charging.
        if runtime.is_charging {
            continue;
        }
        let Some(phase) = phases.0.get(runtime.phase_index) else {
            continue;
        };

        let position = transform.translation.truncate();
        let to_player = player_pos - position;
        let distance = to_player.length();
        let speed = runtime.speed();

        velocity.0 = match phase.movement {
            MovementPattern::Stationary => Vec2::ZERO,
            MovementPattern::Circle => {
                runtime.circle_angle += tuning.orbit_rate * dt;
                let orbit_point = runtime.arena_center
                    + Vec2::from_angle(runtime.circle_angle) * tuning.orbit_radius;
                (orbit_point - position).normalize_or_zero() * speed * tuning.orbit_speed_factor
            }
            MovementPattern::Chase => {
                if distance > tuning.chase_stop {
                    to_player.normalize_or_zero() * speed
                } else {
                    Vec2::ZERO
                }
            }
            MovementPattern::Aggressive => {
                if distance > tuning.chase_stop {
                    to_player.normalize_or_zero() * speed * tuning.aggressive_mult
                } else {
                    Vec2::ZERO
                }
            }
            MovementPattern::Berserker => {
                if distance > tuning.berserker_stop {
                    let jitter = Vec2::new(
                        rng.0.random_range(-tuning.berserker_jitter..=tuning.berserker_jitter),
                        rng.0.random_range(-tuning.berserker_jitter..=tuning.berserker_jitter),
                    );
                    (to_player + jitter).normalize_or_zero() * speed * tuning.berserker_mult
                } else {
                    Vec2::ZERO
                }
            }
            MovementPattern::Swimming | MovementPattern::AggressiveSwim => {
                let aggressive = phase.movement == MovementPattern::AggressiveSwim;
                runtime.swim_timer -= dt;
                if runtime.swim_timer <= 0.0 {
                    runtime.swim_timer = tuning.swim_retarget;
                    runtime.swim_heading = if aggressive {
                        to_player.normalize_or_zero()
                    } else {
                        Vec2::from_angle(rng.0.random_range(0.0..TAU))
                    };
                }
                let mult = if aggressive {
                    tuning.aggressive_swim_mult
                } else {
                    tuning.swim_mult
                };
                runtime.swim_heading * speed * mult
            }
            MovementPattern::Frenzy => {
                let direction = to_player.normalize_or_zero();
                let wobble =
                    direction.perp() * (elapsed * 5.0).sin() * tuning.zigzag_amplitude;
                (to_player + wobble).normalize_or_zero() * speed * tuning.frenzy_mult
            }
        };
    }
}

/// Fire an attack when the cooldown allows: uniform pick from the current
/// phase's ability list, snapshotting the player position for the script.
pub(crate) fn select_boss_attack(
    mut commands: Commands,
    mut rng: ResMut<SimRng>,
    player_query: Query<&Transform, With<Player>>,
    mut boss_query: Query<
        (Entity, &mut BossRuntime, &BossPhases),
        (Without<ActiveAttack>, Without<Dying>),
    >,
) {
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (entity, mut runtime, phases) in &mut boss_query {
        if runtime.attack_timer > 0.0 {
            continue;
        }
        let Some(phase) = phases.0.get(runtime.phase_index) else {
            continue;
        };
        if phase.abilities.is_empty() {
            continue;
        }

        let id = phase.abilities[rng.0.random_range(0..phase.abilities.len())];
        let sequence = id.sequence();
        info!("Boss '{}' begins {}", runtime.name, sequence.name);
        runtime.attack_timer = runtime.attack_cooldown;
        commands
            .entity(entity)
            .insert(ActiveAttack::new(id, sequence, player_pos));
    }
}

/// Execute the running attack script step by step.
pub(crate) fn run_attack_scripts(
    time: Res<Time>,
    tuning: Res<BossTuning>,
    mut commands: Commands,
    mut boss_query: Query<
        (
            Entity,
            &Transform,
            &mut LinearVelocity,
            &mut BossRuntime,
            &mut ActiveAttack,
        ),
        Without<Dying>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut velocity, mut runtime, mut attack) in &mut boss_query {
        let position = transform.translation.truncate();
        let Some(step) = attack.current_step().cloned() else {
            commands.entity(entity).remove::<ActiveAttack>();
            continue;
        };

        if !attack.step_started {
            attack.step_started = true;
            match step {
                AttackStep::Telegraph { secs } => {
                    spawn_telegraph(&mut commands, attack.target, secs);
                    info!("Boss '{}' telegraphs {}", runtime.name, attack.name);
                }
                AttackStep::Dash { speed_mult, .. } => {
                    attack.dash_direction = (attack.target - position).normalize_or_zero();
                    runtime.is_charging = true;
                    velocity.0 = attack.dash_direction * runtime.speed() * speed_mult;
                }
                AttackStep::Blast {
                    radius,
                    damage,
                    anchor,
                    offset,
                } => {
                    let anchor_pos = match anchor {
                        BlastAnchor::Boss => position,
                        BlastAnchor::Target => attack.target,
                    };
                    spawn_blast(&mut commands, entity, anchor_pos + offset, radius, damage, &tuning);
                }
                AttackStep::Wait { .. } => {}
                AttackStep::Shout { line } => {
                    info!("Boss '{}': {}", runtime.name, line);
                }
            }
        }

        // A dash keeps its impulse against damping for the whole step.
        if let AttackStep::Dash { speed_mult, .. } = step {
            velocity.0 = attack.dash_direction * runtime.speed() * speed_mult;
        }

        attack.step_timer += dt;
        if attack.step_timer < step.duration() {
            continue;
        }

        if matches!(step, AttackStep::Dash { .. }) {
            runtime.is_charging = false;
            velocity.0 = Vec2::ZERO;
        }
        attack.step_index += 1;
        attack.step_timer = 0.0;
        attack.step_started = false;
        if attack.step_index >= attack.steps.len() {
            commands.entity(entity).remove::<ActiveAttack>();
        }
    }
}

fn spawn_telegraph(commands: &mut Commands, position: Vec2, secs: f32) {
    commands.spawn((
        TelegraphIndicator { timer: secs },
        Sprite {
            color: Color::srgba(1.0, 0.3, 0.1, 0.35),
            custom_size: Some(Vec2::splat(48.0)),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.5),
    ));
}

fn spawn_blast(
    commands: &mut Commands,
    owner: Entity,
    center: Vec2,
    radius: f32,
    damage: f32,
    tuning: &BossTuning,
) {
    commands.spawn((
        Hitbox {
            damage,
            knockback: tuning.blast_knockback,
            owner,
            hit_entities: Vec::new(),
        },
        Team::Enemy,
        HitboxLifetime(0.2),
        Sprite {
            color: Color::srgba(1.0, 0.2, 0.2, 0.6),
            custom_size: Some(Vec2::splat(radius * 2.0)),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 1.0),
        Collider::circle(radius),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::EnemyHitbox, [GameLayer::Player]),
    ));
}
