//! Combat domain: the per-enemy aggro state machine and patrol movement.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{
    AggroPhase, AggroState, BossRuntime, Dying, Enemy, EnemyArchetype, Stagger, WAYPOINT_RADIUS,
};
use crate::combat::resources::EnemyTuning;
use crate::player::Player;
use crate::zones::EncounterState;

/// Drive aggro transitions from player distance. Regular enemy AI pauses
/// entirely while a boss fight is running.
pub(crate) fn update_enemy_aggro(
    tuning: Res<EnemyTuning>,
    encounter: Option<Res<EncounterState>>,
    player_query: Query<&Transform, With<Player>>,
    mut enemy_query: Query<
        (&Transform, &mut AggroState, &mut Sprite, &EnemyArchetype),
        (With<Enemy>, Without<BossRuntime>, Without<Dying>),
    >,
) {
    if encounter.as_deref().is_some_and(EncounterState::is_boss_active) {
        return;
    }
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, mut aggro, mut sprite, archetype) in &mut enemy_query {
        let distance = player_pos.distance(transform.translation.truncate());
        let Some(next) = aggro.evaluate(distance) else {
            continue;
        };
        let previous = aggro.phase;
        aggro.phase = next;
        if next == AggroPhase::Aggroed {
            sprite.color = tuning.aggro_tint;
            info!(
                "Enemy aggroed at distance {:.0} (radius {:.0})",
                distance, aggro.aggro_radius
            );
        } else {
            sprite.color = archetype.color();
            info!("Enemy calmed down: {:?} -> {:?}", previous, next);
        }
    }
}

/// Patrol stepping and aggro homing. Knockback owns the velocity while the
/// enemy is staggered.
pub(crate) fn apply_enemy_movement(
    tuning: Res<EnemyTuning>,
    encounter: Option<Res<EncounterState>>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            &Transform,
            &mut LinearVelocity,
            &mut AggroState,
            &Stagger,
            &EnemyArchetype,
        ),
        (With<Enemy>, Without<BossRuntime>, Without<Dying>),
    >,
) {
    if encounter.as_deref().is_some_and(EncounterState::is_boss_active) {
        return;
    }
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, mut velocity, mut aggro, stagger, archetype) in &mut enemy_query {
        if stagger.is_staggered() {
            continue;
        }
        let position = transform.translation.truncate();

        match aggro.phase {
            AggroPhase::Aggroed => {
                let direction = (player_pos - position).normalize_or_zero();
                velocity.0 = direction * tuning.chase_speed * archetype.speed_factor();
            }
            AggroPhase::Patrolling => {
                let Some(route) = aggro.patrol.as_mut() else {
                    velocity.0 = Vec2::ZERO;
                    continue;
                };
                if position.distance(route.current()) <= WAYPOINT_RADIUS {
                    route.advance();
                }
                let direction = (route.current() - position).normalize_or_zero();
                velocity.0 = direction
                    * tuning.move_speed
                    * tuning.patrol_speed_factor
                    * archetype.speed_factor();
            }
            _ => {
                velocity.0 = Vec2::ZERO;
            }
        }
    }
}
