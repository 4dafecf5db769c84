//! Combat domain: damage, knockback, and death plumbing.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{
    BossRuntime, Combatant, Dying, Health, Hitbox, HitboxLifetime, Stagger, Team,
    TelegraphIndicator,
};
use crate::combat::events::{BossDefeatedEvent, DamageEvent, DeathEvent};
use crate::combat::resources::EnemyTuning;

/// Maximum velocity an entity can have after knockback
const MAX_KNOCKBACK_VELOCITY: f32 = 800.0;

pub(crate) fn update_combat_timers(
    time: Res<Time>,
    mut stagger_query: Query<&mut Stagger>,
    mut dying_query: Query<&mut Dying>,
) {
    let dt = time.delta_secs();
    for mut stagger in &mut stagger_query {
        if stagger.timer > 0.0 {
            stagger.timer -= dt;
        }
    }
    for mut dying in &mut dying_query {
        if dying.timer > 0.0 {
            dying.timer -= dt;
        }
    }
}

pub(crate) fn detect_hitbox_collisions(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut hitbox_query: Query<(&mut Hitbox, &Team, &Transform)>,
    target_query: Query<(Entity, &Team, &Transform), With<Combatant>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hitbox_entity, target_entity) in pairs {
            let Ok((mut hitbox, hitbox_team, hitbox_transform)) =
                hitbox_query.get_mut(hitbox_entity)
            else {
                continue;
            };
            let Ok((target, target_team, target_transform)) = target_query.get(target_entity)
            else {
                continue;
            };

            if hitbox_team == target_team
                || hitbox.owner == target
                || hitbox.hit_entities.contains(&target)
            {
                continue;
            }
            hitbox.hit_entities.push(target);

            let hitbox_pos = hitbox_transform.translation.truncate();
            let target_pos = target_transform.translation.truncate();
            let knockback_dir = (target_pos - hitbox_pos).normalize_or(Vec2::X);

            damage_events.write(DamageEvent {
                source: hitbox.owner,
                target,
                amount: hitbox.damage,
                knockback: knockback_dir * hitbox.knockback,
            });
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    tuning: Res<EnemyTuning>,
    mut query: Query<(&mut Health, &mut Stagger), Without<Dying>>,
) {
    for event in damage_events.read() {
        let Ok((mut health, mut stagger)) = query.get_mut(event.target) else {
            continue;
        };
        health.take_damage(event.amount);
        stagger.timer = tuning.stagger_duration;

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

/// Knockback tolerates targets without a velocity to push - the lookup just
/// misses and the damage still lands.
pub(crate) fn apply_knockback(
    mut damage_events: MessageReader<DamageEvent>,
    mut query: Query<&mut LinearVelocity>,
) {
    for event in damage_events.read() {
        let Ok(mut velocity) = query.get_mut(event.target) else {
            continue;
        };
        velocity.x += event.knockback.x;
        velocity.y += event.knockback.y;

        let speed = velocity.0.length();
        if speed > MAX_KNOCKBACK_VELOCITY {
            velocity.0 *= MAX_KNOCKBACK_VELOCITY / speed;
        }
    }
}

/// Single authoritative defeat path: mark the entity dying exactly once and,
/// for bosses, emit the one defeat event the zone cascade listens for.
pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut boss_defeated_events: MessageWriter<BossDefeatedEvent>,
    candidate_query: Query<Option<&BossRuntime>, Without<Dying>>,
) {
    let mut marked: Vec<Entity> = Vec::new();
    for event in death_events.read() {
        if marked.contains(&event.entity) {
            continue;
        }
        let Ok(boss) = candidate_query.get(event.entity) else {
            continue;
        };
        marked.push(event.entity);
        commands.entity(event.entity).insert(Dying::new());

        if let Some(runtime) = boss {
            info!("Boss '{}' is going down", runtime.name);
            boss_defeated_events.write(BossDefeatedEvent {
                boss: event.entity,
                kind: runtime.kind.clone(),
            });
        }
    }
}

pub(crate) fn cleanup_expired_hitboxes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitboxLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn cleanup_telegraphs(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut TelegraphIndicator)>,
) {
    let dt = time.delta_secs();
    for (entity, mut telegraph) in &mut query {
        telegraph.timer -= dt;
        if telegraph.timer <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
