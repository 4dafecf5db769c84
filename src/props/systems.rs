//! Props domain: kick application, fixed-step flight, and enemy impacts.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;

use crate::combat::{DamageEvent, Dying, Enemy, EnemyArchetype};
use crate::core::SimRng;
use crate::player::PlayerStats;
use crate::props::components::{Kickable, PropTrail};
use crate::props::events::{KickEvent, PropBrokenEvent};

/// Spin range handed to a freshly kicked prop, radians per tick.
const KICK_SPIN: f32 = 0.1;

pub(crate) fn apply_kicks(
    mut kick_events: MessageReader<KickEvent>,
    mut rng: ResMut<SimRng>,
    stats: Res<PlayerStats>,
    mut prop_query: Query<&mut Kickable>,
) {
    for event in kick_events.read() {
        let Ok(mut prop) = prop_query.get_mut(event.prop) else {
            warn!("Kick on a prop that no longer exists");
            continue;
        };
        let spin = rng.0.random_range(-KICK_SPIN..=KICK_SPIN);
        prop.apply_kick(event.force, stats.kick_force, spin);
        debug!(
            "Kicked {:?}: force {:?} -> velocity {:?}",
            prop.kind, event.force, prop.velocity
        );
    }
}

/// Integrate prop flight on the fixed tick and refresh the motion trail.
pub(crate) fn step_props(
    time: Res<Time>,
    mut prop_query: Query<(&mut Transform, &mut Kickable, &mut PropTrail)>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut prop, mut trail) in &mut prop_query {
        let displacement = prop.step(dt);
        transform.translation += displacement.extend(0.0);
        transform.rotation = Quat::from_rotation_z(prop.rotation);
        trail.record(transform.translation.truncate());
    }
}

/// Radius check between flying props and enemies. Each enemy is struck at
/// most once per flight; the damage event carries the half-velocity knockback
/// scaled by the prop's knockback multiplier.
pub(crate) fn resolve_prop_impacts(
    mut damage_events: MessageWriter<DamageEvent>,
    mut broken_events: MessageWriter<PropBrokenEvent>,
    mut prop_query: Query<(Entity, &Transform, &mut Kickable, &mut Visibility)>,
    enemy_query: Query<(Entity, &Transform, &EnemyArchetype), (With<Enemy>, Without<Dying>)>,
) {
    for (prop_entity, prop_transform, mut prop, mut visibility) in &mut prop_query {
        if prop.is_broken || !prop.is_flying {
            continue;
        }
        let prop_pos = prop_transform.translation.truncate();
        let knockback_mult = prop.kind.stats().knockback_mult;

        for (enemy, enemy_transform, archetype) in &enemy_query {
            if !prop.is_flying {
                break;
            }
            if prop.recently_hit.contains(&enemy) {
                continue;
            }
            let enemy_pos = enemy_transform.translation.truncate();
            if prop_pos.distance(enemy_pos) > prop.hitbox_radius + archetype.radius() {
                continue;
            }

            prop.recently_hit.push(enemy);
            let (damage, knockback) = prop.hit_enemy();
            if damage <= 0.0 {
                continue;
            }
            damage_events.write(DamageEvent {
                source: prop_entity,
                target: enemy,
                amount: damage,
                knockback: knockback * knockback_mult,
            });

            if prop.is_broken {
                info!("{:?} shattered on impact", prop.kind);
                *visibility = Visibility::Hidden;
                broken_events.write(PropBrokenEvent {
                    prop: prop_entity,
                    kind: prop.kind,
                });
                break;
            }
        }
    }
}
