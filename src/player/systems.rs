//! Player domain: spawning and the kick input stand-in.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{Combatant, Health, Stagger, Team};
use crate::player::components::{GameLayer, Player, PlayerStats};
use crate::props::{KickEvent, Kickable};

const PLAYER_RADIUS: f32 = 16.0;
const PLAYER_HEALTH: f32 = 100.0;
/// Magnitude of the raw kick force vector handed to props.
const KICK_IMPULSE: f32 = 100.0;

pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        Combatant,
        Team::Player,
        Health::new(PLAYER_HEALTH),
        Stagger::default(),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::splat(PLAYER_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_xyz(100.0, 100.0, 0.0),
        RigidBody::Kinematic,
        Collider::circle(PLAYER_RADIUS),
        CollisionLayers::new(GameLayer::Player, [GameLayer::EnemyHitbox, GameLayer::Sensor]),
    ));
}

/// Stand-in for the external weapon system: Space kicks the nearest prop in
/// range, away from the player.
pub(crate) fn read_kick_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    stats: Res<PlayerStats>,
    mut kick_events: MessageWriter<KickEvent>,
    player_query: Query<&Transform, With<Player>>,
    prop_query: Query<(Entity, &Transform, &Kickable)>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }

    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    let mut nearest: Option<(Entity, Vec2, f32)> = None;
    for (entity, transform, prop) in &prop_query {
        if prop.is_broken {
            continue;
        }
        let prop_pos = transform.translation.truncate();
        let distance = player_pos.distance(prop_pos);
        if distance > stats.kick_range {
            continue;
        }
        if nearest.is_none_or(|(_, _, best)| distance < best) {
            nearest = Some((entity, prop_pos, distance));
        }
    }

    if let Some((prop, prop_pos, _)) = nearest {
        let direction = (prop_pos - player_pos).normalize_or(Vec2::X);
        kick_events.write(KickEvent {
            prop,
            force: direction * KICK_IMPULSE,
        });
    }
}
