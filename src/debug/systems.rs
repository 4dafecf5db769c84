//! Debug domain: hotkey systems poking the simulation from outside.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{BossRuntime, DamageEvent, Enemy, Health};
use crate::player::Player;
use crate::props::{KickEvent, Kickable};
use crate::zones::{EncounterState, LoadZoneEvent, ResetEncounterEvent, UnlockZoneEvent, ZoneRegistry};

const DEBUG_BOSS_DAMAGE: f32 = 50.0;
const DEBUG_KICK_FORCE: f32 = 100.0;

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    encounter: Res<EncounterState>,
    registry: Res<ZoneRegistry>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut kick_events: MessageWriter<KickEvent>,
    mut unlock_events: MessageWriter<UnlockZoneEvent>,
    mut load_events: MessageWriter<LoadZoneEvent>,
    mut reset_events: MessageWriter<ResetEncounterEvent>,
    boss_query: Query<(Entity, &Health), With<BossRuntime>>,
    player_query: Query<&Transform, With<Player>>,
    prop_query: Query<(Entity, &Transform, &Kickable)>,
    enemy_query: Query<Entity, With<Enemy>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    // Ctrl+B: chip the boss
    if ctrl && keyboard.just_pressed(KeyCode::KeyB) {
        if let Some((boss, health)) = boss_query.iter().next() {
            damage_events.write(DamageEvent {
                source: boss,
                target: boss,
                amount: DEBUG_BOSS_DAMAGE,
                knockback: Vec2::ZERO,
            });
            info!(
                "[DEBUG] Boss damaged ({:.0}/{:.0} before hit)",
                health.current, health.max
            );
        }
    }

    // Ctrl+K: kick the nearest prop away from the player
    if ctrl && keyboard.just_pressed(KeyCode::KeyK) {
        if let Some(player_transform) = player_query.iter().next() {
            let player_pos = player_transform.translation.truncate();
            let nearest = prop_query
                .iter()
                .filter(|(_, _, prop)| !prop.is_broken)
                .min_by(|(_, a, _), (_, b, _)| {
                    let da = player_pos.distance(a.translation.truncate());
                    let db = player_pos.distance(b.translation.truncate());
                    da.total_cmp(&db)
                });
            if let Some((prop, transform, _)) = nearest {
                let direction = (transform.translation.truncate() - player_pos)
                    .normalize_or(Vec2::X);
                kick_events.write(KickEvent {
                    prop,
                    force: direction * DEBUG_KICK_FORCE,
                });
                info!("[DEBUG] Kicked nearest prop");
            }
        }
    }

    // Ctrl+N: unlock and jump to the next catalog zone
    if ctrl && keyboard.just_pressed(KeyCode::KeyN) {
        let next = encounter
            .current_zone
            .as_deref()
            .and_then(|zone_id| registry.next_in_catalog(zone_id));
        if let Some(zone_id) = next {
            unlock_events.write(UnlockZoneEvent {
                zone_id: zone_id.to_string(),
            });
            load_events.write(LoadZoneEvent {
                zone_id: zone_id.to_string(),
            });
            info!("[DEBUG] Jumping to '{}'", zone_id);
        }
    }

    // Ctrl+R: reset the encounter
    if ctrl && keyboard.just_pressed(KeyCode::KeyR) {
        reset_events.write(ResetEncounterEvent);
        info!("[DEBUG] Encounter reset requested");
    }

    // F2: dump encounter state
    if keyboard.just_pressed(KeyCode::F2) {
        info!(
            "[DEBUG] zone={:?} boss_active={} enemies={} props={}",
            encounter.current_zone,
            encounter.is_boss_active(),
            enemy_query.iter().count(),
            prop_query.iter().count()
        );
    }
}
