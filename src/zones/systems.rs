//! Zones domain: the encounter manager - zone lifecycle, the boss trigger,
//! the unlock cascade, and entity sweeps.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{
    AggroState, BossDefeatedEvent, BossFightStartedEvent, BossRuntime, BossTuning, Dying, Enemy,
    EnemyBundle, Health, MAX_ACTIVE_ENEMIES, spawn_boss,
};
use crate::core::{CharacterRoster, CharacterUnlockedEvent};
use crate::player::Player;
use crate::props::{Kickable, PropBundle};
use crate::zones::data::EnemyPlacement;
use crate::zones::events::{
    LoadZoneEvent, ResetEncounterEvent, UnlockZoneEvent, ZoneLoadedEvent, ZoneUnlockedEvent,
};
use crate::zones::registry::ZoneRegistry;
use crate::zones::state::{EncounterState, ZoneScoped};

/// The session opens in the first catalog zone.
pub(crate) fn load_starting_zone(mut load_events: MessageWriter<LoadZoneEvent>) {
    load_events.write(LoadZoneEvent {
        zone_id: "tutorial-grove".to_string(),
    });
}

pub(crate) fn handle_zone_unlocks(
    mut unlock_events: MessageReader<UnlockZoneEvent>,
    mut unlocked_events: MessageWriter<ZoneUnlockedEvent>,
    mut registry: ResMut<ZoneRegistry>,
) {
    for event in unlock_events.read() {
        if registry.unlock(&event.zone_id) {
            info!("Zone '{}' unlocked", event.zone_id);
            unlocked_events.write(ZoneUnlockedEvent {
                zone_id: event.zone_id.clone(),
            });
        }
    }
}

pub(crate) fn handle_zone_loads(
    mut commands: Commands,
    mut load_events: MessageReader<LoadZoneEvent>,
    mut loaded_events: MessageWriter<ZoneLoadedEvent>,
    registry: Res<ZoneRegistry>,
    mut encounter: ResMut<EncounterState>,
    mut clear_color: ResMut<ClearColor>,
    scoped_query: Query<Entity, With<ZoneScoped>>,
) {
    for event in load_events.read() {
        let Some(zone) = registry.get(&event.zone_id) else {
            warn!("Zone '{}' not found in catalog", event.zone_id);
            continue;
        };
        if !zone.unlocked {
            warn!("Zone '{}' is still locked", zone.id);
            continue;
        }

        // Release everything owned by the previous zone.
        for entity in &scoped_query {
            commands.entity(entity).despawn();
        }
        encounter.reset();

        let mut spawned = 0usize;
        for placement in &zone.enemy_placements {
            if spawned >= MAX_ACTIVE_ENEMIES {
                warn!(
                    "Zone '{}' exceeds the {} enemy cap; truncating",
                    zone.id, MAX_ACTIVE_ENEMIES
                );
                break;
            }
            spawn_placed_enemy(&mut commands, placement);
            spawned += 1;
        }
        for placement in &zone.prop_placements {
            commands.spawn((PropBundle::new(placement.kind, placement.position), ZoneScoped));
        }

        encounter.current_zone = Some(zone.id.to_string());
        clear_color.0 = zone.theme.clear_color();
        info!(
            "Loaded zone '{}' ({} enemies, {} props)",
            zone.id,
            spawned,
            zone.prop_placements.len()
        );
        loaded_events.write(ZoneLoadedEvent {
            zone_id: zone.id.to_string(),
        });
    }
}

fn spawn_placed_enemy(commands: &mut Commands, placement: &EnemyPlacement) {
    let aggro = match &placement.patrol {
        Some(waypoints) => AggroState::patrolling(
            placement.aggro_radius,
            placement.position,
            waypoints.clone(),
        ),
        None => AggroState::stationary(placement.aggro_radius, placement.position),
    };
    commands.spawn((
        EnemyBundle::new(placement.archetype, placement.position, aggro),
        ZoneScoped,
    ));
}

/// Start the boss fight when the player enters the arena. Regular enemies
/// vanish on the spot - they are released, not killed.
pub(crate) fn check_boss_trigger(
    mut commands: Commands,
    mut started_events: MessageWriter<BossFightStartedEvent>,
    registry: Res<ZoneRegistry>,
    tuning: Res<BossTuning>,
    mut encounter: ResMut<EncounterState>,
    player_query: Query<&Transform, With<Player>>,
    enemy_query: Query<Entity, (With<Enemy>, Without<BossRuntime>)>,
) {
    if encounter.is_boss_active() || encounter.boss_defeated {
        return;
    }
    let Some(zone_id) = encounter.current_zone.clone() else {
        return;
    };
    let Some(config) = registry.get(&zone_id).and_then(|zone| zone.boss.as_ref()) else {
        return;
    };
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    if !config.arena_contains(player_transform.translation.truncate()) {
        return;
    }

    for entity in &enemy_query {
        commands.entity(entity).despawn();
    }
    let boss = spawn_boss(&mut commands, config, &tuning);
    commands.entity(boss).insert(ZoneScoped);
    encounter.boss = Some(boss);
    info!("Boss fight started: '{}' ({})", config.name, config.kind);
    started_events.write(BossFightStartedEvent {
        boss,
        kind: config.kind.to_string(),
    });
}

/// Consume the one defeat event per boss: unlock the mapped character, then
/// advance the catalog - the next zone in authored order opens regardless of
/// its declared character requirements.
pub(crate) fn handle_boss_defeat(
    mut defeat_events: MessageReader<BossDefeatedEvent>,
    mut character_events: MessageWriter<CharacterUnlockedEvent>,
    mut zone_unlocked_events: MessageWriter<ZoneUnlockedEvent>,
    mut roster: ResMut<CharacterRoster>,
    mut registry: ResMut<ZoneRegistry>,
    mut encounter: ResMut<EncounterState>,
) {
    for event in defeat_events.read() {
        info!("Boss '{}' defeated", event.kind);

        if roster.unlock_for_boss(&event.kind) {
            if let Some(character_id) = roster.character_for_boss(&event.kind) {
                character_events.write(CharacterUnlockedEvent {
                    character_id: character_id.to_string(),
                });
            }
        }

        if let Some(zone_id) = encounter.current_zone.clone() {
            if let Some(next_id) = registry.next_in_catalog(&zone_id) {
                if registry.unlock(next_id) {
                    info!("Zone '{}' unlocked by boss defeat", next_id);
                    zone_unlocked_events.write(ZoneUnlockedEvent {
                        zone_id: next_id.to_string(),
                    });
                }
            }
        }

        encounter.boss = None;
        encounter.boss_defeated = true;
    }
}

/// Release finished entities: enemies whose death animation has run out and
/// props that broke.
pub(crate) fn sweep_defeated(
    mut commands: Commands,
    dying_query: Query<(Entity, &Dying, &Health)>,
    prop_query: Query<(Entity, &Kickable)>,
) {
    for (entity, dying, health) in &dying_query {
        if health.is_dead() && dying.finished() {
            commands.entity(entity).despawn();
        }
    }
    for (entity, prop) in &prop_query {
        if prop.is_broken {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn handle_encounter_resets(
    mut commands: Commands,
    mut reset_events: MessageReader<ResetEncounterEvent>,
    mut encounter: ResMut<EncounterState>,
    scoped_query: Query<Entity, With<ZoneScoped>>,
) {
    let mut requested = false;
    for _ in reset_events.read() {
        requested = true;
    }
    if !requested {
        return;
    }

    for entity in &scoped_query {
        commands.entity(entity).despawn();
    }
    encounter.reset();
    info!("Encounter state reset");
}
