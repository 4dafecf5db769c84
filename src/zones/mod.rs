//! Zones domain: the zone catalog and the encounter manager that owns the
//! active zone's enemies, props, and boss fight.

mod data;
mod events;
mod registry;
mod state;
mod systems;

pub use data::{
    BossZoneConfig, EnemyPlacement, PropPlacement, ZoneBounds, ZoneDef, ZoneTheme,
};
pub use events::{
    LoadZoneEvent, ResetEncounterEvent, UnlockZoneEvent, ZoneLoadedEvent, ZoneUnlockedEvent,
};
pub use registry::ZoneRegistry;
pub use state::{EncounterState, ZoneScoped};

use bevy::prelude::*;

pub struct ZonesPlugin;

impl Plugin for ZonesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ZoneRegistry>()
            .init_resource::<EncounterState>()
            .add_message::<LoadZoneEvent>()
            .add_message::<ZoneLoadedEvent>()
            .add_message::<UnlockZoneEvent>()
            .add_message::<ZoneUnlockedEvent>()
            .add_message::<ResetEncounterEvent>()
            .add_systems(
                Startup,
                (registry::setup_zone_registry, systems::load_starting_zone).chain(),
            )
            .add_systems(
                Update,
                (
                    systems::handle_zone_unlocks,
                    systems::handle_zone_loads,
                    systems::check_boss_trigger,
                    systems::handle_boss_defeat,
                    systems::sweep_defeated,
                    systems::handle_encounter_resets,
                )
                    .chain(),
            );
    }
}
