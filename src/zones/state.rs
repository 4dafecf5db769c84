//! Zones domain: live encounter state.

use bevy::prelude::*;

/// Marker for entities owned by the active zone. Zone changes and resets
/// despawn everything carrying it.
#[derive(Component, Debug)]
pub struct ZoneScoped;

/// The encounter manager's mutable state. The active enemy and prop sets
/// live in the ECS as `ZoneScoped` entities; this resource tracks which zone
/// they belong to and whether a boss fight owns the zone.
#[derive(Resource, Debug, Default)]
pub struct EncounterState {
    pub current_zone: Option<String>,
    pub boss: Option<Entity>,
    /// Set once the active zone's boss has been defeated, so the arena
    /// trigger cannot restart the fight.
    pub boss_defeated: bool,
}

impl EncounterState {
    pub fn is_boss_active(&self) -> bool {
        self.boss.is_some()
    }

    /// Clear everything about the running encounter. Zone unlock flags are
    /// catalog state and survive.
    pub fn reset(&mut self) {
        self.current_zone = None;
        self.boss = None;
        self.boss_defeated = false;
    }
}
