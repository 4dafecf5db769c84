//! Zones domain: zone catalog data definitions.

use bevy::prelude::*;

use crate::combat::{AggroPhase, BossPhaseDef, EnemyArchetype};
use crate::props::PropKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneTheme {
    Grove,
    Dunes,
    Reef,
}

impl ZoneTheme {
    /// Backdrop color applied when the zone loads.
    pub fn clear_color(&self) -> Color {
        match self {
            ZoneTheme::Grove => Color::srgb(0.13, 0.22, 0.12),
            ZoneTheme::Dunes => Color::srgb(0.32, 0.26, 0.14),
            ZoneTheme::Reef => Color::srgb(0.08, 0.16, 0.26),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ZoneBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct EnemyPlacement {
    pub position: Vec2,
    pub archetype: EnemyArchetype,
    pub aggro_radius: f32,
    /// Waypoints for patrolling placements; stationary otherwise.
    pub patrol: Option<Vec<Vec2>>,
}

impl EnemyPlacement {
    pub fn stationary(position: Vec2, archetype: EnemyArchetype, aggro_radius: f32) -> Self {
        Self {
            position,
            archetype,
            aggro_radius,
            patrol: None,
        }
    }

    pub fn patrolling(
        position: Vec2,
        archetype: EnemyArchetype,
        aggro_radius: f32,
        waypoints: Vec<Vec2>,
    ) -> Self {
        Self {
            position,
            archetype,
            aggro_radius,
            patrol: Some(waypoints),
        }
    }

    pub fn initial_phase(&self) -> AggroPhase {
        if self.patrol.is_some() {
            AggroPhase::Patrolling
        } else {
            AggroPhase::Stationary
        }
    }
}

#[derive(Debug, Clone)]
pub struct PropPlacement {
    pub position: Vec2,
    pub kind: PropKind,
}

#[derive(Debug, Clone)]
pub struct BossZoneConfig {
    pub kind: &'static str,
    pub name: &'static str,
    /// Arena center; the boss spawns here when the fight starts.
    pub position: Vec2,
    pub health: f32,
    pub arena_radius: f32,
    pub unlock_character: &'static str,
    pub phases: Vec<BossPhaseDef>,
}

impl BossZoneConfig {
    /// The boss-fight trigger rule: the player crossing into the arena.
    pub fn arena_contains(&self, point: Vec2) -> bool {
        self.position.distance(point) <= self.arena_radius
    }
}

#[derive(Debug, Clone)]
pub struct ZoneDef {
    pub id: &'static str,
    pub name: &'static str,
    pub bounds: ZoneBounds,
    pub theme: ZoneTheme,
    pub enemy_placements: Vec<EnemyPlacement>,
    pub prop_placements: Vec<PropPlacement>,
    pub boss: Option<BossZoneConfig>,
    /// Declared prerequisite characters. Progression currently unlocks by
    /// catalog order; this stays authored data.
    pub required_characters: Vec<&'static str>,
    pub unlocked: bool,
}
