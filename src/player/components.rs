//! Player domain: marker components, physics layers, and kick stats.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Player character
    Player,
    /// Enemy characters and bosses
    Enemy,
    /// Boss attack hitboxes (damage the player)
    EnemyHitbox,
    /// Sensors and triggers
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Stats the kick system reads from the selected character.
#[derive(Resource, Debug, Clone)]
pub struct PlayerStats {
    /// Kick strength on the 0-100 scale props expect.
    pub kick_force: f32,
    /// Maximum distance at which a prop can be kicked.
    pub kick_range: f32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            kick_force: 100.0,
            kick_range: 70.0,
        }
    }
}
