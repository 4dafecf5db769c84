//! Player domain: the externally-driven player surface the simulation reads.
//!
//! Input handling and character animation live outside the core; this module
//! keeps just enough of a player (position, combat stats, a kick key) for
//! the encounter systems to run against.

mod components;
mod systems;

pub use components::{GameLayer, Player, PlayerStats};

use bevy::prelude::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerStats>()
            .add_systems(Startup, systems::spawn_player)
            .add_systems(Update, systems::read_kick_input);
    }
}
