//! Debug hotkeys for fast iteration (dev-tools feature).
//!
//! - Ctrl+B: damage the active boss
//! - Ctrl+K: kick the nearest prop away from the player
//! - Ctrl+N: unlock and load the next zone in the catalog
//! - Ctrl+R: reset the encounter
//! - F2: dump encounter state to the log

mod systems;

use bevy::prelude::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, systems::handle_debug_hotkeys);
    }
}
