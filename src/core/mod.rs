//! Core domain: session configuration, character roster, and save data.

mod events;
mod resources;
mod save;
#[cfg(test)]
mod tests;

pub use events::CharacterUnlockedEvent;
pub use resources::{SessionConfig, SimRng};
pub use save::{CharacterRoster, SaveData, STARTING_CHARACTER};

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionConfig>()
            .init_resource::<SimRng>()
            .init_resource::<CharacterRoster>()
            .add_message::<CharacterUnlockedEvent>()
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
