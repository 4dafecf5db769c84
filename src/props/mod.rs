//! Props domain: destructible, kickable zone objects.

mod components;
mod events;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Kickable, PropBundle, PropKind, PropStats, PropTrail};
pub use events::{KickEvent, PropBrokenEvent};

use bevy::prelude::*;

pub struct PropsPlugin;

impl Plugin for PropsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<KickEvent>()
            .add_message::<PropBrokenEvent>()
            .add_systems(Update, systems::apply_kicks)
            .add_systems(
                FixedUpdate,
                (systems::step_props, systems::resolve_prop_impacts).chain(),
            );
    }
}
