//! Core domain: progression events.

use bevy::ecs::message::Message;

/// Emitted when a boss defeat unlocks a playable character.
/// Consumed by the (out-of-core) notification UI.
#[derive(Debug)]
pub struct CharacterUnlockedEvent {
    pub character_id: String,
}

impl Message for CharacterUnlockedEvent {}
