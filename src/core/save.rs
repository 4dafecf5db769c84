//! Core domain: playable character roster and the persisted save shape.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Character every session starts with.
pub const STARTING_CHARACTER: &str = "bro-fist";

/// Persisted progression shape. The storage mechanism (localStorage, file,
/// whatever the shell provides) lives outside the simulation; only the JSON
/// shape is owned here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub unlocked_characters: Vec<String>,
    pub current_character: String,
}

#[derive(Debug, Clone)]
pub struct CharacterInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Boss kind whose defeat unlocks this character, if any.
    pub unlocked_by_boss: Option<&'static str>,
}

/// Playable character catalog plus unlock state. Inserted explicitly at app
/// construction and passed to systems as a resource parameter; nothing in the
/// simulation reaches for a global.
#[derive(Resource, Debug)]
pub struct CharacterRoster {
    characters: Vec<CharacterInfo>,
    unlocked: HashSet<String>,
    current: String,
}

impl Default for CharacterRoster {
    fn default() -> Self {
        let characters = vec![
            CharacterInfo {
                id: STARTING_CHARACTER,
                name: "Bro Fist",
                unlocked_by_boss: None,
            },
            CharacterInfo {
                id: "chimpanzini-bananini",
                name: "Chimpanzini Bananini",
                unlocked_by_boss: Some("swarm-king"),
            },
            CharacterInfo {
                id: "bombardiro-crocodilo",
                name: "Bombardiro Crocodilo",
                unlocked_by_boss: Some("desert-bomber"),
            },
            CharacterInfo {
                id: "tralalero-tralala",
                name: "Tralalero Tralala",
                unlocked_by_boss: Some("ice-shark"),
            },
        ];

        let mut unlocked = HashSet::new();
        unlocked.insert(STARTING_CHARACTER.to_string());

        Self {
            characters,
            unlocked,
            current: STARTING_CHARACTER.to_string(),
        }
    }
}

impl CharacterRoster {
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_unlocked(&self, character_id: &str) -> bool {
        self.unlocked.contains(character_id)
    }

    pub fn characters(&self) -> &[CharacterInfo] {
        &self.characters
    }

    fn contains(&self, character_id: &str) -> bool {
        self.characters.iter().any(|c| c.id == character_id)
    }

    /// The character a given boss kind unlocks, if the mapping exists.
    pub fn character_for_boss(&self, boss_kind: &str) -> Option<&'static str> {
        self.characters
            .iter()
            .find(|c| c.unlocked_by_boss == Some(boss_kind))
            .map(|c| c.id)
    }

    /// Switch the current character. No-op with a warning when the target is
    /// unknown or still locked.
    pub fn select(&mut self, character_id: &str) {
        if !self.is_unlocked(character_id) {
            warn!("Cannot select locked or unknown character '{}'", character_id);
            return;
        }
        self.current = character_id.to_string();
    }

    /// Unlock the character mapped to a boss kind. Returns `true` on success
    /// (including when the character was already unlocked); an unknown boss
    /// kind is a logged no-op returning `false`.
    pub fn unlock_for_boss(&mut self, boss_kind: &str) -> bool {
        let Some(character_id) = self.character_for_boss(boss_kind) else {
            warn!("No character unlock mapped to boss kind '{}'", boss_kind);
            return false;
        };
        if self.unlocked.insert(character_id.to_string()) {
            info!("Character '{}' unlocked by defeating '{}'", character_id, boss_kind);
        }
        true
    }

    /// Apply a persisted save. Malformed JSON returns `false` without touching
    /// any state. A saved current character that is unknown or not in the
    /// unlocked set keeps the prior current character.
    pub fn apply_save(&mut self, json: &str) -> bool {
        let save: SaveData = match serde_json::from_str(json) {
            Ok(save) => save,
            Err(err) => {
                warn!("Ignoring malformed save data: {}", err);
                return false;
            }
        };

        for character_id in &save.unlocked_characters {
            if self.contains(character_id) {
                self.unlocked.insert(character_id.clone());
            } else {
                warn!("Save references unknown character '{}'", character_id);
            }
        }

        if self.is_unlocked(&save.current_character) {
            self.current = save.current_character;
        } else {
            warn!(
                "Save selects locked character '{}'; keeping '{}'",
                save.current_character, self.current
            );
        }
        true
    }

    pub fn to_save(&self) -> SaveData {
        let mut unlocked_characters: Vec<String> = self.unlocked.iter().cloned().collect();
        unlocked_characters.sort();
        SaveData {
            unlocked_characters,
            current_character: self.current.clone(),
        }
    }
}
