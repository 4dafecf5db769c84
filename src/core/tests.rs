//! Core domain: tests for the character roster and save handling.

use super::save::{CharacterRoster, STARTING_CHARACTER};

// -----------------------------------------------------------------------------
// Roster defaults
// -----------------------------------------------------------------------------

#[test]
fn test_roster_starts_with_default_character() {
    let roster = CharacterRoster::default();
    assert_eq!(roster.current(), STARTING_CHARACTER);
    assert!(roster.is_unlocked(STARTING_CHARACTER));
    assert!(!roster.is_unlocked("chimpanzini-bananini"));
}

#[test]
fn test_boss_to_character_mapping() {
    let roster = CharacterRoster::default();
    assert_eq!(
        roster.character_for_boss("swarm-king"),
        Some("chimpanzini-bananini")
    );
    assert_eq!(
        roster.character_for_boss("desert-bomber"),
        Some("bombardiro-crocodilo")
    );
    assert_eq!(
        roster.character_for_boss("ice-shark"),
        Some("tralalero-tralala")
    );
    assert_eq!(roster.character_for_boss("slime-emperor"), None);
}

// -----------------------------------------------------------------------------
// Unlocking
// -----------------------------------------------------------------------------

#[test]
fn test_unlock_for_boss_is_idempotent() {
    let mut roster = CharacterRoster::default();
    assert!(roster.unlock_for_boss("swarm-king"));
    assert!(roster.is_unlocked("chimpanzini-bananini"));
    // A second defeat of the same boss is still a success, not a re-unlock.
    assert!(roster.unlock_for_boss("swarm-king"));
}

#[test]
fn test_unlock_for_unknown_boss_is_a_no_op() {
    let mut roster = CharacterRoster::default();
    assert!(!roster.unlock_for_boss("slime-emperor"));
    assert_eq!(roster.to_save().unlocked_characters.len(), 1);
}

#[test]
fn test_select_requires_unlock() {
    let mut roster = CharacterRoster::default();
    roster.select("chimpanzini-bananini");
    assert_eq!(roster.current(), STARTING_CHARACTER);

    roster.unlock_for_boss("swarm-king");
    roster.select("chimpanzini-bananini");
    assert_eq!(roster.current(), "chimpanzini-bananini");
}

// -----------------------------------------------------------------------------
// Save data
// -----------------------------------------------------------------------------

#[test]
fn test_apply_save_rejects_malformed_json() {
    let mut roster = CharacterRoster::default();
    assert!(!roster.apply_save("{not json"));
    assert!(!roster.apply_save(""));
    assert_eq!(roster.current(), STARTING_CHARACTER);
    assert_eq!(roster.to_save().unlocked_characters.len(), 1);
}

#[test]
fn test_apply_save_restores_unlocks() {
    let mut roster = CharacterRoster::default();
    let json = r#"{
        "unlocked_characters": ["bro-fist", "chimpanzini-bananini"],
        "current_character": "chimpanzini-bananini"
    }"#;
    assert!(roster.apply_save(json));
    assert!(roster.is_unlocked("chimpanzini-bananini"));
    assert_eq!(roster.current(), "chimpanzini-bananini");
}

#[test]
fn test_apply_save_keeps_current_when_selection_is_locked() {
    let mut roster = CharacterRoster::default();
    let json = r#"{
        "unlocked_characters": ["bro-fist"],
        "current_character": "tralalero-tralala"
    }"#;
    assert!(roster.apply_save(json));
    assert_eq!(roster.current(), STARTING_CHARACTER);
}

#[test]
fn test_apply_save_skips_unknown_characters() {
    let mut roster = CharacterRoster::default();
    let json = r#"{
        "unlocked_characters": ["bro-fist", "mystery-guest"],
        "current_character": "bro-fist"
    }"#;
    assert!(roster.apply_save(json));
    assert!(!roster.is_unlocked("mystery-guest"));
}

#[test]
fn test_save_round_trip() {
    let mut roster = CharacterRoster::default();
    roster.unlock_for_boss("swarm-king");
    roster.select("chimpanzini-bananini");

    let json = serde_json::to_string(&roster.to_save()).expect("save serializes");

    let mut restored = CharacterRoster::default();
    assert!(restored.apply_save(&json));
    assert_eq!(restored.current(), "chimpanzini-bananini");
    assert!(restored.is_unlocked("chimpanzini-bananini"));
}
