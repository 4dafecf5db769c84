//! Zones domain: zone lifecycle events.

use bevy::ecs::message::Message;

/// Request to make a zone the active one.
#[derive(Debug)]
pub struct LoadZoneEvent {
    pub zone_id: String,
}

impl Message for LoadZoneEvent {}

#[derive(Debug)]
pub struct ZoneLoadedEvent {
    pub zone_id: String,
}

impl Message for ZoneLoadedEvent {}

/// Request to flip a zone's unlock flag.
#[derive(Debug)]
pub struct UnlockZoneEvent {
    pub zone_id: String,
}

impl Message for UnlockZoneEvent {}

#[derive(Debug)]
pub struct ZoneUnlockedEvent {
    pub zone_id: String,
}

impl Message for ZoneUnlockedEvent {}

/// Tear down the running encounter unconditionally. Unlock flags survive.
#[derive(Debug)]
pub struct ResetEncounterEvent;

impl Message for ResetEncounterEvent {}
