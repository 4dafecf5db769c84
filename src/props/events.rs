//! Props domain: kick and breakage events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::props::components::PropKind;

/// Request from the kick/weapon layer to launch a prop.
#[derive(Debug)]
pub struct KickEvent {
    pub prop: Entity,
    pub force: Vec2,
}

impl Message for KickEvent {}

#[derive(Debug)]
pub struct PropBrokenEvent {
    pub prop: Entity,
    pub kind: PropKind,
}

impl Message for PropBrokenEvent {}
