//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    pub knockback: Vec2,
}

impl Message for DamageEvent {}

#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}

#[derive(Debug)]
pub struct BossFightStartedEvent {
    pub boss: Entity,
    pub kind: String,
}

impl Message for BossFightStartedEvent {}

#[derive(Debug)]
pub struct BossPhaseChangedEvent {
    pub boss: Entity,
    pub phase_index: usize,
}

impl Message for BossPhaseChangedEvent {}

/// Emitted exactly once per boss, when its health first reaches zero and the
/// death animation begins. The zone systems drive the unlock cascade off this.
#[derive(Debug)]
pub struct BossDefeatedEvent {
    pub boss: Entity,
    pub kind: String,
}

impl Message for BossDefeatedEvent {}
