//! Combat domain: boss attack identifiers and step scripts.
//!
//! Each ability expands to a short script of timed steps executed on the
//! fixed tick. The simulation-relevant contract is the dash impulse and the
//! blast timing; everything visual hangs off the telegraph step.

use std::f32::consts::TAU;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossAttackId {
    ChargeAttack,
    IceDash,
    ChargeSlam,
    BombBarrage,
    MegaBomb,
    MegaFreeze,
    TripleDash,
    SummonSwarm,
    FreezeWave,
}

/// Where a blast centers itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlastAnchor {
    /// The boss's position when the step fires.
    Boss,
    /// The player position snapshotted at attack start.
    Target,
}

#[derive(Debug, Clone)]
pub enum AttackStep {
    /// Warning window before anything mechanical happens.
    Telegraph { secs: f32 },
    /// Velocity impulse toward the snapshotted target, held for the duration
    /// then cleared.
    Dash { speed_mult: f32, secs: f32 },
    /// Instant area-damage hitbox.
    Blast {
        radius: f32,
        damage: f32,
        anchor: BlastAnchor,
        offset: Vec2,
    },
    /// Pause between steps.
    Wait { secs: f32 },
    /// Flavor only - logged, no mechanical effect.
    Shout { line: &'static str },
}

impl AttackStep {
    pub fn duration(&self) -> f32 {
        match self {
            AttackStep::Telegraph { secs }
            | AttackStep::Dash { secs, .. }
            | AttackStep::Wait { secs } => *secs,
            AttackStep::Blast { .. } | AttackStep::Shout { .. } => 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AttackSequence {
    pub name: &'static str,
    pub steps: Vec<AttackStep>,
}

pub const TELEGRAPH_SECS: f32 = 1.0;
pub const DASH_SECS: f32 = 0.5;
pub const DASH_SPEED_MULT: f32 = 3.0;
/// Gap between the dashes of a triple dash: dash starts land 0.8 s apart.
const DASH_GAP_SECS: f32 = 0.3;
const BARRAGE_BLASTS: usize = 5;
const BARRAGE_STAGGER_SECS: f32 = 0.3;
const BARRAGE_RING_RADIUS: f32 = 80.0;

fn dash() -> AttackStep {
    AttackStep::Dash {
        speed_mult: DASH_SPEED_MULT,
        secs: DASH_SECS,
    }
}

/// Pentagon point around the barrage center.
fn barrage_offset(index: usize) -> Vec2 {
    let angle = TAU * index as f32 / BARRAGE_BLASTS as f32;
    Vec2::from_angle(angle) * BARRAGE_RING_RADIUS
}

impl BossAttackId {
    pub fn sequence(&self) -> AttackSequence {
        match self {
            BossAttackId::ChargeAttack => AttackSequence {
                name: "charge",
                steps: vec![
                    AttackStep::Telegraph {
                        secs: TELEGRAPH_SECS,
                    },
                    dash(),
                ],
            },
            BossAttackId::IceDash => AttackSequence {
                name: "ice dash",
                steps: vec![
                    AttackStep::Telegraph {
                        secs: TELEGRAPH_SECS,
                    },
                    dash(),
                ],
            },
            BossAttackId::ChargeSlam => AttackSequence {
                name: "charge slam",
                steps: vec![
                    AttackStep::Telegraph {
                        secs: TELEGRAPH_SECS,
                    },
                    dash(),
                    AttackStep::Wait { secs: 0.2 },
                    AttackStep::Blast {
                        radius: 90.0,
                        damage: 25.0,
                        anchor: BlastAnchor::Boss,
                        offset: Vec2::ZERO,
                    },
                ],
            },
            BossAttackId::BombBarrage => {
                let mut steps = Vec::with_capacity(BARRAGE_BLASTS * 2 + 1);
                steps.push(AttackStep::Telegraph { secs: 0.4 });
                for index in 0..BARRAGE_BLASTS {
                    steps.push(AttackStep::Blast {
                        radius: 60.0,
                        damage: 15.0,
                        anchor: BlastAnchor::Target,
                        offset: barrage_offset(index),
                    });
                    steps.push(AttackStep::Wait {
                        secs: BARRAGE_STAGGER_SECS,
                    });
                }
                AttackSequence {
                    name: "bomb barrage",
                    steps,
                }
            }
            BossAttackId::MegaBomb => AttackSequence {
                name: "mega bomb",
                steps: vec![
                    AttackStep::Telegraph { secs: 0.8 },
                    AttackStep::Blast {
                        radius: 150.0,
                        damage: 40.0,
                        anchor: BlastAnchor::Target,
                        offset: Vec2::ZERO,
                    },
                ],
            },
            BossAttackId::MegaFreeze => AttackSequence {
                name: "mega freeze",
                steps: vec![
                    AttackStep::Telegraph { secs: 0.8 },
                    AttackStep::Blast {
                        radius: 150.0,
                        damage: 30.0,
                        anchor: BlastAnchor::Target,
                        offset: Vec2::ZERO,
                    },
                ],
            },
            BossAttackId::TripleDash => AttackSequence {
                name: "triple dash",
                steps: vec![
                    AttackStep::Telegraph {
                        secs: TELEGRAPH_SECS,
                    },
                    dash(),
                    AttackStep::Wait {
                        secs: DASH_GAP_SECS,
                    },
                    dash(),
                    AttackStep::Wait {
                        secs: DASH_GAP_SECS,
                    },
                    dash(),
                ],
            },
            // Summoning and crowd-control effects are out of scope; the
            // abilities exist so phase lists can reference them.
            BossAttackId::SummonSwarm => AttackSequence {
                name: "summon swarm",
                steps: vec![AttackStep::Shout {
                    line: "the swarm stirs, but nothing answers",
                }],
            },
            BossAttackId::FreezeWave => AttackSequence {
                name: "freeze wave",
                steps: vec![AttackStep::Shout {
                    line: "a cold front rolls through the arena",
                }],
            },
        }
    }
}
