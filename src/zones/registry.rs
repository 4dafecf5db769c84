//! Zones domain: the embedded zone catalog and lookup helpers.

use bevy::prelude::*;

use crate::combat::{BossAttackId, BossPhaseDef, EnemyArchetype, MovementPattern};
use crate::props::PropKind;
use crate::zones::data::{
    BossZoneConfig, EnemyPlacement, PropPlacement, ZoneBounds, ZoneDef, ZoneTheme,
};

/// Zone catalog. Constructed once at startup; only `unlocked` flags mutate
/// over a session.
#[derive(Resource, Debug, Default)]
pub struct ZoneRegistry {
    pub zones: Vec<ZoneDef>,
}

impl ZoneRegistry {
    pub fn get(&self, zone_id: &str) -> Option<&ZoneDef> {
        self.zones.iter().find(|zone| zone.id == zone_id)
    }

    pub fn available_zones(&self) -> Vec<&ZoneDef> {
        self.zones.iter().filter(|zone| zone.unlocked).collect()
    }

    /// Flip a zone to unlocked. Returns `true` only on the locked-to-unlocked
    /// transition; repeating the unlock is a quiet no-op, an unknown id a
    /// logged one.
    pub fn unlock(&mut self, zone_id: &str) -> bool {
        let Some(zone) = self.zones.iter_mut().find(|zone| zone.id == zone_id) else {
            warn!("Cannot unlock unknown zone '{}'", zone_id);
            return false;
        };
        if zone.unlocked {
            return false;
        }
        zone.unlocked = true;
        true
    }

    /// The zone after `zone_id` in catalog order, if any.
    pub fn next_in_catalog(&self, zone_id: &str) -> Option<&'static str> {
        let index = self.zones.iter().position(|zone| zone.id == zone_id)?;
        self.zones.get(index + 1).map(|zone| zone.id)
    }
}

pub(crate) fn setup_zone_registry(mut registry: ResMut<ZoneRegistry>) {
    registry.zones = builtin_zones();
    info!("Zone catalog ready: {} zones", registry.zones.len());
}

/// The shipped content set.
pub(crate) fn builtin_zones() -> Vec<ZoneDef> {
    vec![
        ZoneDef {
            id: "tutorial-grove",
            name: "Tutorial Grove",
            bounds: ZoneBounds {
                x: 0.0,
                y: 0.0,
                width: 1200.0,
                height: 800.0,
            },
            theme: ZoneTheme::Grove,
            enemy_placements: vec![
                EnemyPlacement::stationary(Vec2::new(200.0, 150.0), EnemyArchetype::Grunt, 120.0),
                EnemyPlacement::patrolling(
                    Vec2::new(350.0, 420.0),
                    EnemyArchetype::Grunt,
                    120.0,
                    vec![
                        Vec2::new(350.0, 420.0),
                        Vec2::new(520.0, 420.0),
                        Vec2::new(520.0, 300.0),
                    ],
                ),
                EnemyPlacement::stationary(Vec2::new(600.0, 200.0), EnemyArchetype::Grunt, 140.0),
                EnemyPlacement::patrolling(
                    Vec2::new(640.0, 460.0),
                    EnemyArchetype::Elite,
                    160.0,
                    vec![Vec2::new(640.0, 460.0), Vec2::new(760.0, 380.0)],
                ),
                EnemyPlacement::stationary(Vec2::new(450.0, 600.0), EnemyArchetype::Tank, 100.0),
            ],
            prop_placements: vec![
                PropPlacement {
                    position: Vec2::new(260.0, 300.0),
                    kind: PropKind::Barrel,
                },
                PropPlacement {
                    position: Vec2::new(420.0, 250.0),
                    kind: PropKind::Box,
                },
                PropPlacement {
                    position: Vec2::new(700.0, 520.0),
                    kind: PropKind::Stone,
                },
            ],
            boss: Some(BossZoneConfig {
                kind: "swarm-king",
                name: "Swarm King",
                position: Vec2::new(900.0, 600.0),
                health: 500.0,
                arena_radius: 200.0,
                unlock_character: "chimpanzini-bananini",
                phases: vec![
                    BossPhaseDef {
                        health_threshold: 1.0,
                        abilities: vec![BossAttackId::ChargeAttack, BossAttackId::SummonSwarm],
                        movement: MovementPattern::Chase,
                    },
                    BossPhaseDef {
                        health_threshold: 0.6,
                        abilities: vec![BossAttackId::ChargeAttack, BossAttackId::ChargeSlam],
                        movement: MovementPattern::Aggressive,
                    },
                    BossPhaseDef {
                        health_threshold: 0.3,
                        abilities: vec![BossAttackId::TripleDash, BossAttackId::ChargeSlam],
                        movement: MovementPattern::Berserker,
                    },
                ],
            }),
            required_characters: vec![],
            unlocked: true,
        },
        ZoneDef {
            id: "scorched-dunes",
            name: "Scorched Dunes",
            bounds: ZoneBounds {
                x: 0.0,
                y: 0.0,
                width: 1400.0,
                height: 900.0,
            },
            theme: ZoneTheme::Dunes,
            enemy_placements: vec![
                EnemyPlacement::stationary(Vec2::new(220.0, 240.0), EnemyArchetype::Grunt, 130.0),
                EnemyPlacement::stationary(Vec2::new(520.0, 180.0), EnemyArchetype::Grunt, 130.0),
                EnemyPlacement::patrolling(
                    Vec2::new(400.0, 520.0),
                    EnemyArchetype::Elite,
                    150.0,
                    vec![
                        Vec2::new(400.0, 520.0),
                        Vec2::new(620.0, 520.0),
                        Vec2::new(620.0, 680.0),
                        Vec2::new(400.0, 680.0),
                    ],
                ),
                EnemyPlacement::stationary(Vec2::new(760.0, 300.0), EnemyArchetype::Tank, 110.0),
                EnemyPlacement::patrolling(
                    Vec2::new(880.0, 640.0),
                    EnemyArchetype::Elite,
                    160.0,
                    vec![Vec2::new(880.0, 640.0), Vec2::new(1020.0, 520.0)],
                ),
                EnemyPlacement::stationary(Vec2::new(640.0, 420.0), EnemyArchetype::Grunt, 140.0),
            ],
            prop_placements: vec![
                PropPlacement {
                    position: Vec2::new(340.0, 340.0),
                    kind: PropKind::Stone,
                },
                PropPlacement {
                    position: Vec2::new(560.0, 260.0),
                    kind: PropKind::Box,
                },
                PropPlacement {
                    position: Vec2::new(820.0, 460.0),
                    kind: PropKind::Barrel,
                },
                PropPlacement {
                    position: Vec2::new(1000.0, 700.0),
                    kind: PropKind::Log,
                },
            ],
            boss: Some(BossZoneConfig {
                kind: "desert-bomber",
                name: "Desert Bomber",
                position: Vec2::new(1100.0, 500.0),
                health: 800.0,
                arena_radius: 220.0,
                unlock_character: "bombardiro-crocodilo",
                phases: vec![
                    BossPhaseDef {
                        health_threshold: 1.0,
                        abilities: vec![BossAttackId::BombBarrage],
                        movement: MovementPattern::Circle,
                    },
                    BossPhaseDef {
                        health_threshold: 0.55,
                        abilities: vec![BossAttackId::BombBarrage, BossAttackId::MegaBomb],
                        movement: MovementPattern::Aggressive,
                    },
                    BossPhaseDef {
                        health_threshold: 0.25,
                        abilities: vec![BossAttackId::MegaBomb, BossAttackId::ChargeSlam],
                        movement: MovementPattern::Frenzy,
                    },
                ],
            }),
            required_characters: vec!["chimpanzini-bananini"],
            unlocked: false,
        },
        ZoneDef {
            id: "frozen-reef",
            name: "Frozen Reef",
            bounds: ZoneBounds {
                x: 0.0,
                y: 0.0,
                width: 1400.0,
                height: 1000.0,
            },
            theme: ZoneTheme::Reef,
            enemy_placements: vec![
                EnemyPlacement::stationary(Vec2::new(260.0, 220.0), EnemyArchetype::Grunt, 140.0),
                EnemyPlacement::patrolling(
                    Vec2::new(480.0, 380.0),
                    EnemyArchetype::Elite,
                    150.0,
                    vec![
                        Vec2::new(480.0, 380.0),
                        Vec2::new(480.0, 560.0),
                        Vec2::new(660.0, 560.0),
                    ],
                ),
                EnemyPlacement::stationary(Vec2::new(720.0, 260.0), EnemyArchetype::Elite, 150.0),
                EnemyPlacement::patrolling(
                    Vec2::new(560.0, 760.0),
                    EnemyArchetype::Tank,
                    120.0,
                    vec![Vec2::new(560.0, 760.0), Vec2::new(760.0, 760.0)],
                ),
                EnemyPlacement::stationary(Vec2::new(900.0, 420.0), EnemyArchetype::Grunt, 140.0),
                EnemyPlacement::stationary(Vec2::new(340.0, 620.0), EnemyArchetype::Grunt, 130.0),
            ],
            prop_placements: vec![
                PropPlacement {
                    position: Vec2::new(300.0, 420.0),
                    kind: PropKind::Box,
                },
                PropPlacement {
                    position: Vec2::new(620.0, 340.0),
                    kind: PropKind::Log,
                },
                PropPlacement {
                    position: Vec2::new(840.0, 620.0),
                    kind: PropKind::Stone,
                },
            ],
            boss: Some(BossZoneConfig {
                kind: "ice-shark",
                name: "Ice Shark",
                position: Vec2::new(800.0, 800.0),
                health: 1000.0,
                arena_radius: 240.0,
                unlock_character: "tralalero-tralala",
                phases: vec![
                    BossPhaseDef {
                        health_threshold: 1.0,
                        abilities: vec![BossAttackId::IceDash],
                        movement: MovementPattern::Swimming,
                    },
                    BossPhaseDef {
                        health_threshold: 0.5,
                        abilities: vec![BossAttackId::IceDash, BossAttackId::FreezeWave],
                        movement: MovementPattern::AggressiveSwim,
                    },
                    BossPhaseDef {
                        health_threshold: 0.2,
                        abilities: vec![BossAttackId::MegaFreeze, BossAttackId::TripleDash],
                        movement: MovementPattern::Frenzy,
                    },
                ],
            }),
            required_characters: vec!["bombardiro-crocodilo"],
            unlocked: false,
        },
    ]
}
