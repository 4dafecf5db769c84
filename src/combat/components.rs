//! Combat domain: components and combat-related state types.

use bevy::prelude::*;

use crate::combat::attacks::{AttackSequence, AttackStep, BossAttackId};

/// Marks an entity as a combat participant
#[derive(Component, Debug)]
pub struct Combatant;

/// Team affiliation to prevent friendly fire
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn fraction(&self) -> f32 {
        self.current / self.max
    }
}

/// Knockback recovery window - movement systems yield while staggered
#[derive(Component, Debug, Default)]
pub struct Stagger {
    pub timer: f32,
}

impl Stagger {
    pub fn is_staggered(&self) -> bool {
        self.timer > 0.0
    }
}

/// Death animation in progress. Distinct from dead: a dying entity still
/// occupies the zone until the sweep collects it.
#[derive(Component, Debug)]
pub struct Dying {
    pub timer: f32,
}

impl Dying {
    pub fn new() -> Self {
        Self {
            timer: DEATH_ANIM_SECS,
        }
    }

    pub fn finished(&self) -> bool {
        self.timer <= 0.0
    }
}

impl Default for Dying {
    fn default() -> Self {
        Self::new()
    }
}

pub const DEATH_ANIM_SECS: f32 = 0.45;

#[derive(Component, Debug)]
pub struct Enemy;

/// Enemy body archetype - determines stats and the placeholder visual.
/// Bosses borrow one of these as their stand-in body.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyArchetype {
    #[default]
    Grunt,
    Elite,
    Tank,
}

impl EnemyArchetype {
    pub fn base_health(&self) -> f32 {
        match self {
            EnemyArchetype::Grunt => 30.0,
            EnemyArchetype::Elite => 60.0,
            EnemyArchetype::Tank => 120.0,
        }
    }

    pub fn speed_factor(&self) -> f32 {
        match self {
            EnemyArchetype::Grunt => 1.0,
            EnemyArchetype::Elite => 1.1,
            EnemyArchetype::Tank => 0.8,
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            EnemyArchetype::Grunt => 14.0,
            EnemyArchetype::Elite => 16.0,
            EnemyArchetype::Tank => 20.0,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            EnemyArchetype::Grunt => Color::srgb(0.8, 0.3, 0.3),
            EnemyArchetype::Elite => Color::srgb(0.7, 0.3, 0.8),
            EnemyArchetype::Tank => Color::srgb(0.9, 0.5, 0.2),
        }
    }
}

/// De-aggro only past this multiple of the aggro radius, so an enemy sitting
/// on the boundary cannot flicker in and out every tick.
pub const DEAGGRO_FACTOR: f32 = 1.5;

/// Radius around a waypoint that counts as arrival.
pub const WAYPOINT_RADIUS: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggroPhase {
    #[default]
    Stationary,
    Patrolling,
    Aggroed,
    /// Reserved: never produced by the current transition rules.
    Combat,
    /// Reserved: never produced by the current transition rules.
    Fleeing,
}

#[derive(Debug, Clone)]
pub struct PatrolRoute {
    pub waypoints: Vec<Vec2>,
    pub index: usize,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec2>) -> Self {
        Self {
            waypoints,
            index: 0,
        }
    }

    pub fn current(&self) -> Vec2 {
        self.waypoints[self.index]
    }

    /// Advance to the next waypoint, wrapping cyclically.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.waypoints.len();
    }
}

/// Per-enemy aggro state, owned by the encounter systems rather than smuggled
/// onto the enemy as loose fields.
#[derive(Component, Debug, Clone)]
pub struct AggroState {
    pub phase: AggroPhase,
    pub aggro_radius: f32,
    pub home: Vec2,
    pub patrol: Option<PatrolRoute>,
}

impl AggroState {
    pub fn stationary(aggro_radius: f32, home: Vec2) -> Self {
        Self {
            phase: AggroPhase::Stationary,
            aggro_radius,
            home,
            patrol: None,
        }
    }

    pub fn patrolling(aggro_radius: f32, home: Vec2, waypoints: Vec<Vec2>) -> Self {
        Self {
            phase: AggroPhase::Patrolling,
            aggro_radius,
            home,
            patrol: Some(PatrolRoute::new(waypoints)),
        }
    }

    pub fn is_aggroed(&self) -> bool {
        self.phase == AggroPhase::Aggroed
    }

    /// Pure transition rule: the phase to enter for the given player
    /// distance, or `None` when the state holds.
    pub fn evaluate(&self, distance: f32) -> Option<AggroPhase> {
        match self.phase {
            AggroPhase::Stationary | AggroPhase::Patrolling
                if distance <= self.aggro_radius =>
            {
                Some(AggroPhase::Aggroed)
            }
            AggroPhase::Aggroed if distance > self.aggro_radius * DEAGGRO_FACTOR => {
                Some(if self.patrol.is_some() {
                    AggroPhase::Patrolling
                } else {
                    AggroPhase::Stationary
                })
            }
            _ => None,
        }
    }
}

/// Movement pattern a boss phase runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPattern {
    Stationary,
    Circle,
    Chase,
    Aggressive,
    Berserker,
    Swimming,
    AggressiveSwim,
    Frenzy,
}

/// One boss phase: active while the health fraction is at or below its
/// threshold. Phase lists are authored with strictly decreasing thresholds,
/// the first always 1.0.
#[derive(Debug, Clone)]
pub struct BossPhaseDef {
    pub health_threshold: f32,
    pub abilities: Vec<BossAttackId>,
    pub movement: MovementPattern,
}

/// Authored phase list for a boss entity.
#[derive(Component, Debug, Clone)]
pub struct BossPhases(pub Vec<BossPhaseDef>);

/// Live boss state: current phase, attack timing, and movement scratch.
#[derive(Component, Debug)]
pub struct BossRuntime {
    pub kind: String,
    pub name: String,
    pub phase_index: usize,
    /// Counts down to the next attack opportunity.
    pub attack_timer: f32,
    pub attack_cooldown: f32,
    pub arena_center: Vec2,
    pub arena_radius: f32,
    pub base_speed: f32,
    pub speed_mult: f32,
    pub circle_angle: f32,
    pub swim_heading: Vec2,
    pub swim_timer: f32,
    pub is_charging: bool,
}

impl BossRuntime {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        arena_center: Vec2,
        arena_radius: f32,
        base_speed: f32,
        attack_cooldown: f32,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            phase_index: 0,
            attack_timer: attack_cooldown,
            attack_cooldown,
            arena_center,
            arena_radius,
            base_speed,
            speed_mult: 1.0,
            circle_angle: 0.0,
            swim_heading: Vec2::X,
            swim_timer: 0.0,
            is_charging: false,
        }
    }

    pub fn speed(&self) -> f32 {
        self.base_speed * self.speed_mult
    }

    /// Advance at most one phase for the current health fraction. Phases only
    /// ever move forward; a large health drop catches up over the next ticks
    /// because this runs every tick.
    pub fn advance_phase(
        &mut self,
        health_fraction: f32,
        phases: &[BossPhaseDef],
    ) -> Option<usize> {
        let next = self.phase_index + 1;
        let phase = phases.get(next)?;
        if health_fraction > phase.health_threshold {
            return None;
        }
        self.phase_index = next;
        match phase.movement {
            MovementPattern::Berserker => self.speed_mult *= 1.5,
            MovementPattern::Frenzy => self.attack_cooldown *= 0.5,
            _ => {}
        }
        Some(next)
    }
}

/// Attack script currently running on a boss. Stored on the entity so a
/// despawn or reset drops the script with it - nothing can fire against a
/// boss that no longer exists.
#[derive(Component, Debug)]
pub struct ActiveAttack {
    pub id: BossAttackId,
    pub name: &'static str,
    pub steps: Vec<AttackStep>,
    pub step_index: usize,
    pub step_timer: f32,
    pub step_started: bool,
    /// Player position snapshotted when the attack began.
    pub target: Vec2,
    /// Direction of the dash in flight, fixed at dash start.
    pub dash_direction: Vec2,
}

impl ActiveAttack {
    pub fn new(id: BossAttackId, sequence: AttackSequence, target: Vec2) -> Self {
        Self {
            id,
            name: sequence.name,
            steps: sequence.steps,
            step_index: 0,
            step_timer: 0.0,
            step_started: false,
            target,
            dash_direction: Vec2::ZERO,
        }
    }

    pub fn current_step(&self) -> Option<&AttackStep> {
        self.steps.get(self.step_index)
    }
}

/// Hitbox - deals damage on contact with combatants of the other team
#[derive(Component, Debug)]
pub struct Hitbox {
    pub damage: f32,
    pub knockback: f32,
    pub owner: Entity,
    pub hit_entities: Vec<Entity>,
}

/// Entity lifetime for temporary hitboxes
#[derive(Component)]
pub struct HitboxLifetime(pub f32);

/// Visual telegraph indicator
#[derive(Component, Debug)]
pub struct TelegraphIndicator {
    pub timer: f32,
}
