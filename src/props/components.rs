//! Props domain: kickable prop state and per-type constants.

use std::collections::VecDeque;

use bevy::prelude::*;

/// Speed below which a flying prop settles.
pub const STOP_SPEED: f32 = 20.0;
/// Impacts slower than this end the flight outright.
pub const IMPACT_STOP_SPEED: f32 = 50.0;
/// Damage a prop deals to itself when it strikes an enemy.
pub const IMPACT_SELF_DAMAGE: f32 = 5.0;
/// Velocity retained after striking an enemy.
pub const IMPACT_VELOCITY_DECAY: f32 = 0.7;

#[derive(Debug, Clone, Copy)]
pub struct PropStats {
    pub weight: f32,
    pub health: f32,
    pub damage: f32,
    pub knockback_mult: f32,
    pub bounce_decay: f32,
    pub radius: f32,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    Barrel,
    Box,
    Stone,
    Log,
}

impl PropKind {
    /// Per-type constants. Weights, healths, and damages are deliberately
    /// distinct so prop choice matters.
    pub fn stats(&self) -> PropStats {
        match self {
            PropKind::Box => PropStats {
                weight: 20.0,
                health: 30.0,
                damage: 10.0,
                knockback_mult: 0.8,
                bounce_decay: 0.94,
                radius: 14.0,
            },
            PropKind::Barrel => PropStats {
                weight: 40.0,
                health: 50.0,
                damage: 15.0,
                knockback_mult: 1.0,
                bounce_decay: 0.95,
                radius: 16.0,
            },
            PropKind::Log => PropStats {
                weight: 60.0,
                health: 80.0,
                damage: 20.0,
                knockback_mult: 1.2,
                bounce_decay: 0.96,
                radius: 18.0,
            },
            PropKind::Stone => PropStats {
                weight: 80.0,
                health: 120.0,
                damage: 25.0,
                knockback_mult: 1.5,
                bounce_decay: 0.97,
                radius: 15.0,
            },
        }
    }

    pub fn color(&self) -> Color {
        match self {
            PropKind::Barrel => Color::srgb(0.55, 0.35, 0.2),
            PropKind::Box => Color::srgb(0.75, 0.6, 0.35),
            PropKind::Stone => Color::srgb(0.5, 0.5, 0.55),
            PropKind::Log => Color::srgb(0.45, 0.3, 0.15),
        }
    }
}

/// Runtime state of a kickable prop. Flight uses its own velocity rather than
/// the physics engine - props are projectiles with bespoke decay, not bodies.
#[derive(Component, Debug, Clone)]
pub struct Kickable {
    pub kind: PropKind,
    pub velocity: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub weight: f32,
    pub bounce_decay: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub hitbox_radius: f32,
    pub is_flying: bool,
    pub is_broken: bool,
    /// Enemies already struck during the current flight.
    pub recently_hit: Vec<Entity>,
}

impl Kickable {
    pub fn new(kind: PropKind) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            velocity: Vec2::ZERO,
            health: stats.health,
            max_health: stats.health,
            weight: stats.weight,
            bounce_decay: stats.bounce_decay,
            rotation: 0.0,
            rotation_speed: 0.0,
            hitbox_radius: stats.radius,
            is_flying: false,
            is_broken: false,
            recently_hit: Vec::new(),
        }
    }

    /// Launch the prop. The velocity is set exactly (not accumulated): a
    /// lighter prop flies faster for the same force, and a zero force still
    /// flags the prop as flying.
    pub fn apply_kick(&mut self, force: Vec2, kick_force: f32, spin: f32) {
        if self.is_broken {
            return;
        }
        let weight_factor = 100.0 / self.weight;
        self.velocity = force * weight_factor * (kick_force / 100.0);
        self.is_flying = true;
        self.rotation_speed = spin;
        self.recently_hit.clear();
    }

    /// Strike an enemy mid-flight. Returns the damage to deal and the
    /// knockback (half the prop's velocity) for the enemy's knockback
    /// receiver, or zeroes when the prop is inert.
    pub fn hit_enemy(&mut self) -> (f32, Vec2) {
        if self.is_broken || !self.is_flying {
            return (0.0, Vec2::ZERO);
        }
        let damage = self.kind.stats().damage;

        self.take_damage(IMPACT_SELF_DAMAGE);
        let impact_speed = self.velocity.length();
        let knockback = self.velocity * 0.5;

        if !self.is_broken {
            self.velocity *= IMPACT_VELOCITY_DECAY;
            if impact_speed < IMPACT_STOP_SPEED {
                self.stop();
            }
        }
        (damage, knockback)
    }

    /// Returns `true` when this call broke the prop. Breaking is one-way:
    /// repeated lethal damage after the break is a no-op.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.is_broken {
            return false;
        }
        self.health -= amount;
        if self.health <= 0.0 {
            self.break_apart();
            return true;
        }
        false
    }

    fn break_apart(&mut self) {
        self.is_broken = true;
        self.stop();
    }

    fn stop(&mut self) {
        self.is_flying = false;
        self.velocity = Vec2::ZERO;
        self.rotation_speed = 0.0;
        self.recently_hit.clear();
    }

    /// Advance flight by one tick, returning the positional displacement.
    /// Velocity decays multiplicatively each tick until the prop settles.
    pub fn step(&mut self, dt: f32) -> Vec2 {
        if self.is_broken || !self.is_flying {
            return Vec2::ZERO;
        }
        let displacement = self.velocity * dt;
        self.rotation += self.rotation_speed;
        self.velocity *= self.bounce_decay;
        if self.velocity.length() < STOP_SPEED {
            self.stop();
        }
        displacement
    }
}

pub const TRAIL_LEN: usize = 10;

/// Recent positions for the motion trail, newest first. Rendering fades each
/// sample by its age.
#[derive(Component, Debug, Default)]
pub struct PropTrail {
    pub points: VecDeque<Vec2>,
}

impl PropTrail {
    pub fn record(&mut self, position: Vec2) {
        self.points.push_front(position);
        self.points.truncate(TRAIL_LEN);
    }

    pub fn opacity(&self, index: usize) -> f32 {
        1.0 - index as f32 / TRAIL_LEN as f32
    }
}

/// Bundle for spawning a zone prop.
#[derive(Bundle)]
pub struct PropBundle {
    pub kickable: Kickable,
    pub trail: PropTrail,
    pub sprite: Sprite,
    pub transform: Transform,
}

impl PropBundle {
    pub fn new(kind: PropKind, position: Vec2) -> Self {
        let stats = kind.stats();
        Self {
            kickable: Kickable::new(kind),
            trail: PropTrail::default(),
            sprite: Sprite {
                color: kind.color(),
                custom_size: Some(Vec2::splat(stats.radius * 2.0)),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
        }
    }
}
