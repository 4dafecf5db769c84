//! Props domain: tests for the kickable prop model.

use bevy::prelude::*;

use super::components::{
    IMPACT_STOP_SPEED, Kickable, PropKind, PropTrail, STOP_SPEED, TRAIL_LEN,
};

// -----------------------------------------------------------------------------
// Per-type constants
// -----------------------------------------------------------------------------

#[test]
fn test_prop_stats_are_distinct_and_ordered() {
    // Ordered lightest to heaviest by design.
    let kinds = [PropKind::Box, PropKind::Barrel, PropKind::Log, PropKind::Stone];
    for pair in kinds.windows(2) {
        let lighter = pair[0].stats();
        let heavier = pair[1].stats();
        assert!(lighter.weight < heavier.weight);
        assert!(lighter.health < heavier.health);
        assert!(lighter.damage < heavier.damage);
        assert!(lighter.knockback_mult < heavier.knockback_mult);
    }
}

// -----------------------------------------------------------------------------
// Kicking
// -----------------------------------------------------------------------------

#[test]
fn test_new_props_start_intact() {
    let prop = Kickable::new(PropKind::Barrel);
    assert_eq!(prop.health, prop.max_health);
    assert!(!prop.is_flying);
    assert!(!prop.is_broken);
}

#[test]
fn test_lighter_props_fly_faster() {
    let mut light = Kickable::new(PropKind::Box);
    let mut heavy = Kickable::new(PropKind::Stone);
    let force = Vec2::new(100.0, 0.0);

    light.apply_kick(force, 100.0, 0.0);
    heavy.apply_kick(force, 100.0, 0.0);

    assert!(light.velocity.x > heavy.velocity.x);
    // Box: weight 20 -> factor 5. Stone: weight 80 -> factor 1.25.
    assert_eq!(light.velocity.x, 500.0);
    assert_eq!(heavy.velocity.x, 125.0);
}

#[test]
fn test_kick_sets_velocity_exactly_not_additively() {
    let mut prop = Kickable::new(PropKind::Barrel);
    prop.apply_kick(Vec2::new(100.0, 0.0), 100.0, 0.0);
    let first = prop.velocity;
    prop.apply_kick(Vec2::new(100.0, 0.0), 100.0, 0.0);
    assert_eq!(prop.velocity, first);
}

#[test]
fn test_kick_force_scales_with_character_strength() {
    let mut weak = Kickable::new(PropKind::Barrel);
    let mut strong = Kickable::new(PropKind::Barrel);
    weak.apply_kick(Vec2::X * 100.0, 50.0, 0.0);
    strong.apply_kick(Vec2::X * 100.0, 100.0, 0.0);
    assert_eq!(weak.velocity.x * 2.0, strong.velocity.x);
}

#[test]
fn test_zero_force_kick_still_starts_flight() {
    let mut prop = Kickable::new(PropKind::Box);
    prop.apply_kick(Vec2::ZERO, 100.0, 0.05);
    assert!(prop.is_flying);
    assert_eq!(prop.velocity, Vec2::ZERO);
}

#[test]
fn test_kick_on_broken_prop_is_a_no_op() {
    let mut prop = Kickable::new(PropKind::Box);
    prop.take_damage(1000.0);
    assert!(prop.is_broken);

    prop.apply_kick(Vec2::X * 100.0, 100.0, 0.0);
    assert!(!prop.is_flying);
    assert_eq!(prop.velocity, Vec2::ZERO);
}

// -----------------------------------------------------------------------------
// Hitting enemies
// -----------------------------------------------------------------------------

#[test]
fn test_hit_enemy_returns_fixed_damage_while_flying() {
    let mut prop = Kickable::new(PropKind::Barrel);
    prop.apply_kick(Vec2::X * 100.0, 100.0, 0.0);

    let (damage, knockback) = prop.hit_enemy();
    assert_eq!(damage, PropKind::Barrel.stats().damage);
    assert!(knockback.x > 0.0);
}

#[test]
fn test_hit_enemy_passes_half_velocity_as_knockback() {
    let mut prop = Kickable::new(PropKind::Stone);
    prop.apply_kick(Vec2::new(160.0, 0.0), 100.0, 0.0);
    let velocity_at_impact = prop.velocity;

    let (_, knockback) = prop.hit_enemy();
    assert_eq!(knockback, velocity_at_impact * 0.5);
}

#[test]
fn test_hit_enemy_decays_velocity() {
    let mut prop = Kickable::new(PropKind::Stone);
    prop.apply_kick(Vec2::new(160.0, 0.0), 100.0, 0.0);
    let before = prop.velocity.x;

    prop.hit_enemy();
    assert!(prop.is_flying);
    assert_eq!(prop.velocity.x, before * 0.7);
}

#[test]
fn test_slow_impact_ends_the_flight() {
    let mut prop = Kickable::new(PropKind::Stone);
    prop.apply_kick(Vec2::new(30.0, 0.0), 100.0, 0.0);
    assert!(prop.velocity.length() < IMPACT_STOP_SPEED);

    let (damage, _) = prop.hit_enemy();
    assert!(damage > 0.0);
    assert!(!prop.is_flying);
    assert_eq!(prop.velocity, Vec2::ZERO);
}

#[test]
fn test_hit_enemy_is_inert_when_not_flying_or_broken() {
    let mut idle = Kickable::new(PropKind::Log);
    assert_eq!(idle.hit_enemy(), (0.0, Vec2::ZERO));

    let mut broken = Kickable::new(PropKind::Log);
    broken.take_damage(1000.0);
    assert_eq!(broken.hit_enemy(), (0.0, Vec2::ZERO));
}

#[test]
fn test_repeated_impacts_break_the_prop() {
    let mut prop = Kickable::new(PropKind::Box);
    // Box health 30, each impact costs 5.
    for _ in 0..5 {
        prop.apply_kick(Vec2::X * 100.0, 100.0, 0.0);
        prop.hit_enemy();
        assert!(!prop.is_broken);
    }
    prop.apply_kick(Vec2::X * 100.0, 100.0, 0.0);
    prop.hit_enemy();
    assert!(prop.is_broken);
    assert!(!prop.is_flying);
}

// -----------------------------------------------------------------------------
// Breaking
// -----------------------------------------------------------------------------

#[test]
fn test_break_is_idempotent() {
    let mut prop = Kickable::new(PropKind::Barrel);
    prop.apply_kick(Vec2::X * 100.0, 100.0, 0.0);

    assert!(prop.take_damage(1000.0));
    assert!(prop.is_broken);
    assert!(!prop.is_flying);
    assert_eq!(prop.velocity, Vec2::ZERO);

    // A second lethal hit does not re-trigger the break.
    assert!(!prop.take_damage(1000.0));
}

#[test]
fn test_broken_implies_grounded_and_still() {
    let mut prop = Kickable::new(PropKind::Stone);
    prop.apply_kick(Vec2::new(300.0, 120.0), 100.0, 0.08);
    prop.take_damage(prop.health + 1.0);
    assert!(prop.is_broken);
    assert!(!prop.is_flying);
    assert_eq!(prop.velocity, Vec2::ZERO);
}

// -----------------------------------------------------------------------------
// Flight stepping
// -----------------------------------------------------------------------------

#[test]
fn test_step_integrates_and_decays() {
    let mut prop = Kickable::new(PropKind::Box);
    prop.apply_kick(Vec2::new(100.0, 0.0), 100.0, 0.0);
    let speed = prop.velocity.x;

    let displacement = prop.step(0.016);
    assert_eq!(displacement, Vec2::new(speed * 0.016, 0.0));
    assert_eq!(prop.velocity.x, speed * PropKind::Box.stats().bounce_decay);
}

#[test]
fn test_flight_settles_below_stop_speed() {
    let mut prop = Kickable::new(PropKind::Box);
    prop.apply_kick(Vec2::new(100.0, 0.0), 100.0, 0.02);

    let mut ticks = 0;
    while prop.is_flying {
        prop.step(0.016);
        ticks += 1;
        assert!(ticks < 1000, "prop never settled");
    }
    assert!(prop.velocity.length() < STOP_SPEED);
    assert_eq!(prop.velocity, Vec2::ZERO);
    assert_eq!(prop.rotation_speed, 0.0);
}

#[test]
fn test_step_is_a_no_op_when_idle_or_broken() {
    let mut idle = Kickable::new(PropKind::Log);
    assert_eq!(idle.step(0.016), Vec2::ZERO);

    let mut broken = Kickable::new(PropKind::Log);
    broken.take_damage(1000.0);
    assert_eq!(broken.step(0.016), Vec2::ZERO);
}

// -----------------------------------------------------------------------------
// Trail
// -----------------------------------------------------------------------------

#[test]
fn test_trail_is_a_bounded_ring() {
    let mut trail = PropTrail::default();
    for i in 0..(TRAIL_LEN + 5) {
        trail.record(Vec2::new(i as f32, 0.0));
    }
    assert_eq!(trail.points.len(), TRAIL_LEN);
    // Newest first.
    assert_eq!(trail.points[0].x, (TRAIL_LEN + 4) as f32);
    // Older samples fade.
    assert!(trail.opacity(0) > trail.opacity(TRAIL_LEN - 1));
}
