//! Combat domain: tests for aggro transitions, boss phases, and attack
//! scripts.

use bevy::prelude::*;

use super::attacks::{AttackStep, BlastAnchor, BossAttackId, DASH_SECS};
use super::components::{
    AggroPhase, AggroState, BossPhaseDef, BossRuntime, Health, MovementPattern, PatrolRoute,
};
use super::spawn::archetype_for_boss;
use super::EnemyArchetype;

// -----------------------------------------------------------------------------
// Health
// -----------------------------------------------------------------------------

#[test]
fn test_health_take_damage_and_fraction() {
    let mut health = Health::new(200.0);
    health.take_damage(50.0);
    assert_eq!(health.current, 150.0);
    assert_eq!(health.fraction(), 0.75);
    assert!(!health.is_dead());

    // Damage never overshoots below zero.
    health.take_damage(500.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

// -----------------------------------------------------------------------------
// Aggro state machine
// -----------------------------------------------------------------------------

#[test]
fn test_stationary_enemy_aggroes_within_radius() {
    let aggro = AggroState::stationary(120.0, Vec2::ZERO);
    assert_eq!(aggro.home, Vec2::ZERO);
    assert_eq!(aggro.evaluate(121.0), None);
    assert_eq!(aggro.evaluate(120.0), Some(AggroPhase::Aggroed));
    assert_eq!(aggro.evaluate(10.0), Some(AggroPhase::Aggroed));
}

#[test]
fn test_patrolling_enemy_aggroes_within_radius() {
    let aggro = AggroState::patrolling(100.0, Vec2::ZERO, vec![Vec2::ZERO, Vec2::X * 50.0]);
    assert_eq!(aggro.evaluate(99.0), Some(AggroPhase::Aggroed));
    assert_eq!(aggro.evaluate(150.0), None);
}

#[test]
fn test_deaggro_requires_leaving_the_hysteresis_band() {
    let mut aggro = AggroState::stationary(100.0, Vec2::ZERO);
    aggro.phase = AggroPhase::Aggroed;

    // Oscillating inside (r, 1.5r] never drops aggro.
    assert_eq!(aggro.evaluate(101.0), None);
    assert_eq!(aggro.evaluate(149.0), None);
    assert_eq!(aggro.evaluate(150.0), None);
    assert_eq!(aggro.evaluate(120.0), None);

    // Strictly past 1.5r it lets go.
    assert_eq!(aggro.evaluate(150.1), Some(AggroPhase::Stationary));
}

#[test]
fn test_deaggro_returns_to_patrol_when_a_route_exists() {
    let mut aggro = AggroState::patrolling(100.0, Vec2::ZERO, vec![Vec2::ZERO, Vec2::Y * 80.0]);
    aggro.phase = AggroPhase::Aggroed;
    assert_eq!(aggro.evaluate(200.0), Some(AggroPhase::Patrolling));
}

#[test]
fn test_aggro_oscillation_across_the_boundary() {
    let mut aggro = AggroState::stationary(100.0, Vec2::ZERO);

    // Walk in, aggro.
    if let Some(phase) = aggro.evaluate(90.0) {
        aggro.phase = phase;
    }
    assert!(aggro.is_aggroed());

    // Step just back across the radius: still aggroed.
    assert_eq!(aggro.evaluate(110.0), None);
    assert!(aggro.is_aggroed());

    // Step back in and out repeatedly: no transitions fire at all.
    for distance in [95.0, 130.0, 101.0, 148.0] {
        assert_eq!(aggro.evaluate(distance), None);
    }
}

#[test]
fn test_patrol_route_wraps_cyclically() {
    let mut route = PatrolRoute::new(vec![Vec2::ZERO, Vec2::X, Vec2::Y]);
    assert_eq!(route.current(), Vec2::ZERO);
    route.advance();
    assert_eq!(route.current(), Vec2::X);
    route.advance();
    assert_eq!(route.current(), Vec2::Y);
    route.advance();
    assert_eq!(route.current(), Vec2::ZERO);
}

// -----------------------------------------------------------------------------
// Boss phases
// -----------------------------------------------------------------------------

fn test_phases() -> Vec<BossPhaseDef> {
    vec![
        BossPhaseDef {
            health_threshold: 1.0,
            abilities: vec![BossAttackId::ChargeAttack],
            movement: MovementPattern::Chase,
        },
        BossPhaseDef {
            health_threshold: 0.6,
            abilities: vec![BossAttackId::ChargeAttack, BossAttackId::ChargeSlam],
            movement: MovementPattern::Aggressive,
        },
        BossPhaseDef {
            health_threshold: 0.3,
            abilities: vec![BossAttackId::TripleDash],
            movement: MovementPattern::Berserker,
        },
    ]
}

fn test_boss() -> BossRuntime {
    BossRuntime::new("swarm-king", "Swarm King", Vec2::new(900.0, 600.0), 200.0, 120.0, 2.5)
}

#[test]
fn test_boss_runtime_starts_in_phase_zero() {
    let boss = test_boss();
    assert_eq!(boss.phase_index, 0);
    assert_eq!(boss.arena_center, Vec2::new(900.0, 600.0));
    assert_eq!(boss.arena_radius, 200.0);
    assert!(!boss.is_charging);
    // The opening attack waits out a full cooldown.
    assert_eq!(boss.attack_timer, boss.attack_cooldown);
}

#[test]
fn test_phase_advances_at_threshold() {
    let phases = test_phases();
    let mut boss = test_boss();

    assert_eq!(boss.advance_phase(0.9, &phases), None);
    assert_eq!(boss.phase_index, 0);

    assert_eq!(boss.advance_phase(0.6, &phases), Some(1));
    assert_eq!(boss.phase_index, 1);
}

#[test]
fn test_phase_advances_one_index_per_check() {
    let phases = test_phases();
    let mut boss = test_boss();

    // A massive health drop still only moves one phase per check; the next
    // check catches up.
    assert_eq!(boss.advance_phase(0.1, &phases), Some(1));
    assert_eq!(boss.advance_phase(0.1, &phases), Some(2));
    assert_eq!(boss.phase_index, 2);
}

#[test]
fn test_phase_index_is_monotone_and_bounded() {
    let phases = test_phases();
    let mut boss = test_boss();

    let mut previous = boss.phase_index;
    let mut fraction = 1.0;
    while fraction > 0.0 {
        boss.advance_phase(fraction, &phases);
        assert!(boss.phase_index >= previous);
        assert!(boss.phase_index <= phases.len() - 1);
        previous = boss.phase_index;
        fraction -= 0.05;
    }
    assert_eq!(boss.phase_index, phases.len() - 1);

    // Health cannot rise, but even if the fraction were to, phases never
    // regress.
    assert_eq!(boss.advance_phase(1.0, &phases), None);
    assert_eq!(boss.phase_index, phases.len() - 1);
}

#[test]
fn test_entering_berserker_phase_raises_speed() {
    let phases = test_phases();
    let mut boss = test_boss();
    let base = boss.speed();

    boss.advance_phase(0.5, &phases);
    assert_eq!(boss.speed(), base);

    boss.advance_phase(0.2, &phases);
    assert_eq!(boss.speed(), base * 1.5);
}

#[test]
fn test_entering_frenzy_phase_halves_cooldown() {
    let phases = vec![
        BossPhaseDef {
            health_threshold: 1.0,
            abilities: vec![],
            movement: MovementPattern::Circle,
        },
        BossPhaseDef {
            health_threshold: 0.5,
            abilities: vec![BossAttackId::MegaBomb],
            movement: MovementPattern::Frenzy,
        },
    ];
    let mut boss = test_boss();
    let cooldown = boss.attack_cooldown;

    boss.advance_phase(0.4, &phases);
    assert_eq!(boss.attack_cooldown, cooldown * 0.5);
}

// -----------------------------------------------------------------------------
// Attack scripts
// -----------------------------------------------------------------------------

fn dash_count(id: BossAttackId) -> usize {
    id.sequence()
        .steps
        .iter()
        .filter(|step| matches!(step, AttackStep::Dash { .. }))
        .count()
}

fn blast_count(id: BossAttackId) -> usize {
    id.sequence()
        .steps
        .iter()
        .filter(|step| matches!(step, AttackStep::Blast { .. }))
        .count()
}

#[test]
fn test_charge_attacks_telegraph_then_dash() {
    for id in [BossAttackId::ChargeAttack, BossAttackId::IceDash] {
        let sequence = id.sequence();
        assert!(matches!(
            &sequence.steps[0],
            AttackStep::Telegraph { secs } if *secs == 1.0
        ));
        assert!(matches!(
            &sequence.steps[1],
            AttackStep::Dash { speed_mult, secs } if *speed_mult == 3.0 && *secs == 0.5
        ));
    }
}

#[test]
fn test_triple_dash_spacing() {
    let sequence = BossAttackId::TripleDash.sequence();
    assert_eq!(dash_count(BossAttackId::TripleDash), 3);

    // Consecutive dash starts are 0.8 s apart: dash duration plus the gap.
    let mut gap_between_dashes = 0.0;
    let mut seen_first_dash = false;
    for step in &sequence.steps {
        match step {
            AttackStep::Dash { .. } if seen_first_dash => {
                assert!((gap_between_dashes + DASH_SECS - 0.8).abs() < 1e-5);
                gap_between_dashes = 0.0;
            }
            AttackStep::Dash { .. } => seen_first_dash = true,
            step if seen_first_dash => gap_between_dashes += step.duration(),
            _ => {}
        }
    }
}

#[test]
fn test_bomb_barrage_is_a_staggered_pentagon() {
    let sequence = BossAttackId::BombBarrage.sequence();
    assert_eq!(blast_count(BossAttackId::BombBarrage), 5);

    let mut offsets = Vec::new();
    let mut stagger_total = 0.0;
    for step in &sequence.steps {
        match step {
            AttackStep::Blast { anchor, offset, .. } => {
                assert_eq!(*anchor, BlastAnchor::Target);
                offsets.push(*offset);
            }
            AttackStep::Wait { secs } => stagger_total += secs,
            _ => {}
        }
    }

    // Five distinct points on the ring, delivered across 1.5 s.
    for (i, a) in offsets.iter().enumerate() {
        for b in offsets.iter().skip(i + 1) {
            assert!(a.distance(*b) > 1.0);
        }
    }
    assert!((stagger_total - 1.5).abs() < 1e-5);
}

#[test]
fn test_mega_blasts_anchor_on_the_target() {
    for id in [BossAttackId::MegaBomb, BossAttackId::MegaFreeze] {
        let sequence = id.sequence();
        assert!(sequence.steps.iter().any(|step| matches!(
            step,
            AttackStep::Blast { radius, anchor, .. }
                if *radius == 150.0 && *anchor == BlastAnchor::Target
        )));
    }
}

#[test]
fn test_stub_abilities_have_no_mechanical_steps() {
    for id in [BossAttackId::SummonSwarm, BossAttackId::FreezeWave] {
        assert_eq!(dash_count(id), 0);
        assert_eq!(blast_count(id), 0);
    }
}

// -----------------------------------------------------------------------------
// Boss body mapping
// -----------------------------------------------------------------------------

#[test]
fn test_boss_placeholder_bodies() {
    assert_eq!(archetype_for_boss("swarm-king"), EnemyArchetype::Elite);
    assert_eq!(archetype_for_boss("desert-bomber"), EnemyArchetype::Tank);
    assert_eq!(archetype_for_boss("ice-shark"), EnemyArchetype::Elite);
    assert_eq!(archetype_for_boss("anything-else"), EnemyArchetype::Elite);
}
