//! Headless integration tests for the spawn/clear/step/sync cycle.

use bevy::prelude::*;

use crate::bevy::components::{Marble, Peg};
use crate::bevy::rapier_plugin::PhysicsBody;
use crate::bevy::test_utils::TestApp;
use crate::config::TrayConfig;
use crate::layout;

fn marble_pairs(app: &mut TestApp) -> Vec<(Entity, PhysicsBody, Vec3)> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<(Entity, &PhysicsBody, &Transform), With<Marble>>();
    query
        .iter(world)
        .map(|(entity, body, transform)| (entity, *body, transform.translation))
        .collect()
}

#[test]
fn test_setup_creates_static_scene() {
    let mut app = TestApp::new();
    let config = TrayConfig::default();

    let world = app.world_mut();
    let peg_count = world
        .query_filtered::<(), With<Peg>>()
        .iter(world)
        .count();
    assert_eq!(peg_count, (config.peg_rows * config.peg_cols) as usize);

    // Pegs, walls, and ground are static: no dynamic bodies yet.
    assert_eq!(app.physics().dynamic_body_count(), 0);
}

#[test]
fn test_spawn_pairs_body_and_entity() {
    let mut app = TestApp::new();

    app.spawn_marble();

    assert_eq!(app.marble_count(), 1);
    assert_eq!(app.physics().dynamic_body_count(), 1);

    // The body's user_data stores the entity bits.
    let pairs = marble_pairs(&mut app);
    let (entity, body, _) = pairs[0];
    let rigid_body = app.physics().get_rigid_body(body.0).expect("body exists");
    assert_eq!(rigid_body.user_data, u128::from(entity.to_bits()));

    // The marble starts at the configured drop point.
    let config = TrayConfig::default();
    assert_eq!(pairs[0].2, Vec3::from_array(config.drop_point));
}

#[test]
fn test_pairing_invariant_across_spawn_and_clear() {
    let mut app = TestApp::new();

    for expected in 1..=3 {
        app.spawn_marble();
        assert_eq!(app.marble_count(), expected);
        assert_eq!(app.physics().dynamic_body_count(), expected);
    }

    app.clear_marbles();
    assert_eq!(app.marble_count(), 0);
    assert_eq!(app.physics().dynamic_body_count(), 0);

    // The registry keeps working after a clear.
    app.spawn_marble();
    assert_eq!(app.marble_count(), 1);
    assert_eq!(app.physics().dynamic_body_count(), 1);
}

#[test]
fn test_clear_leaves_nothing_dangling() {
    let mut app = TestApp::new();

    app.spawn_marble();
    let pairs = marble_pairs(&mut app);
    let handle = pairs[0].1.0;

    app.clear_marbles();

    assert_eq!(app.marble_count(), 0);
    assert_eq!(app.physics().dynamic_body_count(), 0);
    assert!(app.physics().get_rigid_body(handle).is_none());
}

#[test]
fn test_sync_copies_body_transform_exactly() {
    let mut app = TestApp::new();

    app.spawn_marble();
    app.step_physics(5);

    for (_, body, translation) in marble_pairs(&mut app) {
        let rigid_body = app.physics().get_rigid_body(body.0).expect("body exists");
        let pos = rigid_body.translation();
        assert_eq!(translation.x, pos.x);
        assert_eq!(translation.y, pos.y);
        assert_eq!(translation.z, pos.z);
    }
}

#[test]
fn test_fixed_step_advances_exactly_per_tick() {
    let mut app = TestApp::new();
    assert_eq!(app.physics().current_frame(), 0);

    app.step_physics(7);
    assert_eq!(app.physics().current_frame(), 7);

    // Updates without accumulated time must not step the simulation.
    app.update();
    app.update();
    assert_eq!(app.physics().current_frame(), 7);
}

#[test]
fn test_single_marble_falls_after_one_step() {
    let mut app = TestApp::new();
    let drop_y = TrayConfig::default().drop_point[1];

    app.spawn_marble();
    app.step_physics(1);

    let pairs = marble_pairs(&mut app);
    assert!(pairs[0].2.y < drop_y);

    let body = app.physics().get_rigid_body(pairs[0].1.0).expect("body");
    assert!(body.linvel().y < 0.0);
}

#[test]
fn test_marbles_fall_and_collisions_resolve() {
    let mut app = TestApp::new();
    let config = TrayConfig::default();
    let drop_y = config.drop_point[1];

    // Three marbles from the same drop point, released a moment apart.
    app.spawn_marble();
    app.step_physics(25);
    app.spawn_marble();
    app.step_physics(25);
    app.spawn_marble();
    app.step_physics(60);

    let pairs = marble_pairs(&mut app);
    assert_eq!(pairs.len(), 3);

    let pegs = layout::peg_positions(&config);
    let contact_distance = config.marble_radius + config.peg_radius;

    for (_, _, position) in &pairs {
        // Gravity pulled every marble below the drop point.
        assert!(position.y < drop_y);
        // No marble ended up inside a peg.
        for peg in &pegs {
            assert!(position.distance(*peg) > contact_distance - 0.05);
        }
    }
}

#[test]
fn test_overlapping_spawns_keep_pairing_and_fall() {
    let mut app = TestApp::new();
    let drop_y = TrayConfig::default().drop_point[1];

    // Rapid repeated input: three marbles in the same frame, all at
    // the drop point. Overlap is acceptable; pairing must hold.
    app.world_mut().write_message(crate::bevy::SpawnMarbleEvent);
    app.world_mut().write_message(crate::bevy::SpawnMarbleEvent);
    app.world_mut().write_message(crate::bevy::SpawnMarbleEvent);
    app.update();

    assert_eq!(app.marble_count(), 3);
    assert_eq!(app.physics().dynamic_body_count(), 3);

    // One second of simulation: gravity dominates the push-apart from
    // the initial overlap, so every marble ends up below the drop
    // point.
    app.step_physics(60);
    assert_eq!(app.marble_count(), 3);
    assert_eq!(app.physics().dynamic_body_count(), 3);
    for (_, _, position) in marble_pairs(&mut app) {
        assert!(position.y < drop_y);
    }
}

#[test]
fn test_static_pegs_never_move() {
    let mut app = TestApp::new();

    let before: Vec<Vec3> = {
        let world = app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<Peg>>();
        query.iter(world).map(|t| t.translation).collect()
    };

    app.spawn_marble();
    app.step_physics(120);

    let after: Vec<Vec3> = {
        let world = app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<Peg>>();
        query.iter(world).map(|t| t.translation).collect()
    };

    assert_eq!(before, after);
}
