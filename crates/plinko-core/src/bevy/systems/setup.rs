//! Scene composition at startup.
//!
//! Creates the static half of the scene: ground plane, tray walls,
//! and the staggered peg grid. Each static obstacle is one entity
//! paired with one static collider in the physics world. Static
//! entities are never re-synced after setup.

use bevy::prelude::*;
use rapier3d::prelude::{ColliderBuilder, Vector};

use crate::bevy::components::{Ground, Peg, Wall};
use crate::bevy::rapier_plugin::{PhysicsCollider, PhysicsWorldRes};
use crate::bevy::resources::TrayConfigRes;
use crate::layout;

/// Startup system building the tray.
pub fn setup_tray(
    mut commands: Commands,
    config: Res<TrayConfigRes>,
    mut physics: ResMut<PhysicsWorldRes>,
) {
    let config = &config.0;

    // Ground: an infinite half-space with its boundary at y = 0.
    let entity = commands.spawn((Ground, Transform::IDENTITY)).id();
    let collider = ColliderBuilder::halfspace(Vector::y_axis())
        .friction(config.tray_surface.friction)
        .restitution(config.tray_surface.restitution)
        .user_data(u128::from(entity.to_bits()))
        .build();
    let handle = physics.world.add_static_collider(collider);
    commands.entity(entity).insert(PhysicsCollider(handle));

    // Tray walls around the bottom to catch marbles.
    for slab in layout::wall_slabs(config) {
        let entity = commands
            .spawn((
                Wall {
                    half_extents: slab.half_extents,
                },
                Transform::from_translation(slab.center),
            ))
            .id();
        let collider = ColliderBuilder::cuboid(
            slab.half_extents.x,
            slab.half_extents.y,
            slab.half_extents.z,
        )
        .translation(Vector::new(slab.center.x, slab.center.y, slab.center.z))
        .friction(config.tray_surface.friction)
        .restitution(config.tray_surface.restitution)
        .user_data(u128::from(entity.to_bits()))
        .build();
        let handle = physics.world.add_static_collider(collider);
        commands.entity(entity).insert(PhysicsCollider(handle));
    }

    // Peg grid. Pegs keep rapier's default surface; the bounce comes
    // from the marble's restitution.
    let positions = layout::peg_positions(config);
    for position in &positions {
        let entity = commands
            .spawn((Peg, Transform::from_translation(*position)))
            .id();
        let collider = ColliderBuilder::ball(config.peg_radius)
            .translation(Vector::new(position.x, position.y, position.z))
            .user_data(u128::from(entity.to_bits()))
            .build();
        let handle = physics.world.add_static_collider(collider);
        commands.entity(entity).insert(PhysicsCollider(handle));
    }

    tracing::info!(
        "Tray ready: {} pegs in a {}x{} grid, 4 walls, ground plane",
        positions.len(),
        config.peg_rows,
        config.peg_cols
    );
}
