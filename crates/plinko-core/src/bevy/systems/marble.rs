//! Marble spawning and clearing.
//!
//! A marble is one entity owning both halves of the pair: the
//! `Marble` marker with its `Transform` (visual side) and the
//! `PhysicsBody` handle (physical side). Both halves are created in
//! `spawn_marble_at` and destroyed in `handle_clear_marbles`, so the
//! physics world and the scene never disagree about which marbles
//! exist.

use bevy::prelude::*;
use rapier3d::prelude::{ColliderBuilder, RigidBodyBuilder, Vector};

use crate::bevy::components::Marble;
use crate::bevy::events::{ClearMarblesEvent, SpawnMarbleEvent};
use crate::bevy::rapier_plugin::{PhysicsBody, PhysicsWorldRes};
use crate::bevy::resources::TrayConfigRes;
use crate::config::TrayConfig;

/// System to handle marble drop requests.
///
/// Every marble is released at the configured drop point. There is no
/// rate limiting: each request spawns one marble, even if the previous
/// one still overlaps the drop point.
pub fn handle_spawn_marbles(
    mut commands: Commands,
    mut events: MessageReader<SpawnMarbleEvent>,
    config: Res<TrayConfigRes>,
    mut physics: ResMut<PhysicsWorldRes>,
) {
    for _ in events.read() {
        let position = Vec3::from_array(config.0.drop_point);
        let entity = spawn_marble_at(&mut commands, &mut physics, &config.0, position);
        tracing::info!(
            "Dropped marble {:?} at ({:.1}, {:.1}, {:.1})",
            entity,
            position.x,
            position.y,
            position.z
        );
    }
}

/// System to handle marble clearing requests.
///
/// Removes every marble's rigid body from the physics world and
/// despawns its entity, leaving no dangling bodies or orphan visuals.
pub fn handle_clear_marbles(
    mut commands: Commands,
    mut events: MessageReader<ClearMarblesEvent>,
    marbles: Query<(Entity, &PhysicsBody), With<Marble>>,
    mut physics: ResMut<PhysicsWorldRes>,
) {
    for _ in events.read() {
        let mut count = 0;
        for (entity, body) in &marbles {
            physics.world.remove_rigid_body(body.0);
            commands.entity(entity).despawn();
            count += 1;
        }
        if count > 0 {
            tracing::info!("Cleared {count} marbles");
        }
    }
}

/// Spawns one marble at the given position.
///
/// Creates the entity and its dynamic rigid body + ball collider in
/// one call. The body's `user_data` stores the entity bits so the
/// pairing survives independent of ECS iteration order.
pub fn spawn_marble_at(
    commands: &mut Commands,
    physics: &mut PhysicsWorldRes,
    config: &TrayConfig,
    position: Vec3,
) -> Entity {
    let entity = commands
        .spawn((Marble, Transform::from_translation(position)))
        .id();

    let body = RigidBodyBuilder::dynamic()
        .translation(Vector::new(position.x, position.y, position.z))
        .ccd_enabled(true)
        .user_data(u128::from(entity.to_bits()))
        .build();
    let handle = physics.world.add_rigid_body(body);

    let collider = ColliderBuilder::ball(config.marble_radius)
        .mass(config.marble_mass)
        .friction(config.marble_surface.friction)
        .restitution(config.marble_surface.restitution)
        .build();
    physics.world.add_collider(collider, handle);

    commands.entity(entity).insert(PhysicsBody(handle));
    entity
}
