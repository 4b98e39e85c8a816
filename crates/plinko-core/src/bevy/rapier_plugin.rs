//! Direct Rapier3D integration for Bevy.
//!
//! Integrates rapier through an owned `PhysicsWorld` resource instead
//! of `bevy_rapier3d`. Bodies are paired with their entity through the
//! `PhysicsBody` component and the body's `user_data` (entity bits),
//! so physical and visual state can never disagree about which
//! entities exist.

use bevy::prelude::*;
use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};

use crate::config::TrayConfig;
use crate::physics::{PHYSICS_DT, PhysicsWorld};

/// Bevy resource wrapping `PhysicsWorld` for direct Rapier access.
#[derive(Resource)]
pub struct PhysicsWorldRes {
    pub world: PhysicsWorld,
}

impl PhysicsWorldRes {
    pub fn new(config: &TrayConfig) -> Self {
        Self {
            world: PhysicsWorld::new(config),
        }
    }
}

impl Default for PhysicsWorldRes {
    fn default() -> Self {
        Self::new(&TrayConfig::default())
    }
}

/// Entity ↔ rigid body pairing component.
#[derive(Component, Debug, Clone, Copy)]
pub struct PhysicsBody(pub RigidBodyHandle);

/// Entity ↔ static collider pairing (obstacles without a body).
#[derive(Component, Debug, Clone, Copy)]
pub struct PhysicsCollider(pub ColliderHandle);

/// Fixed-timestep physics phases.
///
/// The order is load-bearing: writing transforms back before the step
/// would render one-frame-stale positions.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    /// Advance the physics world by one fixed timestep.
    Step,
    /// Copy rigid body transforms back onto Bevy `Transform`s.
    Writeback,
}

/// Runs one physics simulation step.
pub fn run_physics_step(mut physics: ResMut<PhysicsWorldRes>) {
    physics.world.step();
}

/// Copies each dynamic body's position and orientation onto its paired
/// entity's `Transform`.
///
/// Static bodies (pegs, walls, ground) are skipped: their transforms
/// are set once at setup and never change.
pub fn sync_from_physics(
    physics: Res<PhysicsWorldRes>,
    mut bodies: Query<(&PhysicsBody, &mut Transform)>,
) {
    for (body_comp, mut transform) in &mut bodies {
        if let Some(body) = physics.world.get_rigid_body(body_comp.0) {
            if body.is_dynamic() {
                let pos = body.translation();
                transform.translation = Vec3::new(pos.x, pos.y, pos.z);
                let rot = body.rotation().quaternion().coords;
                transform.rotation = Quat::from_xyzw(rot.x, rot.y, rot.z, rot.w);
            }
        }
    }
}

/// Physics plugin: fixed 60Hz step followed by transform writeback.
pub struct PlinkoPhysicsPlugin {
    pub config: TrayConfig,
}

impl Plugin for PlinkoPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(f64::from(PHYSICS_DT)));
        app.insert_resource(PhysicsWorldRes::new(&self.config));

        app.configure_sets(
            FixedUpdate,
            (PhysicsSet::Step, PhysicsSet::Writeback).chain(),
        );

        app.add_systems(FixedUpdate, run_physics_step.in_set(PhysicsSet::Step));
        app.add_systems(FixedUpdate, sync_from_physics.in_set(PhysicsSet::Writeback));
    }
}
