//! Bevy integration for the plinko tray.
//!
//! Wires the rapier `PhysicsWorld` to a Bevy scene: components pair
//! each simulated body with its entity, fixed-timestep systems step
//! the world and write transforms back, and the render systems mirror
//! the result on screen.

pub mod components;
pub mod events;
pub mod plugin;
pub mod rapier_plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

pub use components::*;
pub use events::*;
pub use plugin::{PlinkoHeadlessPlugin, PlinkoPlugin};
pub use rapier_plugin::{
    PhysicsBody, PhysicsCollider, PhysicsSet, PhysicsWorldRes, run_physics_step,
    sync_from_physics,
};
pub use resources::*;
