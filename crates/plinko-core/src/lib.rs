//! Plinko Tray Core Library
//!
//! Physics simulation and scene synchronization for an interactive
//! pegged-tray marble drop. `Rapier3D` owns the physical state, Bevy
//! owns the visual state, and the systems in [`bevy`] keep the two in
//! lockstep each fixed tick.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod layout;
pub mod physics;

// Bevy integration
pub mod bevy;

pub use config::{ConfigError, SurfaceParams, TrayConfig};
pub use layout::{Slab, peg_positions, wall_slabs};
pub use physics::{PHYSICS_DT, PhysicsWorld};
