//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `PlinkoHeadlessPlugin` to run the simulation
//! without a rendering or windowing backend.

use bevy::prelude::*;

use crate::bevy::components::Marble;
use crate::bevy::events::{ClearMarblesEvent, SpawnMarbleEvent};
use crate::bevy::plugin::PlinkoHeadlessPlugin;
use crate::bevy::rapier_plugin::PhysicsWorldRes;
use crate::config::TrayConfig;
use crate::physics::{PHYSICS_DT, PhysicsWorld};

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Creates a test app with the default tray configuration.
    pub fn new() -> Self {
        Self::with_config(TrayConfig::default())
    }

    /// Creates a test app with a specific tray configuration.
    pub fn with_config(config: TrayConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(PlinkoHeadlessPlugin { config });
        // Pause virtual time so that only explicit step_physics calls
        // advance the simulation.
        app.world_mut().resource_mut::<Time<Virtual>>().pause();
        // Run one update to apply startup systems.
        app.update();
        Self { app }
    }

    /// Runs a single frame update.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Advances the physics simulation by exactly `n` fixed timesteps.
    ///
    /// Feeds time directly into the fixed-timestep accumulator via
    /// `Time<Fixed>::accumulate_overstep`, bypassing virtual time.
    /// Combined with paused virtual time this gives fully
    /// deterministic stepping.
    pub fn step_physics(&mut self, n: usize) {
        let dt = std::time::Duration::from_secs_f32(PHYSICS_DT);
        for _ in 0..n {
            self.app
                .world_mut()
                .resource_mut::<Time<Fixed>>()
                .accumulate_overstep(dt);
            self.app.update();
        }
    }

    /// Requests one marble drop and processes it.
    pub fn spawn_marble(&mut self) {
        self.app.world_mut().write_message(SpawnMarbleEvent);
        self.update();
    }

    /// Requests clearing all marbles and processes it.
    pub fn clear_marbles(&mut self) {
        self.app.world_mut().write_message(ClearMarblesEvent);
        self.update();
    }

    /// Number of marble entities currently in the scene.
    pub fn marble_count(&mut self) -> usize {
        self.app
            .world_mut()
            .query_filtered::<(), With<Marble>>()
            .iter(self.app.world())
            .count()
    }

    /// Shared reference to the physics world.
    pub fn physics(&self) -> &PhysicsWorld {
        &self.app.world().resource::<PhysicsWorldRes>().world
    }

    /// Mutable reference to the ECS world.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
