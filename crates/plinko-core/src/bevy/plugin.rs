//! Bevy plugins for the plinko tray.
//!
//! Provides:
//! - `PlinkoHeadlessPlugin`: logic-only plugin (no rendering/window
//!   dependencies) for headless testing
//! - `PlinkoPlugin`: full plugin including `PlinkoHeadlessPlugin` +
//!   rendering, camera, and input systems

use bevy::light::DirectionalLightShadowMap;
use bevy::prelude::*;

use crate::bevy::events::{ClearMarblesEvent, SpawnMarbleEvent};
use crate::bevy::rapier_plugin::PlinkoPhysicsPlugin;
use crate::bevy::resources::TrayConfigRes;
use crate::bevy::systems;
use crate::config::TrayConfig;

/// Headless plugin containing the simulation logic without rendering
/// or window dependencies.
///
/// Use this with `MinimalPlugins` to run the step/sync/spawn/clear
/// cycle in tests without a windowing or rendering backend.
#[derive(Default)]
pub struct PlinkoHeadlessPlugin {
    pub config: TrayConfig,
}

impl Plugin for PlinkoHeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TrayConfigRes::new(self.config.clone()));
        app.add_plugins(PlinkoPhysicsPlugin {
            config: self.config.clone(),
        });

        app.add_message::<SpawnMarbleEvent>()
            .add_message::<ClearMarblesEvent>();

        app.add_systems(Startup, systems::setup_tray);

        // Input handlers run in Update; a marble spawned here gets its
        // first physics step on the next fixed tick.
        app.add_systems(
            Update,
            (systems::handle_spawn_marbles, systems::handle_clear_marbles).chain(),
        );
    }
}

/// Full plugin: headless logic plus rendering, lighting, orbit camera,
/// and user input.
#[derive(Default)]
pub struct PlinkoPlugin {
    pub config: TrayConfig,
}

impl Plugin for PlinkoPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PlinkoHeadlessPlugin {
            config: self.config.clone(),
        });

        app.insert_resource(ClearColor(Color::srgb_u8(0x12, 0x12, 0x12)));
        app.insert_resource(DirectionalLightShadowMap { size: 1024 });

        app.add_systems(
            Startup,
            (systems::setup_visual_assets, systems::setup_camera_and_lights),
        );

        app.add_systems(
            Update,
            (
                systems::handle_tray_input,
                systems::log_window_resize,
                systems::attach_tray_visuals,
                systems::attach_marble_visuals,
            ),
        );

        app.add_systems(
            Update,
            (systems::orbit_camera_input, systems::update_orbit_camera).chain(),
        );
    }
}
