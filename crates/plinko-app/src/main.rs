//! Windowed plinko tray demo.
//!
//! Click anywhere to drop a marble, press `R` to clear the tray,
//! right-drag to orbit the camera, scroll to zoom. Set `PLINKO_CONFIG`
//! to a JSON file path to override the tray layout.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use plinko_core::TrayConfig;
use plinko_core::bevy::PlinkoPlugin;

/// Environment variable naming an optional JSON config file.
const CONFIG_ENV: &str = "PLINKO_CONFIG";

fn load_config() -> TrayConfig {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => match TrayConfig::load(&path) {
            Ok(config) => {
                tracing::info!("Loaded tray config from {path}");
                config
            }
            Err(err) => {
                tracing::warn!("Ignoring {path}: {err}; using default tray config");
                TrayConfig::default()
            }
        },
        Err(_) => TrayConfig::default(),
    }
}

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Plinko Tray".to_string(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "info,wgpu_core=warn,wgpu_hal=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(PlinkoPlugin {
            config: load_config(),
        })
        .run();
}
