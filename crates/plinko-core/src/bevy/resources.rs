//! ECS resources for the plinko tray.

use bevy::prelude::*;

use crate::config::TrayConfig;

/// Scene parameter resource, fixed after startup.
#[derive(Resource, Debug, Clone)]
pub struct TrayConfigRes(pub TrayConfig);

impl TrayConfigRes {
    pub fn new(config: TrayConfig) -> Self {
        Self(config)
    }
}

impl Default for TrayConfigRes {
    fn default() -> Self {
        Self(TrayConfig::default())
    }
}

/// Cached mesh and material handles for scene visuals.
///
/// Built once at startup so every marble shares the same mesh and
/// material instead of allocating new assets per spawn.
#[derive(Resource, Debug, Clone)]
pub struct TrayAssets {
    pub marble_mesh: Handle<Mesh>,
    pub marble_material: Handle<StandardMaterial>,
    pub peg_mesh: Handle<Mesh>,
    pub peg_material: Handle<StandardMaterial>,
    pub wall_material: Handle<StandardMaterial>,
    pub ground_mesh: Handle<Mesh>,
    pub ground_material: Handle<StandardMaterial>,
}
