//! Visual side of the scene.
//!
//! Builds shared mesh/material assets, spawns the camera and lights,
//! and attaches render components to entities created by the logic
//! systems. Kept separate from the headless plugin so tests run the
//! same logic without a renderer.

use bevy::light::NotShadowCaster;
use bevy::prelude::*;

use crate::bevy::components::{Ground, MainCamera, Marble, OrbitCamera, Peg, Wall};
use crate::bevy::resources::{TrayAssets, TrayConfigRes};

/// Startup system building the shared mesh and material handles.
pub fn setup_visual_assets(
    mut commands: Commands,
    config: Res<TrayConfigRes>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let config = &config.0;

    let assets = TrayAssets {
        marble_mesh: meshes.add(Sphere::new(config.marble_radius)),
        // Glassy blue marble.
        marble_material: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x44, 0xaa, 0xff),
            metallic: 0.3,
            perceptual_roughness: 0.05,
            reflectance: 0.8,
            specular_transmission: 0.9,
            thickness: 0.5,
            ..default()
        }),
        peg_mesh: meshes.add(Sphere::new(config.peg_radius)),
        peg_material: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xff, 0x40, 0x81),
            metallic: 0.8,
            perceptual_roughness: 0.2,
            ..default()
        }),
        wall_material: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x55, 0x55, 0x55),
            metallic: 0.7,
            perceptual_roughness: 0.2,
            ..default()
        }),
        ground_mesh: meshes.add(Plane3d::default().mesh().size(20.0, 20.0)),
        ground_material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.12, 0.12, 0.13),
            perceptual_roughness: 1.0,
            ..default()
        }),
    };

    commands.insert_resource(assets);
}

/// Startup system spawning the orbit camera and lighting.
pub fn setup_camera_and_lights(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        MainCamera,
        Transform::from_translation(orbit.eye_position()).looking_at(orbit.focus, Vec3::Y),
        orbit,
        AmbientLight {
            color: Color::WHITE,
            brightness: 120.0,
            ..default()
        },
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 15.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// System attaching meshes and materials to freshly spawned static
/// scene entities.
pub fn attach_tray_visuals(
    mut commands: Commands,
    assets: Res<TrayAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    pegs: Query<Entity, (With<Peg>, Without<Mesh3d>)>,
    walls: Query<(Entity, &Wall), Without<Mesh3d>>,
    grounds: Query<Entity, (With<Ground>, Without<Mesh3d>)>,
) {
    for entity in &pegs {
        commands.entity(entity).insert((
            Mesh3d(assets.peg_mesh.clone()),
            MeshMaterial3d(assets.peg_material.clone()),
        ));
    }

    for (entity, wall) in &walls {
        let mesh = meshes.add(Cuboid::from_size(wall.half_extents * 2.0));
        commands.entity(entity).insert((
            Mesh3d(mesh),
            MeshMaterial3d(assets.wall_material.clone()),
        ));
    }

    for entity in &grounds {
        // The ground only receives shadows.
        commands.entity(entity).insert((
            Mesh3d(assets.ground_mesh.clone()),
            MeshMaterial3d(assets.ground_material.clone()),
            NotShadowCaster,
        ));
    }
}

/// System attaching the shared marble mesh and material to freshly
/// dropped marbles.
pub fn attach_marble_visuals(
    mut commands: Commands,
    assets: Res<TrayAssets>,
    marbles: Query<Entity, (With<Marble>, Without<Mesh3d>)>,
) {
    for entity in &marbles {
        commands.entity(entity).insert((
            Mesh3d(assets.marble_mesh.clone()),
            MeshMaterial3d(assets.marble_material.clone()),
        ));
    }
}
