//! Orbit camera.
//!
//! Right mouse drag orbits around the tray center, scroll wheel zooms.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::bevy::components::{MainCamera, OrbitCamera};

const ORBIT_SENSITIVITY: f32 = 0.005;
const ZOOM_STEP: f32 = 1.0;
const MIN_RADIUS: f32 = 5.0;
const MAX_RADIUS: f32 = 40.0;
const MIN_PITCH: f32 = -0.2;
const MAX_PITCH: f32 = 1.5;

/// System updating orbit state from mouse input.
pub fn orbit_camera_input(
    mouse: Res<ButtonInput<MouseButton>>,
    mut motion_events: MessageReader<MouseMotion>,
    mut scroll_events: MessageReader<MouseWheel>,
    mut cameras: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    let Ok(mut orbit) = cameras.single_mut() else {
        return;
    };

    if mouse.pressed(MouseButton::Right) {
        for motion in motion_events.read() {
            orbit.yaw -= motion.delta.x * ORBIT_SENSITIVITY;
            orbit.pitch =
                (orbit.pitch + motion.delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
        }
    } else {
        motion_events.clear();
    }

    for scroll in scroll_events.read() {
        orbit.radius = (orbit.radius - scroll.y * ZOOM_STEP).clamp(MIN_RADIUS, MAX_RADIUS);
    }
}

/// System placing the camera at its orbit position, looking at the
/// focus point.
pub fn update_orbit_camera(
    mut cameras: Query<(&OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    for (orbit, mut transform) in &mut cameras {
        *transform =
            Transform::from_translation(orbit.eye_position()).looking_at(orbit.focus, Vec3::Y);
    }
}
