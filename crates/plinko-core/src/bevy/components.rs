//! ECS components for the plinko tray.

use bevy::prelude::*;

/// Marker component for dropped marbles.
///
/// A marble entity always carries a `PhysicsBody` alongside this
/// marker; the pair is created and destroyed together.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Marble;

/// Marker component for static pegs.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Peg;

/// Component for tray wall entities.
#[derive(Component, Debug, Clone, Copy)]
pub struct Wall {
    /// Half-extents of the wall slab, used to build its mesh.
    pub half_extents: Vec3,
}

/// Marker component for the ground plane.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Ground;

/// Marker for the main camera.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MainCamera;

/// Orbiting camera state: spherical coordinates around a focus point.
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Point the camera looks at.
    pub focus: Vec3,
    /// Distance from the focus point.
    pub radius: f32,
    /// Rotation around the vertical axis, in radians.
    pub yaw: f32,
    /// Elevation above the horizontal plane, in radians.
    pub pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Matches an initial eye position of roughly (0, 10, 15).
        Self {
            focus: Vec3::ZERO,
            radius: 18.0,
            yaw: 0.0,
            pitch: 0.59,
        }
    }
}

impl OrbitCamera {
    /// Camera position in world space for the current orbit state.
    pub fn eye_position(&self) -> Vec3 {
        let horizontal = self.radius * self.pitch.cos();
        self.focus
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.radius * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }
}
