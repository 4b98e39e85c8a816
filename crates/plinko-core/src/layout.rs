//! Static tray geometry.
//!
//! Pure position generators for the peg grid and the tray walls.
//! No randomness: identical configs always yield identical layouts.
//! Body and mesh creation from these positions happens in the setup
//! system, not here.

use bevy::math::Vec3;

use crate::config::TrayConfig;

/// An axis-aligned cuboid described by its center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    pub center: Vec3,
    pub half_extents: Vec3,
}

/// Returns the positions of all pegs in row-major order.
///
/// Columns are centered on the x axis; odd rows are shifted by half a
/// spacing for the staggered brick layout. All pegs lie in the z = 0
/// plane.
pub fn peg_positions(config: &TrayConfig) -> Vec<Vec3> {
    let rows = config.peg_rows;
    let cols = config.peg_cols;
    let mut positions = Vec::with_capacity(rows as usize * cols as usize);

    for row in 0..rows {
        for col in 0..cols {
            let mut x = (col as f32 - (cols - 1) as f32 / 2.0) * config.peg_spacing;
            if row % 2 == 1 {
                x += config.peg_spacing / 2.0;
            }
            let y = config.peg_top_height - row as f32 * config.peg_row_spacing;
            positions.push(Vec3::new(x, y, 0.0));
        }
    }

    positions
}

/// Returns the four tray walls: back, front, left, right.
///
/// Walls sit on the ground plane, centered at half their height.
pub fn wall_slabs(config: &TrayConfig) -> [Slab; 4] {
    let half_size = config.tray_size / 2.0;
    let y = config.wall_height / 2.0;

    // Back and front walls span the x axis; left and right span z.
    let span = Vec3::new(half_size, y, config.wall_thickness / 2.0);
    let side_span = Vec3::new(config.wall_thickness / 2.0, y, half_size);

    [
        Slab {
            center: Vec3::new(0.0, y, -half_size),
            half_extents: span,
        },
        Slab {
            center: Vec3::new(0.0, y, half_size),
            half_extents: span,
        },
        Slab {
            center: Vec3::new(-half_size, y, 0.0),
            half_extents: side_span,
        },
        Slab {
            center: Vec3::new(half_size, y, 0.0),
            half_extents: side_span,
        },
    ]
}
