//! Tray scene parameters.
//!
//! All geometry and material constants for the pegged tray live here.
//! The defaults reproduce the reference demo layout; a custom config
//! can be loaded from JSON at startup.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on `peg_rows * peg_cols`. Keeps hostile or mistyped
/// configs from asking for an absurd number of static colliders.
const MAX_PEGS: u64 = 10_000;

/// Errors from loading or validating a tray configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Surface material parameters applied to colliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceParams {
    pub friction: f32,
    pub restitution: f32,
}

/// Immutable scene parameters, read at setup time only.
///
/// Distances are in meters, matching the physics world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// Radius of a dropped marble.
    pub marble_radius: f32,
    /// Mass of a dropped marble, in kilograms.
    pub marble_mass: f32,
    /// Collider material of a marble.
    pub marble_surface: SurfaceParams,
    /// Point above the tray where every marble is released.
    pub drop_point: [f32; 3],

    /// Radius of a static peg.
    pub peg_radius: f32,
    /// Number of peg rows.
    pub peg_rows: u32,
    /// Number of peg columns.
    pub peg_cols: u32,
    /// Horizontal distance between pegs in a row. Odd rows are offset
    /// by half this value for the staggered brick layout.
    pub peg_spacing: f32,
    /// Vertical distance between peg rows.
    pub peg_row_spacing: f32,
    /// Height of the topmost peg row.
    pub peg_top_height: f32,

    /// Side length of the square tray catching the marbles.
    pub tray_size: f32,
    /// Height of the tray walls.
    pub wall_height: f32,
    /// Thickness of the tray walls.
    pub wall_thickness: f32,
    /// Collider material of the ground and walls.
    pub tray_surface: SurfaceParams,

    /// Gravity vector.
    pub gravity: [f32; 3],
    /// Contact solver iteration count.
    pub solver_iterations: usize,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            marble_radius: 0.3,
            marble_mass: 1.0,
            marble_surface: SurfaceParams {
                friction: 0.1,
                restitution: 0.8,
            },
            drop_point: [0.0, 7.0, 0.0],
            peg_radius: 0.2,
            peg_rows: 7,
            peg_cols: 9,
            peg_spacing: 1.5,
            peg_row_spacing: 0.7,
            peg_top_height: 4.0,
            tray_size: 8.0,
            wall_height: 1.0,
            wall_thickness: 0.5,
            tray_surface: SurfaceParams {
                friction: 0.5,
                restitution: 0.7,
            },
            gravity: [0.0, -9.82, 0.0],
            solver_iterations: 10,
        }
    }
}

impl TrayConfig {
    /// Parses a configuration from a JSON string and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks structural invariants.
    ///
    /// Marble overlap at the drop point is deliberately not checked:
    /// spawning marbles on top of each other is acceptable behavior.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marble_radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "marble_radius must be positive, got {}",
                self.marble_radius
            )));
        }
        if self.marble_mass <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "marble_mass must be positive, got {}",
                self.marble_mass
            )));
        }
        if self.peg_radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "peg_radius must be positive, got {}",
                self.peg_radius
            )));
        }
        if self.peg_rows == 0 || self.peg_cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "peg grid must have at least one row and column, got {}x{}",
                self.peg_rows, self.peg_cols
            )));
        }
        if u64::from(self.peg_rows) * u64::from(self.peg_cols) > MAX_PEGS {
            return Err(ConfigError::Invalid(format!(
                "peg grid {}x{} exceeds the {MAX_PEGS} peg limit",
                self.peg_rows, self.peg_cols
            )));
        }
        if self.peg_spacing <= 0.0 || self.peg_row_spacing <= 0.0 {
            return Err(ConfigError::Invalid(
                "peg spacing values must be positive".to_string(),
            ));
        }
        if self.tray_size <= 0.0 || self.wall_height <= 0.0 || self.wall_thickness <= 0.0 {
            return Err(ConfigError::Invalid(
                "tray dimensions must be positive".to_string(),
            ));
        }
        if self.solver_iterations == 0 {
            return Err(ConfigError::Invalid(
                "solver_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
