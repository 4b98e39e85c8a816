//! Systems for the plinko tray.

pub mod camera;
pub mod input;
pub mod marble;
pub mod render;
pub mod setup;

pub use camera::{orbit_camera_input, update_orbit_camera};
pub use input::{handle_tray_input, log_window_resize};
pub use marble::{handle_clear_marbles, handle_spawn_marbles, spawn_marble_at};
pub use render::{
    attach_marble_visuals, attach_tray_visuals, setup_camera_and_lights, setup_visual_assets,
};
pub use setup::setup_tray;
