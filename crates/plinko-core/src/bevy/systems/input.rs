//! User input handling.
//!
//! Click = drop a marble, `R` = clear all marbles. Window resizes are
//! handled by Bevy's camera systems; we only log them.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::bevy::events::{ClearMarblesEvent, SpawnMarbleEvent};

/// System translating pointer and keyboard input into tray mutations.
pub fn handle_tray_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut spawn_events: MessageWriter<SpawnMarbleEvent>,
    mut clear_events: MessageWriter<ClearMarblesEvent>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        // Only clicks landing inside the viewport drop a marble.
        let cursor_in_window = windows
            .single()
            .is_ok_and(|window| window.cursor_position().is_some());
        if cursor_in_window {
            spawn_events.write(SpawnMarbleEvent);
        }
    }

    if keys.just_pressed(KeyCode::KeyR) {
        clear_events.write(ClearMarblesEvent);
    }
}

/// System logging viewport size changes.
pub fn log_window_resize(mut events: MessageReader<WindowResized>) {
    for event in events.read() {
        tracing::debug!("Viewport resized to {:.0}x{:.0}", event.width, event.height);
    }
}
