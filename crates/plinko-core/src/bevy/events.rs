//! ECS messages for the plinko tray.
//!
//! Note: In Bevy 0.18+, buffered events use the Message trait.

use bevy::prelude::*;

/// Message to request dropping one marble at the configured drop
/// point. Rapid repeated requests produce overlapping marbles, which
/// is acceptable behavior.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct SpawnMarbleEvent;

/// Message to request removing every marble from the world and the
/// scene.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ClearMarblesEvent;
