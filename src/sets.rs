use bevy::prelude::*;

/// Top-level system ordering sets for the update loop.
///
/// Configured as a chain in `main`: Camera → Backdrop. The backdrop pipeline
/// reads the camera position tiles are drawn against this frame, so camera
/// motion settles first.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppSet {
    Camera,
    Backdrop,
}
