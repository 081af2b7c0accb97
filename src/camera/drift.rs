use bevy::prelude::*;

use crate::config::defs::CameraDrift;

/// Pan the camera at a constant config-driven velocity. There is no player
/// to follow here; steady drift is what exercises parallax and tile
/// recycling.
pub fn camera_drift(
    time: Res<Time>,
    drift: Res<CameraDrift>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let dt = time.delta_secs();
    for mut transform in &mut camera_query {
        transform.translation.x += drift.velocity.x * dt;
        transform.translation.y += drift.velocity.y * dt;
    }
}
