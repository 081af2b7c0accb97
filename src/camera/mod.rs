pub mod drift;

use bevy::prelude::*;

use crate::config::AppState;
use crate::sets::AppSet;

const CAMERA_SCALE: f32 = 1.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera).add_systems(
            Update,
            drift::camera_drift
                .in_set(AppSet::Camera)
                .run_if(in_state(AppState::Ready)),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
