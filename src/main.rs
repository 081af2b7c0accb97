mod backdrop;
mod camera;
mod config;
mod math;
mod sets;
mod ui;

#[cfg(test)]
mod test_helpers;

use bevy::prelude::*;

use crate::sets::AppSet;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Skyreel".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .configure_sets(Update, (AppSet::Camera, AppSet::Backdrop).chain())
        .add_plugins(config::ConfigPlugin)
        .add_plugins(camera::CameraPlugin)
        .add_plugins(backdrop::BackdropPlugin)
        .add_plugins(ui::UiPlugin)
        .run();
}
