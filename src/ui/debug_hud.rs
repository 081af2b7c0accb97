use bevy::prelude::*;

use crate::backdrop::registry::TileRegistry;

#[derive(Component)]
pub struct DebugHudText;

pub fn spawn_debug_hud(mut commands: Commands) {
    commands.spawn((
        DebugHudText,
        Text::new("cam X: 0 Y: 0 | tiles: 0"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn update_debug_hud(
    camera_query: Query<&Transform, With<Camera2d>>,
    registry: Res<TileRegistry>,
    mut text_query: Query<&mut Text, With<DebugHudText>>,
) {
    let Ok(camera_tf) = camera_query.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    let cx = camera_tf.translation.x;
    let cy = camera_tf.translation.y;

    **text = format!("cam X: {cx:.0} Y: {cy:.0} | tiles: {}", registry.total());
}
