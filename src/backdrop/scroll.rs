use bevy::prelude::*;

use super::registry::TileRegistry;
use super::tile::ScrollingTile;

/// Motion integration: constant leftward scroll plus camera-delta parallax.
///
/// Each tile's update is independent of every other tile, so iteration order
/// does not matter. The two contributions commute:
///
///   pos += (-move_speed * dt, 0) + (cam_delta.x * parallax.x, cam_delta.y * parallax.y)
///
/// - parallax 1.0 → tile rides with the camera (static on screen)
/// - parallax 0.0 → tile is fixed in the world apart from its own scroll
pub fn scroll_tiles(
    time: Res<Time>,
    camera_query: Query<&Transform, With<Camera2d>>,
    mut tile_query: Query<(&mut ScrollingTile, &mut Transform), Without<Camera2d>>,
) {
    let Ok(camera_tf) = camera_query.single() else {
        return;
    };
    let cam_pos = camera_tf.translation.truncate();
    let dt = time.delta_secs();

    for (mut tile, mut transform) in &mut tile_query {
        let delta = tile.camera_delta(cam_pos);
        transform.translation.x += -tile.move_speed * dt + delta.x * tile.parallax.x;
        transform.translation.y += delta.y * tile.parallax.y;
    }
}

/// Record every tile's post-motion position in the registry. Runs between
/// motion integration and repositioning, so extremal queries observe all
/// tiles' pre-reposition positions, the querying tile included.
pub fn sync_registry(
    mut registry: ResMut<TileRegistry>,
    tile_query: Query<(Entity, &ScrollingTile, &Transform)>,
) {
    for (entity, tile, transform) in &tile_query {
        registry.update_position(tile.group, entity, transform.translation.truncate());
    }
}
