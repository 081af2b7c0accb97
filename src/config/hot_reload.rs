//! Hot reload for the backdrop config asset.

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::defs::{BackdropConfig, BackdropConfigAsset, CameraDrift};
use super::ConfigHandle;

use crate::backdrop::registry::TileRegistry;
use crate::backdrop::spawn::PendingLayers;
use crate::backdrop::tile::{release_tile, ScrollingTile};

/// Rebuild the whole backdrop when the config file changes on disk: release
/// every live tile, update the camera drift, and re-queue all layers.
pub(crate) fn hot_reload_backdrop(
    mut commands: Commands,
    mut events: MessageReader<AssetEvent<BackdropConfigAsset>>,
    handle: Res<ConfigHandle>,
    assets: Res<Assets<BackdropConfigAsset>>,
    asset_server: Res<AssetServer>,
    mut registry: ResMut<TileRegistry>,
    mut drift: ResMut<CameraDrift>,
    tile_query: Query<Entity, With<ScrollingTile>>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handle.0.id()
            && let Some(asset) = assets.get(&handle.0)
        {
            for entity in &tile_query {
                release_tile(&mut commands, &mut registry, entity);
            }
            drift.velocity = Vec2::new(asset.camera.drift_x, asset.camera.drift_y);
            commands.insert_resource(BackdropConfig {
                layers: asset.layers.clone(),
            });
            commands.insert_resource(PendingLayers::queue(&asset.layers, &asset_server));
            info!(
                "Hot-reloaded backdrop config ({} layers), respawning tiles",
                asset.layers.len()
            );
        }
    }
}
