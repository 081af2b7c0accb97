use bevy::asset::LoadState;
use bevy::prelude::*;

use super::registry::{GroupId, TileRegistry};
use super::tile::ScrollingTile;
use crate::config::defs::{BackdropConfig, LayerDef};

/// Layers waiting for their image to finish loading. Tile size comes from
/// the image's bounds, so nothing can spawn before the asset is available.
#[derive(Resource, Debug, Default)]
pub struct PendingLayers(pub(crate) Vec<PendingLayer>);

#[derive(Debug)]
pub(crate) struct PendingLayer {
    pub(crate) group: GroupId,
    pub(crate) def: LayerDef,
    pub(crate) image: Handle<Image>,
}

impl PendingLayers {
    pub fn queue(layers: &[LayerDef], asset_server: &AssetServer) -> Self {
        Self(
            layers
                .iter()
                .enumerate()
                .map(|(i, def)| PendingLayer {
                    group: GroupId(i as u16),
                    def: def.clone(),
                    image: asset_server.load(&def.image),
                })
                .collect(),
        )
    }
}

/// Queue every configured layer once the config is ready.
pub fn queue_layers(
    mut commands: Commands,
    config: Res<BackdropConfig>,
    asset_server: Res<AssetServer>,
) {
    commands.insert_resource(PendingLayers::queue(&config.layers, &asset_server));
}

/// Spawn tiles for each pending layer whose image has loaded. A layer whose
/// image fails to load is dropped; other layers are unaffected.
pub fn spawn_ready_layers(
    mut commands: Commands,
    mut pending: ResMut<PendingLayers>,
    mut registry: ResMut<TileRegistry>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
) {
    if pending.0.is_empty() {
        return;
    }
    pending.0.retain(|layer| {
        if let LoadState::Failed(_) = asset_server.load_state(&layer.image) {
            error!(
                "Failed to load backdrop image '{}', dropping layer '{}'",
                layer.def.image, layer.def.name
            );
            return false;
        }
        let Some(image) = images.get(&layer.image) else {
            return true; // image not loaded yet, try again next frame
        };
        spawn_layer(&mut commands, &mut registry, layer, image.size_f32());
        false
    });
}

fn spawn_layer(
    commands: &mut Commands,
    registry: &mut TileRegistry,
    layer: &PendingLayer,
    size: Vec2,
) {
    let def = &layer.def;
    let tile = match ScrollingTile::new(
        layer.group,
        size,
        def.move_speed,
        Vec2::new(def.parallax_x, def.parallax_y),
    ) {
        Ok(tile) => tile,
        Err(err) => {
            error!("Cannot spawn layer '{}': {err}", def.name);
            return;
        }
    };

    let positions = grid_positions(def.tiles_x, def.tiles_y, size);
    for &pos in &positions {
        let entity = commands
            .spawn((
                tile.clone(),
                Sprite::from_image(layer.image.clone()),
                Transform::from_xyz(pos.x, pos.y, def.z_order),
            ))
            .id();
        registry.register(layer.group, entity, pos);
    }

    info!(
        "Spawned {} tiles ({}x{} world units each) for layer '{}'",
        positions.len(),
        size.x,
        size.y,
        def.name
    );
}

/// Centers of a `tiles_x` x `tiles_y` grid of edge-to-edge tiles centered on
/// the origin.
pub(crate) fn grid_positions(tiles_x: u32, tiles_y: u32, size: Vec2) -> Vec<Vec2> {
    let mut positions = Vec::with_capacity((tiles_x * tiles_y) as usize);
    for iy in 0..tiles_y {
        for ix in 0..tiles_x {
            positions.push(Vec2::new(
                (ix as f32 - (tiles_x as f32 - 1.0) / 2.0) * size.x,
                (iy as f32 - (tiles_y as f32 - 1.0) / 2.0) * size.y,
            ));
        }
    }
    positions
}
