use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

fn default_tiles_x() -> u32 {
    3
}

fn default_tiles_y() -> u32 {
    1
}

/// One backdrop layer, deserialized from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerDef {
    pub name: String,
    pub image: String,
    /// Constant scroll rate along negative X, world units per second.
    pub move_speed: f32,
    /// Camera-delta multipliers. 1.0 rides with the camera, 0.0 stays fixed
    /// in the world; values outside [0, 1] are allowed and not validated.
    pub parallax_x: f32,
    pub parallax_y: f32,
    #[serde(default = "default_tiles_x")]
    pub tiles_x: u32,
    #[serde(default = "default_tiles_y")]
    pub tiles_y: u32,
    pub z_order: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CameraDriftDef {
    pub drift_x: f32,
    pub drift_y: f32,
}

/// Asset loaded from *.backdrop.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct BackdropConfigAsset {
    pub camera: CameraDriftDef,
    pub layers: Vec<LayerDef>,
}

/// Layer definitions, inserted as a Resource once the asset is loaded.
#[derive(Resource, Debug, Clone)]
pub struct BackdropConfig {
    pub layers: Vec<LayerDef>,
}

/// Constant camera velocity driving the scene, world units per second.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraDrift {
    pub velocity: Vec2,
}
