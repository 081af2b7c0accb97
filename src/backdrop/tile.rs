use bevy::prelude::*;
use thiserror::Error;

use super::registry::{GroupId, TileRegistry};

#[derive(Debug, Error)]
pub enum TileError {
    #[error("tile needs a positive extent on both axes, got {width}x{height}")]
    DegenerateExtent { width: f32, height: f32 },
}

/// One scrolling backdrop tile.
///
/// Size is fixed at creation from the image's world-space bounds. Each tile
/// tracks the camera position it last saw, so a tile spawned mid-session
/// starts from a zero camera delta.
#[derive(Component, Debug, Clone)]
pub struct ScrollingTile {
    pub group: GroupId,
    pub size: Vec2,
    pub move_speed: f32,
    pub parallax: Vec2,
    last_camera_pos: Option<Vec2>,
}

impl ScrollingTile {
    /// Fails when the extent is not strictly positive on both axes; a tile
    /// without area cannot be tiled against its neighbors.
    pub fn new(
        group: GroupId,
        size: Vec2,
        move_speed: f32,
        parallax: Vec2,
    ) -> Result<Self, TileError> {
        if !(size.x > 0.0 && size.y > 0.0) {
            return Err(TileError::DegenerateExtent {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self {
            group,
            size,
            move_speed,
            parallax,
            last_camera_pos: None,
        })
    }

    /// Camera displacement since the previous frame, updating the stored
    /// position. Zero on the first call.
    pub fn camera_delta(&mut self, current: Vec2) -> Vec2 {
        let delta = match self.last_camera_pos {
            Some(prev) => current - prev,
            None => Vec2::ZERO,
        };
        self.last_camera_pos = Some(current);
        delta
    }
}

/// Tear down one tile: deregister first, then despawn the entity.
pub fn release_tile(commands: &mut Commands, registry: &mut TileRegistry, entity: Entity) {
    registry.unregister(entity);
    commands.entity(entity).despawn();
}
