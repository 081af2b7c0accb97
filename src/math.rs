use bevy::prelude::*;

/// Axis-aligned bounding box around a tile, from its center and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Aabb {
    pub fn from_center(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min_x: x - w / 2.0,
            max_x: x + w / 2.0,
            min_y: y - h / 2.0,
            max_y: y + h / 2.0,
        }
    }
}

/// Visible world-space region of an orthographic 2D camera.
///
/// The vertical half-extent comes from the window height and projection
/// scale; the horizontal half-extent follows from the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Viewport {
    pub fn from_camera(center: Vec2, vertical_half_extent: f32, aspect: f32) -> Self {
        let horizontal_half_extent = vertical_half_extent * aspect;
        Self {
            left: center.x - horizontal_half_extent,
            right: center.x + horizontal_half_extent,
            bottom: center.y - vertical_half_extent,
            top: center.y + vertical_half_extent,
        }
    }
}
