use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::registry::{Axis, Extremum, GroupId, TileRegistry};
use super::tile::ScrollingTile;
use crate::math::{Aabb, Viewport};

/// Teleport tiles that scrolled fully out of view back to the far side of
/// their group's formation.
///
/// The two sides of one axis are mutually exclusive, but X and Y are checked
/// independently: a diagonal camera move may snap a tile on both axes in the
/// same frame.
#[allow(clippy::type_complexity)]
pub fn reposition_tiles(
    registry: Res<TileRegistry>,
    camera_query: Query<(&Transform, &Projection), With<Camera2d>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut tile_query: Query<(&ScrollingTile, &mut Transform), Without<Camera2d>>,
) {
    let Ok((camera_tf, projection)) = camera_query.single() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    if window.height() <= 0.0 {
        return;
    }

    let proj_scale = match projection {
        Projection::Orthographic(ortho) => ortho.scale,
        _ => 1.0,
    };
    let vertical_half = window.height() / 2.0 * proj_scale;
    let aspect = window.width() / window.height();
    let viewport = Viewport::from_camera(camera_tf.translation.truncate(), vertical_half, aspect);

    for (tile, mut transform) in &mut tile_query {
        let pos = transform.translation.truncate();
        if let Some(next) = resolve_reposition(&registry, tile.group, pos, tile.size, &viewport) {
            transform.translation.x = next.x;
            transform.translation.y = next.y;
        }
    }
}

/// Decide where an off-screen tile snaps to, if anywhere.
///
/// Exit and anchor per side (anchors are queried over the group's settled
/// positions, the tile itself included):
///
///   past the left edge   → rightmost tile + width
///   past the right edge  → leftmost tile - width
///   below the bottom     → topmost tile + height
///   above the top        → bottommost tile - height
///
/// With a single live tile the anchor is the tile's own position, so it
/// leapfrogs itself by exactly one extent. Returns `None` when the tile is
/// at least partially visible on both axes or every fired query was
/// degenerate.
pub fn resolve_reposition(
    registry: &TileRegistry,
    group: GroupId,
    position: Vec2,
    size: Vec2,
    viewport: &Viewport,
) -> Option<Vec2> {
    let bounds = Aabb::from_center(position.x, position.y, size.x, size.y);

    let x_exit = if bounds.max_x < viewport.left {
        Some(Extremum::Max)
    } else if bounds.min_x > viewport.right {
        Some(Extremum::Min)
    } else {
        None
    };
    let y_exit = if bounds.max_y < viewport.bottom {
        Some(Extremum::Max)
    } else if bounds.min_y > viewport.top {
        Some(Extremum::Min)
    } else {
        None
    };

    let mut next = position;
    let mut snapped = false;
    if let Some(extremum) = x_exit
        && let Some(anchor) = anchor_or_warn(registry, group, Axis::X, extremum)
    {
        next.x = anchor + extremum.offset_sign() * size.x;
        snapped = true;
    }
    if let Some(extremum) = y_exit
        && let Some(anchor) = anchor_or_warn(registry, group, Axis::Y, extremum)
    {
        next.y = anchor + extremum.offset_sign() * size.y;
        snapped = true;
    }
    snapped.then_some(next)
}

fn anchor_or_warn(
    registry: &TileRegistry,
    group: GroupId,
    axis: Axis,
    extremum: Extremum,
) -> Option<f32> {
    let anchor = registry.extremal_position(group, axis, extremum);
    if anchor.is_none() {
        warn!("extremal query on empty tile group {group:?}, reposition skipped this frame");
    }
    anchor
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP: GroupId = GroupId(0);
    const SIZE: Vec2 = Vec2::new(4.0, 4.0);

    fn registry_with(positions: &[(f32, f32)]) -> TileRegistry {
        let mut world = World::new();
        let mut reg = TileRegistry::default();
        for &(x, y) in positions {
            let entity = world.spawn_empty().id();
            reg.register(GROUP, entity, Vec2::new(x, y));
        }
        reg
    }

    fn centered_viewport() -> Viewport {
        Viewport::from_camera(Vec2::ZERO, 3.0, 1.0)
    }

    #[test]
    fn exit_left_snaps_past_rightmost() {
        // Right edge -6 + 2 = -4 sits past the left viewport edge at -3.
        let reg = registry_with(&[(-6.0, 0.0), (0.0, 0.0), (4.0, 0.0)]);
        let next = resolve_reposition(&reg, GROUP, Vec2::new(-6.0, 0.0), SIZE, &centered_viewport());
        assert_eq!(next, Some(Vec2::new(8.0, 0.0)));
    }

    #[test]
    fn exit_right_snaps_before_leftmost() {
        let reg = registry_with(&[(-4.0, 0.0), (0.0, 0.0), (6.0, 0.0)]);
        let next = resolve_reposition(&reg, GROUP, Vec2::new(6.0, 0.0), SIZE, &centered_viewport());
        assert_eq!(next, Some(Vec2::new(-8.0, 0.0)));
    }

    #[test]
    fn exit_bottom_snaps_above_topmost() {
        let reg = registry_with(&[(0.0, -6.0), (0.0, 0.0), (0.0, 4.0)]);
        let next = resolve_reposition(&reg, GROUP, Vec2::new(0.0, -6.0), SIZE, &centered_viewport());
        assert_eq!(next, Some(Vec2::new(0.0, 8.0)));
    }

    #[test]
    fn exit_top_snaps_below_bottommost() {
        let reg = registry_with(&[(0.0, -4.0), (0.0, 0.0), (0.0, 6.0)]);
        let next = resolve_reposition(&reg, GROUP, Vec2::new(0.0, 6.0), SIZE, &centered_viewport());
        assert_eq!(next, Some(Vec2::new(0.0, -8.0)));
    }

    #[test]
    fn snap_leaves_other_axis_untouched() {
        let reg = registry_with(&[(-6.0, 1.25), (0.0, 0.0), (4.0, 0.0)]);
        let next =
            resolve_reposition(&reg, GROUP, Vec2::new(-6.0, 1.25), SIZE, &centered_viewport());
        assert_eq!(next, Some(Vec2::new(8.0, 1.25)));
    }

    #[test]
    fn snapped_tile_is_no_longer_past_its_exit_edge() {
        let reg = registry_with(&[(-6.0, 0.0), (0.0, 0.0), (4.0, 0.0)]);
        let viewport = centered_viewport();
        let next = resolve_reposition(&reg, GROUP, Vec2::new(-6.0, 0.0), SIZE, &viewport).unwrap();
        let bounds = Aabb::from_center(next.x, next.y, SIZE.x, SIZE.y);
        assert!(bounds.max_x >= viewport.left);
    }

    #[test]
    fn diagonal_exit_snaps_both_axes() {
        let reg = registry_with(&[(-6.0, -6.0), (0.0, 0.0), (4.0, 4.0)]);
        let next =
            resolve_reposition(&reg, GROUP, Vec2::new(-6.0, -6.0), SIZE, &centered_viewport());
        assert_eq!(next, Some(Vec2::new(8.0, 8.0)));
    }

    #[test]
    fn visible_tile_stays_put() {
        let reg = registry_with(&[(0.0, 0.0)]);
        let next = resolve_reposition(&reg, GROUP, Vec2::ZERO, SIZE, &centered_viewport());
        assert_eq!(next, None);
    }

    #[test]
    fn tile_touching_the_edge_stays_put() {
        // Right edge exactly on the left viewport edge: not yet fully outside.
        let reg = registry_with(&[(-5.0, 0.0)]);
        let next = resolve_reposition(&reg, GROUP, Vec2::new(-5.0, 0.0), SIZE, &centered_viewport());
        assert_eq!(next, None);
    }

    #[test]
    fn single_tile_snaps_past_itself() {
        // Viewport centered at x=20 puts the lone tile fully off the left
        // edge; the extremal anchor is the tile's own position.
        let reg = registry_with(&[(10.0, 0.0)]);
        let viewport = Viewport::from_camera(Vec2::new(20.0, 0.0), 3.0, 1.0);
        let next = resolve_reposition(&reg, GROUP, Vec2::new(10.0, 0.0), SIZE, &viewport);
        assert_eq!(next, Some(Vec2::new(14.0, 0.0)));
    }

    #[test]
    fn empty_group_skips_the_snap() {
        let reg = TileRegistry::default();
        let viewport = Viewport::from_camera(Vec2::new(20.0, 0.0), 3.0, 1.0);
        let next = resolve_reposition(&reg, GROUP, Vec2::new(10.0, 0.0), SIZE, &viewport);
        assert_eq!(next, None);
    }
}
