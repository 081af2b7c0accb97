use std::collections::HashMap;

use bevy::prelude::*;

/// Identifies one independently tiling set of backdrop tiles (one layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

impl Extremum {
    /// Which side of the anchor a snapped tile lands on: past the maximum
    /// (+1) or before the minimum (-1).
    pub fn offset_sign(self) -> f32 {
        match self {
            Extremum::Max => 1.0,
            Extremum::Min => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TileEntry {
    entity: Entity,
    position: Vec2,
}

/// Live set of scrolling tiles, grouped per backdrop layer.
///
/// Membership changes only at tile creation and release; positions are
/// synced once per frame after motion integration so extremal queries see
/// every tile's settled position regardless of iteration order. Entries keep
/// insertion order, which carries no semantics.
#[derive(Resource, Debug, Default)]
pub struct TileRegistry {
    groups: HashMap<GroupId, Vec<TileEntry>>,
}

impl TileRegistry {
    pub fn register(&mut self, group: GroupId, entity: Entity, position: Vec2) {
        self.groups
            .entry(group)
            .or_default()
            .push(TileEntry { entity, position });
    }

    /// Remove a tile from whichever group holds it. No-op when absent, so
    /// release order during teardown cannot fail.
    pub fn unregister(&mut self, entity: Entity) {
        for entries in self.groups.values_mut() {
            entries.retain(|e| e.entity != entity);
        }
        self.groups.retain(|_, entries| !entries.is_empty());
    }

    /// Record a tile's settled position for this frame's extremal queries.
    /// No-op for entities that were never registered.
    pub fn update_position(&mut self, group: GroupId, entity: Entity, position: Vec2) {
        if let Some(entries) = self.groups.get_mut(&group)
            && let Some(entry) = entries.iter_mut().find(|e| e.entity == entity)
        {
            entry.position = position;
        }
    }

    /// Maximum or minimum coordinate along `axis` across a group's tiles.
    /// `None` for an empty or unknown group: an empty set has no extremum.
    pub fn extremal_position(&self, group: GroupId, axis: Axis, extremum: Extremum) -> Option<f32> {
        let entries = self.groups.get(&group)?;
        let coords = entries.iter().map(|e| match axis {
            Axis::X => e.position.x,
            Axis::Y => e.position.y,
        });
        match extremum {
            Extremum::Max => coords.reduce(f32::max),
            Extremum::Min => coords.reduce(f32::min),
        }
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
