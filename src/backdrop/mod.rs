pub mod registry;
pub mod reposition;
pub mod scroll;
pub mod spawn;
pub mod tile;

use bevy::prelude::*;

use crate::config::AppState;
use crate::sets::AppSet;
use registry::TileRegistry;

pub struct BackdropPlugin;

impl Plugin for BackdropPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileRegistry>()
            .init_resource::<spawn::PendingLayers>()
            .add_systems(OnEnter(AppState::Ready), spawn::queue_layers)
            .add_systems(
                Update,
                (
                    spawn::spawn_ready_layers,
                    scroll::scroll_tiles,
                    scroll::sync_registry,
                    reposition::reposition_tiles,
                )
                    .chain()
                    .in_set(AppSet::Backdrop)
                    .run_if(in_state(AppState::Ready)),
            );
    }
}
