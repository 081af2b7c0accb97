pub mod defs;
pub mod hot_reload;
pub mod loader;

use bevy::asset::LoadState;
use bevy::prelude::*;

use defs::{BackdropConfig, BackdropConfigAsset, CameraDrift};
use loader::BackdropConfigLoader;

const CONFIG_PATH: &str = "data/sky.backdrop.ron";

/// Application state: Loading waits for the backdrop config, Ready runs the
/// scene.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
}

/// Keeps the config handle alive for load polling and hot reload.
#[derive(Resource)]
pub struct ConfigHandle(pub Handle<BackdropConfigAsset>);

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<BackdropConfigAsset>()
            .register_asset_loader(BackdropConfigLoader)
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                hot_reload::hot_reload_backdrop.run_if(in_state(AppState::Ready)),
            );
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle = asset_server.load::<BackdropConfigAsset>(CONFIG_PATH);
    commands.insert_resource(ConfigHandle(handle));
}

fn check_loading(
    mut commands: Commands,
    handle: Res<ConfigHandle>,
    assets: Res<Assets<BackdropConfigAsset>>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if let LoadState::Failed(_) = asset_server.load_state(&handle.0) {
        error!("Failed to load backdrop config — check assets/{CONFIG_PATH} exists and is valid");
        return;
    }
    let Some(asset) = assets.get(&handle.0) else {
        return; // not loaded yet
    };

    commands.insert_resource(BackdropConfig {
        layers: asset.layers.clone(),
    });
    commands.insert_resource(CameraDrift {
        velocity: Vec2::new(asset.camera.drift_x, asset.camera.drift_y),
    });
    next_state.set(AppState::Ready);
    info!(
        "Backdrop config loaded ({} layers), entering Ready state",
        asset.layers.len()
    );
}
