use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::terrain_assets::TerrainAssets;
use crate::engine::loading::progress::LoadingProgress;

// Check whether the heightmap image finished loading.
// A failed load is terminal: report it and abort instead of rendering a
// scene without terrain.
pub fn check_heightmap_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<TerrainAssets>,
    asset_server: Res<AssetServer>,
    mut exit: EventWriter<AppExit>,
) {
    if loading_progress.heightmap_loaded || !loading_progress.manifest_loaded {
        return;
    }

    match asset_server.get_load_state(&assets.heightmap) {
        Some(LoadState::Loaded) => {
            println!("✓ Heightmap image loaded");
            loading_progress.heightmap_loaded = true;
        }
        Some(LoadState::Failed(err)) => {
            error!("Failed to load heightmap image: {err}");
            exit.write(AppExit::error());
        }
        _ => {}
    }
}
