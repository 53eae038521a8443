use bevy::prelude::*;

use crate::engine::assets::terrain_assets::TerrainAssets;
use crate::engine::assets::terrain_manifest::TerrainManifest;
use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::loading::progress::LoadingProgress;

use constants::path::{MANIFEST_FILE_NAME, RELATIVE_TERRAIN_PATH};

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<TerrainManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    let manifest_path = format!("{RELATIVE_TERRAIN_PATH}/{MANIFEST_FILE_NAME}");
    println!("Loading terrain manifest from: {manifest_path}");
    manifest_loader.handle = Some(asset_server.load(&manifest_path));
}

// Adopt the manifest and start the heightmap load when it resolves
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut assets: ResMut<TerrainAssets>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<TerrainManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    if let Some(ref handle) = manifest_loader.handle {
        if let Some(manifest) = manifests.get(handle) {
            println!("✓ Terrain manifest loaded");
            assets.manifest = Some(handle.clone());
            commands.insert_resource(manifest.clone());
            loading_progress.manifest_loaded = true;

            // Size the camera orbit to the terrain before it appears
            commands.insert_resource(ViewportCamera::with_terrain_size(manifest.size));

            assets.heightmap = asset_server.load(&manifest.heightmap);
        }
    }
}
