use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::terrain_assets::TerrainAssets;
use crate::engine::assets::terrain_manifest::TerrainManifest;
use crate::engine::camera::viewport_camera::{ViewportCamera, camera_controller, spawn_camera};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_default_plugins;
use crate::engine::loading::heightmap_loader::check_heightmap_loading;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::terrain::create_terrain_when_ready;
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_ui};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers TerrainManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<TerrainManifest>::new(&["json"]))
        .init_state::<AppState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<TerrainAssets>()
        .init_resource::<ViewportCamera>()
        .add_systems(Startup, (start_loading, setup))
        .add_systems(
            Update,
            (
                load_manifest_system,
                check_heightmap_loading,
                create_terrain_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(Update, (camera_controller, fps_text_update_system));

    app
}

/// Spawn the fixed parts of the scene: camera, lights and the UI overlay
fn setup(mut commands: Commands) {
    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_ui(&mut commands);
}
