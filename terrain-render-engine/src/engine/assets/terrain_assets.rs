use bevy::prelude::*;

use crate::engine::assets::terrain_manifest::TerrainManifest;

/// Handles for everything a terrain load depends on.
/// `is_loaded` flips once the terrain entity has been spawned.
#[derive(Resource, Default)]
pub struct TerrainAssets {
    pub manifest: Option<Handle<TerrainManifest>>,
    pub heightmap: Handle<Image>,
    pub is_loaded: bool,
}
