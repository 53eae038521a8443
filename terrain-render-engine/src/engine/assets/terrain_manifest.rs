use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::terrain::{TERRAIN_HEIGHT_SCALE, TERRAIN_SIZE};

/// Terrain load configuration as a Bevy asset. Mirrors the JSON structure
/// of `assets/terrain/manifest.json` exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct TerrainManifest {
    /// Asset-relative path of the square heightmap image
    pub heightmap: String,

    /// Planar extent of the terrain in world units (width and depth)
    #[serde(default = "default_size")]
    pub size: f32,

    /// Multiplier applied to decoded height samples before displacement
    #[serde(default = "default_height_scale")]
    pub height_scale: f32,
}

fn default_size() -> f32 {
    TERRAIN_SIZE
}

fn default_height_scale() -> f32 {
    TERRAIN_HEIGHT_SCALE
}
