use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub heightmap_loaded: bool,
    pub terrain_created: bool,
}
