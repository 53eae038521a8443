/// Asset-relative directory holding terrain data
pub const RELATIVE_TERRAIN_PATH: &str = "terrain";

/// Terrain manifest file name within the terrain directory
pub const MANIFEST_FILE_NAME: &str = "manifest.json";
