//! Scene construction around the terrain core.
//!
//! Spawns the light rig and drives the decode → build → spawn pipeline
//! once the heightmap assets are available.

/// Light rig spawning from the fixed-schema light description.
pub mod lighting;

/// Terrain construction driver: decodes the heightmap, builds the
/// displaced mesh and spawns the terrain entity, aborting on failure.
pub mod terrain;
