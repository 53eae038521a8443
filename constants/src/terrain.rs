/// Planar extent of the terrain mesh in world units (width and depth)
pub const TERRAIN_SIZE: f32 = 2400.0;

/// Multiplier applied to decoded height samples before displacement.
/// Height samples stay in the 0-255 byte domain; must be greater than 0.
pub const TERRAIN_HEIGHT_SCALE: f32 = 0.75;

/// Base colour of the terrain surface material (linear RGB)
pub const TERRAIN_SURFACE_COLOUR: [f32; 3] = [0.8, 0.8, 1.0];
