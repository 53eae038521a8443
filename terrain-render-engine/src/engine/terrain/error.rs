use thiserror::Error;

/// Failures raised while turning a heightmap image into terrain geometry.
///
/// Both variants are terminal for the load attempt: there is no fallback
/// height field and no partially displaced mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TerrainError {
    /// The heightmap image is not square, so pixels cannot align 1:1
    /// with grid vertices.
    #[error("terrain heightmap requires equal width and height, got {width} x {height}")]
    ShapeMismatch { width: u32, height: u32 },

    /// The height field length does not equal the grid's vertex count.
    #[error("grid has {expected} vertices but the height field holds {actual} samples")]
    VertexCountMismatch { expected: usize, actual: usize },
}
