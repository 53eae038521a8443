use bevy::asset::RenderAssetUsages;
use bevy::math::Vec3;
use bevy::render::mesh::{Indices, Mesh, PrimitiveTopology};

use crate::engine::terrain::error::TerrainError;
use crate::engine::terrain::heightfield::HeightField;

use constants::terrain::TERRAIN_HEIGHT_SCALE;

/// Terrain geometry as plain vertex arrays, ready to hand to the renderer.
///
/// The grid lies in the XY plane with elevation along +Z. The scene layer
/// lays it onto the ground plane with a single fixed rotation at spawn
/// time; nothing here is re-derived per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Convert the plain vertex arrays into a renderer mesh
    pub fn into_mesh(self) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals);
        mesh.insert_indices(Indices::U32(self.indices));
        mesh
    }
}

/// Builds a regular grid mesh displaced by a height field.
///
/// Vertices are enumerated row-major to match the height field's pixel
/// order: the first row runs along the grid's top edge (+Y), columns
/// grow towards +X, and the grid is centred on the origin. A grid of
/// `segments + 1` vertices per axis therefore aligns exactly with a
/// square image of `segments + 1` pixels per axis.
///
/// `build` fails with [`TerrainError::VertexCountMismatch`] when the
/// vertex count does not equal the height field length; it never
/// truncates or resamples.
pub struct TerrainMeshBuilder {
    width: f32,
    depth: f32,
    segments: usize,
    height_scale: f32,
}

impl TerrainMeshBuilder {
    pub fn new(width: f32, depth: f32, segments: usize) -> Self {
        Self {
            width,
            depth,
            segments,
            height_scale: TERRAIN_HEIGHT_SCALE,
        }
    }

    /// Multiplier applied to each height sample before it is added to a
    /// vertex's elevation. Must be greater than zero.
    pub fn with_height_scale(mut self, scale: f32) -> Self {
        debug_assert!(scale > 0.0, "height scale must be greater than 0");
        self.height_scale = scale;
        self
    }

    /// Build the displaced grid with recomputed smooth normals.
    pub fn build(&self, heights: &HeightField) -> Result<TerrainMesh, TerrainError> {
        let side = self.segments + 1;
        let expected = side * side;
        if heights.len() != expected {
            return Err(TerrainError::VertexCountMismatch {
                expected,
                actual: heights.len(),
            });
        }

        let positions = self.displaced_positions(heights, side);
        let indices = grid_indices(self.segments, side);
        let normals = smooth_normals(&positions, &indices);

        Ok(TerrainMesh {
            positions,
            normals,
            indices,
        })
    }

    /// Flat grid vertices with each elevation offset by its height sample
    fn displaced_positions(&self, heights: &HeightField, side: usize) -> Vec<[f32; 3]> {
        let (step_x, step_y) = if self.segments == 0 {
            (0.0, 0.0)
        } else {
            (
                self.width / self.segments as f32,
                self.depth / self.segments as f32,
            )
        };
        let half_width = self.width * 0.5;
        let half_depth = self.depth * 0.5;
        let samples = heights.samples();

        let mut positions = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                let x = col as f32 * step_x - half_width;
                let y = half_depth - row as f32 * step_y;
                let z = samples[row * side + col] * self.height_scale;
                positions.push([x, y, z]);
            }
        }
        positions
    }
}

/// Two counter-clockwise triangles per grid cell, face normals along +Z
/// while the grid is flat
fn grid_indices(segments: usize, side: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(segments * segments * 6);
    for row in 0..segments {
        for col in 0..segments {
            let top_left = (row * side + col) as u32;
            let top_right = top_left + 1;
            let bottom_left = ((row + 1) * side + col) as u32;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[top_left, bottom_left, top_right]);
            indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
        }
    }
    indices
}

/// Per-vertex normals from the displaced positions.
///
/// Accumulates each triangle's unnormalised cross product at its three
/// vertices, then normalises. The cross-product magnitude is twice the
/// triangle area, so larger faces weigh more.
fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];
    for triangle in indices.chunks_exact(3) {
        let [i0, i1, i2] = [
            triangle[0] as usize,
            triangle[1] as usize,
            triangle[2] as usize,
        ];
        let p0 = Vec3::from(positions[i0]);
        let p1 = Vec3::from(positions[i1]);
        let p2 = Vec3::from(positions[i2]);
        let face_normal = (p1 - p0).cross(p2 - p0);
        accumulated[i0] += face_normal;
        accumulated[i1] += face_normal;
        accumulated[i2] += face_normal;
    }

    accumulated
        .iter()
        .map(|n| {
            let length = n.length();
            if length > f32::EPSILON {
                (*n / length).into()
            } else {
                // Vertices with no non-degenerate adjacent face keep the
                // flat grid's +Z normal
                [0.0, 0.0, 1.0]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    /// Decode an opaque grey image of the given side length
    fn grey_field(values: &[u8], size: u32) -> HeightField {
        let pixels: Vec<u8> = values.iter().flat_map(|&v| [v, v, v, 255]).collect();
        HeightField::decode(&pixels, size, size).unwrap()
    }

    fn assert_unit_length(normal: &[f32; 3]) {
        let length = Vec3::from(*normal).length();
        assert!(
            (length - 1.0).abs() < EPSILON,
            "normal {normal:?} has length {length}"
        );
    }

    #[test]
    fn grid_has_one_vertex_per_height_sample() {
        let field = grey_field(&[0; 9], 3);
        let mesh = TerrainMeshBuilder::new(2400.0, 2400.0, 2)
            .build(&field)
            .unwrap();
        assert_eq!(mesh.positions.len(), field.len());
        assert_eq!(mesh.normals.len(), field.len());
        assert_eq!(mesh.indices.len(), 2 * 2 * 6);
    }

    #[test]
    fn elevations_equal_sample_times_scale() {
        let field = grey_field(&[0, 10, 20, 30, 40, 50, 60, 70, 80], 3);
        let mesh = TerrainMeshBuilder::new(100.0, 100.0, 2)
            .with_height_scale(2.0)
            .build(&field)
            .unwrap();
        for (position, sample) in mesh.positions.iter().zip(field.samples()) {
            assert!((position[2] - sample * 2.0).abs() < EPSILON);
        }
    }

    #[test]
    fn mid_grey_image_displaces_every_vertex_uniformly() {
        // 3x3 all-128 image, two segments, unit scale: nine vertices each
        // raised by exactly 128, and the uniformly displaced grid stays
        // flat so every normal still points along +Z.
        let field = grey_field(&[128; 9], 3);
        let mesh = TerrainMeshBuilder::new(2400.0, 2400.0, 2)
            .with_height_scale(1.0)
            .build(&field)
            .unwrap();

        assert_eq!(mesh.positions.len(), 9);
        for position in &mesh.positions {
            assert_eq!(position[2], 128.0);
        }
        for normal in &mesh.normals {
            assert!((Vec3::from(*normal) - Vec3::Z).length() < EPSILON);
        }
    }

    #[test]
    fn raised_corner_changes_that_corners_normal() {
        // 2x2 image, one white corner: a single quad with one corner at
        // 255 and three at 0. The raised corner's recomputed normal must
        // differ measurably from the flat far corner's.
        let field = grey_field(&[255, 0, 0, 0], 2);
        let mesh = TerrainMeshBuilder::new(2.0, 2.0, 1)
            .with_height_scale(1.0)
            .build(&field)
            .unwrap();

        assert_eq!(mesh.positions.len(), 4);
        assert_eq!(mesh.positions[0][2], 255.0);
        assert_eq!(mesh.positions[3][2], 0.0);

        for normal in &mesh.normals {
            assert_unit_length(normal);
        }

        let raised = Vec3::from(mesh.normals[0]);
        let flat = Vec3::from(mesh.normals[3]);
        assert!((flat - Vec3::Z).length() < EPSILON);
        assert!(raised.dot(flat) < 0.1);
    }

    #[test]
    fn normals_are_unit_length_after_displacement() {
        let field = grey_field(&[0, 200, 15, 90, 255, 5, 60, 30, 180], 3);
        let mesh = TerrainMeshBuilder::new(10.0, 10.0, 2)
            .with_height_scale(0.75)
            .build(&field)
            .unwrap();
        for normal in &mesh.normals {
            assert_unit_length(normal);
        }
    }

    #[test]
    fn grid_is_centred_with_requested_extents() {
        let field = grey_field(&[0; 9], 3);
        let mesh = TerrainMeshBuilder::new(2400.0, 1200.0, 2)
            .build(&field)
            .unwrap();

        // Row-major from the top-left corner, matching pixel order
        assert_eq!(mesh.positions[0], [-1200.0, 600.0, 0.0]);
        assert_eq!(mesh.positions[2], [1200.0, 600.0, 0.0]);
        assert_eq!(mesh.positions[6], [-1200.0, -600.0, 0.0]);
        assert_eq!(mesh.positions[8], [1200.0, -600.0, 0.0]);
        assert_eq!(mesh.positions[4], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn wrong_length_height_field_is_rejected() {
        let field = grey_field(&[0; 9], 3);
        let err = TerrainMeshBuilder::new(100.0, 100.0, 1)
            .build(&field)
            .unwrap_err();
        assert_eq!(
            err,
            TerrainError::VertexCountMismatch {
                expected: 4,
                actual: 9
            }
        );
    }

    #[test]
    fn renderer_mesh_carries_positions_normals_and_indices() {
        let field = grey_field(&[0, 50, 100, 150], 2);
        let terrain_mesh = TerrainMeshBuilder::new(10.0, 10.0, 1)
            .build(&field)
            .unwrap();
        let index_count = terrain_mesh.indices.len();

        let mesh = terrain_mesh.into_mesh();
        assert_eq!(mesh.count_vertices(), 4);
        assert_eq!(
            mesh.indices().map(|indices| indices.len()),
            Some(index_count)
        );
        assert!(mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some());
    }
}
