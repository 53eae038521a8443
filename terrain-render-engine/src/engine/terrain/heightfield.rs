use crate::engine::terrain::error::TerrainError;

/// Bytes per pixel in the decoded image buffer (R, G, B, A)
const CHANNELS_PER_PIXEL: usize = 4;

/// Elevation samples decoded from a square heightmap image.
///
/// Samples are stored row-major in image pixel order, one per pixel, and
/// stay in the 0-255 byte domain; scaling to world units is the mesh
/// builder's job.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    samples: Vec<f32>,
    size: usize,
}

impl HeightField {
    /// Decode raw RGBA pixel data into a height field.
    ///
    /// Each sample is the unweighted mean of the pixel's R, G and B
    /// channels; alpha is ignored. The image must be square, otherwise
    /// [`TerrainError::ShapeMismatch`] names the offending dimensions.
    pub fn decode(pixels: &[u8], width: u32, height: u32) -> Result<Self, TerrainError> {
        if width != height {
            return Err(TerrainError::ShapeMismatch { width, height });
        }

        let pixel_count = width as usize * height as usize;
        debug_assert!(
            pixels.len() >= pixel_count * CHANNELS_PER_PIXEL,
            "pixel buffer shorter than declared {width} x {height} dimensions"
        );

        let samples = pixels[..pixel_count * CHANNELS_PER_PIXEL]
            .chunks_exact(CHANNELS_PER_PIXEL)
            .map(|px| (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0)
            .collect();

        Ok(Self {
            samples,
            size: width as usize,
        })
    }

    /// Number of samples (one per source pixel)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Side length of the source image in pixels
    pub fn size(&self) -> usize {
        self.size
    }

    /// Grid segment count that aligns one vertex with every sample.
    ///
    /// A grid of `segments + 1` vertices per axis matches an image of
    /// `size` pixels per axis exactly, without resampling.
    pub fn edge_segments(&self) -> usize {
        self.size.saturating_sub(1)
    }

    /// Samples in row-major pixel order
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expand per-pixel grey values into an opaque RGBA buffer
    fn rgba_from_grey(values: &[u8]) -> Vec<u8> {
        values.iter().flat_map(|&v| [v, v, v, 255]).collect()
    }

    #[test]
    fn square_image_yields_one_sample_per_pixel() {
        for size in [1u32, 2, 3, 8] {
            let pixels = rgba_from_grey(&vec![7; (size * size) as usize]);
            let field = HeightField::decode(&pixels, size, size).unwrap();
            assert_eq!(field.len(), (size * size) as usize);
            assert_eq!(field.size(), size as usize);
        }
    }

    #[test]
    fn equal_channels_decode_to_the_channel_value() {
        for v in [0u8, 1, 77, 128, 254, 255] {
            let pixels = [v, v, v, 255];
            let field = HeightField::decode(&pixels, 1, 1).unwrap();
            assert_eq!(field.samples(), &[v as f32]);
        }
    }

    #[test]
    fn samples_average_the_three_colour_channels() {
        // R=30 G=60 B=90 -> (30+60+90)/3 = 60
        let pixels = [30, 60, 90, 255];
        let field = HeightField::decode(&pixels, 1, 1).unwrap();
        assert_eq!(field.samples(), &[60.0]);
    }

    #[test]
    fn alpha_channel_is_ignored() {
        let opaque = [120, 120, 120, 255];
        let transparent = [120, 120, 120, 0];
        let a = HeightField::decode(&opaque, 1, 1).unwrap();
        let b = HeightField::decode(&transparent, 1, 1).unwrap();
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn decoding_is_deterministic() {
        let pixels = rgba_from_grey(&[3, 14, 15, 92, 65, 35, 89, 79, 32]);
        let first = HeightField::decode(&pixels, 3, 3).unwrap();
        let second = HeightField::decode(&pixels, 3, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn samples_follow_row_major_pixel_order() {
        let pixels = rgba_from_grey(&[10, 20, 30, 40]);
        let field = HeightField::decode(&pixels, 2, 2).unwrap();
        assert_eq!(field.samples(), &[10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn non_square_image_is_rejected() {
        let pixels = rgba_from_grey(&[0; 8]);
        let err = HeightField::decode(&pixels, 4, 2).unwrap_err();
        assert_eq!(
            err,
            TerrainError::ShapeMismatch {
                width: 4,
                height: 2
            }
        );
    }

    #[test]
    fn edge_segments_is_one_less_than_the_image_side() {
        let pixels = rgba_from_grey(&[0; 9]);
        let field = HeightField::decode(&pixels, 3, 3).unwrap();
        assert_eq!(field.edge_segments(), 2);
    }
}
