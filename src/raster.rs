/// Point rasterizer placing ordered 3D points into a dense RGBA32F grid
use crate::constants::{BACKGROUND_ALPHA, CHANNELS};

/// Error types for rasterization operations.
#[derive(Debug, PartialEq, Eq)]
pub enum RasterError {
    InvalidDimension { width: usize, height: usize },
}

impl std::fmt::Display for RasterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterError::InvalidDimension { width, height } => {
                write!(f, "Invalid raster dimensions: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// A 3D point position from an upstream geometry source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Dense row-major RGBA32F grid produced by [`rasterize`].
/// Allocated fresh per call and handed to the caller whole; every cell is
/// initialised, so the data can be uploaded or written out as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl PixelBuffer {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw channel data, `width * height * 4` floats in row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consumes the buffer, returning the raw channel data.
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// RGBA channels of the cell at linear (row-major) index.
    /// Panics if `index >= width * height`.
    pub fn cell(&self, index: usize) -> &[f32] {
        let base_idx = index * CHANNELS;
        &self.data[base_idx..base_idx + CHANNELS]
    }
}

/// Rasterizes an ordered point sequence into a `width` x `height` RGBA32F
/// buffer, one point per cell in row-major scan order.
///
/// Cell `i` receives `(points[i].x, points[i].y, points[i].z, 1.0)` while
/// points remain, then the background sentinel `(0, 0, 0, 1.0)`. The mapping
/// is lossy: points beyond `width * height` are silently dropped. Coordinate
/// values pass through exactly; the operation is pure and deterministic.
pub fn rasterize(points: &[Point], width: usize, height: usize) -> Result<PixelBuffer, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimension { width, height });
    }

    let cell_count = width * height;
    let mut data = vec![0.0f32; cell_count * CHANNELS];

    for cell_idx in 0..cell_count {
        let base_idx = cell_idx * CHANNELS;
        if let Some(point) = points.get(cell_idx) {
            data[base_idx] = point.x;
            data[base_idx + 1] = point.y;
            data[base_idx + 2] = point.z;
        }
        data[base_idx + 3] = BACKGROUND_ALPHA;
    }

    Ok(PixelBuffer {
        width,
        height,
        data,
    })
}
