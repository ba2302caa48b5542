//! Point cloud to texture conversion: ordered 3D point positions become a
//! dense RGBA float raster, one point per pixel in row-major scan order.

pub mod bounds;
pub mod constants;
pub mod dds_writer;
pub mod frame;
pub mod laz;
pub mod metadata;
pub mod raster;

pub use frame::{FrameProcessor, InfoRow, PointSource};
pub use raster::{PixelBuffer, Point, RasterError, rasterize};
