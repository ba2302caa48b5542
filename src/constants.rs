/// Shared configuration for point to texture conversion

/// Default raster width, matching the original fixed-size plugin output
pub const DEFAULT_WIDTH: usize = 128;

/// Default raster height
pub const DEFAULT_HEIGHT: usize = 256;

/// Channels per pixel (RGBA)
pub const CHANNELS: usize = 4;

/// Alpha written to every cell, point-backed and background alike
pub const BACKGROUND_ALPHA: f32 = 1.0;
