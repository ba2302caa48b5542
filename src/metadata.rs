/// JSON metadata sidecar describing a generated texture
use crate::bounds::PointCloudBounds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sidecar metadata written next to each generated texture.
///
/// The raster contract drops overflow points silently; `dropped_points`
/// makes that loss observable here without changing buffer semantics.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextureMetadata {
    pub width: usize,
    pub height: usize,
    pub format: String,
    pub source: String,
    pub source_points: usize,
    pub rasterized_points: usize,
    pub dropped_points: usize,
    pub utilisation_percent: f32,
    pub normalized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<PointCloudBounds>,
    pub execute_count: u64,
}

impl TextureMetadata {
    pub fn new(
        width: usize,
        height: usize,
        format: &str,
        source: &str,
        source_points: usize,
        normalized: bool,
        bounds: Option<PointCloudBounds>,
        execute_count: u64,
    ) -> Self {
        let cell_count = width * height;
        let rasterized_points = source_points.min(cell_count);

        Self {
            width,
            height,
            format: format.to_string(),
            source: source.to_string(),
            source_points,
            rasterized_points,
            dropped_points: source_points - rasterized_points,
            utilisation_percent: (rasterized_points as f32 / cell_count as f32) * 100.0,
            normalized,
            bounds,
            execute_count,
        }
    }

    /// Write pretty-printed JSON to the given path.
    pub fn write(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        println!("Saved {}", path.display());
        Ok(())
    }

    /// Print summary for verification and debugging.
    pub fn print_summary(&self) {
        println!("Texture Summary:");
        println!("  Raster: {}x{} ({})", self.width, self.height, self.format);
        println!(
            "  Points: {} rasterized of {} ({:.1}% texture utilisation)",
            self.rasterized_points, self.source_points, self.utilisation_percent
        );

        if self.dropped_points > 0 {
            println!(
                "  Dropped: {} points beyond raster capacity",
                self.dropped_points
            );
        }

        if let Some(bounds) = &self.bounds {
            println!(
                "  Normalised bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                bounds.min_x, bounds.min_y, bounds.min_z, bounds.max_x, bounds.max_y, bounds.max_z
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropped_points_counted_against_capacity() {
        let metadata = TextureMetadata::new(2, 2, "RGBA32F", "cloud", 7, false, None, 1);
        assert_eq!(metadata.rasterized_points, 4);
        assert_eq!(metadata.dropped_points, 3);
        assert_eq!(metadata.utilisation_percent, 100.0);
    }

    #[test]
    fn underfilled_raster_drops_nothing() {
        let metadata = TextureMetadata::new(128, 256, "RGBA32F", "cloud", 100, false, None, 1);
        assert_eq!(metadata.rasterized_points, 100);
        assert_eq!(metadata.dropped_points, 0);
    }

    #[test]
    fn json_round_trip_preserves_fields() {
        let metadata = TextureMetadata::new(128, 256, "RGBA16F", "cloud", 500, true, None, 3);
        let json = serde_json::to_string(&metadata).unwrap();
        let back: TextureMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(back.width, 128);
        assert_eq!(back.height, 256);
        assert_eq!(back.format, "RGBA16F");
        assert_eq!(back.source_points, 500);
        assert_eq!(back.execute_count, 3);
        assert!(back.normalized);
        assert!(back.bounds.is_none());
    }
}
