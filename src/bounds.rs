/// Coordinate bounds tracking and normalisation for point sources
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointCloudBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl PointCloudBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            min_z: f64::INFINITY,
            max_z: f64::NEG_INFINITY,
        }
    }

    /// Update bounds with a new point
    pub fn update(&mut self, x: f64, y: f64, z: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
    }

    /// Merge another bounds into this one
    pub fn merge(&mut self, other: &PointCloudBounds) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
        self.min_z = self.min_z.min(other.min_z);
        self.max_z = self.max_z.max(other.max_z);
    }

    /// Calculate bounds over raw coordinates in parallel chunks.
    /// Shows progress while reducing; large clouds make this worthwhile.
    pub fn from_coords(coords: &[(f64, f64, f64)]) -> Self {
        let pb = ProgressBar::new(coords.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} points ({percent}%) {msg}")
                .unwrap()
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Calculating bounds");

        let bounds = coords
            .par_chunks(25_000)
            .map(|chunk| {
                let mut local_bounds = PointCloudBounds::new();
                for &(x, y, z) in chunk {
                    local_bounds.update(x, y, z);
                }

                pb.inc(chunk.len() as u64);
                local_bounds
            })
            .reduce_with(|mut a, b| {
                a.merge(&b);
                a
            })
            .unwrap_or_else(PointCloudBounds::new);

        pb.finish_with_message("Bounds calculated");
        bounds
    }

    /// Normalise X coordinate to 0-1 range.
    /// A degenerate axis (zero extent) maps to 0.0.
    pub fn normalize_x(&self, x: f64) -> f32 {
        normalize_axis(x, self.min_x, self.max_x)
    }

    /// Normalise Y coordinate to 0-1 range
    pub fn normalize_y(&self, y: f64) -> f32 {
        normalize_axis(y, self.min_y, self.max_y)
    }

    /// Normalise Z coordinate to 0-1 range
    pub fn normalize_z(&self, z: f64) -> f32 {
        normalize_axis(z, self.min_z, self.max_z)
    }
}

fn normalize_axis(value: f64, min: f64, max: f64) -> f32 {
    let extent = max - min;
    if extent == 0.0 {
        return 0.0;
    }
    ((value - min) / extent) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_tracks_extremes() {
        let mut bounds = PointCloudBounds::new();
        bounds.update(1.0, -2.0, 3.0);
        bounds.update(-4.0, 5.0, 0.5);

        assert_eq!(bounds.min_x, -4.0);
        assert_eq!(bounds.max_x, 1.0);
        assert_eq!(bounds.min_y, -2.0);
        assert_eq!(bounds.max_y, 5.0);
        assert_eq!(bounds.min_z, 0.5);
        assert_eq!(bounds.max_z, 3.0);
    }

    #[test]
    fn from_coords_matches_sequential_update() {
        let coords: Vec<(f64, f64, f64)> = (0..1000)
            .map(|i| (i as f64 * 0.7, -(i as f64), (i % 13) as f64))
            .collect();

        let parallel = PointCloudBounds::from_coords(&coords);

        let mut sequential = PointCloudBounds::new();
        for &(x, y, z) in &coords {
            sequential.update(x, y, z);
        }

        assert_eq!(parallel.min_x, sequential.min_x);
        assert_eq!(parallel.max_x, sequential.max_x);
        assert_eq!(parallel.min_y, sequential.min_y);
        assert_eq!(parallel.max_y, sequential.max_y);
        assert_eq!(parallel.min_z, sequential.min_z);
        assert_eq!(parallel.max_z, sequential.max_z);
    }

    #[test]
    fn normalisation_spans_zero_to_one() {
        let mut bounds = PointCloudBounds::new();
        bounds.update(10.0, 0.0, -5.0);
        bounds.update(20.0, 4.0, 5.0);

        assert_eq!(bounds.normalize_x(10.0), 0.0);
        assert_eq!(bounds.normalize_x(20.0), 1.0);
        assert_eq!(bounds.normalize_x(15.0), 0.5);
        assert_eq!(bounds.normalize_z(0.0), 0.5);
    }

    #[test]
    fn degenerate_axis_normalises_to_zero() {
        let mut bounds = PointCloudBounds::new();
        bounds.update(3.0, 1.0, 2.0);
        bounds.update(3.0, 9.0, 2.0);

        assert_eq!(bounds.normalize_x(3.0), 0.0);
        assert_eq!(bounds.normalize_z(2.0), 0.0);
    }
}
