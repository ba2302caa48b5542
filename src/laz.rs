/// LAS/LAZ point source for the rasterizer
use crate::bounds::PointCloudBounds;
use crate::frame::PointSource;
use crate::raster::Point;
use indicatif::{ProgressBar, ProgressStyle};
use las::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Create LAS file reader for point cloud access.
/// Handles both .las and .laz compressed formats.
pub fn create_reader(file_path: &Path) -> Result<Reader, Box<dyn std::error::Error>> {
    let file = File::open(file_path)?;
    let buf_reader = BufReader::new(file);
    Ok(Reader::new(buf_reader)?)
}

/// Point source backed by a LAS/LAZ file.
///
/// Loads all point positions up front, narrowing f64 world coordinates to
/// f32 before they reach the rasterizer. With normalisation enabled the
/// coordinates are remapped to 0-1 against the cloud's bounds instead.
pub struct LasPointSource {
    name: String,
    points: Vec<Point>,
    bounds: Option<PointCloudBounds>,
}

impl LasPointSource {
    /// Load point positions from a .las or .laz file.
    /// A file with zero points yields an empty source, not an error.
    pub fn load(file_path: &Path, normalize: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let mut reader = create_reader(file_path)?;
        let total_points = reader.header().number_of_points() as usize;

        let pb = ProgressBar::new(total_points as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} points ({percent}%) {msg}")
                .unwrap()
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Loading points");

        let mut coords = Vec::with_capacity(total_points);
        for (idx, point_result) in reader.points().enumerate() {
            let point = point_result?;
            coords.push((point.x, point.y, point.z));

            if idx % 50_000 == 0 {
                pb.set_position(idx as u64);
            }
        }
        pb.finish_with_message("Points loaded");

        let bounds = if normalize {
            Some(PointCloudBounds::from_coords(&coords))
        } else {
            None
        };

        let points = match &bounds {
            Some(b) => coords
                .iter()
                .map(|&(x, y, z)| {
                    Point::new(b.normalize_x(x), b.normalize_y(y), b.normalize_z(z))
                })
                .collect(),
            None => coords
                .iter()
                .map(|&(x, y, z)| Point::new(x as f32, y as f32, z as f32))
                .collect(),
        };

        let name = file_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Ok(Self {
            name,
            points,
            bounds,
        })
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Bounds used for normalisation, when it was requested.
    pub fn bounds(&self) -> Option<&PointCloudBounds> {
        self.bounds.as_ref()
    }
}

impl PointSource for LasPointSource {
    fn points(&self) -> &[Point] {
        &self.points
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Log coordinate system and file information for debugging.
pub fn log_file_info(file_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let reader = create_reader(file_path)?;
    let header = reader.header();

    println!("LAS/LAZ File Information:");
    println!("  File: {}", file_path.display());
    println!(
        "  Version: {}.{}",
        header.version().major,
        header.version().minor
    );
    println!("  Points: {}", header.number_of_points());
    println!("  Point format: {:?}", header.point_format().to_u8());

    let x_scale = header.transforms().x.scale;
    let y_scale = header.transforms().y.scale;
    let z_scale = header.transforms().z.scale;
    println!(
        "  Scale factors: X={}, Y={}, Z={}",
        x_scale, y_scale, z_scale
    );

    println!();
    Ok(())
}
