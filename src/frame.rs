/// Per-refresh adapter boundary over the rasterizer core
use crate::raster::{PixelBuffer, Point, RasterError, rasterize};

/// Supplies point positions for one refresh.
/// Points are borrowed for the duration of a single execute call; the
/// processor never retains or mutates them.
pub trait PointSource {
    /// Point positions in placement order.
    fn points(&self) -> &[Point];

    /// Diagnostic name for info reporting.
    fn name(&self) -> &str;
}

/// Informational name/value row reported after each execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub name: &'static str,
    pub value: String,
}

/// Drives the rasterizer once per refresh with a fixed raster configuration.
///
/// Owns the execute-call counter and the diagnostic rows the original adapter
/// exposed. Dimensions are validated at construction so a processor can never
/// produce a malformed buffer.
pub struct FrameProcessor {
    width: usize,
    height: usize,
    execute_count: u64,
    last_point_count: usize,
}

impl FrameProcessor {
    pub fn new(width: usize, height: usize) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            execute_count: 0,
            last_point_count: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Monotonic count of execute calls made on this processor.
    pub fn execute_count(&self) -> u64 {
        self.execute_count
    }

    /// Rasterizes the source's points into a fresh buffer.
    /// An absent source behaves as the empty sequence: the whole raster is
    /// the background sentinel, never an error.
    pub fn execute(
        &mut self,
        source: Option<&dyn PointSource>,
    ) -> Result<PixelBuffer, RasterError> {
        self.execute_count += 1;

        let points = source.map(|s| s.points()).unwrap_or(&[]);
        self.last_point_count = points.len();

        rasterize(points, self.width, self.height)
    }

    /// Informational rows describing the most recent execute:
    /// `executeCount`, `step` (cells filled with point data), `points`.
    pub fn info_rows(&self) -> Vec<InfoRow> {
        let capacity = self.width * self.height;
        let step = self.last_point_count.min(capacity);

        vec![
            InfoRow {
                name: "executeCount",
                value: self.execute_count.to_string(),
            },
            InfoRow {
                name: "step",
                value: step.to_string(),
            },
            InfoRow {
                name: "points",
                value: self.last_point_count.to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Vec<Point>);

    impl PointSource for FixedSource {
        fn points(&self) -> &[Point] {
            &self.0
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn execute_count_is_monotonic() {
        let mut processor = FrameProcessor::new(4, 4).unwrap();
        assert_eq!(processor.execute_count(), 0);

        processor.execute(None).unwrap();
        processor.execute(None).unwrap();
        processor.execute(None).unwrap();
        assert_eq!(processor.execute_count(), 3);
    }

    #[test]
    fn absent_source_rasterizes_background() {
        let mut processor = FrameProcessor::new(2, 2).unwrap();
        let buffer = processor.execute(None).unwrap();
        for cell_idx in 0..4 {
            assert_eq!(buffer.cell(cell_idx), &[0.0, 0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn source_points_reach_the_buffer_in_order() {
        let source = FixedSource(vec![
            Point::new(1.0, 2.0, 3.0),
            Point::new(4.0, 5.0, 6.0),
        ]);
        let mut processor = FrameProcessor::new(2, 1).unwrap();
        let buffer = processor.execute(Some(&source)).unwrap();
        assert_eq!(buffer.cell(0), &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(buffer.cell(1), &[4.0, 5.0, 6.0, 1.0]);
    }

    #[test]
    fn info_rows_reflect_last_execute() {
        let source = FixedSource(vec![Point::new(0.0, 0.0, 0.0); 7]);
        let mut processor = FrameProcessor::new(2, 2).unwrap();
        processor.execute(Some(&source)).unwrap();

        let rows = processor.info_rows();
        assert_eq!(rows[0], InfoRow { name: "executeCount", value: "1".into() });
        // 7 points against 4 cells: only 4 are placed.
        assert_eq!(rows[1], InfoRow { name: "step", value: "4".into() });
        assert_eq!(rows[2], InfoRow { name: "points", value: "7".into() });
    }

    #[test]
    fn zero_dimension_rejected_at_construction() {
        let result = FrameProcessor::new(0, 256);
        assert_eq!(
            result.err(),
            Some(RasterError::InvalidDimension {
                width: 0,
                height: 256
            })
        );
    }
}
