use std::fmt;

/// Class identifier prepended to every segmentation record in single-class mode.
///
/// Bounding-box records use the zero-based convention, so their class
/// identifier is this value minus one.
pub const SEG_CLASS_ID: i64 = 1;

// One polygon traced from a mask: a class id followed by normalized,
// 6-decimal-rounded vertex coordinates in tracing order.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationRecord {
    pub class_id: i64,
    pub points: Vec<(f64, f64)>,
}

impl fmt::Display for SegmentationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_id)?;
        for &(x, y) in &self.points {
            write!(f, " {} {}", x, y)?;
        }
        Ok(())
    }
}

// The tight axis-aligned envelope of a segmentation record's vertices,
// in YOLO center/extent form.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBoxRecord {
    pub class_id: i64,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for BoundingBoxRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.class_id, self.x_center, self.y_center, self.width, self.height
        )
    }
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub total_files_processed: usize,
    pub total_polygons: usize,
    pub seg_files_written: usize,
    pub box_files_written: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Total mask files processed: {}", self.total_files_processed);
        log::info!("Total polygons extracted: {}", self.total_polygons);
        log::info!("Segmentation label files written: {}", self.seg_files_written);
        log::info!("Bounding-box label files written: {}", self.box_files_written);
    }
}
