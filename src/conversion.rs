use image::GrayImage;

use crate::contour::{foreground_mask, trace_outer_contours};
use crate::types::{BoundingBoxRecord, SegmentationRecord, SEG_CLASS_ID};

/// Round a normalized coordinate to 6 decimal places.
fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Extract YOLO annotations from a decoded grayscale mask raster.
///
/// Returns one segmentation record and one bounding-box record per retained
/// contour, in tracing order. An all-background raster yields two empty
/// lists rather than an error.
pub fn extract_annotations(
    raster: &GrayImage,
) -> (Vec<SegmentationRecord>, Vec<BoundingBoxRecord>) {
    let (img_width, img_height) = raster.dimensions();
    let mask = foreground_mask(raster);

    let mut seg_records = Vec::new();
    let mut bbox_records = Vec::new();

    for contour in trace_outer_contours(&mask) {
        // YOLO requires at least 3 points for a valid segmentation
        if contour.len() < 3 {
            continue;
        }

        let points = contour
            .iter()
            .map(|p| {
                (
                    round6(p.x as f64 / img_width as f64),
                    round6(p.y as f64 / img_height as f64),
                )
            })
            .collect();

        let seg = SegmentationRecord {
            class_id: SEG_CLASS_ID,
            points,
        };
        let bbox = seg_to_bbox(&seg);

        seg_records.push(seg);
        bbox_records.push(bbox);
    }

    (seg_records, bbox_records)
}

/// Derive the bounding-box record for a segmentation record.
///
/// The box is the tight axis-aligned envelope of the polygon's normalized
/// vertices; the class id moves to the zero-based convention.
pub fn seg_to_bbox(seg: &SegmentationRecord) -> BoundingBoxRecord {
    let (x_min, y_min, x_max, y_max) = seg.points.iter().fold(
        (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
        |(x_min, y_min, x_max, y_max), &(x, y)| {
            (x_min.min(x), y_min.min(y), x_max.max(x), y_max.max(y))
        },
    );

    BoundingBoxRecord {
        class_id: seg.class_id - 1,
        x_center: (x_min + x_max) / 2.0,
        y_center: (y_min + y_max) / 2.0,
        width: x_max - x_min,
        height: y_max - y_min,
    }
}
