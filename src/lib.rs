//! Binary mask to YOLO format converter
//!
//! This library converts binary segmentation mask images (single foreground
//! value 255) into YOLO text annotations: polygon segmentation labels and
//! the bounding boxes derived from them.

pub mod config;
pub mod contour;
pub mod conversion;
pub mod dataset;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::Args;
pub use conversion::{extract_annotations, seg_to_bbox};
pub use dataset::process_mask_directory;
pub use io::{read_mask, save_label_file};
pub use types::{BoundingBoxRecord, ProcessingStats, SegmentationRecord, SEG_CLASS_ID};
pub use utils::label_base_name;
