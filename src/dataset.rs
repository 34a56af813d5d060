use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Args;
use crate::conversion::extract_annotations;
use crate::io::{read_mask, save_label_file};
use crate::types::ProcessingStats;
use crate::utils::{create_progress_bar, label_base_name};

// Mask file extensions recognized in the input directory. The match is
// case-sensitive and the listing is non-recursive.
const MASK_EXTENSIONS: &[&str] = &["png", "jpg"];

/// Collect the mask image files directly inside a directory, in the file
/// system's native iteration order.
fn collect_mask_files(mask_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut mask_files = Vec::new();
    for entry in fs::read_dir(mask_dir)? {
        let path = entry?.path();
        let is_mask = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| MASK_EXTENSIONS.contains(&ext));
        if is_mask {
            mask_files.push(path);
        }
    }
    Ok(mask_files)
}

/// Convert every mask image in `mask_dir` to YOLO label files.
///
/// Each file is decoded, its annotations extracted, and the segmentation and
/// bounding-box records written to their respective output directories; an
/// omitted directory skips that annotation type without affecting the other.
/// The first unreadable image or failed write aborts the whole run.
pub fn process_mask_directory(args: &Args) -> Result<ProcessingStats, Box<dyn std::error::Error>> {
    let mask_dir = PathBuf::from(&args.mask_dir);
    let mask_files = collect_mask_files(&mask_dir)?;

    let output_seg_dir = args.output_seg_dir.as_deref().map(Path::new);
    let output_box_dir = args.output_box_dir.as_deref().map(Path::new);

    let pb = create_progress_bar(mask_files.len() as u64, "Masks");
    let mut stats = ProcessingStats::new();

    for mask_path in mask_files {
        let raster = read_mask(&mask_path)?;
        let (img_width, img_height) = raster.dimensions();
        info!(
            "Processing {} imgsz = {} x {}",
            mask_path.display(),
            img_height,
            img_width
        );

        let (seg_records, bbox_records) = extract_annotations(&raster);

        let base_name = label_base_name(&mask_path).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Mask file has no usable name: {}", mask_path.display()),
            )
        })?;

        if let Some(path) = save_label_file(&base_name, output_seg_dir, &seg_records)? {
            info!(
                "Stored {} segmentation records at {}",
                seg_records.len(),
                path.display()
            );
            stats.seg_files_written += 1;
        }

        if let Some(path) = save_label_file(&base_name, output_box_dir, &bbox_records)? {
            info!(
                "Stored {} bounding boxes at {}",
                bbox_records.len(),
                path.display()
            );
            stats.box_files_written += 1;
        }

        stats.total_files_processed += 1;
        stats.total_polygons += seg_records.len();
        pb.inc(1);
    }

    pb.finish_with_message("Mask processing complete");
    Ok(stats)
}
