use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Derive the label-file base name from a mask image path.
///
/// Only a trailing `_mask` token is stripped from the file stem, so a stem
/// like `left_mask_v2` keeps its mid-string `_mask` intact.
pub fn label_base_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    Some(stem.strip_suffix("_mask").unwrap_or(stem).to_string())
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .progress_chars("#>-"),
    );
    pb
}
