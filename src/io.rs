use image::GrayImage;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Decode a mask image file as an 8-bit grayscale raster.
pub fn read_mask(path: &Path) -> Result<GrayImage, image::ImageError> {
    Ok(image::open(path)?.into_luma8())
}

/// Write one label file, one line per record with space-joined fields.
///
/// With no output directory configured this is a skip, not a failure: it
/// returns `Ok(None)` without touching the file system. Otherwise the
/// directory is created as needed and `<base_name>.txt` is created or
/// truncated, and its path returned.
pub fn save_label_file<T: Display>(
    base_name: &str,
    output_dir: Option<&Path>,
    records: &[T],
) -> std::io::Result<Option<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => return Ok(None),
    };

    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join(format!("{base_name}.txt"));
    let mut writer = BufWriter::new(File::create(&output_path)?);
    for record in records {
        writeln!(writer, "{record}")?;
    }
    writer.flush()?;

    Ok(Some(output_path))
}
