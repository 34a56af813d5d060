use clap::Parser;

/// Command-line arguments parser for converting binary mask images to YOLO format.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory containing the binary mask images (png, jpg)
    #[arg(short = 'd', long = "mask_dir")]
    pub mask_dir: String,

    /// Directory for YOLO segmentation labels; omit to skip writing them
    #[arg(long = "output_seg_dir")]
    pub output_seg_dir: Option<String>,

    /// Directory for YOLO bounding-box labels; omit to skip writing them
    #[arg(long = "output_box_dir")]
    pub output_box_dir: Option<String>,
}
