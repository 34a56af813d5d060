use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use binmask2yolo::{process_mask_directory, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mask_dir = PathBuf::from(&args.mask_dir);
    if !mask_dir.exists() {
        error!("The specified mask_dir does not exist: {}", args.mask_dir);
        std::process::exit(1);
    }

    info!("Starting the conversion process...");

    match process_mask_directory(&args) {
        Ok(stats) => stats.print_summary(),
        Err(e) => {
            error!("Failed to process mask directory: {}", e);
            std::process::exit(1);
        }
    }
}
