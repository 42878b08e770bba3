// batch-resizer/src/core/processor.rs
use super::{FileReport, ProcessConfig, Result};
use crate::processors::{Compressor, Loader, Resizer};
use image::GenericImageView;
use std::path::Path;

/// Decode, resize and re-encode a single file.
pub struct ImageProcessor {
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageProcessor {
    pub fn new(config: &ProcessConfig) -> Self {
        Self {
            loader: Loader::new(),
            resizer: Resizer::new(config.policy),
            compressor: Compressor::new(config.quality),
        }
    }

    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<FileReport> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let size_before = std::fs::metadata(input_path)?.len();
        let image = self.loader.load(input_path)?;
        let original_dimensions = image.dimensions();

        let resized = self.resizer.resize(&image)?;
        let new_dimensions = resized.dimensions();

        let size_after = self.compressor.save(&resized, output_path)?;

        Ok(FileReport {
            input: input_path.to_path_buf(),
            output: output_path.to_path_buf(),
            original_dimensions,
            new_dimensions,
            size_before,
            size_after,
        })
    }
}
