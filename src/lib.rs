mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{
    install_interrupt_handler, operator_message, prompt_run_config, run_interactive, Cli,
    Prompter, RunConfig, CANCELLED_MESSAGE,
};
pub use crate::core::processor::ImageProcessor;
pub use crate::core::{
    FileReport, ProcessConfig, ProcessingStats, ResizeError, ResizePolicy, Result,
    SUPPORTED_EXTENSIONS,
};
pub use processors::{BatchProcessor, Compressor, Loader, Resizer};
pub use utils::{format_file_size, is_supported_format, resized_output_path};

use std::path::Path;

/// Resize every supported image in `input_dir` to exactly `width x height`.
pub fn resize_fixed<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    width: u32,
    height: u32,
    quality: u8,
) -> Result<ProcessingStats> {
    BatchProcessor::new(ProcessConfig::fixed(width, height, quality))
        .process_directory(input_dir.as_ref(), output_dir.as_ref())
}

/// Shrink every supported image in `input_dir` to fit inside
/// `max_width x max_height`, keeping its aspect ratio. Images that already
/// fit are written at their original size.
pub fn resize_preserve_aspect<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    max_width: u32,
    max_height: u32,
    quality: u8,
) -> Result<ProcessingStats> {
    BatchProcessor::new(ProcessConfig::preserve_aspect(max_width, max_height, quality))
        .process_directory(input_dir.as_ref(), output_dir.as_ref())
}

pub mod prelude {
    pub use crate::{
        resize_fixed, resize_preserve_aspect, BatchProcessor, ProcessConfig, ResizePolicy,
    };
}
