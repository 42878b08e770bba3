// batch-resizer/src/core/mod.rs
pub mod processor;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tiff", "webp"];

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_QUALITY: u8 = 95;

/// How target dimensions are derived from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Force exactly `width x height`, ignoring the source aspect ratio.
    Fixed { width: u32, height: u32 },
    /// Shrink to fit inside `max_width x max_height`; never enlarges.
    PreserveAspect { max_width: u32, max_height: u32 },
}

impl ResizePolicy {
    pub fn bounds(&self) -> (u32, u32) {
        match *self {
            ResizePolicy::Fixed { width, height } => (width, height),
            ResizePolicy::PreserveAspect { max_width, max_height } => (max_width, max_height),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessConfig {
    pub policy: ResizePolicy,
    /// Lossy encode quality, only used for JPEG outputs.
    pub quality: u8,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            policy: ResizePolicy::PreserveAspect {
                max_width: DEFAULT_WIDTH,
                max_height: DEFAULT_HEIGHT,
            },
            quality: DEFAULT_QUALITY,
        }
    }
}

impl ProcessConfig {
    pub fn fixed(width: u32, height: u32, quality: u8) -> Self {
        Self {
            policy: ResizePolicy::Fixed { width, height },
            quality,
        }
    }

    pub fn preserve_aspect(max_width: u32, max_height: u32, quality: u8) -> Self {
        Self {
            policy: ResizePolicy::PreserveAspect { max_width, max_height },
            quality,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.policy.bounds();

        if width == 0 || height == 0 {
            return Err(ResizeError::InvalidParameter(
                "Width and height must be positive".to_string(),
            ));
        }

        if width > 100_000 || height > 100_000 {
            return Err(ResizeError::InvalidParameter(
                "Dimensions too large (max 100,000 pixels)".to_string(),
            ));
        }

        if self.quality == 0 || self.quality > 100 {
            return Err(ResizeError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

/// Outcome of one successfully resized file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original_dimensions: (u32, u32),
    pub new_dimensions: (u32, u32),
    pub size_before: u64,
    pub size_after: u64,
}

#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub processed_count: usize,
    pub failed_count: usize,
    pub total_size_before: u64,
    pub total_size_after: u64,
    pub files: Vec<FileReport>,
    pub errors: Vec<(String, String)>,
}

impl ProcessingStats {
    pub fn record_success(&mut self, report: FileReport) {
        self.processed_count += 1;
        self.total_size_before += report.size_before;
        self.total_size_after += report.size_after;
        self.files.push(report);
    }

    pub fn record_failure(&mut self, file_name: impl Into<String>, error: &ResizeError) {
        self.failed_count += 1;
        self.errors.push((file_name.into(), error.to_string()));
    }

    pub fn total(&self) -> usize {
        self.processed_count + self.failed_count
    }

    /// Percentage of bytes saved across all successful files, clamped to 0..=100.
    pub fn size_reduction(&self) -> f64 {
        if self.total_size_before == 0 {
            return 0.0;
        }

        let savings = (self.total_size_before as f64 - self.total_size_after as f64)
            / self.total_size_before as f64
            * 100.0;
        savings.clamp(0.0, 100.0)
    }
}

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),

    #[error("Memory limit exceeded: {0}")]
    MemoryLimitExceeded(String),

    #[error("Input folder '{}' does not exist!", .0.display())]
    InputDirMissing(PathBuf),

    #[error("Not a valid number: '{0}'")]
    InvalidNumber(String),

    #[error("Operation cancelled by user")]
    Cancelled,
}

impl ResizeError {
    pub fn input_dir_missing(path: &Path) -> Self {
        ResizeError::InputDirMissing(path.to_path_buf())
    }
}

pub type Result<T> = std::result::Result<T, ResizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn report(before: u64, after: u64) -> FileReport {
        FileReport {
            input: PathBuf::from("in/a.png"),
            output: PathBuf::from("out/a_resized.png"),
            original_dimensions: (10, 10),
            new_dimensions: (5, 5),
            size_before: before,
            size_after: after,
        }
    }

    #[test]
    fn default_config_is_aspect_preserving() {
        let config = ProcessConfig::default();
        assert_eq!(
            config.policy,
            ResizePolicy::PreserveAspect { max_width: 800, max_height: 600 }
        );
        assert_eq!(config.quality, 95);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(ProcessConfig::fixed(0, 600, 90).validate().is_err());
        assert!(ProcessConfig::preserve_aspect(800, 0, 90).validate().is_err());
    }

    #[test]
    fn rejects_quality_out_of_range() {
        assert!(ProcessConfig::fixed(800, 600, 0).validate().is_err());
        assert!(ProcessConfig::fixed(800, 600, 101).validate().is_err());
        assert!(ProcessConfig::fixed(800, 600, 1).validate().is_ok());
        assert!(ProcessConfig::fixed(800, 600, 100).validate().is_ok());
    }

    #[test]
    fn stats_accumulate_successes_and_failures() {
        let mut stats = ProcessingStats::default();
        stats.record_success(report(1000, 400));
        stats.record_success(report(1000, 600));
        stats.record_failure("broken.jpg", &ResizeError::ProcessingError("bad".into()));

        assert_eq!(stats.processed_count, 2);
        assert_eq!(stats.failed_count, 1);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.errors[0].0, "broken.jpg");
        assert!(stats.errors[0].1.contains("bad"));
        assert!((stats.size_reduction() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn size_reduction_never_negative() {
        let mut stats = ProcessingStats::default();
        assert_eq!(stats.size_reduction(), 0.0);
        stats.record_success(report(100, 300));
        assert_eq!(stats.size_reduction(), 0.0);
    }
}
