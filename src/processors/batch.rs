// batch-resizer/src/processors/batch.rs
use crate::core::processor::ImageProcessor;
use crate::core::{FileReport, ProcessConfig, ProcessingStats, ResizeError, ResizePolicy, Result};
use crate::utils::{
    display_name, format_file_size, is_supported_format, resized_output_path,
    supported_formats_list,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const RULE_WIDTH: usize = 50;

pub struct BatchProcessor {
    config: ProcessConfig,
    show_progress: bool,
}

impl BatchProcessor {
    pub fn new(config: ProcessConfig) -> Self {
        Self {
            config,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Resize every supported file directly inside `input_dir` into `output_dir`.
    ///
    /// `output_dir` is created before `input_dir` is checked, so it exists
    /// after this call even when the input folder is missing. Per-file
    /// failures are recorded in the returned stats; only parameter and
    /// directory problems abort the batch.
    pub fn process_directory(&self, input_dir: &Path, output_dir: &Path) -> Result<ProcessingStats> {
        self.config.validate()?;
        self.prepare_output_dir(output_dir)?;
        self.validate_input_dir(input_dir)?;

        let image_paths = self.collect_image_paths(input_dir)?;

        if image_paths.is_empty() {
            log::warn!("No image files found in {}", input_dir.display());
            println!("No supported image files found in '{}'", input_dir.display());
            println!("Supported formats: {}", supported_formats_list());
            return Ok(ProcessingStats::default());
        }

        let mode_note = match self.config.policy {
            ResizePolicy::Fixed { .. } => "",
            ResizePolicy::PreserveAspect { .. } => " (maintaining aspect ratio)",
        };
        println!("Found {} images to process{}...", image_paths.len(), mode_note);
        println!("{}", "-".repeat(RULE_WIDTH));

        let processor = ImageProcessor::new(&self.config);
        let pb = self.create_progress_bar(image_paths.len());
        let mut stats = ProcessingStats::default();

        for input_path in &image_paths {
            let file_name = display_name(input_path);
            pb.set_message(file_name.clone());

            match self.process_single_image_in_batch(&processor, input_path, output_dir) {
                Ok(report) => {
                    pb.suspend(|| println!("{}", success_line(&file_name, &report)));
                    stats.record_success(report);
                }
                Err(e) => {
                    log::warn!("Failed to process {}: {}", input_path.display(), e);
                    pb.suspend(|| println!("✗ Failed to process {}: {}", file_name, e));
                    stats.record_failure(file_name, &e);
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        self.print_summary(&stats);

        Ok(stats)
    }

    fn process_single_image_in_batch(
        &self,
        processor: &ImageProcessor,
        input_path: &Path,
        output_dir: &Path,
    ) -> Result<FileReport> {
        let output_path = resized_output_path(input_path, output_dir).ok_or_else(|| {
            ResizeError::InvalidParameter(format!("Invalid file name: {}", input_path.display()))
        })?;

        processor.process(input_path, &output_path)
    }

    fn collect_image_paths(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Dangling links and unreadable entries still count: they
                    // fail in the per-file loop instead of vanishing.
                    match e.path() {
                        Some(path) if is_supported_format(path) => {
                            log::debug!("Unreadable entry {}: {}", path.display(), e);
                            paths.push(path.to_path_buf());
                        }
                        _ => log::debug!("Skipping entry in {}: {}", input_dir.display(), e),
                    }
                    continue;
                }
            };

            if !entry.file_type().is_dir() && is_supported_format(entry.path()) {
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }

    fn prepare_output_dir(&self, output_dir: &Path) -> Result<()> {
        if output_dir.exists() {
            if !output_dir.is_dir() {
                return Err(ResizeError::InvalidParameter(format!(
                    "Output path exists but is not a directory: {}",
                    output_dir.display()
                )));
            }
            return Ok(());
        }

        std::fs::create_dir_all(output_dir)?;
        println!("Created output folder: {}", output_dir.display());
        Ok(())
    }

    fn validate_input_dir(&self, input_dir: &Path) -> Result<()> {
        if !input_dir.exists() {
            return Err(ResizeError::input_dir_missing(input_dir));
        }

        if !input_dir.is_dir() {
            return Err(ResizeError::InvalidParameter(format!(
                "Input path is not a directory: {}",
                input_dir.display()
            )));
        }

        Ok(())
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }

    fn print_summary(&self, stats: &ProcessingStats) {
        println!("{}", "-".repeat(RULE_WIDTH));
        println!("Processing complete!");
        println!("Successfully processed: {} images", stats.processed_count);
        println!("Failed: {} images", stats.failed_count);

        if stats.processed_count > 0 {
            println!(
                "Total size: {} → {} ({:.1}% reduction)",
                format_file_size(stats.total_size_before),
                format_file_size(stats.total_size_after),
                stats.size_reduction()
            );
        }
    }
}

fn success_line(file_name: &str, report: &FileReport) -> String {
    let (ow, oh) = report.original_dimensions;
    let (nw, nh) = report.new_dimensions;
    format!(
        "✓ {} ({}x{}) → {} ({}x{})",
        file_name,
        ow,
        oh,
        display_name(&report.output),
        nw,
        nh
    )
}
