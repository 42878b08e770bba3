// batch-resizer/src/cli/mod.rs
mod prompt;

pub use prompt::Prompter;

use crate::core::{
    ProcessConfig, ProcessingStats, ResizeError, ResizePolicy, Result, DEFAULT_HEIGHT,
    DEFAULT_QUALITY, DEFAULT_WIDTH,
};
use crate::processors::BatchProcessor;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "input_images";
pub const DEFAULT_OUTPUT_DIR: &str = "output_images";
pub const CANCELLED_MESSAGE: &str = "Operation cancelled by user.";

/// Resize every image in a folder. Folders, mode and sizes are asked for
/// interactively.
#[derive(Parser, Debug)]
#[command(name = "batch-resizer", version, about)]
pub struct Cli {
    /// Print diagnostic logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub process: ProcessConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            process: ProcessConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn run(&self, show_progress: bool) -> Result<ProcessingStats> {
        BatchProcessor::new(self.process.clone())
            .with_progress(show_progress)
            .process_directory(&self.input_dir, &self.output_dir)
    }
}

/// Asks for every run parameter. Mode `1` is fixed, anything else keeps
/// the aspect ratio.
pub fn prompt_run_config<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<RunConfig> {
    let input_dir = prompter.ask_or(
        &format!("Enter input folder path (or press Enter for '{}'): ", DEFAULT_INPUT_DIR),
        DEFAULT_INPUT_DIR,
    )?;
    let output_dir = prompter.ask_or(
        &format!("Enter output folder path (or press Enter for '{}'): ", DEFAULT_OUTPUT_DIR),
        DEFAULT_OUTPUT_DIR,
    )?;

    prompter.say("")?;
    prompter.say("Resize options:")?;
    prompter.say("1. Fixed dimensions (may distort image)")?;
    prompter.say("2. Maintain aspect ratio (recommended)")?;

    let fixed = prompter.ask("Choose option (1 or 2, default is 2): ")?.as_deref() == Some("1");

    let policy = if fixed {
        let width = prompter.ask_number(
            &format!("Enter target width (default {}): ", DEFAULT_WIDTH),
            DEFAULT_WIDTH,
        )?;
        let height = prompter.ask_number(
            &format!("Enter target height (default {}): ", DEFAULT_HEIGHT),
            DEFAULT_HEIGHT,
        )?;
        ResizePolicy::Fixed { width, height }
    } else {
        let max_width = prompter.ask_number(
            &format!("Enter maximum width (default {}): ", DEFAULT_WIDTH),
            DEFAULT_WIDTH,
        )?;
        let max_height = prompter.ask_number(
            &format!("Enter maximum height (default {}): ", DEFAULT_HEIGHT),
            DEFAULT_HEIGHT,
        )?;
        ResizePolicy::PreserveAspect { max_width, max_height }
    };

    let quality: u32 = prompter.ask_number(
        &format!("Enter JPEG quality 1-100 (default {}): ", DEFAULT_QUALITY),
        u32::from(DEFAULT_QUALITY),
    )?;
    let quality = u8::try_from(quality).map_err(|_| {
        ResizeError::InvalidParameter("Quality must be between 1 and 100".to_string())
    })?;

    let config = RunConfig {
        input_dir: PathBuf::from(input_dir),
        output_dir: PathBuf::from(output_dir),
        process: ProcessConfig { policy, quality },
    };
    config.process.validate()?;

    Ok(config)
}

pub fn run_interactive<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    show_progress: bool,
) -> Result<ProcessingStats> {
    let banner = "=".repeat(60);
    prompter.say(&banner)?;
    prompter.say(&format!("{:^60}", "IMAGE RESIZER TOOL"))?;
    prompter.say(&banner)?;

    let config = prompt_run_config(prompter)?;

    prompter.say("")?;
    prompter.say(&format!(
        "Processing images from '{}' to '{}'",
        config.input_dir.display(),
        config.output_dir.display()
    ))?;
    match config.process.policy {
        ResizePolicy::Fixed { width, height } => {
            prompter.say(&format!("Target size: {}x{} pixels", width, height))?
        }
        ResizePolicy::PreserveAspect { max_width, max_height } => prompter.say(&format!(
            "Maximum size: {}x{} pixels (aspect ratio maintained)",
            max_width, max_height
        ))?,
    }

    log::debug!("Running with {:?}", config);
    config.run(show_progress)
}

/// Ctrl-C stops the run immediately with the cancellation message. Files
/// already written are left in place.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        println!("\n{}", CANCELLED_MESSAGE);
        std::process::exit(130);
    })
    .map_err(|e| ResizeError::ProcessingError(format!("Failed to install Ctrl-C handler: {}", e)))
}

/// The line shown to the operator for errors that end a run normally, or
/// `None` for errors that should propagate.
pub fn operator_message(error: &ResizeError) -> Option<String> {
    match error {
        ResizeError::InvalidNumber(_) => {
            Some("Error: Please enter valid numbers for dimensions and quality!".to_string())
        }
        ResizeError::Cancelled => Some(format!("\n{}", CANCELLED_MESSAGE)),
        ResizeError::InputDirMissing(_) | ResizeError::InvalidParameter(_) => {
            Some(format!("Error: {}", error))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn all_defaults() {
        let config = prompt_run_config(&mut prompter("\n\n\n\n\n\n")).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn fixed_mode_with_custom_values() {
        let input = "photos\nsmall\n1\n320\n240\n70\n";
        let config = prompt_run_config(&mut prompter(input)).unwrap();

        assert_eq!(config.input_dir, PathBuf::from("photos"));
        assert_eq!(config.output_dir, PathBuf::from("small"));
        assert_eq!(config.process, ProcessConfig::fixed(320, 240, 70));
    }

    #[test]
    fn unknown_choice_keeps_aspect_ratio() {
        let config = prompt_run_config(&mut prompter("\n\n7\n1024\n\n\n")).unwrap();
        assert_eq!(config.process, ProcessConfig::preserve_aspect(1024, 600, 95));
    }

    #[test]
    fn bad_number_aborts() {
        let err = prompt_run_config(&mut prompter("\n\n1\nabc\n")).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidNumber(_)));
    }

    #[test]
    fn quality_out_of_range_aborts() {
        let err = prompt_run_config(&mut prompter("\n\n2\n\n\n300\n")).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidParameter(_)));

        let err = prompt_run_config(&mut prompter("\n\n2\n\n\n0\n")).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidParameter(_)));
    }

    #[test]
    fn end_of_input_cancels() {
        let err = prompt_run_config(&mut prompter("in\nout\n")).unwrap_err();
        assert!(matches!(err, ResizeError::Cancelled));
    }

    #[test]
    fn interrupt_handler_installs_once() {
        assert!(install_interrupt_handler().is_ok());
        assert!(matches!(
            install_interrupt_handler(),
            Err(ResizeError::ProcessingError(_))
        ));
    }

    #[test]
    fn operator_messages() {
        assert_eq!(
            operator_message(&ResizeError::Cancelled).as_deref(),
            Some("\nOperation cancelled by user.")
        );
        assert_eq!(
            operator_message(&ResizeError::InvalidNumber("abc".into())).as_deref(),
            Some("Error: Please enter valid numbers for dimensions and quality!")
        );
        assert_eq!(
            operator_message(&ResizeError::input_dir_missing(std::path::Path::new("pics")))
                .as_deref(),
            Some("Error: Input folder 'pics' does not exist!")
        );
        assert!(operator_message(&ResizeError::ProcessingError("disk".into())).is_none());
    }

    #[test]
    fn run_interactive_processes_the_folder() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        std::fs::create_dir(&input).unwrap();
        image::RgbImage::new(1000, 500).save(input.join("photo.png")).unwrap();

        let answers = format!("{}\n{}\n\n\n\n\n", input.display(), output.display());
        let mut p = prompter(&answers);
        let stats = run_interactive(&mut p, false).unwrap();

        assert_eq!(stats.processed_count, 1);
        assert_eq!(stats.files[0].new_dimensions, (800, 400));
        assert!(output.join("photo_resized.png").exists());

        let transcript = String::from_utf8(p.into_output()).unwrap();
        assert!(transcript.contains("IMAGE RESIZER TOOL"));
        assert!(transcript.contains("Maximum size: 800x600 pixels (aspect ratio maintained)"));
    }
}
