// batch-resizer/src/utils/mod.rs
use crate::core::SUPPORTED_EXTENSIONS;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const OUTPUT_SUFFIX: &str = "_resized";

/// `<output_dir>/<stem>_resized<.ext>`, keeping the original extension's case.
pub fn resized_output_path(input_path: &Path, output_dir: &Path) -> Option<PathBuf> {
    let stem = input_path.file_stem()?;

    let mut file_name = OsString::from(stem);
    file_name.push(OUTPUT_SUFFIX);
    if let Some(extension) = input_path.extension() {
        file_name.push(".");
        file_name.push(extension);
    }

    Some(output_dir.join(file_name))
}

pub fn is_supported_format(path: &Path) -> bool {
    get_file_extension(path)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

pub fn supported_formats_list() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn get_file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
