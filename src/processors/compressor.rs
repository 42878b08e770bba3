// batch-resizer/src/processors/compressor.rs
use crate::core::{ResizeError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{ColorType, DynamicImage, ImageFormat};
use oxipng::{optimize_from_memory, Options};
use std::io::Cursor;
use std::path::Path;

pub struct Compressor {
    quality: u8,
    optimize_png: bool,
}

impl Compressor {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
            optimize_png: true,
        }
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    /// Encodes `image` in the format implied by the extension of `path`,
    /// overwriting any existing file. Returns the written size in bytes.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<u64> {
        let format = self.detect_format(path)?;

        log::debug!(
            "Saving image to {} with format {:?}, quality: {}",
            path.display(),
            format,
            self.quality
        );

        // Encode fully in memory so a failed encode never leaves a file behind.
        let encoded = match format {
            ImageFormat::Jpeg => self.encode_jpeg(image)?,
            ImageFormat::Png => self.encode_png(image)?,
            ImageFormat::WebP | ImageFormat::Bmp => self.encode_generic(&to_eight_bit(image), format)?,
            ImageFormat::Tiff => self.encode_generic(&to_tiff_layout(image), format)?,
            _ => self.encode_generic(image, format)?,
        };

        std::fs::write(path, encoded)?;
        self.log_save_result(path)
    }

    fn encode_jpeg(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let flattened;
        let image = match image.color() {
            ColorType::Rgb8 | ColorType::L8 => image,
            color => {
                log::debug!("Converting {:?} to RGB for JPEG output", color);
                flattened = DynamicImage::ImageRgb8(image.to_rgb8());
                &flattened
            }
        };

        let mut buffer = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buffer, self.quality);
        image.write_with_encoder(encoder)?;
        Ok(buffer)
    }

    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilterType::Adaptive);
        image.write_with_encoder(encoder)?;

        if self.optimize_png {
            buffer = self.optimize_png_bytes(&buffer)?;
        }

        Ok(buffer)
    }

    fn encode_generic(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, format)?;
        Ok(buffer.into_inner())
    }

    fn optimize_png_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        optimize_from_memory(data, &Options::default())
            .map_err(|e| ResizeError::ProcessingError(format!("PNG optimization failed: {}", e)))
    }

    fn detect_format(&self, path: &Path) -> Result<ImageFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            "bmp" => Ok(ImageFormat::Bmp),
            "tiff" | "tif" => Ok(ImageFormat::Tiff),
            "webp" => Ok(ImageFormat::WebP),
            _ => Err(ResizeError::UnsupportedFormat(format!(
                "Cannot encode to '{}'",
                path.display()
            ))),
        }
    }

    fn log_save_result(&self, path: &Path) -> Result<u64> {
        let file_size = std::fs::metadata(path)?.len();
        log::debug!("Saved image: {} ({} bytes)", path.display(), file_size);
        Ok(file_size)
    }
}

// WebP and BMP encoders only take 8-bit RGB(A).
fn to_eight_bit(image: &DynamicImage) -> DynamicImage {
    match image.color() {
        ColorType::Rgb8 | ColorType::Rgba8 => image.clone(),
        color if color.has_alpha() => DynamicImage::ImageRgba8(image.to_rgba8()),
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}

// The TIFF encoder has no grey+alpha layouts.
fn to_tiff_layout(image: &DynamicImage) -> DynamicImage {
    match image.color() {
        ColorType::L8
        | ColorType::L16
        | ColorType::Rgb8
        | ColorType::Rgb16
        | ColorType::Rgba8
        | ColorType::Rgba16
        | ColorType::Rgb32F
        | ColorType::Rgba32F => image.clone(),
        ColorType::La16 => DynamicImage::ImageRgba16(image.to_rgba16()),
        color if color.has_alpha() => DynamicImage::ImageRgba8(image.to_rgba8()),
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}
