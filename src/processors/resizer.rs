// batch-resizer/src/processors/resizer.rs
use crate::core::{ResizeError, ResizePolicy, Result};
use image::{imageops::FilterType, DynamicImage, GenericImageView};

pub struct Resizer {
    policy: ResizePolicy,
    filter: FilterType,
}

impl Resizer {
    pub fn new(policy: ResizePolicy) -> Self {
        Self {
            policy,
            filter: FilterType::Lanczos3,
        }
    }

    pub fn resize(&self, image: &DynamicImage) -> Result<DynamicImage> {
        let (width, height) = self.calculate_dimensions(image.dimensions())?;

        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return Ok(image.clone());
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        Ok(image.resize_exact(width, height, self.filter))
    }

    /// Target dimensions for a source of `original` size under this policy.
    pub fn calculate_dimensions(&self, original: (u32, u32)) -> Result<(u32, u32)> {
        let (orig_width, orig_height) = original;

        if orig_width == 0 || orig_height == 0 {
            return Err(ResizeError::ProcessingError(format!(
                "Cannot resize an image of {}x{}",
                orig_width, orig_height
            )));
        }

        match self.policy {
            ResizePolicy::Fixed { width, height } => Ok((width, height)),
            ResizePolicy::PreserveAspect { max_width, max_height } => {
                let ratio_w = max_width as f64 / orig_width as f64;
                let ratio_h = max_height as f64 / orig_height as f64;
                let ratio = ratio_w.min(ratio_h);

                if ratio >= 1.0 {
                    return Ok((orig_width, orig_height));
                }

                // Truncation, not rounding: both sides must stay within bounds.
                let new_width = (orig_width as f64 * ratio) as u32;
                let new_height = (orig_height as f64 * ratio) as u32;

                if new_width == 0 || new_height == 0 {
                    return Err(ResizeError::ProcessingError(format!(
                        "Scaling {}x{} into {}x{} collapses to {}x{}",
                        orig_width, orig_height, max_width, max_height, new_width, new_height
                    )));
                }

                Ok((new_width, new_height))
            }
        }
    }
}
