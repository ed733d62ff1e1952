use image::imageops::FilterType;

use crate::error::{PadError, Result};

/// Icon read by the entry point.
pub const DEFAULT_INPUT: &str = "assets/icon.png";
/// Icon written by the entry point. Same file as the input: the icon is fixed in place.
pub const DEFAULT_OUTPUT: &str = "assets/icon.png";

pub const DEFAULT_TARGET_SIZE: u32 = 1024;
/// 90% of the canvas, leaving a 5% margin on each side like other macOS icons.
pub const DEFAULT_CONTENT_FRACTION: f32 = 0.90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    /// Force the crop into a `content_size` square, distorting non-square content.
    Stretch,
    /// Scale the longer side to `content_size` and keep the aspect ratio.
    Fit,
}

#[derive(Debug, Clone, Copy)]
pub struct PadConfig {
    pub target_size: u32,
    pub content_fraction: f32,
    pub filter: FilterType,
    pub resize_mode: ResizeMode,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            content_fraction: DEFAULT_CONTENT_FRACTION,
            filter: FilterType::Lanczos3,
            resize_mode: ResizeMode::Stretch,
        }
    }
}

impl PadConfig {
    /// Side length of the resized content: `floor(target_size * content_fraction)`.
    pub fn content_size(&self) -> u32 {
        (self.target_size as f64 * self.content_fraction as f64).floor() as u32
    }

    /// Gap between the canvas edge and square content.
    pub fn margin(&self) -> u32 {
        (self.target_size - self.content_size()) / 2
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(PadError::InvalidConfig {
                reason: "target size must be greater than zero".to_string(),
            });
        }

        if !(self.content_fraction > 0.0 && self.content_fraction <= 1.0) {
            return Err(PadError::InvalidConfig {
                reason: format!(
                    "content fraction must be in (0, 1], got {}",
                    self.content_fraction
                ),
            });
        }

        if self.content_size() == 0 {
            return Err(PadError::InvalidConfig {
                reason: format!(
                    "content fraction {} leaves no room for content on a {}px canvas",
                    self.content_fraction, self.target_size
                ),
            });
        }

        Ok(())
    }
}
