use image::{imageops, ImageBuffer, Rgba, RgbaImage};
use log::{debug, warn};

use crate::bbox::{content_bounds, BoundingBox};
use crate::config::{PadConfig, ResizeMode};
use crate::error::{PadError, Result};

/// What a successful padding run did to the icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadOutcome {
    pub source_width: u32,
    pub source_height: u32,
    /// Content found in the source image.
    pub bounds: BoundingBox,
    pub content_width: u32,
    pub content_height: u32,
    /// Top-left corner of the content on the canvas.
    pub offset_x: u32,
    pub offset_y: u32,
    pub margin: u32,
    pub canvas_size: u32,
}

/// Crops transparent margins off `img`, resizes the content and centers it on
/// a fresh transparent `target_size` square canvas.
pub fn pad_image(img: &RgbaImage, config: &PadConfig) -> Result<(RgbaImage, PadOutcome)> {
    config.validate()?;

    let (source_width, source_height) = img.dimensions();
    let bounds = content_bounds(img).ok_or(PadError::ContentNotFound {
        width: source_width,
        height: source_height,
    })?;
    debug!("Content bounding box: {}", bounds);

    let cropped =
        imageops::crop_imm(img, bounds.left, bounds.top, bounds.width(), bounds.height()).to_image();

    let content_size = config.content_size();
    let (content_width, content_height) = match config.resize_mode {
        ResizeMode::Stretch => {
            if !bounds.is_square() {
                warn!(
                    "Stretching {}x{} content to {}x{} changes its aspect ratio",
                    bounds.width(),
                    bounds.height(),
                    content_size,
                    content_size
                );
            }
            (content_size, content_size)
        }
        ResizeMode::Fit => fit_within(bounds.width(), bounds.height(), content_size),
    };

    let resized = unpremultiply(&imageops::resize(
        &premultiply(&cropped),
        content_width,
        content_height,
        config.filter,
    ));

    let target = config.target_size;
    let mut canvas = RgbaImage::new(target, target);
    let offset_x = (target - content_width) / 2;
    let offset_y = (target - content_height) / 2;
    imageops::overlay(&mut canvas, &resized, offset_x as i64, offset_y as i64);

    let outcome = PadOutcome {
        source_width,
        source_height,
        bounds,
        content_width,
        content_height,
        offset_x,
        offset_y,
        margin: config.margin(),
        canvas_size: target,
    };

    Ok((canvas, outcome))
}

/// 16-bit RGBA with colour scaled by alpha.
type Premultiplied = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Scales colour by alpha so fully transparent pixels contribute nothing to
/// their neighbours when resampled.
fn premultiply(img: &RgbaImage) -> Premultiplied {
    ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let scale = |c: u8| ((c as u32 * a as u32 * 257 + 127) / 255) as u16;
        Rgba([scale(r), scale(g), scale(b), a as u16 * 257])
    })
}

fn unpremultiply(img: &Premultiplied) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let alpha = ((a as u32 + 128) / 257) as u8;
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        let a = a as u32;
        let unscale = |c: u16| ((c as u32 * 255 + a / 2) / a).min(255) as u8;
        Rgba([unscale(r), unscale(g), unscale(b), alpha])
    })
}

/// Scales `(width, height)` so the longer side equals `size`, rounding the
/// shorter side and never letting it collapse to zero.
fn fit_within(width: u32, height: u32, size: u32) -> (u32, u32) {
    let scale_short = |short: u32, long: u32| -> u32 {
        let scaled = (short as u64 * size as u64 + long as u64 / 2) / long as u64;
        (scaled as u32).clamp(1, size)
    };

    if width >= height {
        (size, scale_short(height, width))
    } else {
        (scale_short(width, height), size)
    }
}
