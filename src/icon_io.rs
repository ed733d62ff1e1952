use std::io::{self, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use tempfile::NamedTempFile;

use crate::error::{PadError, Result};

/// Loads any image the decoder understands as RGBA. Sources without an alpha
/// channel come back fully opaque.
pub fn load_icon<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| PadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(img.to_rgba8())
}

/// Encodes `img` as PNG and swaps it into place at `path`.
///
/// The bytes go to a uniquely named temp file in the same directory, which is
/// renamed over `path` once complete. A failed run never leaves a truncated
/// icon or a stray temp file behind.
pub fn save_icon<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_png(img, path)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source: io::Error| PadError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(&bytes).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

fn encode_png(img: &RgbaImage, path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .map_err(|source| PadError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(bytes)
}
