//! I/O helpers for RGBA input images and JSON.
//!
//! - `load_rgba_image`: decode a PNG/JPEG/etc. into an owned RGBA8 buffer.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::PixelBuffer;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGBA8 buffer with a borrowed [`PixelBuffer`] view.
#[derive(Clone, Debug)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaImage {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a checked read-only view.
    pub fn as_view(&self) -> Result<PixelBuffer<'_>, String> {
        PixelBuffer::new(&self.data, self.width, self.height).map_err(|e| e.to_string())
    }
}

/// Load an image from disk and convert it to RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbaImage::new(width, height, img.into_raw()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
