//! I/O helpers for RGBA images and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned 8-bit RGBA buffer.
//! - `save_rgba_image`: write an RGBA buffer to disk atomically.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbaImageU8;
use crate::error::ImageError;
use image::{ImageBuffer, ImageFormat, Rgba};
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImageU8, ImageError> {
    let img = image::open(path)
        .map_err(|e| ImageError::decode(path, e.to_string()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbaImageU8::new(width, height, img.into_raw()))
}

/// Save an RGBA buffer to `path`, creating parent directories.
///
/// The container format is inferred from the output extension and falls back
/// to PNG, the only supported format that keeps alpha lossless. The encode
/// goes to a temporary sibling path and is renamed into place, so a failed
/// encode never leaves a half-written file at `path`.
pub fn save_rgba_image(buffer: &RgbaImageU8, path: &Path) -> Result<(), ImageError> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.as_raw().to_vec(),
    )
    .ok_or_else(|| ImageError::encode(path, "buffer does not match its dimensions"))?;

    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let tmp = temp_sibling(path);
    if let Err(e) = image.save_with_format(&tmp, format) {
        let _ = fs::remove_file(&tmp);
        return Err(ImageError::encode(path, e.to_string()));
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        ImageError::encode(path, e.to_string())
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), ImageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ImageError::encode(path, format!("creating {}: {e}", parent.display()))
            })?;
        }
    }
    Ok(())
}

// Same directory as the target so the final rename stays on one filesystem.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("output"))
        .to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
