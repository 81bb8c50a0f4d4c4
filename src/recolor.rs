//! The recolor transform: load → transform → save.
use crate::color::Rgb;
use crate::error::ImageError;
use crate::image::io::{load_rgba_image, save_rgba_image};
use crate::image::RgbaImageU8;
use log::debug;
use std::path::Path;

/// Rewrite the RGB of every pixel with alpha > 0 to `target`, in place.
///
/// Alpha is preserved at every position; fully transparent pixels are left
/// bit-identical. Returns the number of pixels rewritten. Applying the same
/// target twice is idempotent.
pub fn recolor_pixels(buffer: &mut RgbaImageU8, target: Rgb) -> usize {
    let total = buffer.pixel_count();
    let mut recolored = 0usize;
    for px in buffer.pixels_mut() {
        if px[3] > 0 {
            px[0] = target.r;
            px[1] = target.g;
            px[2] = target.b;
            recolored += 1;
        }
    }
    debug!("recolored {recolored}/{total} pixels to {target}");
    recolored
}

/// Recolor the image at `input` and write the result to `output`.
///
/// The output keeps the input's dimensions and alpha channel; the container
/// format is inferred from the output extension (PNG by default). Fails with
/// [`ImageError::DecodeFailure`] when `input` is missing or not a decodable
/// image and with [`ImageError::EncodeFailure`] when `output` cannot be
/// written.
pub fn recolor(input: &Path, output: &Path, target: Rgb) -> Result<(), ImageError> {
    let mut buffer = load_rgba_image(input)?;
    recolor_pixels(&mut buffer, target);
    save_rgba_image(&buffer, output)
}
