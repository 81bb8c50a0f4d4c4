#![doc = include_str!("../README.md")]

pub mod color;
pub mod config;
pub mod error;
pub mod image;
pub mod recolor;

// --- High-level re-exports -------------------------------------------------

pub use crate::color::{Rgb, DEFAULT_TARGET};
pub use crate::error::ImageError;
pub use crate::image::RgbaImageU8;
pub use crate::recolor::{recolor, recolor_pixels};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use alpha_recolor::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<(), ImageError> {
/// recolor(Path::new("logo.png"), Path::new("output.png"), DEFAULT_TARGET)?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::color::{Rgb, DEFAULT_TARGET};
    pub use crate::error::ImageError;
    pub use crate::image::RgbaImageU8;
    pub use crate::recolor::{recolor, recolor_pixels};
}
