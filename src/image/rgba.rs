//! Owned interleaved 8-bit RGBA buffer.

/// Bytes per pixel in the interleaved RGBA layout.
pub const CHANNELS: usize = 4;

/// Owned 8-bit RGBA buffer, row-major, tightly packed.
///
/// Pixels are stored as `[r, g, b, a]` byte groups; `data.len()` is always
/// `width * height * 4`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaImageU8 {
    /// Construct an owned RGBA buffer from raw interleaved bytes.
    ///
    /// Panics if `data.len() != width * height * 4`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height * CHANNELS,
            "RGBA buffer length must be width * height * 4"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Construct a buffer from explicit `[r, g, b, a]` pixels, row-major.
    pub fn from_pixels(width: usize, height: usize, pixels: &[[u8; 4]]) -> Self {
        assert_eq!(pixels.len(), width * height, "pixel count must match dimensions");
        let data = pixels.iter().flatten().copied().collect();
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

    /// Number of pixels (`width * height`)
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// The pixel at `(x, y)` as `[r, g, b, a]`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let start = (y * self.width + x) * CHANNELS;
        [
            self.data[start],
            self.data[start + 1],
            self.data[start + 2],
            self.data[start + 3],
        ]
    }

    /// Iterate over pixels as `&[u8]` slices of length 4, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CHANNELS)
    }

    /// Iterate over pixels as mutable slices of length 4, row-major.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    /// Borrow the raw interleaved bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw interleaved bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
