use super::*;

/// The largest width or height a PNG may declare.
pub const MAX_DIMENSION: u32 = (1 << 31) - 1;

/// Bit depth written to every header.
pub const BIT_DEPTH: u8 = 8;

/// The "truecolor" (RGB) color type.
pub const COLOR_TYPE_RGB: u8 = 2;

/// Channels per pixel for 8-bit RGB.
pub const BYTES_PER_PIXEL: usize = 3;

/// Image Header
///
/// Only 8-bit RGB without interlacing is supported, so the only values that
/// vary are the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ihdr {
  width: u32,
  height: u32,
}
impl Ihdr {
  /// Makes a header for the given dimensions.
  ///
  /// ## Failure
  /// * Width and height must both be in `1..=MAX_DIMENSION`.
  pub const fn new(width: u32, height: u32) -> PngResult<Self> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
      Err(PngError::InvalidDimension { width, height })
    } else {
      Ok(Self { width, height })
    }
  }

  /// width in pixels
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// height in pixels
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// The 13 byte data field of the `IHDR` chunk.
  #[inline]
  #[must_use]
  pub const fn to_bytes(&self) -> [u8; 13] {
    let [w0, w1, w2, w3] = self.width.to_be_bytes();
    let [h0, h1, h2, h3] = self.height.to_be_bytes();
    // compression method, filter method, interlace method: all 0
    [w0, w1, w2, w3, h0, h1, h2, h3, BIT_DEPTH, COLOR_TYPE_RGB, 0, 0, 0]
  }

  /// Bytes in one row of pixels, not counting any filter byte.
  pub fn bytes_per_scanline(&self) -> PngResult<usize> {
    usize::try_from(self.width)?.checked_mul(BYTES_PER_PIXEL).ok_or(PngError::DimensionOverflow)
  }

  /// Bytes of uncompressed image data for the given scanline mode.
  pub fn image_data_len(&self, mode: ScanlineMode) -> PngResult<usize> {
    let line = self.bytes_per_scanline()? + mode.filter_bytes_per_line();
    line.checked_mul(usize::try_from(self.height)?).ok_or(PngError::DimensionOverflow)
  }
}
impl TryFrom<&[u8]> for Ihdr {
  type Error = PngError;
  /// Parses an `IHDR` data field, but only the 8-bit RGB kind written here.
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match value {
      [w0, w1, w2, w3, h0, h1, h2, h3, BIT_DEPTH, COLOR_TYPE_RGB, 0, 0, 0] => Self::new(
        u32::from_be_bytes([*w0, *w1, *w2, *w3]),
        u32::from_be_bytes([*h0, *h1, *h2, *h3]),
      ),
      _ => Err(PngError::InvalidLayout("unsupported IHDR")),
    }
  }
}
