use super::*;

use alloc::vec::Vec;

/// Compression level used unless you pick another one.
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// Writes a PNG of the given size with one `tEXt` chunk in it.
///
/// The chunks are `IHDR, IDAT, tEXt, IEND`, and the image data uses
/// [`ScanlineMode::Filtered`].
///
/// ## Failure
/// * [`InvalidDimension`](PngError::InvalidDimension) if a dimension is 0 or
///   over `2^31 - 1`.
/// * [`DimensionOverflow`](PngError::DimensionOverflow) if the image doesn't
///   fit in memory.
/// * [`InvalidKeyword`](PngError::InvalidKeyword) if the keyword is empty,
///   over 79 bytes, or has a null in it.
pub fn encode_png(width: u32, height: u32, keyword: &str, text: &str) -> PngResult<Vec<u8>> {
  PngEncoder::new(width, height)?.with_text(keyword, text)?.encode()
}

/// Settings for writing a PNG.
///
/// ```
/// use stegpng::png::{PngEncoder, ScanlineMode};
/// let png = PngEncoder::new(4, 4)
///   .unwrap()
///   .scanline_mode(ScanlineMode::Raw)
///   .compression_level(9)
///   .with_text("Title", "four by four")
///   .unwrap()
///   .with_text("Comment", "second")
///   .unwrap()
///   .encode()
///   .unwrap();
/// assert!(stegpng::png::is_png_signature_correct(&png));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngEncoder {
  ihdr: Ihdr,
  scanline_mode: ScanlineMode,
  compression_level: u8,
  idat_chunk_len: usize,
  texts: Vec<TextPayload>,
}
impl PngEncoder {
  /// Starts an encoder for the given dimensions, with no text yet.
  pub fn new(width: u32, height: u32) -> PngResult<Self> {
    Ok(Self {
      ihdr: Ihdr::new(width, height)?,
      scanline_mode: ScanlineMode::default(),
      compression_level: DEFAULT_COMPRESSION_LEVEL,
      idat_chunk_len: MAX_CHUNK_LEN,
      texts: Vec::new(),
    })
  }

  /// Sets if scanlines get filter bytes.
  #[inline]
  #[must_use]
  pub fn scanline_mode(mut self, mode: ScanlineMode) -> Self {
    self.scanline_mode = mode;
    self
  }

  /// Sets the zlib level, `0..=10` (higher values are clamped to 10).
  #[inline]
  #[must_use]
  pub fn compression_level(mut self, level: u8) -> Self {
    self.compression_level = level.min(10);
    self
  }

  /// Sets the most zlib bytes put in one `IDAT` chunk, `1..=MAX_CHUNK_LEN`.
  ///
  /// Longer streams are split over several `IDAT` chunks in a row.
  #[inline]
  #[must_use]
  pub fn idat_chunk_len(mut self, len: usize) -> Self {
    self.idat_chunk_len = len.clamp(1, MAX_CHUNK_LEN);
    self
  }

  /// Adds a `tEXt` chunk. Text chunks are written in the order added.
  pub fn with_text(mut self, keyword: &str, text: &str) -> PngResult<Self> {
    self.push_text(TextPayload::new(keyword, text)?);
    Ok(self)
  }

  /// Adds an already built payload.
  #[inline]
  pub fn push_text(&mut self, payload: TextPayload) {
    self.texts.push(payload);
  }

  /// The header that will be written.
  #[inline]
  #[must_use]
  pub const fn ihdr(&self) -> Ihdr {
    self.ihdr
  }

  /// Writes the PNG: `IHDR, IDAT.., tEXt.., IEND`.
  ///
  /// The whole file is built in memory, nothing is returned on error.
  pub fn encode(&self) -> PngResult<Vec<u8>> {
    let idat = carrier_image_data(&self.ihdr, self.scanline_mode, self.compression_level)?;
    let idat_count = idat.len().div_ceil(self.idat_chunk_len).max(1);
    let mut chunks = Vec::with_capacity(2 + idat_count + self.texts.len());
    chunks.push(frame_chunk(b"IHDR", &self.ihdr.to_bytes())?);
    for part in idat.chunks(self.idat_chunk_len) {
      chunks.push(frame_chunk(b"IDAT", part)?);
    }
    for payload in self.texts.iter() {
      chunks.push(frame_chunk(b"tEXt", &payload.to_chunk_data()?)?);
    }
    chunks.push(frame_chunk(b"IEND", &[])?);
    let png = assemble(chunks.as_slice());
    log::debug!(
      "encoded {}x{} png: {} bytes, {} IDAT chunk(s), {} text chunk(s), {:?}",
      self.ihdr.width(),
      self.ihdr.height(),
      png.len(),
      idat_count,
      self.texts.len(),
      self.scanline_mode
    );
    Ok(png)
  }
}
