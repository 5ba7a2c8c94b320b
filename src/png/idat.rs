use super::*;

use alloc::vec::Vec;

/// If each scanline gets a filter-type byte in the image data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanlineMode {
  /// Every line starts with a `0` ("None") filter byte. Any PNG decoder
  /// can show the result.
  #[default]
  Filtered,
  /// Pixel bytes only, no filter bytes. The file structure is still valid
  /// and the text is still readable, but strict decoders won't show the
  /// picture.
  Raw,
}
impl ScanlineMode {
  /// How many extra bytes each scanline has.
  #[inline]
  #[must_use]
  pub const fn filter_bytes_per_line(self) -> usize {
    match self {
      Self::Filtered => 1,
      Self::Raw => 0,
    }
  }
}

/// The `None` filter type.
const FILTER_NONE: u8 = 0;

/// Blue channel of every carrier pixel.
const GRADIENT_BLUE: u8 = 150;

fn try_with_capacity(len: usize) -> PngResult<Vec<u8>> {
  if len > isize::MAX as usize {
    return Err(PngError::DimensionOverflow);
  }
  let mut v = Vec::new();
  v.try_reserve_exact(len).map_err(|_| PngError::DimensionOverflow)?;
  Ok(v)
}

/// Red for column `x` (or green for row `y`): `floor(255 * x / w)`.
#[inline]
#[must_use]
const fn gradient_channel(pos: u32, span: u32) -> u8 {
  ((255 * pos as u64) / span as u64) as u8
}

/// Generates the carrier image: `width * height` RGB pixels, row-major.
///
/// Pixel `(x, y)` is `(255*x/w, 255*y/h, 150)`, rounded down.
pub fn gradient_pixels(ihdr: &Ihdr) -> PngResult<Vec<u8>> {
  let line_len = ihdr.bytes_per_scanline()?;
  let len = ihdr.image_data_len(ScanlineMode::Raw)?;
  let mut out = try_with_capacity(len)?;
  out.resize(len, 0);
  for (y, line) in (0..ihdr.height()).zip(out.chunks_exact_mut(line_len)) {
    let g = gradient_channel(y, ihdr.height());
    let pixels: &mut [[u8; 3]] = bytemuck::cast_slice_mut(line);
    for (x, px) in (0..ihdr.width()).zip(pixels.iter_mut()) {
      *px = [gradient_channel(x, ihdr.width()), g, GRADIENT_BLUE];
    }
  }
  Ok(out)
}

/// Lays out pixel rows the way they go into the zlib stream.
///
/// With [`ScanlineMode::Raw`] this is just a copy of the pixels.
pub fn scanlines(pixels: &[u8], ihdr: &Ihdr, mode: ScanlineMode) -> PngResult<Vec<u8>> {
  let line_len = ihdr.bytes_per_scanline()?;
  if pixels.len() != ihdr.image_data_len(ScanlineMode::Raw)? {
    return Err(PngError::InvalidDimension { width: ihdr.width(), height: ihdr.height() });
  }
  match mode {
    ScanlineMode::Raw => {
      let mut out = try_with_capacity(pixels.len())?;
      out.extend_from_slice(pixels);
      Ok(out)
    }
    ScanlineMode::Filtered => {
      let mut out = try_with_capacity(ihdr.image_data_len(mode)?)?;
      for line in pixels.chunks_exact(line_len) {
        out.push(FILTER_NONE);
        out.extend_from_slice(line);
      }
      Ok(out)
    }
  }
}

/// Zlib compresses image data. `level` is a miniz_oxide level, `0..=10`.
#[inline]
#[must_use]
pub fn compress_image_data(data: &[u8], level: u8) -> Vec<u8> {
  miniz_oxide::deflate::compress_to_vec_zlib(data, level.min(10))
}

/// Builds the whole (compressed) `IDAT` data field for the carrier image.
pub fn carrier_image_data(ihdr: &Ihdr, mode: ScanlineMode, level: u8) -> PngResult<Vec<u8>> {
  let pixels = gradient_pixels(ihdr)?;
  let lines = scanlines(&pixels, ihdr, mode)?;
  let compressed = compress_image_data(&lines, level);
  log::trace!(
    "carrier {}x{}: {} scanline bytes -> {} compressed",
    ihdr.width(),
    ihdr.height(),
    lines.len(),
    compressed.len()
  );
  Ok(compressed)
}

/// Inflates the image data of a PNG.
///
/// All `IDAT` chunks are joined into one zlib stream, as PNG requires. The
/// output still has filter bytes in it (if the file had them).
pub fn inflate_image_data(png: &[u8]) -> PngResult<Vec<u8>> {
  let mut zlib = Vec::new();
  for chunk in RawChunkIter::new(png)? {
    let chunk = chunk?;
    match chunk.chunk_type() {
      ChunkType::IDAT => zlib.extend_from_slice(chunk.data()),
      ChunkType::IEND => break,
      _ => (),
    }
  }
  miniz_oxide::inflate::decompress_to_vec_zlib(&zlib).map_err(|_| PngError::Decompress)
}
