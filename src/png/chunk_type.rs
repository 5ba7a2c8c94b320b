use super::*;

use bytemuck::{Pod, Zeroable};

/// The 4 ascii bytes that name a chunk.
///
/// The case of each letter is a property flag (bit 5 of each byte):
/// uppercase first letter means critical, uppercase second letter means
/// public, and so on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkType {
  /// Image Header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image Data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image End
  pub const IEND: Self = Self(*b"IEND");
  /// Textual data
  pub const tEXt: Self = Self(*b"tEXt");

  /// Makes a chunk type from a tag like `"tEXt"`.
  ///
  /// ## Failure
  /// * The tag must be exactly 4 bytes, each printable ascii (`!` to `~`).
  pub fn new(tag: &[u8]) -> PngResult<Self> {
    let bytes: [u8; 4] = tag.try_into().map_err(|_| PngError::InvalidChunkType)?;
    let out = Self(bytes);
    if out.is_printable() {
      Ok(out)
    } else {
      Err(PngError::InvalidChunkType)
    }
  }

  /// If every byte is printable ascii.
  #[inline]
  #[must_use]
  pub const fn is_printable(self) -> bool {
    let [a, b, c, d] = self.0;
    a.is_ascii_graphic() && b.is_ascii_graphic() && c.is_ascii_graphic() && d.is_ascii_graphic()
  }
}
impl Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('\"')
  }
}
impl core::fmt::Display for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
impl TryFrom<&str> for ChunkType {
  type Error = PngError;
  #[inline]
  fn try_from(tag: &str) -> Result<Self, Self::Error> {
    Self::new(tag.as_bytes())
  }
}
