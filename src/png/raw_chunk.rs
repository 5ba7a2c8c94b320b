use super::*;

use bytemuck::{Pod, Zeroable};

use crate::{try_pull_pod, try_split_off, U32BE};

/// The 8 bytes on the front of every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub(crate) struct ChunkHeader {
  pub(crate) length: U32BE,
  pub(crate) chunk_ty: ChunkType,
}

/// An unparsed chunk from a PNG.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PngRawChunk<'b> {
  pub(crate) chunk_ty: ChunkType,
  pub(crate) data: &'b [u8],
  pub(crate) declared_crc: u32,
}
impl<'b> PngRawChunk<'b> {
  /// The chunk's type tag.
  #[inline]
  #[must_use]
  pub const fn chunk_type(&self) -> ChunkType {
    self.chunk_ty
  }
  /// The chunk's data field.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// The CRC that was stored in the file.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// The CRC that the chunk *should* have.
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    chunk_crc(self.chunk_ty, self.data)
  }
  /// Checks the declared CRC against the actual CRC.
  #[inline]
  pub fn verify_crc(&self) -> PngResult<()> {
    let actual = self.compute_actual_crc();
    if actual == self.declared_crc {
      Ok(())
    } else {
      Err(PngError::CrcMismatch {
        chunk_type: self.chunk_ty,
        declared: self.declared_crc,
        actual,
      })
    }
  }
}
impl Debug for PngRawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("chunk_ty", &self.chunk_ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// * Stops (returns `None`) once the input is used up exactly.
/// * Any leftover bytes that can't form a whole chunk give one
///   `Err(TruncatedChunk)`, and then the iterator is finished.
///
/// This doesn't stop at `IEND` on its own, the reader decides that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RawChunkIter<'b>(pub(crate) &'b [u8]);
impl<'b> RawChunkIter<'b> {
  /// Pass the full PNG bytes, the signature is checked and then skipped.
  #[inline]
  pub fn new(bytes: &'b [u8]) -> PngResult<Self> {
    if is_png_signature_correct(bytes) {
      Ok(Self(&bytes[PNG_SIGNATURE.len()..]))
    } else {
      Err(PngError::NotAPng)
    }
  }

  fn pull_chunk(&mut self) -> PngResult<PngRawChunk<'b>> {
    let (header, rest): (ChunkHeader, &'b [u8]) =
      try_pull_pod(self.0).ok_or(PngError::TruncatedChunk)?;
    let data_len = usize::try_from(header.length.to_u32())?;
    let (data, rest) = try_split_off(rest, data_len).ok_or(PngError::TruncatedChunk)?;
    let (declared_crc, rest): (U32BE, &'b [u8]) =
      try_pull_pod(rest).ok_or(PngError::TruncatedChunk)?;
    self.0 = rest;
    Ok(PngRawChunk { chunk_ty: header.chunk_ty, data, declared_crc: declared_crc.to_u32() })
  }
}
impl<'b> Iterator for RawChunkIter<'b> {
  type Item = PngResult<PngRawChunk<'b>>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.0.is_empty() {
      return None;
    }
    let out = self.pull_chunk();
    if out.is_err() {
      self.0 = &[];
    }
    Some(out)
  }
}
impl core::iter::FusedIterator for RawChunkIter<'_> {}
