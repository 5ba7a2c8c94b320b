use super::*;

use alloc::vec::Vec;

use crate::U32BE;

/// Largest data field a chunk may declare.
pub const MAX_CHUNK_LEN: usize = (1 << 31) - 1;

/// Appends one framed chunk (length, type, data, crc) to `out`.
pub fn write_chunk(out: &mut Vec<u8>, chunk_type: ChunkType, data: &[u8]) -> PngResult<()> {
  if !chunk_type.is_printable() {
    return Err(PngError::InvalidChunkType);
  }
  if data.len() > MAX_CHUNK_LEN {
    return Err(PngError::DimensionOverflow);
  }
  let length = U32BE::from_u32(u32::try_from(data.len())?);
  let crc = U32BE::from_u32(chunk_crc(chunk_type, data));
  out.try_reserve(12 + data.len()).map_err(|_| PngError::DimensionOverflow)?;
  out.extend_from_slice(&length.to_bytes());
  out.extend_from_slice(&chunk_type.0);
  out.extend_from_slice(data);
  out.extend_from_slice(&crc.to_bytes());
  log::trace!("framed {chunk_type} chunk: {} data bytes, crc {:#010x}", data.len(), crc.to_u32());
  Ok(())
}

/// Frames a chunk into its own buffer.
///
/// ## Failure
/// * `tag` must be 4 printable ascii bytes.
pub fn frame_chunk(tag: &[u8], data: &[u8]) -> PngResult<Vec<u8>> {
  let mut out = Vec::new();
  write_chunk(&mut out, ChunkType::new(tag)?, data)?;
  Ok(out)
}

/// Puts the PNG signature in front of already framed chunks.
///
/// The chunks are written in the order given. Nothing here checks that
/// `IHDR` comes first or `IEND` comes last, that's up to the caller.
#[must_use]
pub fn assemble<C: AsRef<[u8]>>(chunks: &[C]) -> Vec<u8> {
  let total = PNG_SIGNATURE.len() + chunks.iter().map(|c| c.as_ref().len()).sum::<usize>();
  let mut out = Vec::with_capacity(total);
  out.extend_from_slice(&PNG_SIGNATURE);
  for chunk in chunks {
    out.extend_from_slice(chunk.as_ref());
  }
  out
}
