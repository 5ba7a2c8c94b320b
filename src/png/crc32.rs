use crc32fast::Hasher;

/// The CRC-32 used by PNG (and zlib, and gzip, and ISO 3309).
#[inline]
#[must_use]
pub fn png_crc(bytes: &[u8]) -> u32 {
  crc32fast::hash(bytes)
}

/// CRC of a chunk: covers the type bytes and the data bytes, not the length.
#[inline]
#[must_use]
pub fn chunk_crc(chunk_type: super::ChunkType, data: &[u8]) -> u32 {
  let mut hasher = Hasher::new();
  hasher.update(&chunk_type.0);
  hasher.update(data);
  hasher.finalize()
}
