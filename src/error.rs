use core::{num::TryFromIntError, str::Utf8Error};

/// Shorthand for results from this crate.
pub type PngResult<T> = Result<T, PngError>;

/// An error from the `stegpng` crate.
///
/// Every operation in the crate is a pure transform over in-memory bytes, so
/// none of these are worth retrying with the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PngError {
  /// The width or height is 0, or larger than `2^31 - 1`.
  #[error("image width and height must be in 1..=2147483647 (got {width}x{height})")]
  InvalidDimension {
    /// requested width
    width: u32,
    /// requested height
    height: u32,
  },

  /// A byte count for the image (or a chunk) doesn't fit the target integer.
  #[error("image byte count overflows the addressable size")]
  DimensionOverflow,

  /// A chunk type tag must be exactly 4 bytes of printable ascii.
  #[error("chunk type must be 4 printable ascii bytes")]
  InvalidChunkType,

  /// A `tEXt` keyword must be 1 to 79 bytes and contain no null byte.
  #[error("text keyword must be 1-79 bytes with no null byte")]
  InvalidKeyword,

  /// The first 8 bytes are not the PNG signature.
  #[error("data does not start with the PNG signature")]
  NotAPng,

  /// A chunk header or declared chunk length runs past the end of the data.
  #[error("chunk is truncated")]
  TruncatedChunk,

  /// The PNG has no `tEXt` chunk.
  #[error("no tEXt chunk found")]
  PayloadNotFound,

  /// A chunk's declared CRC doesn't match the CRC of its type and data.
  #[error("chunk {chunk_type} has crc {declared:#010x}, expected {actual:#010x}")]
  CrcMismatch {
    /// the chunk type, as ascii
    chunk_type: crate::png::ChunkType,
    /// the CRC stored in the file
    declared: u32,
    /// the CRC computed from the chunk bytes
    actual: u32,
  },

  /// The text of a `tEXt` chunk is not UTF-8.
  #[error("tEXt payload is not valid utf-8")]
  InvalidText,

  /// The chunks are not in `IHDR, .., IDAT, .., IEND` order.
  #[error("chunk layout is invalid: {0}")]
  InvalidLayout(&'static str),

  /// The zlib stream of the image data could not be inflated.
  #[error("image data failed to decompress")]
  Decompress,

  /// A text payload doesn't follow the `PART1/HASH/BASE64` clue layout, or
  /// its hash doesn't match its secret.
  #[error("clue payload is malformed: {0}")]
  InvalidClue(&'static str),
}
impl From<Utf8Error> for PngError {
  #[inline]
  fn from(_: Utf8Error) -> Self {
    Self::InvalidText
  }
}
impl From<TryFromIntError> for PngError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::DimensionOverflow
  }
}
