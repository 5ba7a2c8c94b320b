use super::*;

use alloc::{string::String, vec::Vec};

/// Longest keyword a `tEXt` chunk may have.
pub const MAX_KEYWORD_LEN: usize = 79;

/// Checks that a keyword is 1 to 79 bytes with no null byte in it.
pub fn validate_keyword(keyword: &str) -> PngResult<()> {
  let bytes = keyword.as_bytes();
  if bytes.is_empty() || bytes.len() > MAX_KEYWORD_LEN || bytes.contains(&0) {
    Err(PngError::InvalidKeyword)
  } else {
    Ok(())
  }
}

/// Builds the data field of a `tEXt` chunk: `keyword, 0, text`.
///
/// The text is stored as-is, without compression.
pub fn text_chunk_data(keyword: &str, text: &str) -> PngResult<Vec<u8>> {
  validate_keyword(keyword)?;
  let mut out = Vec::with_capacity(keyword.len() + 1 + text.len());
  out.extend_from_slice(keyword.as_bytes());
  out.push(0);
  out.extend_from_slice(text.as_bytes());
  Ok(out)
}

/// Textual data, borrowed from a `tEXt` chunk.
///
/// Spec: [tEXt](https://www.w3.org/TR/png/#11tEXt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct tEXt<'b> {
  /// Bytes before the first null.
  pub keyword: &'b str,
  /// Bytes after the first null, to the end of the chunk.
  pub text: &'b str,
}
impl<'b> TryFrom<&'b [u8]> for tEXt<'b> {
  type Error = PngError;
  /// Splits a `tEXt` data field at the first null byte.
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let null = data.iter().position(|&b| b == 0).ok_or(PngError::InvalidKeyword)?;
    let (keyword, text) = (&data[..null], &data[null + 1..]);
    Ok(Self { keyword: core::str::from_utf8(keyword)?, text: core::str::from_utf8(text)? })
  }
}
impl<'b> TryFrom<PngRawChunk<'b>> for tEXt<'b> {
  type Error = PngError;
  #[inline]
  fn try_from(raw: PngRawChunk<'b>) -> Result<Self, Self::Error> {
    if raw.chunk_type() == ChunkType::tEXt {
      <Self as TryFrom<&'b [u8]>>::try_from(raw.data())
    } else {
      Err(PngError::PayloadNotFound)
    }
  }
}
impl tEXt<'_> {
  /// Clone the data into a new, owned value.
  #[inline]
  #[must_use]
  pub fn to_owned(&self) -> TextPayload {
    TextPayload { keyword: String::from(self.keyword), text: String::from(self.text) }
  }
}

/// An owned keyword and text pair, as stored in one `tEXt` chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextPayload {
  /// The keyword, such as `Comment`.
  pub keyword: String,
  /// The free-form text.
  pub text: String,
}
impl TextPayload {
  /// Makes a payload, checking the keyword.
  pub fn new(keyword: &str, text: &str) -> PngResult<Self> {
    validate_keyword(keyword)?;
    Ok(Self { keyword: String::from(keyword), text: String::from(text) })
  }

  /// The `tEXt` chunk data field for this payload.
  #[inline]
  pub fn to_chunk_data(&self) -> PngResult<Vec<u8>> {
    text_chunk_data(&self.keyword, &self.text)
  }
}
