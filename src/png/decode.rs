use super::*;

use alloc::vec::Vec;

/// Gets the first `tEXt` chunk out of a PNG, without checking CRCs.
///
/// Only chunk headers are walked, the image data is never inflated.
///
/// ## Failure
/// * [`NotAPng`](PngError::NotAPng) if the signature is wrong.
/// * [`TruncatedChunk`](PngError::TruncatedChunk) if a chunk runs past the
///   end of the data before a `tEXt` chunk was found.
/// * [`PayloadNotFound`](PngError::PayloadNotFound) if the walk reaches
///   `IEND` (or the end of the data) first.
#[inline]
pub fn extract_text(png: &[u8]) -> PngResult<TextPayload> {
  PngDecoder::default().extract_text(png)
}

/// Reading settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PngDecoder {
  /// Check each walked chunk's CRC and fail with
  /// [`CrcMismatch`](PngError::CrcMismatch) on the first bad one.
  pub verify_crc: bool,
}
impl PngDecoder {
  /// A decoder that checks CRCs.
  #[inline]
  #[must_use]
  pub const fn verifying() -> Self {
    Self { verify_crc: true }
  }

  fn checked<'b>(&self, chunk: PngResult<PngRawChunk<'b>>) -> PngResult<PngRawChunk<'b>> {
    let chunk = chunk?;
    log::trace!("{chunk:?}");
    if self.verify_crc {
      chunk.verify_crc()?;
    } else if log::log_enabled!(log::Level::Warn) && chunk.verify_crc().is_err() {
      log::warn!("ignoring bad crc on {} chunk", chunk.chunk_type());
    }
    Ok(chunk)
  }

  /// Walks chunks up to and including `IEND`.
  fn walk<'b>(self, png: &'b [u8]) -> PngResult<impl Iterator<Item = PngResult<PngRawChunk<'b>>>> {
    let mut done = false;
    Ok(RawChunkIter::new(png)?.map_while(move |chunk| {
      if done {
        return None;
      }
      let chunk = self.checked(chunk);
      done = matches!(&chunk, Ok(c) if c.chunk_type() == ChunkType::IEND);
      Some(chunk)
    }))
  }

  /// Gets the first `tEXt` chunk. See [`extract_text`].
  pub fn extract_text(&self, png: &[u8]) -> PngResult<TextPayload> {
    for chunk in self.walk(png)? {
      let chunk = chunk?;
      if chunk.chunk_type() == ChunkType::tEXt {
        let payload = tEXt::try_from(chunk)?.to_owned();
        log::debug!("found tEXt chunk {:?}, {} text bytes", payload.keyword, payload.text.len());
        return Ok(payload);
      }
    }
    Err(PngError::PayloadNotFound)
  }

  /// Gets every `tEXt` chunk, in file order. Having none is not an error.
  pub fn extract_all_text(&self, png: &[u8]) -> PngResult<Vec<TextPayload>> {
    let mut out = Vec::new();
    for chunk in self.walk(png)? {
      let chunk = chunk?;
      if chunk.chunk_type() == ChunkType::tEXt {
        out.push(tEXt::try_from(chunk)?.to_owned());
      }
    }
    Ok(out)
  }

  /// Lists every chunk up to `IEND`.
  ///
  /// CRC problems are recorded in the summary rather than returned as errors
  /// (unless this decoder verifies CRCs).
  pub fn inspect(&self, png: &[u8]) -> PngResult<PngSummary> {
    let mut chunks = Vec::new();
    let mut ihdr = None;
    for chunk in self.walk(png)? {
      let chunk = chunk?;
      if chunk.chunk_type() == ChunkType::IHDR && ihdr.is_none() {
        ihdr = Ihdr::try_from(chunk.data()).ok();
      }
      chunks.push(ChunkSummary {
        chunk_type: chunk.chunk_type(),
        length: chunk.data().len(),
        crc_ok: chunk.verify_crc().is_ok(),
      });
    }
    Ok(PngSummary { ihdr, chunks })
  }
}

/// Gets every `tEXt` chunk, in file order, without checking CRCs.
#[inline]
pub fn extract_all_text(png: &[u8]) -> PngResult<Vec<TextPayload>> {
  PngDecoder::default().extract_all_text(png)
}

/// Summarizes every chunk in a PNG, without failing on CRC problems.
#[inline]
pub fn inspect(png: &[u8]) -> PngResult<PngSummary> {
  PngDecoder::default().inspect(png)
}

/// One line of a [`PngSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkSummary {
  /// The chunk's type tag.
  pub chunk_type: ChunkType,
  /// Length of the data field.
  pub length: usize,
  /// If the declared CRC matched.
  pub crc_ok: bool,
}

/// What chunks a PNG has, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PngSummary {
  /// The parsed header, if the file had a supported one.
  pub ihdr: Option<Ihdr>,
  /// The chunks, in file order.
  pub chunks: Vec<ChunkSummary>,
}
impl PngSummary {
  /// If every chunk's CRC matched.
  #[inline]
  #[must_use]
  pub fn all_crcs_ok(&self) -> bool {
    self.chunks.iter().all(|c| c.crc_ok)
  }

  /// Checks the chunk ordering rules.
  ///
  /// * Exactly one `IHDR`, and it's first.
  /// * Exactly one `IEND`, it's last, and it's empty.
  /// * At least one `IDAT`.
  pub fn check_layout(&self) -> PngResult<()> {
    let count = |ty: ChunkType| self.chunks.iter().filter(|c| c.chunk_type == ty).count();
    match self.chunks.first() {
      Some(c) if c.chunk_type == ChunkType::IHDR => (),
      _ => return Err(PngError::InvalidLayout("first chunk is not IHDR")),
    }
    match self.chunks.last() {
      Some(c) if c.chunk_type == ChunkType::IEND && c.length == 0 => (),
      Some(c) if c.chunk_type == ChunkType::IEND => {
        return Err(PngError::InvalidLayout("IEND is not empty"))
      }
      _ => return Err(PngError::InvalidLayout("last chunk is not IEND")),
    }
    if count(ChunkType::IHDR) != 1 {
      return Err(PngError::InvalidLayout("more than one IHDR"));
    }
    if count(ChunkType::IEND) != 1 {
      return Err(PngError::InvalidLayout("more than one IEND"));
    }
    if count(ChunkType::IDAT) == 0 {
      return Err(PngError::InvalidLayout("no IDAT"));
    }
    Ok(())
  }
}
