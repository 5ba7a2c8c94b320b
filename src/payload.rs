//! The `PART1 / HASH / BASE64` clue layout carried by puzzle images.
//!
//! ```text
//! PART1: IN_FRONT_OF
//! HASH: 8d01676ad52c43fe0cb695ed248b9ce7
//! BASE64: Rk9VTlRBSU4=
//! ```
//!
//! The label is given in the clear, the secret is given twice: once as an MD5
//! hex digest (to confirm a guess) and once as base64 (to actually decode).
//! Nothing about this layout matters to the PNG code, it's just text.

use alloc::{format, string::String, vec::Vec};

use base64::Engine;
use md5::{Digest, Md5};

use crate::{png::TextPayload, PngError, PngResult};

/// Keyword the clue is stored under.
pub const CLUE_KEYWORD: &str = "Comment";

const LABEL_PREFIX: &str = "PART1: ";
const HASH_PREFIX: &str = "HASH: ";
const BASE64_PREFIX: &str = "BASE64: ";

/// Lowercase hex MD5 digest of some bytes.
#[must_use]
pub fn md5_hex(bytes: &[u8]) -> String {
  format!("{:x}", Md5::digest(bytes))
}

/// A clue: a plain label plus a secret word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
  /// Shown in the clear.
  pub label: String,
  /// Shown only as a hash and as base64.
  pub secret: String,
}
impl Clue {
  /// Makes a clue. Neither part may contain a line break.
  pub fn new(label: &str, secret: &str) -> PngResult<Self> {
    if label.contains(['\n', '\r']) || secret.contains(['\n', '\r']) {
      return Err(PngError::InvalidClue("line break in clue"));
    }
    Ok(Self { label: String::from(label), secret: String::from(secret) })
  }

  /// The three line text body.
  #[must_use]
  pub fn to_text(&self) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(self.secret.as_bytes());
    format!(
      "{LABEL_PREFIX}{}\n{HASH_PREFIX}{}\n{BASE64_PREFIX}{b64}",
      self.label,
      md5_hex(self.secret.as_bytes())
    )
  }

  /// The clue as a `Comment` text chunk payload.
  #[must_use]
  pub fn to_payload(&self) -> TextPayload {
    TextPayload { keyword: String::from(CLUE_KEYWORD), text: self.to_text() }
  }

  /// Parses a clue body and checks the hash against the decoded secret.
  ///
  /// ## Failure
  /// * Any of the three lines is missing.
  /// * The base64 doesn't decode, or isn't UTF-8.
  /// * The MD5 of the decoded secret isn't the `HASH` line.
  pub fn parse(text: &str) -> PngResult<Self> {
    let mut label = None;
    let mut hash = None;
    let mut b64 = None;
    for line in text.lines().map(str::trim) {
      if let Some(v) = line.strip_prefix(LABEL_PREFIX) {
        label = Some(v);
      } else if let Some(v) = line.strip_prefix(HASH_PREFIX) {
        hash = Some(v);
      } else if let Some(v) = line.strip_prefix(BASE64_PREFIX) {
        b64 = Some(v);
      }
    }
    let label = label.ok_or(PngError::InvalidClue("no PART1 line"))?;
    let hash = hash.ok_or(PngError::InvalidClue("no HASH line"))?;
    let b64 = b64.ok_or(PngError::InvalidClue("no BASE64 line"))?;
    let secret_bytes: Vec<u8> = base64::engine::general_purpose::STANDARD
      .decode(b64)
      .map_err(|_| PngError::InvalidClue("bad base64"))?;
    let secret = String::from_utf8(secret_bytes).map_err(|_| PngError::InvalidText)?;
    if !md5_hex(secret.as_bytes()).eq_ignore_ascii_case(hash) {
      return Err(PngError::InvalidClue("hash does not match secret"));
    }
    Ok(Self { label: String::from(label), secret })
  }

  /// The final answer: `flag{LABEL_SECRET}`.
  #[must_use]
  pub fn flag(&self) -> String {
    format!("flag{{{}_{}}}", self.label, self.secret)
  }
}
impl TryFrom<&TextPayload> for Clue {
  type Error = PngError;
  #[inline]
  fn try_from(payload: &TextPayload) -> Result<Self, Self::Error> {
    Self::parse(&payload.text)
  }
}
