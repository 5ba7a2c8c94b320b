#![forbid(unsafe_code)]

//! Module for writing and reading PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Layout
//!
//! A PNG is an 8 byte signature followed by a series of "chunks". Each chunk
//! is:
//!
//! * 4 bytes: big-endian length of the data field.
//! * 4 bytes: ascii chunk type, such as `IHDR`.
//! * `length` bytes: the data.
//! * 4 bytes: big-endian CRC-32 of the type and data bytes.
//!
//! The writer in this module only ever produces one shape of file:
//!
//! ```text
//! signature, IHDR, IDAT, tEXt (one or more), IEND
//! ```
//!
//! The header always declares 8-bit RGB, no interlacing. The image data is
//! a gradient whose content doesn't matter to anyone, it's only there so that
//! the file opens as a normal looking picture.
//!
//! ## Writing
//!
//! Call [`encode_png`] for the common case, or set up a [`PngEncoder`] if you
//! want more than one text chunk or a different compression setup.
//!
//! ## Reading
//!
//! Call [`extract_text`] to get the first `tEXt` chunk back out. The reader
//! only walks the chunk headers, it never inflates the image data to find the
//! text. Use a [`PngDecoder`] if you want CRC checking, and [`inspect`] if
//! you want a summary of every chunk in the file.
//!
//! ## Scanline Filter Bytes
//!
//! Real PNG image data has one filter-type byte on the front of each scanline.
//! The default [`ScanlineMode::Filtered`] writes a `0` ("None") filter byte per
//! line, which is what browsers and `libpng` expect. [`ScanlineMode::Raw`]
//! leaves them out, which gives a structurally valid file whose pixels strict
//! decoders will reject.

use core::fmt::{Debug, Write};

use crate::{PngError, PngResult};

mod crc32;
pub use crc32::*;

mod chunk_type;
pub use chunk_type::*;

mod raw_chunk;
pub use raw_chunk::*;

mod ihdr;
pub use ihdr::*;

mod idat;
pub use idat::*;

mod text;
pub use text::*;

mod writer;
pub use writer::*;

mod encode;
pub use encode::*;

mod decode;
pub use decode::*;


/// The first eight bytes of every PNG.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Checks if the PNG signature is correct.
#[inline]
#[must_use]
pub fn is_png_signature_correct(bytes: &[u8]) -> bool {
  bytes.get(..8) == Some(&PNG_SIGNATURE[..])
}
