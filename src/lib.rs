#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for hiding text payloads inside PNG files.
//!
//! The PNGs written here are ordinary 8-bit RGB images (a reproducible color
//! gradient) that also carry a `tEXt` chunk. The payload is never mixed into
//! the pixels: it rides along as an ancillary chunk, so any PNG viewer shows
//! the gradient and any chunk dumper (or [`extract_text`](png::extract_text))
//! shows the text.
//!
//! ```
//! use stegpng::png::{encode_png, extract_text};
//!
//! let png = encode_png(16, 16, "Comment", "hello").unwrap();
//! let payload = extract_text(&png).unwrap();
//! assert_eq!(payload.keyword, "Comment");
//! assert_eq!(payload.text, "hello");
//! ```
//!
//! The [`payload`] module has helpers for the `PART1 / HASH / BASE64` clue
//! layout used by the puzzle images.

extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

mod int_endian;
pub use int_endian::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod png;

pub mod payload;
