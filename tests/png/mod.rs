use proptest::prelude::*;
use stegpng::{
  png::{
    encode_png, extract_all_text, extract_text, inflate_image_data, inspect, ChunkType,
    PngDecoder, PngEncoder, RawChunkIter, ScanlineMode, PNG_SIGNATURE,
  },
  PngError,
};

/// Splits a PNG into `(type, data, declared crc)` without using the crate.
fn split_chunks(png: &[u8]) -> Vec<([u8; 4], &[u8], u32)> {
  let mut out = Vec::new();
  let mut rest = &png[8..];
  while !rest.is_empty() {
    let len = u32::from_be_bytes(rest[0..4].try_into().unwrap()) as usize;
    let ty: [u8; 4] = rest[4..8].try_into().unwrap();
    let data = &rest[8..8 + len];
    let crc = u32::from_be_bytes(rest[8 + len..12 + len].try_into().unwrap());
    out.push((ty, data, crc));
    rest = &rest[12 + len..];
  }
  out
}

#[test]
fn test_puzzle_image_round_trip() {
  let png = encode_png(200, 200, "Comment", crate::PUZZLE_TEXT).unwrap();
  let payload = extract_text(&png).unwrap();
  assert_eq!(payload.keyword, "Comment");
  assert_eq!(payload.text, crate::PUZZLE_TEXT);
  // strings(1) style extraction works too, since the text isn't compressed.
  let needle = b"HASH: 8d01676ad52c43fe0cb695ed248b9ce7";
  assert!(png.windows(needle.len()).any(|w| w == needle));
}

#[test]
fn test_signature_and_chunk_order() {
  let png = encode_png(7, 5, "Title", "hi").unwrap();
  assert_eq!(&png[..8], &PNG_SIGNATURE);
  let chunks = split_chunks(&png);
  let types: Vec<&[u8; 4]> = chunks.iter().map(|(ty, _, _)| ty).collect();
  assert_eq!(types, [b"IHDR", b"IDAT", b"tEXt", b"IEND"]);
  assert_eq!(chunks[0].1, &[0, 0, 0, 7, 0, 0, 0, 5, 8, 2, 0, 0, 0]);
  assert!(chunks[3].1.is_empty());
  assert_eq!(chunks[2].1, b"Title\0hi");
}

#[test]
fn test_every_crc_matches_a_standard_crc32() {
  let png = PngEncoder::new(31, 17)
    .unwrap()
    .with_text("a", "first")
    .unwrap()
    .with_text("b", "second")
    .unwrap()
    .encode()
    .unwrap();
  for (ty, data, crc) in split_chunks(&png) {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&ty);
    hasher.update(data);
    assert_eq!(hasher.finalize(), crc, "{}", String::from_utf8_lossy(&ty));
  }
  let summary = inspect(&png).unwrap();
  assert!(summary.all_crcs_ok());
  assert_eq!(summary.check_layout(), Ok(()));
  assert_eq!(summary.ihdr.map(|h| (h.width(), h.height())), Some((31, 17)));
}

#[test]
fn test_text_chunks_keep_insertion_order() {
  let png = PngEncoder::new(1, 1)
    .unwrap()
    .with_text("Comment", "one")
    .unwrap()
    .with_text("Author", "two")
    .unwrap()
    .with_text("Comment", "three")
    .unwrap()
    .encode()
    .unwrap();
  let texts = extract_all_text(&png).unwrap();
  let pairs: Vec<(&str, &str)> =
    texts.iter().map(|t| (t.keyword.as_str(), t.text.as_str())).collect();
  assert_eq!(pairs, [("Comment", "one"), ("Author", "two"), ("Comment", "three")]);
  assert_eq!(extract_text(&png).unwrap().text, "one");
}

#[test]
fn test_decompressed_size_with_and_without_filter_bytes() {
  let (w, h) = (13_usize, 9_usize);
  let filtered = encode_png(w as u32, h as u32, "k", "v").unwrap();
  let lines = inflate_image_data(&filtered).unwrap();
  assert_eq!(lines.len(), h * (1 + w * 3));
  assert!(lines.chunks_exact(1 + w * 3).all(|line| line[0] == 0));
  // first pixel of the second row: (0, 255*1/9, 150)
  assert_eq!(&lines[(1 + w * 3) + 1..][..3], &[0, 28, 150]);

  let raw = PngEncoder::new(w as u32, h as u32)
    .unwrap()
    .scanline_mode(ScanlineMode::Raw)
    .compression_level(0)
    .with_text("k", "v")
    .unwrap()
    .encode()
    .unwrap();
  assert_eq!(inflate_image_data(&raw).unwrap().len(), w * h * 3);
  assert_eq!(extract_text(&raw).unwrap().text, "v");
}

#[test]
fn test_image_data_split_over_several_idat_chunks() {
  let whole = encode_png(40, 30, "Comment", "split").unwrap();
  let split = PngEncoder::new(40, 30)
    .unwrap()
    .idat_chunk_len(64)
    .with_text("Comment", "split")
    .unwrap()
    .encode()
    .unwrap();
  let chunks = split_chunks(&split);
  let idats: Vec<&[u8]> =
    chunks.iter().filter(|(ty, _, _)| ty == b"IDAT").map(|(_, data, _)| *data).collect();
  assert!(idats.len() > 1);
  assert!(idats.iter().all(|data| data.len() <= 64));
  // the IDAT chunks sit together between IHDR and tEXt
  let types: Vec<&[u8; 4]> = chunks.iter().map(|(ty, _, _)| ty).collect();
  assert_eq!(types[0], b"IHDR");
  assert!(types[1..=idats.len()].iter().all(|ty| *ty == b"IDAT"));
  assert_eq!(types[idats.len() + 1..], [b"tEXt", b"IEND"]);

  assert_eq!(inflate_image_data(&split).unwrap(), inflate_image_data(&whole).unwrap());
  assert_eq!(extract_text(&split).unwrap().text, "split");
  let summary = inspect(&split).unwrap();
  assert!(summary.all_crcs_ok());
  assert_eq!(summary.check_layout(), Ok(()));
  // a zero length is clamped to one byte per chunk
  let tiny = PngEncoder::new(1, 1).unwrap().idat_chunk_len(0).encode().unwrap();
  assert!(split_chunks(&tiny).iter().filter(|(ty, _, _)| ty == b"IDAT").all(|c| c.1.len() == 1));
  assert_eq!(inflate_image_data(&tiny).unwrap().len(), 4);
}

#[test]
fn test_round_trip_at_the_largest_tested_sizes() {
  for (width, height) in [(4096_u32, 1_u32), (1, 4096), (4096, 64)] {
    let png = encode_png(width, height, "Comment", crate::PUZZLE_TEXT).unwrap();
    let payload = extract_text(&png).unwrap();
    assert_eq!(payload.keyword, "Comment");
    assert_eq!(payload.text, crate::PUZZLE_TEXT);
    let lines = inflate_image_data(&png).unwrap();
    assert_eq!(lines.len(), height as usize * (1 + width as usize * 3));
  }
}

#[test]
fn test_bad_dimensions_and_keywords() {
  assert_eq!(
    encode_png(0, 10, "k", "v"),
    Err(PngError::InvalidDimension { width: 0, height: 10 })
  );
  assert!(matches!(encode_png(10, 1 << 31, "k", "v"), Err(PngError::InvalidDimension { .. })));
  assert_eq!(encode_png(1, 1, "", "v"), Err(PngError::InvalidKeyword));
  assert_eq!(encode_png(1, 1, "a\0b", "v"), Err(PngError::InvalidKeyword));
  assert_eq!(encode_png(1, 1, &"k".repeat(80), "v"), Err(PngError::InvalidKeyword));
  assert!(encode_png(1, 1, &"k".repeat(79), "v").is_ok());
}

#[test]
fn test_not_a_png() {
  assert_eq!(extract_text(b""), Err(PngError::NotAPng));
  assert_eq!(extract_text(b"\x89PNG\r\n"), Err(PngError::NotAPng));
  assert_eq!(extract_text(b"GIF89a and then some more bytes"), Err(PngError::NotAPng));
  let mut png = encode_png(2, 2, "k", "v").unwrap();
  png[1] = b'p';
  assert_eq!(extract_text(&png), Err(PngError::NotAPng));
}

#[test]
fn test_truncated_chunks() {
  let png = encode_png(4, 4, "k", "v").unwrap();
  // cut inside the IHDR header, then inside the IDAT data
  assert_eq!(extract_text(&png[..12]), Err(PngError::TruncatedChunk));
  assert_eq!(extract_text(&png[..8 + 25 + 20]), Err(PngError::TruncatedChunk));
  // a length field that claims far more data than there is
  let mut lying = png.clone();
  lying[8 + 25..8 + 25 + 4].copy_from_slice(&0x7FFF_FFFF_u32.to_be_bytes());
  assert_eq!(extract_text(&lying), Err(PngError::TruncatedChunk));
}

#[test]
fn test_payload_not_found() {
  let png = PngEncoder::new(3, 3).unwrap().encode().unwrap();
  assert_eq!(extract_text(&png), Err(PngError::PayloadNotFound));
  assert_eq!(extract_all_text(&png), Ok(vec![]));
  assert_eq!(extract_text(&PNG_SIGNATURE), Err(PngError::PayloadNotFound));
}

#[test]
fn test_text_after_iend_is_ignored() {
  let mut png = PngEncoder::new(3, 3).unwrap().encode().unwrap();
  let extra = stegpng::png::frame_chunk(b"tEXt", b"late\0text").unwrap();
  png.extend_from_slice(&extra);
  assert_eq!(extract_text(&png), Err(PngError::PayloadNotFound));
  assert_eq!(RawChunkIter::new(&png).unwrap().count(), 4);
}

#[test]
fn test_crc_verification() {
  let mut png = encode_png(5, 5, "Comment", "secret").unwrap();
  let last = png.len() - 12 - 1;
  // flip a bit in the tEXt crc
  png[last] ^= 0x01;
  assert_eq!(extract_text(&png).unwrap().text, "secret");
  match PngDecoder::verifying().extract_text(&png) {
    Err(PngError::CrcMismatch { chunk_type, declared, actual }) => {
      assert_eq!(chunk_type, ChunkType::tEXt);
      assert_ne!(declared, actual);
    }
    other => panic!("expected a crc mismatch, got {other:?}"),
  }
  assert!(!inspect(&png).unwrap().all_crcs_ok());
}

#[test]
fn test_decode_is_idempotent() {
  let png = encode_png(9, 9, "Comment", "same every time").unwrap();
  let before = png.clone();
  let a = extract_text(&png).unwrap();
  let b = extract_text(&png).unwrap();
  assert_eq!(a, b);
  assert_eq!(png, before);
}

#[test]
fn test_encode_is_deterministic() {
  assert_eq!(encode_png(20, 10, "k", "v").unwrap(), encode_png(20, 10, "k", "v").unwrap());
}

#[test]
fn test_RawChunkIter_no_panics() {
  // random data (with and without a real signature) must never panic
  for _ in 0..10 {
    let mut v = crate::rand_bytes(1024);
    let _ = RawChunkIter::new(&v).map(|it| it.count());
    let _ = extract_text(&v);
    v[..8].copy_from_slice(&PNG_SIGNATURE);
    for _ in RawChunkIter::new(&v).unwrap() {
      //
    }
    let _ = extract_text(&v);
    let _ = inspect(&v);
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test]
  fn prop_round_trip(
    width in 1_u32..=64,
    height in 1_u32..=64,
    keyword in "[ -~]{1,79}",
    text in "\\PC*",
  ) {
    let png = encode_png(width, height, &keyword, &text).unwrap();
    let payload = extract_text(&png).unwrap();
    prop_assert_eq!(payload.keyword, keyword);
    prop_assert_eq!(payload.text, text);
  }
}
