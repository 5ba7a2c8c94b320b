use bytemuck::{pod_read_unaligned, Pod};
use core::mem::size_of;

/// Reads a `T` off the front of `bytes` (without alignment requirements).
#[inline]
pub(crate) fn try_pull_pod<T: Pod>(bytes: &[u8]) -> Option<(T, &[u8])> {
  let position = size_of::<T>();
  if bytes.len() >= position {
    let (head, tail) = bytes.split_at(position);
    Some((pod_read_unaligned(head), tail))
  } else {
    None
  }
}

/// Splits `n` bytes off the front of `bytes`, if there's that many.
#[inline]
pub(crate) fn try_split_off(bytes: &[u8], n: usize) -> Option<(&[u8], &[u8])> {
  if bytes.len() >= n {
    Some(bytes.split_at(n))
  } else {
    None
  }
}
