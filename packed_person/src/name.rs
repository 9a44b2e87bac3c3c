//! Fixed-capacity, zero-padded display name.

use crate::layout::NAME_CAPACITY;

pub type NameBuffer = [u8; NAME_CAPACITY];

/// Copies `bytes` left-aligned into a zeroed buffer, dropping anything past
/// [`NAME_CAPACITY`].
pub fn encode(bytes: &[u8]) -> NameBuffer {
    let mut buf = [0u8; NAME_CAPACITY];
    let len = bytes.len().min(NAME_CAPACITY);
    buf[..len].copy_from_slice(&bytes[..len]);
    buf
}

/// The bytes before the first zero, or the whole buffer if there is none.
pub fn decode(buf: &NameBuffer) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    &buf[..end]
}
