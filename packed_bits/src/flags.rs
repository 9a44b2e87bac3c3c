//! Compact storage for a set of bit flags in one byte.
//!
//! # Examples
//!
//! ```rust
//! use packed_bits::Flags8;
//!
//! const READ: u8 = 1 << 0;
//! const WRITE: u8 = 1 << 1;
//! const EXECUTE: u8 = 1 << 2;
//!
//! let mut perms = Flags8::from_bits(READ | WRITE);
//! assert!(perms.contains(READ));
//! assert!(!perms.contains(EXECUTE));
//!
//! perms.set(EXECUTE);
//! assert!(perms.contains(EXECUTE));
//! ```

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Flags8(u8);

impl Flags8 {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if any bit of `mask` is set.
    #[inline]
    pub const fn contains(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    #[inline]
    pub fn set(&mut self, mask: u8) {
        self.0 |= mask;
    }

    #[inline]
    pub fn clear(&mut self, mask: u8) {
        self.0 &= !mask;
    }

    #[inline]
    pub fn toggle(&mut self, mask: u8) {
        self.0 ^= mask;
    }

    pub fn iter(self) -> FlagsIter {
        FlagsIter::new(self.0)
    }
}

/// Yields each set bit of a byte as a single-bit mask, lowest first.
pub struct FlagsIter {
    bits: u8,
    next_mask: u8,
}

impl FlagsIter {
    pub fn new(bits: u8) -> Self {
        Self { bits, next_mask: 1 }
    }
}

impl Iterator for FlagsIter {
    type Item = u8;
    fn next(&mut self) -> Option<Self::Item> {
        while self.next_mask != 0 {
            let mask = self.next_mask;
            self.next_mask = self.next_mask.wrapping_shl(1);
            if (self.bits & mask) != 0 {
                return Some(mask);
            }
        }
        None
    }
}
