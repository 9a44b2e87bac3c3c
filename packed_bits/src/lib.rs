//! # packed_bits
//!
//! A `no_std` compatible toolkit for fields that share a machine word.
//!
//! ```rust
//! use packed_bits::BitField;
//!
//! // Two 4-bit fields in one byte
//! const LOW: BitField = BitField::new(0, 4);
//! const HIGH: BitField = BitField::new(4, 4);
//!
//! let mut byte = 0u8;
//! byte = LOW.insert(byte, 0x3);
//! byte = HIGH.insert(byte, 0xA);
//!
//! assert_eq!(byte, 0xA3);
//! assert_eq!(LOW.extract(byte), 0x3);
//! assert_eq!(HIGH.extract(byte), 0xA);
//! ```
//!
//! ## Flags
//!
//! ```rust
//! use packed_bits::Flags8;
//!
//! const READ: u8 = 1 << 0;
//! const WRITE: u8 = 1 << 1;
//!
//! let mut perms = Flags8::empty();
//! perms.set(READ);
//! assert!(perms.contains(READ));
//! assert!(!perms.contains(WRITE));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::PackedBitsError;

pub mod field;
pub use field::{BitField, Word};

pub mod flags;
pub use flags::{Flags8, FlagsIter};
