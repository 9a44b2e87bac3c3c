//! Fixed-position bit fields inside a small unsigned word.
//!
//! A [`BitField`] names a run of `width` bits starting `shift` bits above the
//! least significant bit. Encoding and decoding share the same descriptor, so
//! the two directions cannot drift apart.

use crate::PackedBitsError;

type Result<T> = core::result::Result<T, PackedBitsError>;

/// An unsigned word that can host bit fields.
pub trait Word: Copy {
    const BITS: u32;

    fn to_u32(self) -> u32;

    /// Truncates to the word's width.
    fn from_u32(value: u32) -> Self;
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn to_u32(self) -> u32 {
                    self as u32
                }

                #[inline]
                fn from_u32(value: u32) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    shift: u32,
    width: u32,
}

impl BitField {
    /// Creates a descriptor for `width` bits starting at bit `shift`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or the field would end past bit 31. In a
    /// `const` item this is a compile error.
    pub const fn new(shift: u32, width: u32) -> Self {
        match Self::try_new(shift, width) {
            Ok(field) => field,
            Err(_) => panic!("bit field must be 1..=32 bits wide and end within 32 bits"),
        }
    }

    pub const fn try_new(shift: u32, width: u32) -> Result<Self> {
        if width == 0 || width > 32 || shift > 32 - width {
            return Err(PackedBitsError::InvalidBitWidth { shift, width });
        }
        Ok(Self { shift, width })
    }

    #[inline]
    pub const fn shift(&self) -> u32 {
        self.shift
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Largest value the field can hold.
    #[inline]
    pub const fn max_value(&self) -> u32 {
        ((1u64 << self.width) - 1) as u32
    }

    /// The field's bits in place.
    #[inline]
    pub const fn mask(&self) -> u32 {
        (((1u64 << self.width) - 1) << self.shift) as u32
    }

    #[inline]
    pub const fn fits(&self, value: u32) -> bool {
        value <= self.max_value()
    }

    /// Reads the field out of `word`.
    #[inline]
    pub fn extract<W: Word>(&self, word: W) -> u32 {
        (word.to_u32() & self.mask()) >> self.shift
    }

    /// Clears the field in `word`, then ORs in `value` at the field's shift.
    ///
    /// `value` is not truncated to the field width: excess high bits land in
    /// whatever sits above the field. Use [`BitField::insert_checked`] to
    /// reject such values instead.
    #[inline]
    pub fn insert<W: Word>(&self, word: W, value: u32) -> W {
        W::from_u32((word.to_u32() & !self.mask()) | value.wrapping_shl(self.shift))
    }

    pub fn insert_checked<W: Word>(&self, word: W, value: u32) -> Result<W> {
        if !self.fits(value) {
            return Err(PackedBitsError::ValueOverflow(value, self.width));
        }
        Ok(self.insert(word, value))
    }

    /// Fails with [`PackedBitsError::ValueOverflow`] when `value` is wider
    /// than the field.
    pub fn check(&self, value: u32) -> Result<u32> {
        if self.fits(value) {
            Ok(value)
        } else {
            Err(PackedBitsError::ValueOverflow(value, self.width))
        }
    }

    /// Whether the field lies entirely inside a word of type `W`.
    pub const fn fits_in<W: Word>(&self) -> bool {
        self.shift + self.width <= W::BITS
    }
}
