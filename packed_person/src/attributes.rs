//! The four nibble-wide attributes sharing one 16-bit word.

use packed_bits::BitField;

use crate::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Respect,
    Strength,
    Experience,
    Level,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Respect,
        Attribute::Strength,
        Attribute::Experience,
        Attribute::Level,
    ];

    pub const fn field(self) -> BitField {
        match self {
            Attribute::Respect => layout::RESPECT,
            Attribute::Strength => layout::STRENGTH,
            Attribute::Experience => layout::EXPERIENCE,
            Attribute::Level => layout::LEVEL,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Respect => "respect",
            Attribute::Strength => "strength",
            Attribute::Experience => "experience",
            Attribute::Level => "level",
        }
    }

    /// Largest value that round-trips.
    pub const fn max_value(self) -> u8 {
        self.field().max_value() as u8
    }

    /// Clears this attribute's nibble and stores `value` in it.
    ///
    /// Values above 15 are not truncated and overwrite the next attribute up.
    #[inline]
    pub fn encode(self, word: u16, value: u8) -> u16 {
        self.field().insert(word, u32::from(value))
    }

    #[inline]
    pub fn decode(self, word: u16) -> u8 {
        self.field().extract(word) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_attribute_owns_its_nibble() {
        let mut word = 0u16;
        for (i, attr) in Attribute::ALL.into_iter().enumerate() {
            word = attr.encode(word, i as u8 + 1);
        }
        assert_eq!(word, 0x4321);
        for (i, attr) in Attribute::ALL.into_iter().enumerate() {
            assert_eq!(attr.decode(word), i as u8 + 1);
        }
    }

    #[test]
    fn re_encoding_clears_first() {
        let word = Attribute::Strength.encode(0, 0xF);
        let word = Attribute::Strength.encode(word, 0x3);
        assert_eq!(Attribute::Strength.decode(word), 3);
        assert_eq!(word, 0x0030);
    }

    #[test]
    fn overflow_corrupts_the_next_attribute() {
        let word = Attribute::Experience.encode(0, 6);
        let word = Attribute::Strength.encode(word, 0x1A);
        assert_eq!(Attribute::Strength.decode(word), 0xA);
        assert_eq!(Attribute::Experience.decode(word), 7);
    }

    #[test]
    fn level_overflow_falls_off_the_word() {
        let word = Attribute::Level.encode(0, 0xFF);
        assert_eq!(word, 0xF000);
    }
}
