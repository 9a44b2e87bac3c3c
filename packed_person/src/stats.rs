//! Mana and health: two 10-bit stats sharing three bytes.
//!
//! Encoding only ORs into the middle byte, so each stat must be written at
//! most once into a zeroed region. Writing a stat a second time leaves the
//! bits of the first write in place; the result is unspecified.

use crate::layout::{
    HEALTH_HIGH_MASK, HEALTH_HIGH_SHIFT, HEALTH_LOW_MASK, MANA_HIGH_SHIFT, MANA_LOW_MASK,
    MANA_LOW_SHIFT, STAT_MAX, STATS_SIZE,
};

pub type StatRegion = [u8; STATS_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Mana,
    Health,
}

impl Stat {
    pub const ALL: [Stat; 2] = [Stat::Mana, Stat::Health];

    pub const fn name(self) -> &'static str {
        match self {
            Stat::Mana => "mana",
            Stat::Health => "health",
        }
    }

    pub const fn max_value(self) -> u16 {
        STAT_MAX
    }

    /// Writes `value` into `region`.
    ///
    /// Values above 1023 are not rejected: mana loses its top bits, health
    /// spills into the reserved bits and the low bits of mana.
    pub fn encode(self, region: &mut StatRegion, value: u16) {
        match self {
            Stat::Mana => {
                region[0] = (value >> MANA_HIGH_SHIFT) as u8;
                region[1] |= ((value << MANA_LOW_SHIFT) as u8) & MANA_LOW_MASK;
            }
            Stat::Health => {
                region[1] |= (value >> HEALTH_HIGH_SHIFT) as u8;
                region[2] = (value & HEALTH_LOW_MASK) as u8;
            }
        }
    }

    pub fn decode(self, region: &StatRegion) -> u16 {
        match self {
            Stat::Mana => {
                (u16::from(region[0]) << MANA_HIGH_SHIFT)
                    | u16::from((region[1] & MANA_LOW_MASK) >> MANA_LOW_SHIFT)
            }
            Stat::Health => {
                (u16::from(region[1] & HEALTH_HIGH_MASK) << HEALTH_HIGH_SHIFT)
                    | u16::from(region[2])
            }
        }
    }
}
