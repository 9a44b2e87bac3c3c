//! Byte and bit geometry of a [`GamePerson`](crate::GamePerson).
//!
//! Every offset, mask and shift used by the encoders and decoders lives here.
//!
//! ```text
//! offset  size  region
//!      0    12  x, y, z            (i32 each)
//!     12     4  gold               (i32)
//!     16     2  attributes         respect | strength << 4 | experience << 8 | level << 12
//!     18     1  flags              house, weapon, family, builder, blacksmith, warrior
//!     19     3  mana/health        see below
//!     22    42  name               zero padded
//! ```
//!
//! The mana/health region packs two 10-bit stats into 24 bits:
//!
//! ```text
//! byte 0: mana[9..2]
//! byte 1: mana[1..0] | reserved (4 bits, zero) | health[9..8]
//! byte 2: health[7..0]
//! ```

use packed_bits::BitField;

pub const MAX_RECORD_SIZE: usize = 64;

pub const POSITION_SIZE: usize = 3 * size_of::<i32>();
pub const GOLD_SIZE: usize = size_of::<i32>();
pub const ATTRIBUTES_SIZE: usize = size_of::<u16>();
pub const FLAGS_SIZE: usize = size_of::<u8>();
pub const STATS_SIZE: usize = 3;
pub const NAME_CAPACITY: usize = 42;

pub const RECORD_SIZE: usize =
    POSITION_SIZE + GOLD_SIZE + ATTRIBUTES_SIZE + FLAGS_SIZE + STATS_SIZE + NAME_CAPACITY;

const _: () = assert!(RECORD_SIZE <= MAX_RECORD_SIZE, "game person exceeds 64 bytes");

// Attribute quartet, one nibble each.
pub const ATTRIBUTE_BITS: u32 = 4;
pub const RESPECT: BitField = BitField::new(0, ATTRIBUTE_BITS);
pub const STRENGTH: BitField = BitField::new(4, ATTRIBUTE_BITS);
pub const EXPERIENCE: BitField = BitField::new(8, ATTRIBUTE_BITS);
pub const LEVEL: BitField = BitField::new(12, ATTRIBUTE_BITS);

const _: () = assert!(LEVEL.fits_in::<u16>());

// Flag byte.
pub const HOUSE_FLAG: u8 = 1 << 0;
pub const WEAPON_FLAG: u8 = 1 << 1;
pub const FAMILY_FLAG: u8 = 1 << 2;
pub const BUILDER_FLAG: u8 = 1 << 3;
pub const BLACKSMITH_FLAG: u8 = 1 << 4;
pub const WARRIOR_FLAG: u8 = 1 << 5;

pub const CAPABILITY_MASK: u8 = HOUSE_FLAG | WEAPON_FLAG | FAMILY_FLAG;
pub const TYPE_MASK: u8 = BUILDER_FLAG | BLACKSMITH_FLAG | WARRIOR_FLAG;

// Shared stat region.
pub const STAT_BITS: u32 = 10;
pub const STAT_MAX: u16 = (1 << STAT_BITS) - 1;

pub const MANA_HIGH_SHIFT: u32 = 2;
pub const MANA_LOW_SHIFT: u32 = 6;
pub const MANA_LOW_MASK: u8 = 0b1100_0000;

pub const HEALTH_HIGH_SHIFT: u32 = 8;
pub const HEALTH_HIGH_MASK: u8 = 0b0000_0011;
pub const HEALTH_LOW_MASK: u16 = 0xFF;

pub const STAT_RESERVED_MASK: u8 = !(MANA_LOW_MASK | HEALTH_HIGH_MASK);
