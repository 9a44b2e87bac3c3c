//! The packed record and its read-only accessors.

use std::borrow::Cow;
use std::fmt;

use bytemuck_derive::{Pod, Zeroable};
use packed_bits::Flags8;

use crate::attributes::Attribute;
use crate::error::{PersonError, Result};
use crate::flags::{self, Capability, PersonType};
use crate::layout::{NAME_CAPACITY, RECORD_SIZE, STATS_SIZE};
use crate::name;
use crate::options::GamePersonBuilder;
use crate::stats::Stat;

/// A game character packed into 64 bytes.
///
/// Built once from a list of [`PersonOption`](crate::PersonOption)s and never
/// modified afterwards. See [`layout`](crate::layout) for the byte map.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct GamePerson {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) z: i32,
    pub(crate) gold: i32,
    pub(crate) attributes: u16,
    pub(crate) flags: u8,
    pub(crate) mana_health: [u8; STATS_SIZE],
    pub(crate) name: [u8; NAME_CAPACITY],
}

const _: () = assert!(size_of::<GamePerson>() == RECORD_SIZE);

impl GamePerson {
    /// Size of a record in bytes.
    pub const SIZE: usize = size_of::<GamePerson>();

    pub fn builder() -> GamePersonBuilder {
        GamePersonBuilder::new()
    }

    pub const fn size_in_bytes(&self) -> usize {
        Self::SIZE
    }

    /// The record's raw bytes in layout order (integers in native endianness).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reinterprets exactly [`GamePerson::SIZE`] bytes as a record.
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::InvalidLength`] if `bytes` is the wrong length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bytemuck::try_pod_read_unaligned(bytes).map_err(|_| PersonError::InvalidLength {
            expected: Self::SIZE,
            found: bytes.len(),
        })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    pub fn position(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn stat(&self, stat: Stat) -> u16 {
        stat.decode(&self.mana_health)
    }

    pub fn mana(&self) -> u16 {
        self.stat(Stat::Mana)
    }

    pub fn health(&self) -> u16 {
        self.stat(Stat::Health)
    }

    pub fn attribute(&self, attribute: Attribute) -> u8 {
        attribute.decode(self.attributes)
    }

    pub fn respect(&self) -> u8 {
        self.attribute(Attribute::Respect)
    }

    pub fn strength(&self) -> u8 {
        self.attribute(Attribute::Strength)
    }

    pub fn experience(&self) -> u8 {
        self.attribute(Attribute::Experience)
    }

    pub fn level(&self) -> u8 {
        self.attribute(Attribute::Level)
    }

    fn flag_byte(&self) -> Flags8 {
        Flags8::from_bits(self.flags)
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.flag_byte().contains(capability.mask())
    }

    pub fn has_house(&self) -> bool {
        self.has(Capability::House)
    }

    pub fn has_gun(&self) -> bool {
        self.has(Capability::Weapon)
    }

    pub fn has_family(&self) -> bool {
        self.has(Capability::Family)
    }

    /// Capabilities that are set, in bit order.
    pub fn capabilities(&self) -> impl Iterator<Item = Capability> {
        flags::capabilities(self.flag_byte())
    }

    pub fn person_type(&self) -> PersonType {
        PersonType::decode(self.flag_byte())
    }

    /// Name bytes up to the first zero.
    pub fn name_bytes(&self) -> &[u8] {
        name::decode(&self.name)
    }

    /// The name as text. A name cut mid-character by truncation ends in
    /// U+FFFD.
    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.name_bytes())
    }
}

impl Default for GamePerson {
    fn default() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

impl fmt::Debug for GamePerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GamePerson")
            .field("name", &self.name())
            .field("position", &self.position())
            .field("gold", &self.gold)
            .field("mana", &self.mana())
            .field("health", &self.health())
            .field("respect", &self.respect())
            .field("strength", &self.strength())
            .field("experience", &self.experience())
            .field("level", &self.level())
            .field("house", &self.has_house())
            .field("gun", &self.has_gun())
            .field("family", &self.has_family())
            .field("person_type", &self.person_type())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{BLACKSMITH_FLAG, BUILDER_FLAG, MAX_RECORD_SIZE};

    #[test]
    fn record_is_within_budget() {
        assert!(GamePerson::SIZE <= MAX_RECORD_SIZE);
        assert_eq!(GamePerson::default().size_in_bytes(), 64);
        assert_eq!(GamePerson::default().as_bytes().len(), 64);
    }

    #[test]
    fn default_decodes_to_zero_values() {
        let p = GamePerson::default();
        assert_eq!(p.position(), (0, 0, 0));
        assert_eq!(p.gold(), 0);
        assert_eq!((p.mana(), p.health()), (0, 0));
        assert_eq!(p.level(), 0);
        assert_eq!(p.capabilities().count(), 0);
        assert_eq!(p.person_type(), PersonType::Unassigned);
        assert_eq!(p.name(), "");
    }

    #[test]
    fn bytes_roundtrip() {
        let mut p = GamePerson::default();
        p.gold = -17;
        p.name = name::encode(b"ada");
        let back = GamePerson::from_bytes(p.as_bytes()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let err = GamePerson::from_bytes(&[0u8; 63]).unwrap_err();
        assert_eq!(
            err,
            PersonError::InvalidLength {
                expected: 64,
                found: 63
            }
        );
    }

    #[test]
    fn raw_multi_type_byte_uses_precedence() {
        let mut p = GamePerson::default();
        p.flags = BUILDER_FLAG | BLACKSMITH_FLAG;
        assert_eq!(p.person_type(), PersonType::Blacksmith);
        assert!(!p.has_house());
    }

    #[test]
    fn debug_shows_decoded_fields() {
        let mut p = GamePerson::default();
        p.name = name::encode(b"mira");
        let dbg = format!("{p:?}");
        assert!(dbg.contains("\"mira\""));
        assert!(dbg.contains("Unassigned"));
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GamePerson>();
    }
}
