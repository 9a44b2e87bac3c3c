//! Construction: options applied in order to a zeroed draft.
//!
//! ```rust
//! use packed_person::{GamePerson, PersonType, with_gold, with_level, with_name, with_type};
//!
//! let person = GamePerson::new([
//!     with_name("Borin"),
//!     with_gold(250),
//!     with_level(3),
//!     with_type(PersonType::Blacksmith),
//! ]);
//!
//! assert_eq!(person.name(), "Borin");
//! assert_eq!(person.level(), 3);
//! ```

use tracing::{debug, trace, warn};

use crate::attributes::Attribute;
use crate::error::{PersonError, Result};
use crate::flags::{Capability, PersonType};
use crate::name::{self, NameBuffer};
use crate::person::GamePerson;
use crate::stats::Stat;
use packed_bits::Flags8;

/// One field assignment. Applying it touches only the bits that field owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonOption {
    Name(NameBuffer),
    Coordinates { x: i32, y: i32, z: i32 },
    Gold(i32),
    Stat(Stat, u16),
    Attribute(Attribute, u8),
    Capability(Capability),
    Type(PersonType),
}

pub fn with_name(name: &str) -> PersonOption {
    with_name_bytes(name.as_bytes())
}

/// Bytes past the 42nd are dropped.
pub fn with_name_bytes(bytes: &[u8]) -> PersonOption {
    PersonOption::Name(name::encode(bytes))
}

pub fn with_coordinates(x: i32, y: i32, z: i32) -> PersonOption {
    PersonOption::Coordinates { x, y, z }
}

pub fn with_gold(gold: i32) -> PersonOption {
    PersonOption::Gold(gold)
}

pub fn with_stat(stat: Stat, value: u16) -> PersonOption {
    PersonOption::Stat(stat, value)
}

pub fn with_mana(mana: u16) -> PersonOption {
    with_stat(Stat::Mana, mana)
}

pub fn with_health(health: u16) -> PersonOption {
    with_stat(Stat::Health, health)
}

pub fn with_attribute(attribute: Attribute, value: u8) -> PersonOption {
    PersonOption::Attribute(attribute, value)
}

pub fn with_respect(respect: u8) -> PersonOption {
    with_attribute(Attribute::Respect, respect)
}

pub fn with_strength(strength: u8) -> PersonOption {
    with_attribute(Attribute::Strength, strength)
}

pub fn with_experience(experience: u8) -> PersonOption {
    with_attribute(Attribute::Experience, experience)
}

pub fn with_level(level: u8) -> PersonOption {
    with_attribute(Attribute::Level, level)
}

pub fn with_capability(capability: Capability) -> PersonOption {
    PersonOption::Capability(capability)
}

pub fn with_house() -> PersonOption {
    with_capability(Capability::House)
}

pub fn with_gun() -> PersonOption {
    with_capability(Capability::Weapon)
}

pub fn with_family() -> PersonOption {
    with_capability(Capability::Family)
}

pub fn with_type(person_type: PersonType) -> PersonOption {
    PersonOption::Type(person_type)
}

/// Like [`with_stat`], but rejects values above 1023.
pub fn try_with_stat(stat: Stat, value: u16) -> Result<PersonOption> {
    if value > stat.max_value() {
        debug!(stat = stat.name(), value, "rejected out-of-range stat");
        return Err(PersonError::OutOfRange {
            field: stat.name(),
            value: u32::from(value),
            max: u32::from(stat.max_value()),
        });
    }
    Ok(with_stat(stat, value))
}

pub fn try_with_mana(mana: u16) -> Result<PersonOption> {
    try_with_stat(Stat::Mana, mana)
}

pub fn try_with_health(health: u16) -> Result<PersonOption> {
    try_with_stat(Stat::Health, health)
}

/// Like [`with_attribute`], but rejects values above 15.
pub fn try_with_attribute(attribute: Attribute, value: u8) -> Result<PersonOption> {
    attribute.field().check(u32::from(value)).inspect_err(|_| {
        debug!(
            attribute = attribute.name(),
            value, "rejected out-of-range attribute"
        )
    })?;
    Ok(with_attribute(attribute, value))
}

pub fn try_with_respect(respect: u8) -> Result<PersonOption> {
    try_with_attribute(Attribute::Respect, respect)
}

pub fn try_with_strength(strength: u8) -> Result<PersonOption> {
    try_with_attribute(Attribute::Strength, strength)
}

pub fn try_with_experience(experience: u8) -> Result<PersonOption> {
    try_with_attribute(Attribute::Experience, experience)
}

pub fn try_with_level(level: u8) -> Result<PersonOption> {
    try_with_attribute(Attribute::Level, level)
}

/// The mutable staging value a [`GamePerson`] is built in.
///
/// Starts zeroed. Each stat may be applied at most once per draft: the stat
/// encoders OR into a shared byte, so a second write would merge with the
/// first. Debug builds panic on a repeated stat; release builds log a warning
/// and leave the merged bits.
#[derive(Debug, Default, Clone)]
pub struct PersonDraft {
    person: GamePerson,
    written_stats: u8,
    applied: usize,
}

impl PersonDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, option: &PersonOption) {
        let person = &mut self.person;
        match *option {
            PersonOption::Name(buf) => person.name = buf,
            PersonOption::Coordinates { x, y, z } => {
                person.x = x;
                person.y = y;
                person.z = z;
            }
            PersonOption::Gold(gold) => person.gold = gold,
            PersonOption::Stat(stat, value) => {
                let bit = 1u8 << stat as u8;
                let repeated = self.written_stats & bit != 0;
                if repeated {
                    warn!(stat = stat.name(), "stat written twice into the shared stat region");
                }
                debug_assert!(
                    !repeated,
                    "{} written twice into the shared stat region",
                    stat.name()
                );
                self.written_stats |= bit;
                stat.encode(&mut person.mana_health, value);
            }
            PersonOption::Attribute(attribute, value) => {
                person.attributes = attribute.encode(person.attributes, value);
            }
            PersonOption::Capability(capability) => {
                let mut flags = Flags8::from_bits(person.flags);
                flags.set(capability.mask());
                person.flags = flags.bits();
            }
            PersonOption::Type(person_type) => {
                let mut flags = Flags8::from_bits(person.flags);
                person_type.encode(&mut flags);
                person.flags = flags.bits();
            }
        }
        self.applied += 1;
    }

    /// Freezes the draft.
    pub fn finish(self) -> GamePerson {
        trace!(options = self.applied, "froze game person draft");
        self.person
    }
}

impl GamePerson {
    /// Applies `options` in order to a zeroed draft.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = PersonOption>,
    {
        options.into_iter().collect()
    }
}

impl FromIterator<PersonOption> for GamePerson {
    fn from_iter<I: IntoIterator<Item = PersonOption>>(iter: I) -> Self {
        let mut draft = PersonDraft::new();
        for option in iter {
            draft.apply(&option);
        }
        draft.finish()
    }
}

/// Fluent front end over [`PersonDraft`].
#[derive(Debug, Default)]
pub struct GamePersonBuilder {
    draft: PersonDraft,
}

impl GamePersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option(mut self, option: PersonOption) -> Self {
        self.draft.apply(&option);
        self
    }

    pub fn options<I: IntoIterator<Item = PersonOption>>(mut self, options: I) -> Self {
        for option in options {
            self.draft.apply(&option);
        }
        self
    }

    /// Applies a checked option, or passes its error through.
    pub fn try_option(self, option: Result<PersonOption>) -> Result<Self> {
        Ok(self.option(option?))
    }

    pub fn build(self) -> GamePerson {
        self.draft.finish()
    }
}
