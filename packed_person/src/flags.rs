//! Capability flags and the person type, sharing one flag byte.

use packed_bits::Flags8;

use crate::layout::{
    BLACKSMITH_FLAG, BUILDER_FLAG, CAPABILITY_MASK, FAMILY_FLAG, HOUSE_FLAG, WARRIOR_FLAG,
    WEAPON_FLAG,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    House,
    Weapon,
    Family,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Capability::House, Capability::Weapon, Capability::Family];

    pub const fn mask(self) -> u8 {
        match self {
            Capability::House => HOUSE_FLAG,
            Capability::Weapon => WEAPON_FLAG,
            Capability::Family => FAMILY_FLAG,
        }
    }

    pub fn from_mask(mask: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.mask() == mask)
    }
}

/// Iterates the capabilities set in a flag byte, ignoring type bits.
pub(crate) fn capabilities(flags: Flags8) -> impl Iterator<Item = Capability> {
    Flags8::from_bits(flags.bits() & CAPABILITY_MASK)
        .iter()
        .filter_map(Capability::from_mask)
}

/// What a person does for a living.
///
/// Each non-default variant owns one bit of the flag byte. Nothing stops more
/// than one of those bits being set; decoding then picks by
/// [`PersonType::PRECEDENCE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PersonType {
    #[default]
    Unassigned,
    Builder,
    Blacksmith,
    Warrior,
}

impl PersonType {
    /// Decode order when several type bits are set.
    pub const PRECEDENCE: [PersonType; 3] = [
        PersonType::Blacksmith,
        PersonType::Builder,
        PersonType::Warrior,
    ];

    pub const fn mask(self) -> u8 {
        match self {
            PersonType::Unassigned => 0,
            PersonType::Builder => BUILDER_FLAG,
            PersonType::Blacksmith => BLACKSMITH_FLAG,
            PersonType::Warrior => WARRIOR_FLAG,
        }
    }

    /// Sets this type's bit. Other type bits are left as they are.
    pub fn encode(self, flags: &mut Flags8) {
        flags.set(self.mask());
    }

    pub fn decode(flags: Flags8) -> Self {
        Self::PRECEDENCE
            .into_iter()
            .find(|t| flags.contains(t.mask()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TYPE_MASK;

    #[test]
    fn single_type_roundtrips() {
        for t in [
            PersonType::Unassigned,
            PersonType::Builder,
            PersonType::Blacksmith,
            PersonType::Warrior,
        ] {
            let mut flags = Flags8::empty();
            t.encode(&mut flags);
            assert_eq!(PersonType::decode(flags), t);
        }
    }

    #[test]
    fn unassigned_sets_nothing() {
        let mut flags = Flags8::empty();
        PersonType::Unassigned.encode(&mut flags);
        assert_eq!(flags.bits(), 0);
    }

    #[test]
    fn multiple_types_resolve_by_precedence() {
        let all = Flags8::from_bits(TYPE_MASK);
        assert_eq!(PersonType::decode(all), PersonType::Blacksmith);

        let builder_and_warrior = Flags8::from_bits(BUILDER_FLAG | WARRIOR_FLAG);
        assert_eq!(PersonType::decode(builder_and_warrior), PersonType::Builder);
    }

    #[test]
    fn capabilities_skip_type_bits() {
        let flags = Flags8::from_bits(HOUSE_FLAG | FAMILY_FLAG | WARRIOR_FLAG);
        let caps: Vec<_> = capabilities(flags).collect();
        assert_eq!(caps, vec![Capability::House, Capability::Family]);
    }
}
