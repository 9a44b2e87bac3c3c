//! Convenient imports for building and reading records.
//!
//! ```rust
//! use packed_person::prelude::*;
//! ```

pub use crate::attributes::Attribute;
pub use crate::error::PersonError;
pub use crate::flags::{Capability, PersonType};
pub use crate::options::{
    GamePersonBuilder, PersonDraft, PersonOption, try_with_attribute, try_with_experience,
    try_with_health, try_with_level, try_with_mana, try_with_respect, try_with_stat,
    try_with_strength, with_attribute, with_capability, with_coordinates, with_experience,
    with_family, with_gold, with_gun, with_health, with_house, with_level, with_mana, with_name,
    with_name_bytes, with_respect, with_stat, with_strength, with_type,
};
pub use crate::person::GamePerson;
pub use crate::stats::Stat;
