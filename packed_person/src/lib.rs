//! # packed_person
//!
//! A game character packed into a fixed 64-byte record.
//!
//! Coordinates and gold get whole `i32` slots. Everything else shares bytes:
//! four 4-bit attributes in one `u16`, two 10-bit stats in three bytes, three
//! capability flags and a person type in one flag byte, and a zero-padded
//! 42-byte name.
//!
//! ```rust
//! use packed_person::prelude::*;
//!
//! let person = GamePerson::new([
//!     with_name("Ilsa"),
//!     with_coordinates(-10, 4, 0),
//!     with_mana(800),
//!     with_health(1000),
//!     with_strength(12),
//!     with_house(),
//!     with_type(PersonType::Builder),
//! ]);
//!
//! assert_eq!(person.position(), (-10, 4, 0));
//! assert_eq!(person.mana(), 800);
//! assert_eq!(person.health(), 1000);
//! assert_eq!(person.strength(), 12);
//! assert!(person.has_house());
//! assert_eq!(person.person_type(), PersonType::Builder);
//! assert_eq!(GamePerson::SIZE, 64);
//! ```
//!
//! ## Range checking
//!
//! The plain `with_*` options trust their input: an attribute above 15 or a
//! stat above 1023 spills into the neighbouring field. The `try_with_*`
//! variants reject such values with [`PersonError`].

pub mod attributes;
pub mod error;
pub mod flags;
pub mod layout;
pub mod name;
pub mod options;
pub mod person;
pub mod prelude;
pub mod stats;

pub use attributes::Attribute;
pub use error::PersonError;
pub use flags::{Capability, PersonType};
pub use options::*;
pub use person::GamePerson;
pub use stats::Stat;

// Re-export bytemuck for callers casting records to bytes
pub use bytemuck;
