use packed_bits::PackedBitsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonError {
    #[error("{field} value {value} is out of range (max {max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("bit field error: {0}")]
    Bits(#[from] PackedBitsError),

    #[error("expected {expected} bytes for a game person, got {found}")]
    InvalidLength { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, PersonError>;
