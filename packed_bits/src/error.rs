#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackedBitsError {
    #[cfg_attr(
        feature = "std",
        error("Bit field must be 1..=32 bits wide and end within 32 bits, got shift {shift} width {width}")
    )]
    InvalidBitWidth { shift: u32, width: u32 },

    #[cfg_attr(feature = "std", error("Value {0} does not fit in {1} bits"))]
    ValueOverflow(u32, u32),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PackedBitsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackedBitsError::InvalidBitWidth { shift, width } => write!(
                f,
                "Bit field must be 1..=32 bits wide and end within 32 bits, got shift {} width {}",
                shift, width
            ),
            PackedBitsError::ValueOverflow(v, n) => {
                write!(f, "Value {} does not fit in {} bits", v, n)
            }
        }
    }
}
