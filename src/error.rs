//! Error types for the lfsr-sampler library.

use std::fmt;

/// Errors produced by the lfsr-sampler library.
///
/// Every variant signals a local precondition violation that is detected
/// before any state mutation: a failing operation leaves the generator and
/// any population untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LfsrError {
    /// Seed is zero, out of range for the register width, or the seed
    /// bit-string is malformed.
    InvalidSeed,
    /// Requested register width is not one of the validated configurations.
    UnsupportedWidth,
    /// Sampling range is zero or exceeds the generator's maximum value.
    InvalidRange,
    /// Draw requested against a population with no remaining items.
    EmptyPopulation,
}

impl fmt::Display for LfsrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LfsrError::InvalidSeed => {
                write!(f, "Seed must be a nonzero value within the register width")
            }
            LfsrError::UnsupportedWidth => {
                write!(f, "Register width must be 16 or 17 bits")
            }
            LfsrError::InvalidRange => {
                write!(
                    f,
                    "Sampling range must be between 1 and the generator maximum"
                )
            }
            LfsrError::EmptyPopulation => {
                write!(f, "Cannot draw from an empty population")
            }
        }
    }
}

impl std::error::Error for LfsrError {}
