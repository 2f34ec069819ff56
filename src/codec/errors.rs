// ============================================================================
// Codec Errors
// Error types for decimal-string parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing a decimal string into limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecError {
    /// Input is empty or contains a non-digit character (signs, separators,
    /// whitespace and decimal points are all rejected)
    InvalidFormat,
    /// A digit group does not fit the u32 limb type; only reachable if the
    /// group-width constant is raised past what u32 can hold
    GroupConversionFailed,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidFormat => {
                write!(f, "invalid decimal input: expected one or more ASCII digits")
            },
            CodecError::GroupConversionFailed => {
                write!(f, "digit group could not be converted to a limb")
            },
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CodecError::InvalidFormat.to_string(),
            "invalid decimal input: expected one or more ASCII digits"
        );
        assert_eq!(
            CodecError::GroupConversionFailed.to_string(),
            "digit group could not be converted to a limb"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CodecError::InvalidFormat, CodecError::InvalidFormat);
        assert_ne!(CodecError::InvalidFormat, CodecError::GroupConversionFailed);
    }
}
