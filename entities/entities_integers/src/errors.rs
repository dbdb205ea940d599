//! Length Validation Errors
//!
//! Raised when a buffer length fails a required exact-match, multiple,
//! minimum or maximum constraint. Every variant carries the name of the
//! offending parameter.

/// Buffer length validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthError {
    /// Length is not a multiple of the width ratio
    NotMultiple {
        param: &'static str,
        multiple_of: usize,
        actual: usize,
    },
    /// Length differs from the one required
    Mismatch {
        param: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Length is below the minimum
    TooShort {
        param: &'static str,
        min: usize,
        actual: usize,
    },
    /// Length is above the maximum
    TooLong {
        param: &'static str,
        max: usize,
        actual: usize,
    },
}

impl LengthError {
    /// Name of the parameter whose length was rejected
    pub fn param(&self) -> &'static str {
        match self {
            LengthError::NotMultiple { param, .. }
            | LengthError::Mismatch { param, .. }
            | LengthError::TooShort { param, .. }
            | LengthError::TooLong { param, .. } => *param,
        }
    }
}

impl std::fmt::Display for LengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthError::NotMultiple { param, multiple_of, actual } => write!(
                f,
                "{} length must be a multiple of {}, got {}",
                param, multiple_of, actual
            ),
            LengthError::Mismatch { param, expected, actual } => {
                write!(f, "{} length must be exactly {}, got {}", param, expected, actual)
            }
            LengthError::TooShort { param, min, actual } => {
                write!(f, "{} length must be at least {}, got {}", param, min, actual)
            }
            LengthError::TooLong { param, max, actual } => {
                write!(f, "{} length must be at most {}, got {}", param, max, actual)
            }
        }
    }
}

impl std::error::Error for LengthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_param_and_constraint() {
        let error = LengthError::NotMultiple { param: "source", multiple_of: 4, actual: 7 };
        assert_eq!(error.to_string(), "source length must be a multiple of 4, got 7");

        let error = LengthError::TooShort { param: "that", min: 3, actual: 2 };
        assert_eq!(error.to_string(), "that length must be at least 3, got 2");
    }

    #[test]
    fn test_param() {
        let error = LengthError::Mismatch { param: "output", expected: 2, actual: 3 };
        assert_eq!(error.param(), "output");
        let error = LengthError::TooLong { param: "source", max: 1, actual: 2 };
        assert_eq!(error.param(), "source");
    }
}
