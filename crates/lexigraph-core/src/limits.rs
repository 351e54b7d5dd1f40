//! Input validation for words accepted by the store

/// Why a term was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing,
    Empty,
    UnsupportedType { found: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "is required"),
            Self::Empty => write!(f, "must not be empty"),
            Self::UnsupportedType { found } => {
                write!(f, "must be a string or number (got {})", found)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a word after case folding.
///
/// Only emptiness is checked; request size is bounded by the HTTP layer.
pub fn validate_word(word: &str) -> Result<(), ValidationError> {
    if word.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_word() {
        assert!(validate_word("valid").is_ok());
        assert_eq!(validate_word(""), Err(ValidationError::Empty));
    }

    #[test]
    fn test_long_words_are_accepted() {
        assert!(validate_word(&"x".repeat(300)).is_ok());
        assert!(validate_word(&"é".repeat(10_000)).is_ok());
    }
}
