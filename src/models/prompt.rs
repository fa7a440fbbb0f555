use std::fmt;

use crate::errors::ComparatorError;

/// User prompt, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(text: &str) -> Result<Self, ComparatorError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ComparatorError::InvalidPrompt("prompt is empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Prompt {
    type Error = ComparatorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Prompt::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_trimmed() {
        let prompt = Prompt::new("  Explain ownership.\n").unwrap();
        assert_eq!(prompt.as_str(), "Explain ownership.");
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert!(matches!(Prompt::new(""), Err(ComparatorError::InvalidPrompt(_))));
        assert!(matches!(Prompt::new(" \t\n "), Err(ComparatorError::InvalidPrompt(_))));
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let prompt = Prompt::try_from("a\n\nb").unwrap();
        assert_eq!(prompt.to_string(), "a\n\nb");
    }
}
