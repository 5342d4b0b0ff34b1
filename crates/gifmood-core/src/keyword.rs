use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordError {
    #[error("Emotion cannot be empty")]
    Empty,
}

/// A search keyword: trimmed, lower-cased and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    /// Canonicalizes caller text into a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordError::Empty`] when nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, KeywordError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(KeywordError::Empty);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
