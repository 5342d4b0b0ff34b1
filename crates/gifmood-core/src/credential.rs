//! The Giphy API credential and the rules for when it counts as usable.

/// Value shipped in `.env.example`; treated the same as an absent key.
pub const PLACEHOLDER_API_KEY: &str = "your_giphy_api_key_here";

/// Opaque provider secret, loaded once at startup and never mutated.
///
/// Holding a `Credential` says nothing about whether live mode is available;
/// callers ask [`Credential::usable`] on every request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(Option<String>);

impl Credential {
    #[must_use]
    pub fn new(raw: Option<String>) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn absent() -> Self {
        Self(None)
    }

    /// Returns the key when it is present, non-blank and not the placeholder.
    #[must_use]
    pub fn usable(&self) -> Option<&str> {
        self.0
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.usable().is_some()
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self(Some(value.to_owned()))
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(_) => f.write_str("Some(\"[redacted]\")"),
            None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_is_not_usable() {
        assert_eq!(Credential::absent().usable(), None);
    }

    #[test]
    fn placeholder_key_is_not_usable() {
        let credential = Credential::from(PLACEHOLDER_API_KEY);
        assert!(!credential.is_configured());
    }

    #[test]
    fn blank_key_is_not_usable() {
        assert_eq!(Credential::from("   ").usable(), None);
    }

    #[test]
    fn real_key_is_trimmed() {
        let credential = Credential::from(" abc123 \n");
        assert_eq!(credential.usable(), Some("abc123"));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let rendered = format!("{:?}", Credential::from("super-secret"));
        assert!(!rendered.contains("super-secret"), "leaked: {rendered}");
    }
}
