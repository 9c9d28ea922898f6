//! BCP 47 style language code (e.g. "pt-BR")

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A language tag made of a 2-3 letter primary subtag and an optional
/// 2 letter or 3 digit region subtag
///
/// # Examples
///
/// ```
/// use domain::LanguageCode;
///
/// let code = LanguageCode::new("pt-br").unwrap();
/// assert_eq!(code.as_str(), "pt-BR");
///
/// assert!(LanguageCode::new("portuguese").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a language code, normalizing case
    ///
    /// # Errors
    ///
    /// Returns `InvalidLanguageCode` for anything other than `ll`, `lll`,
    /// `ll-RR` or `ll-999` shaped tags.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let raw = code.into();
        let trimmed = raw.trim();
        let invalid = || DomainError::InvalidLanguageCode(raw.clone());

        let mut parts = trimmed.split(['-', '_']);
        let primary = parts.next().unwrap_or_default();
        let region = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let normalized = match region {
            None => primary.to_ascii_lowercase(),
            Some(r)
                if (r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()))
                    || (r.len() == 3 && r.chars().all(|c| c.is_ascii_digit())) =>
            {
                format!("{}-{}", primary.to_ascii_lowercase(), r.to_ascii_uppercase())
            },
            Some(_) => return Err(invalid()),
        };

        Ok(Self(normalized))
    }

    /// Brazilian Portuguese, the narration language
    #[must_use]
    pub fn brazilian_portuguese() -> Self {
        Self("pt-BR".to_string())
    }

    /// Get the full tag
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LanguageCode {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}
