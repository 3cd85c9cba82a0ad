use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, borrow::Cow, str::FromStr};
use thiserror::Error as ThisError;

///
/// QualifierError
///

#[derive(Debug, ThisError)]
pub enum QualifierError {
    #[error("qualifier '{0}' must be 1-10 alphanumeric characters")]
    InvalidFormat(String),
}

///
/// Qualifier
///
/// A short string disambiguating multiple bootstrap deployments within the
/// same account/region. Every resource name derived for one bootstrap target
/// embeds the same qualifier, so re-running bootstrap updates in place instead
/// of duplicating resources.
///
/// Stored as `Cow<'static, str>` so the default constant is zero-copy while
/// caller-supplied values allocate only when needed.
///

#[derive(
    Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct Qualifier(Cow<'static, str>);

impl Qualifier {
    /// Fixed default used when the caller does not pass a qualifier.
    /// Stable across releases; changing it would orphan every default-qualified
    /// bootstrap stack already deployed.
    pub const DEFAULT: Self = Self(Cow::Borrowed("gw659base"));

    pub const MAX_BYTES: usize = 10;

    pub fn parse(s: &str) -> Result<Self, QualifierError> {
        if s.is_empty() || s.len() > Self::MAX_BYTES || !s.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(QualifierError::InvalidFormat(s.to_string()));
        }

        Ok(Self(Cow::Owned(s.to_string())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT.0
    }

    /// Convert into an owned string (avoids an extra allocation for owned variants).
    #[must_use]
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

impl FromStr for Qualifier {
    type Err = QualifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Qualifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Qualifier {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<Qualifier> for String {
    fn from(q: Qualifier) -> Self {
        q.into_string()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Qualifier;

    #[test]
    fn default_is_well_formed() {
        assert!(Qualifier::DEFAULT.is_default());
        Qualifier::parse(Qualifier::DEFAULT.as_str()).expect("default must parse");
    }

    #[test]
    fn accepts_short_alphanumeric_values() {
        let q = Qualifier::parse("custom1").unwrap();
        assert_eq!(q.as_str(), "custom1");
        assert!(!q.is_default());
    }

    #[test]
    fn rejects_empty_long_and_symbolic_values() {
        Qualifier::parse("").expect_err("expected empty qualifier to fail");
        Qualifier::parse("elevenchars").expect_err("expected oversized qualifier to fail");
        Qualifier::parse("has-dash").expect_err("expected symbols to fail");
    }
}
