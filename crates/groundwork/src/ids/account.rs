use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, str::FromStr};
use thiserror::Error as ThisError;

pub const ACCOUNT_ID_LEN: usize = 12;

///
/// AccountIdError
///

#[derive(Debug, ThisError)]
pub enum AccountIdError {
    #[error("account id '{0}' must be exactly 12 decimal digits")]
    InvalidFormat(String),
}

///
/// AccountId
///
/// A provider account identifier: a fixed-length numeric string. Construction
/// always validates, so holding an `AccountId` implies the syntax is good.
///

#[derive(
    Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn parse(s: &str) -> Result<Self, AccountIdError> {
        if s.len() == ACCOUNT_ID_LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(AccountIdError::InvalidFormat(s.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.into_string()
    }
}

///
/// TESTS
///
