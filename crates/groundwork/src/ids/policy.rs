use crate::ids::ACCOUNT_ID_LEN;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, str::FromStr};
use thiserror::Error as ThisError;

pub const POLICY_NAME_MAX_BYTES: usize = 128;

///
/// PolicyRefError
///

#[derive(Debug, ThisError)]
pub enum PolicyRefError {
    #[error("policy reference '{0}' is neither a managed-policy ARN nor a policy name")]
    InvalidFormat(String),
}

///
/// PolicyRef
///
/// An execution-policy reference attached to the deployment role. Two spellings
/// are accepted:
///
/// - a full managed-policy ARN (`arn:<partition>:iam::<account>:policy/<name>`,
///   where the account segment is `aws` for provider-managed policies or a
///   12-digit account id for customer-managed ones)
/// - a named-policy shorthand (the bare policy name)
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PolicyRef(String);

impl PolicyRef {
    pub fn parse(s: &str) -> Result<Self, PolicyRefError> {
        let valid = if s.starts_with("arn:") {
            is_policy_arn(s)
        } else {
            is_policy_name(s)
        };

        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(PolicyRefError::InvalidFormat(s.to_string()))
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

// arn:<partition>:iam::<account>:policy/<name>
fn is_policy_arn(s: &str) -> bool {
    let parts: Vec<&str> = s.splitn(6, ':').collect();
    if parts.len() != 6 {
        return false;
    }

    let (partition, service, region, account, resource) =
        (parts[1], parts[2], parts[3], parts[4], parts[5]);

    if partition.is_empty()
        || !partition
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return false;
    }

    // IAM is a global service; the region segment stays empty
    if service != "iam" || !region.is_empty() {
        return false;
    }

    let account_ok =
        account == "aws" || (account.len() == ACCOUNT_ID_LEN && account.bytes().all(|b| b.is_ascii_digit()));
    if !account_ok {
        return false;
    }

    match resource.strip_prefix("policy/") {
        Some(name) => !name.is_empty(),
        None => false,
    }
}

fn is_policy_name(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= POLICY_NAME_MAX_BYTES
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric() || matches!(b, b'+' | b'=' | b',' | b'.' | b'@' | b'_' | b'-')
        })
}

impl FromStr for PolicyRef {
    type Err = PolicyRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PolicyRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for PolicyRef {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<PolicyRef> for String {
    fn from(policy: PolicyRef) -> Self {
        policy.into_string()
    }
}

///
/// TESTS
///
