use crate::{
    bootstrap::{BootstrapMode, BootstrappingParameters},
    ids::{AccountId, PolicyRef, Qualifier},
};
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

// Field names quoted in validation failures. Must stay in sync with the serde
// names on `BootstrappingParameters`.
mod fields {
    pub const CREATE_CUSTOMER_MASTER_KEY: &str = "create_customer_master_key";
    pub const CLOUDFORMATION_EXECUTION_POLICIES: &str = "cloudformation_execution_policies";
    pub const ECR_CREATE_CUSTOMER_MASTER_KEY: &str = "ecr_create_customer_master_key";
    pub const ECR_KEY_ID: &str = "ecr_key_id";
    pub const KMS_KEY_ID: &str = "kms_key_id";
    pub const TRUSTED_ACCOUNTS: &str = "trusted_accounts";
    pub const TRUSTED_ACCOUNTS_FOR_LOOKUP: &str = "trusted_accounts_for_lookup";
}

///
/// ValidationError
///
/// Configuration errors, all detected before any provider call. Any violation
/// fails the whole normalization; nothing is silently dropped, so a bootstrap
/// is never attempted with inconsistent trust/policy configuration.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ValidationError {
    #[error("`{create_field}` conflicts with `{key_field}`: cannot reuse an existing key and create a new one")]
    ConflictingKeyOptions {
        key_field: &'static str,
        create_field: &'static str,
    },

    #[error("account id '{value}' in `{field}` is not a 12-digit account identifier")]
    MalformedAccountId {
        field: &'static str,
        value: String,
    },

    #[error("policy reference '{value}' in `{field}` is neither a policy ARN nor a policy name")]
    MalformedPolicyRef {
        field: &'static str,
        value: String,
    },

    #[error("qualifier '{value}' must be 1-10 alphanumeric characters")]
    MalformedQualifier { value: String },

    #[error("`{trust_field}` is non-empty but `{policy_field}` is empty; trusting accounts without an execution policy grants them nothing")]
    TrustWithoutPolicy {
        trust_field: &'static str,
        policy_field: &'static str,
    },
}

///
/// ResolvedParameters
///
/// The canonical parameter record: every default applied, every identifier
/// upgraded to its validated type. Kept distinct from the raw record so a
/// consumer can never read an unresolved default. Immutable once constructed;
/// [`BootstrappingParameters::normalize`] returns a fresh value.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResolvedParameters {
    pub bucket_name: Option<String>,
    pub kms_key_id: Option<String>,
    pub ecr_key_id: Option<String>,
    pub create_customer_master_key: bool,
    pub ecr_create_customer_master_key: Option<bool>,
    pub trusted_accounts: BTreeSet<AccountId>,
    pub trusted_accounts_for_lookup: BTreeSet<AccountId>,
    pub cloudformation_execution_policies: Vec<PolicyRef>,
    pub qualifier: Qualifier,
    pub public_access_block_configuration: bool,
}

impl BootstrappingParameters {
    /// Resolve defaults and run cross-field validation, producing the canonical
    /// record handed to template synthesis.
    ///
    /// Pure: no I/O, no provider calls, input untouched. Safe to call
    /// concurrently for independent bootstrap targets.
    pub fn normalize(&self, mode: BootstrapMode) -> Result<ResolvedParameters, ValidationError> {
        let trusted_accounts_raw = self.trusted_accounts.clone().unwrap_or_default();
        let lookup_accounts_raw = self.trusted_accounts_for_lookup.clone().unwrap_or_default();
        let policies_raw = self
            .cloudformation_execution_policies
            .clone()
            .unwrap_or_default();

        // Trusting an account without granting it any execution policy is a
        // configuration error, not a silent no-op.
        if !trusted_accounts_raw.is_empty() && policies_raw.is_empty() {
            return Err(ValidationError::TrustWithoutPolicy {
                trust_field: fields::TRUSTED_ACCOUNTS,
                policy_field: fields::CLOUDFORMATION_EXECUTION_POLICIES,
            });
        }

        let trusted_accounts =
            parse_accounts(&trusted_accounts_raw, fields::TRUSTED_ACCOUNTS)?;
        let trusted_accounts_for_lookup =
            parse_accounts(&lookup_accounts_raw, fields::TRUSTED_ACCOUNTS_FOR_LOOKUP)?;

        let cloudformation_execution_policies = policies_raw
            .iter()
            .map(|value| {
                PolicyRef::parse(value).map_err(|_| ValidationError::MalformedPolicyRef {
                    field: fields::CLOUDFORMATION_EXECUTION_POLICIES,
                    value: value.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Key creation only exists in the modern template generation. Legacy
        // accepts the flag but the canonical record carries no creation intent.
        let create_customer_master_key = match mode {
            BootstrapMode::Legacy => false,
            BootstrapMode::Modern => self.create_customer_master_key.unwrap_or(false),
        };

        if create_customer_master_key && self.kms_key_id.is_some() {
            return Err(ValidationError::ConflictingKeyOptions {
                key_field: fields::KMS_KEY_ID,
                create_field: fields::CREATE_CUSTOMER_MASTER_KEY,
            });
        }

        if self.ecr_create_customer_master_key == Some(true) && self.ecr_key_id.is_some() {
            return Err(ValidationError::ConflictingKeyOptions {
                key_field: fields::ECR_KEY_ID,
                create_field: fields::ECR_CREATE_CUSTOMER_MASTER_KEY,
            });
        }

        let qualifier = match &self.qualifier {
            Some(value) => Qualifier::parse(value).map_err(|_| {
                ValidationError::MalformedQualifier {
                    value: value.clone(),
                }
            })?,
            None => Qualifier::DEFAULT,
        };

        Ok(ResolvedParameters {
            bucket_name: self.bucket_name.clone(),
            kms_key_id: self.kms_key_id.clone(),
            ecr_key_id: self.ecr_key_id.clone(),
            create_customer_master_key,
            ecr_create_customer_master_key: self.ecr_create_customer_master_key,
            trusted_accounts,
            trusted_accounts_for_lookup,
            cloudformation_execution_policies,
            qualifier,
            public_access_block_configuration: self
                .public_access_block_configuration
                .unwrap_or(true),
        })
    }
}

fn parse_accounts(
    raw: &BTreeSet<String>,
    field: &'static str,
) -> Result<BTreeSet<AccountId>, ValidationError> {
    raw.iter()
        .map(|value| {
            AccountId::parse(value).map_err(|_| ValidationError::MalformedAccountId {
                field,
                value: value.clone(),
            })
        })
        .collect()
}

impl ResolvedParameters {
    /// View the canonical record as a fully-populated raw record. Normalizing
    /// the result under the same mode yields an identical canonical record.
    #[must_use]
    pub fn as_unresolved(&self) -> BootstrappingParameters {
        BootstrappingParameters {
            bucket_name: self.bucket_name.clone(),
            kms_key_id: self.kms_key_id.clone(),
            ecr_key_id: self.ecr_key_id.clone(),
            create_customer_master_key: Some(self.create_customer_master_key),
            ecr_create_customer_master_key: self.ecr_create_customer_master_key,
            trusted_accounts: Some(
                self.trusted_accounts
                    .iter()
                    .map(|id| id.as_str().to_string())
                    .collect(),
            ),
            trusted_accounts_for_lookup: Some(
                self.trusted_accounts_for_lookup
                    .iter()
                    .map(|id| id.as_str().to_string())
                    .collect(),
            ),
            cloudformation_execution_policies: Some(
                self.cloudformation_execution_policies
                    .iter()
                    .map(|policy| policy.as_str().to_string())
                    .collect(),
            ),
            qualifier: Some(self.qualifier.as_str().to_string()),
            public_access_block_configuration: Some(self.public_access_block_configuration),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn trusted(params: &mut BootstrappingParameters, accounts: &[&str]) {
        params.trusted_accounts = Some(accounts.iter().map(ToString::to_string).collect());
    }

    #[test]
    fn empty_input_resolves_to_defaults() {
        let params = BootstrappingParameters::default();
        let resolved = params.normalize(BootstrapMode::Modern).unwrap();

        assert!(resolved.qualifier.is_default());
        assert!(resolved.public_access_block_configuration);
        assert!(!resolved.create_customer_master_key);
        assert!(resolved.trusted_accounts.is_empty());
        assert!(resolved.trusted_accounts_for_lookup.is_empty());
        assert!(resolved.cloudformation_execution_policies.is_empty());
        assert!(resolved.bucket_name.is_none());
    }

    #[test]
    fn trust_requires_an_execution_policy() {
        let mut params = BootstrappingParameters::default();
        trusted(&mut params, &["123456789012"]);
        params.cloudformation_execution_policies = Some(vec![]);

        let err = params.normalize(BootstrapMode::Modern).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TrustWithoutPolicy {
                trust_field: "trusted_accounts",
                policy_field: "cloudformation_execution_policies",
            }
        );
    }

    #[test]
    fn empty_trust_never_requires_policies() {
        let params = BootstrappingParameters::default();
        params.normalize(BootstrapMode::Modern).unwrap();

        // explicit empty set behaves like absence
        let mut params = BootstrappingParameters::default();
        trusted(&mut params, &[]);
        params.normalize(BootstrapMode::Modern).unwrap();
    }

    #[test]
    fn malformed_trusted_account_fails() {
        let mut params = BootstrappingParameters::default();
        trusted(&mut params, &["not-an-account"]);
        params.cloudformation_execution_policies =
            Some(vec!["AdministratorAccess".to_string()]);

        let err = params.normalize(BootstrapMode::Modern).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MalformedAccountId {
                field: "trusted_accounts",
                value: "not-an-account".to_string(),
            }
        );
    }

    #[test]
    fn malformed_lookup_account_names_its_field() {
        let mut params = BootstrappingParameters::default();
        params.trusted_accounts_for_lookup =
            Some(["12345".to_string()].into_iter().collect());

        let err = params.normalize(BootstrapMode::Modern).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MalformedAccountId {
                field: "trusted_accounts_for_lookup",
                ..
            }
        ));
    }

    #[test]
    fn malformed_policy_reference_fails() {
        let mut params = BootstrappingParameters::default();
        params.cloudformation_execution_policies =
            Some(vec!["arn:aws:iam::aws:role/NotAPolicy".to_string()]);

        let err = params.normalize(BootstrapMode::Modern).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedPolicyRef { .. }));
    }

    #[test]
    fn legacy_mode_drops_key_creation_intent() {
        let params = BootstrappingParameters {
            create_customer_master_key: Some(true),
            ..Default::default()
        };

        let legacy = params.normalize(BootstrapMode::Legacy).unwrap();
        assert!(!legacy.create_customer_master_key);

        let modern = params.normalize(BootstrapMode::Modern).unwrap();
        assert!(modern.create_customer_master_key);
    }

    #[test]
    fn key_reuse_and_key_creation_conflict() {
        let params = BootstrappingParameters {
            kms_key_id: Some("alias/staging".to_string()),
            create_customer_master_key: Some(true),
            ..Default::default()
        };

        let err = params.normalize(BootstrapMode::Modern).unwrap_err();
        assert!(matches!(err, ValidationError::ConflictingKeyOptions { .. }));

        // legacy forces the flag off, so the same input passes there
        let legacy = params.normalize(BootstrapMode::Legacy).unwrap();
        assert_eq!(legacy.kms_key_id.as_deref(), Some("alias/staging"));
    }

    #[test]
    fn repository_key_conflict_is_mode_independent() {
        let params = BootstrappingParameters {
            ecr_key_id: Some("alias/images".to_string()),
            ecr_create_customer_master_key: Some(true),
            ..Default::default()
        };

        params
            .normalize(BootstrapMode::Legacy)
            .expect_err("expected repository key conflict to fail");
    }

    #[test]
    fn explicit_qualifier_is_preserved() {
        let params = BootstrappingParameters {
            qualifier: Some("custom1".to_string()),
            ..Default::default()
        };

        let resolved = params.normalize(BootstrapMode::Modern).unwrap();
        assert_eq!(resolved.qualifier.as_str(), "custom1");
    }

    #[test]
    fn malformed_qualifier_fails() {
        let params = BootstrappingParameters {
            qualifier: Some("way-too-long-qualifier".to_string()),
            ..Default::default()
        };

        let err = params.normalize(BootstrapMode::Modern).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedQualifier { .. }));
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut params = BootstrappingParameters {
            bucket_name: Some("staging-assets".to_string()),
            qualifier: Some("prod7".to_string()),
            ..Default::default()
        };
        trusted(&mut params, &["123456789012", "210987654321"]);
        params.cloudformation_execution_policies =
            Some(vec!["arn:aws:iam::aws:policy/AdministratorAccess".to_string()]);

        for mode in [BootstrapMode::Legacy, BootstrapMode::Modern] {
            let once = params.normalize(mode).unwrap();
            let twice = once.as_unresolved().normalize(mode).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn trusted_values_survive_verbatim() {
        let mut params = BootstrappingParameters::default();
        trusted(&mut params, &["123456789012"]);
        params.cloudformation_execution_policies =
            Some(vec!["arn:aws:iam::aws:policy/AdministratorAccess".to_string()]);

        let resolved = params.normalize(BootstrapMode::Modern).unwrap();
        assert!(resolved.trusted_accounts.contains("123456789012"));
        assert_eq!(
            resolved.cloudformation_execution_policies[0].as_str(),
            "arn:aws:iam::aws:policy/AdministratorAccess"
        );
    }
}
