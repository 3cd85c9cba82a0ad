use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// BootstrappingParameters
///
/// The raw, possibly-partial parameter set for one bootstrap invocation.
/// Every field is optional; absence means "use the default" and is resolved by
/// [`normalize`](Self::normalize), never at a call site.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrappingParameters {
    /// Name for the staging bucket. Absent means the engine lets the provider
    /// generate one.
    #[serde(default)]
    pub bucket_name: Option<String>,

    /// Existing key id used to encrypt bucket contents.
    #[serde(default)]
    pub kms_key_id: Option<String>,

    /// Existing key id used to encrypt images in the repository.
    #[serde(default)]
    pub ecr_key_id: Option<String>,

    /// Create a new customer master key for the bucket. Only meaningful under
    /// modern bootstrap; legacy accepts the flag and ignores it.
    #[serde(default)]
    pub create_customer_master_key: Option<bool>,

    /// Create a new customer master key for the image repository.
    #[serde(default)]
    pub ecr_create_customer_master_key: Option<bool>,

    /// Accounts trusted to deploy into the bootstrapped environment.
    #[serde(default)]
    pub trusted_accounts: Option<BTreeSet<String>>,

    /// Accounts trusted to look up values in the bootstrapped environment.
    #[serde(default)]
    pub trusted_accounts_for_lookup: Option<BTreeSet<String>>,

    /// Policies attached to the role performing deployments. Required
    /// non-empty once any account is trusted.
    #[serde(default)]
    pub cloudformation_execution_policies: Option<Vec<String>>,

    /// Disambiguates co-located bootstrap stacks.
    #[serde(default)]
    pub qualifier: Option<String>,

    /// Block public access on the staging bucket.
    #[serde(default)]
    pub public_access_block_configuration: Option<bool>,
}

///
/// TESTS
///
