use crate::bootstrap::{
    BootstrapMode, BootstrappingParameters, ResolvedParameters, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Stack name used when the caller does not pass one.
pub const DEFAULT_STACK_NAME: &str = "GroundworkBootstrap";

mod defaults {
    pub const fn execute() -> bool {
        true
    }

    pub const fn termination_protection() -> bool {
        true
    }
}

///
/// BootstrapEnvironmentOptions
///
/// The outer invocation record: the parameters to bootstrap with plus the
/// operational controls the deployment engine reads as-is. Normalization only
/// touches the nested parameters; everything else passes through unchanged.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapEnvironmentOptions {
    #[serde(default)]
    pub stack_name: Option<String>,

    /// Role assumed for the deployment itself.
    #[serde(default)]
    pub role_arn: Option<String>,

    #[serde(default)]
    pub parameters: BootstrappingParameters,

    /// Redeploy even when the deployed template looks current.
    #[serde(default)]
    pub force: bool,

    /// Execute the change set immediately, or only create it and leave it in
    /// review.
    #[serde(default = "defaults::execute")]
    pub execute: bool,

    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Protect the bootstrap stack from termination.
    #[serde(default = "defaults::termination_protection")]
    pub termination_protection: bool,
}

impl BootstrapEnvironmentOptions {
    /// The stack name to deploy under: the caller's explicit value or the
    /// fixed default.
    #[must_use]
    pub fn effective_stack_name(&self) -> &str {
        self.stack_name.as_deref().unwrap_or(DEFAULT_STACK_NAME)
    }

    /// Normalize the nested parameters for the given mode. Operational fields
    /// are not part of the canonical record; the engine keeps reading them off
    /// this value.
    pub fn normalized_parameters(
        &self,
        mode: BootstrapMode,
    ) -> Result<ResolvedParameters, ValidationError> {
        self.parameters.normalize(mode)
    }
}

impl Default for BootstrapEnvironmentOptions {
    fn default() -> Self {
        Self {
            stack_name: None,
            role_arn: None,
            parameters: BootstrappingParameters::default(),
            force: false,
            execute: defaults::execute(),
            tags: Vec::new(),
            termination_protection: defaults::termination_protection(),
        }
    }
}

///
/// Tag
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

///
/// TESTS
///
