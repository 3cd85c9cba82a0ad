use crate::{bootstrap::BootstrapEnvironmentOptions, log::Topic};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),
}

/// Parse a bootstrap options record from a TOML document.
///
/// This is intentionally:
/// - deterministic
/// - synchronous
/// - free of file and flag handling (the caller owns those)
///
/// Structural problems (unknown fields, wrong types) surface here; cross-field
/// rules are the normalizer's job and run later, per invocation.
pub fn load_options(toml_str: &str) -> Result<BootstrapEnvironmentOptions, ConfigError> {
    let options: BootstrapEnvironmentOptions =
        toml::from_str(toml_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

    crate::log!(
        Topic::Config,
        Debug,
        "loaded bootstrap options for stack '{}'",
        options.effective_stack_name()
    );

    Ok(options)
}

///
/// TESTS
///
