use crate::{bootstrap::ValidationError, config::ConfigError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error wrapper. Module errors convert into this so callers can
/// bubble a single type through `?` without flattening the taxonomy.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
