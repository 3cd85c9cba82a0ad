//! Bootstrap parameter shapes and normalization.
//!
//! The flow is: the caller assembles a raw [`BootstrapEnvironmentOptions`]
//! (from flags, config, or both), the nested [`BootstrappingParameters`] get
//! normalized into a [`ResolvedParameters`] record, and the engine reads the
//! operational fields straight off the options value. Only the nested
//! parameters are touched by normalization.

mod options;
mod outputs;
mod params;
mod resolved;

pub use options::*;
pub use outputs::*;
pub use params::*;
pub use resolved::*;

use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// BootstrapMode
///
/// Two template generations. Legacy never creates a customer-managed
/// encryption key, whatever the parameters say; modern may.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BootstrapMode {
    Legacy,
    Modern,
}
