//! Groundwork bootstrap contracts.
//!
//! This crate owns the parameter contract for preparing a deployment target
//! (account/region) with its baseline resources: the staging bucket, the
//! optional image repository, encryption keys, trust relationships, and
//! execution policies. It validates and normalizes a raw parameter set into a
//! canonical record that the deployment engine can hand to template synthesis.
//!
//! ## Layering
//!
//! - `ids/` owns the validated identifier newtypes (accounts, policies,
//!   qualifiers).
//! - `bootstrap/` owns the parameter shapes, the normalization rules, and the
//!   stack-output name contract.
//! - `config/` ingests an options record from TOML; flag parsing and file I/O
//!   stay with the caller.
//!
//! The crate performs no provider calls. Deployment, change-set execution, and
//! credential resolution belong to the engine that consumes these records.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod ids;
pub mod log;

pub use error::Error;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
