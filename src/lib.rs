//! tckimlik - Turkish national identity number (T.C. Kimlik No) validation
//!
//! This library checks the two trailing check digits of an 11-digit identity
//! number and can confirm a number, name, surname and birth year against the
//! NVİ KPSPublic registry.
//!
//! ```
//! use tckimlik::IdentityNumber;
//!
//! let id: IdentityNumber = "10000000146".parse().unwrap();
//! assert!(id.is_valid());
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;

#[cfg(feature = "nvi")]
pub use adapters::nvi::NviClient;
pub use config::{Config, ConfigError, RegistryConfig};
pub use crate::core::models::{CitizenQuery, IdentityNumber, IdentityNumberError, RegistryOutcome};
pub use crate::core::ports::{IdentityRegistry, RegistryError};
