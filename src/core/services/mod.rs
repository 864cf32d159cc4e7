//! Business logic services
//!
//! - [`checksum`] - The check digit algorithm
//! - [`verifier`] - Checksum-gated registry verification

pub mod checksum;
pub mod verifier;

pub use verifier::{check_registry, verify_remotely};
