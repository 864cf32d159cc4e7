//! NVİ KPSPublic identity registry adapter
//!
//! The registry exposes one SOAP 1.2 operation, `TCKimlikNoDogrula`, which
//! answers whether an identity number, names and birth year match a record.
//!
//! - `envelope` - Request building and response extraction (pure)
//! - `client` - `reqwest` transport implementing [`IdentityRegistry`]
//!
//! [`IdentityRegistry`]: crate::core::ports::IdentityRegistry

pub mod envelope;

#[cfg(feature = "nvi")]
mod client;

#[cfg(feature = "nvi")]
pub use client::NviClient;
