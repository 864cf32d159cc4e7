//! Identity registry port
//!
//! Defines the interface for confirming citizen data against a remote
//! registry. The transport (SOAP over HTTPS for NVİ) lives in `adapters`.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::models::{CitizenQuery, IdentityNumber, RegistryOutcome};

/// Errors a registry call can fail with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Request could not be sent or the response could not be read
    #[error("registry transport error: {0}")]
    Transport(String),

    /// Registry did not answer in time
    #[error("registry request timed out")]
    Timeout,

    /// Registry answered with a non-success HTTP status
    #[error("registry returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response did not contain a verification result
    #[error("registry response has no verification result")]
    MalformedResponse,
}

/// Remote identity registry abstraction
///
/// Each call is an independent request/response exchange. Implementations
/// must not share mutable state between calls and must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityRegistry: Send + Sync {
    /// Ask the registry whether the number matches the given citizen data
    async fn verify(
        &self,
        number: &IdentityNumber,
        query: &CitizenQuery,
    ) -> Result<RegistryOutcome, RegistryError>;
}
