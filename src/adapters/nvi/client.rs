//! HTTP client for the NVİ KPSPublic service
//!
//! Wraps a `reqwest::Client` configured with the request timeout. One
//! request per call, no retries; callers own any retry policy.

use async_trait::async_trait;
use log::debug;

use super::envelope;
use crate::config::RegistryConfig;
use crate::core::models::{CitizenQuery, IdentityNumber, RegistryOutcome};
use crate::core::ports::{IdentityRegistry, RegistryError};

/// Content type of SOAP 1.2 requests
const SOAP_CONTENT_TYPE: &str = "application/soap+xml; charset=utf-8";

/// Registry client for `TCKimlikNoDogrula`
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct NviClient {
    client: reqwest::Client,
    config: RegistryConfig,
}

impl NviClient {
    /// Create a client from configuration
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        config
            .validate()
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RegistryError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Get the active configuration
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

#[async_trait]
impl IdentityRegistry for NviClient {
    async fn verify(
        &self,
        number: &IdentityNumber,
        query: &CitizenQuery,
    ) -> Result<RegistryOutcome, RegistryError> {
        let body = envelope::build_request(number, query);
        debug!("POST {} for {number}", self.config.endpoint);

        let resp = self
            .client
            .post(&self.config.endpoint)
            .header("SOAPAction", &self.config.action)
            .header(reqwest::header::CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RegistryError::Status {
                status: status.as_u16(),
            });
        }

        let text = resp.text().await.map_err(map_reqwest_error)?;
        envelope::parse_response(&text)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RegistryError {
    if err.is_timeout() {
        RegistryError::Timeout
    } else {
        RegistryError::Transport(err.to_string())
    }
}
