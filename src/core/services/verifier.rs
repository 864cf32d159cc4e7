//! Verification service - checksum-gated registry lookup
//!
//! A number that fails the checksum never reaches the registry. Numbers that
//! pass are sent to an [`IdentityRegistry`] together with the citizen's names
//! (upper-cased) and birth year.
//!
//! Two forms are provided:
//!
//! - [`check_registry`] distinguishes confirmation, non-confirmation and
//!   transport failures
//! - [`verify_remotely`] collapses everything except confirmation to `false`

use log::{debug, warn};

use crate::core::models::{CitizenQuery, IdentityNumber, RegistryOutcome};
use crate::core::ports::{IdentityRegistry, RegistryError};

/// Confirm a number against the registry, reporting failures as errors
///
/// Returns [`RegistryOutcome::ChecksumFailed`] without calling the registry
/// when the number's check digits are inconsistent.
pub async fn check_registry<R>(
    number: &IdentityNumber,
    registry: &R,
    query: &CitizenQuery,
) -> Result<RegistryOutcome, RegistryError>
where
    R: IdentityRegistry + ?Sized,
{
    if !number.is_valid() {
        debug!("{number} failed checksum, skipping registry lookup");
        return Ok(RegistryOutcome::ChecksumFailed);
    }

    let outcome = registry.verify(number, query).await?;
    debug!("registry answered {outcome} for {number}");
    Ok(outcome)
}

/// Confirm a number against the registry
///
/// Returns `true` only when the registry confirms the data. Checksum
/// failures, non-confirmation, transport errors and timeouts all yield
/// `false`.
pub async fn verify_remotely<R>(
    number: &IdentityNumber,
    registry: &R,
    given_name: &str,
    surname: &str,
    birth_year: i32,
) -> bool
where
    R: IdentityRegistry + ?Sized,
{
    let query = CitizenQuery::new(given_name, surname, birth_year);
    match check_registry(number, registry, &query).await {
        Ok(outcome) => outcome.is_confirmed(),
        Err(err) => {
            warn!("registry verification of {number} failed: {err}");
            false
        },
    }
}

impl IdentityNumber {
    /// Confirm this number against the registry
    ///
    /// See [`verify_remotely`].
    pub async fn verify_remotely<R>(
        &self,
        registry: &R,
        given_name: &str,
        surname: &str,
        birth_year: i32,
    ) -> bool
    where
        R: IdentityRegistry + ?Sized,
    {
        verify_remotely(self, registry, given_name, surname, birth_year).await
    }

    /// Confirm this number against the registry, reporting failures as errors
    ///
    /// See [`check_registry`].
    pub async fn check_registry<R>(
        &self,
        registry: &R,
        query: &CitizenQuery,
    ) -> Result<RegistryOutcome, RegistryError>
    where
        R: IdentityRegistry + ?Sized,
    {
        check_registry(self, registry, query).await
    }
}
