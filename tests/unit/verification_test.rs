//! Tests for checksum-gated registry verification

use tckimlik::core::services::{check_registry, verify_remotely};
use tckimlik::{CitizenQuery, RegistryError, RegistryOutcome};

use crate::common::fixtures::{invalid_number, valid_number};
use crate::common::mocks::RecordingRegistry;

#[tokio::test]
async fn invalid_number_makes_no_registry_call() {
    let registry = RecordingRegistry::confirming();

    let verified = invalid_number()
        .verify_remotely(&registry, "Ahmet", "Kaya", 1980)
        .await;

    assert!(!verified);
    assert_eq!(registry.calls(), 0);
}

#[tokio::test]
async fn valid_number_is_sent_with_uppercased_names() {
    let registry = RecordingRegistry::confirming();

    let verified = valid_number()
        .verify_remotely(&registry, "zeynep", "çelik", 1992)
        .await;

    assert!(verified);
    assert_eq!(registry.calls(), 1);
    let (number, query) = registry.last_request().unwrap();
    assert_eq!(number, valid_number());
    assert_eq!(query, CitizenQuery::new("ZEYNEP", "ÇELİK", 1992));
}

#[tokio::test]
async fn not_confirmed_is_false() {
    let registry = RecordingRegistry::answering(Ok(RegistryOutcome::NotConfirmed));
    assert!(!verify_remotely(&valid_number(), &registry, "a", "b", 2000).await);
    assert_eq!(registry.calls(), 1);
}

#[tokio::test]
async fn transport_failure_is_false() {
    let registry =
        RecordingRegistry::answering(Err(RegistryError::Transport("dns failure".to_string())));
    assert!(!verify_remotely(&valid_number(), &registry, "a", "b", 2000).await);
}

#[tokio::test]
async fn timeout_is_false() {
    let registry = RecordingRegistry::answering(Err(RegistryError::Timeout));
    assert!(!verify_remotely(&valid_number(), &registry, "a", "b", 2000).await);
}

#[tokio::test]
async fn check_registry_distinguishes_outcomes() {
    let query = CitizenQuery::new("a", "b", 2000);

    let registry = RecordingRegistry::confirming();
    assert_eq!(
        check_registry(&invalid_number(), &registry, &query).await,
        Ok(RegistryOutcome::ChecksumFailed)
    );
    assert_eq!(registry.calls(), 0);

    let registry = RecordingRegistry::answering(Err(RegistryError::Status { status: 503 }));
    assert_eq!(
        check_registry(&valid_number(), &registry, &query).await,
        Err(RegistryError::Status { status: 503 })
    );
}

#[tokio::test]
async fn works_through_trait_object() {
    let registry: Box<dyn tckimlik::IdentityRegistry> = Box::new(RecordingRegistry::confirming());
    assert!(
        valid_number()
            .verify_remotely(registry.as_ref(), "a", "b", 2000)
            .await
    );
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let registry = RecordingRegistry::confirming();
    let valid = valid_number();
    let invalid = invalid_number();

    let (a, b, c) = tokio::join!(
        valid.verify_remotely(&registry, "a", "b", 2000),
        invalid.verify_remotely(&registry, "a", "b", 2000),
        valid.verify_remotely(&registry, "c", "d", 2001),
    );

    assert!(a);
    assert!(!b);
    assert!(c);
    assert_eq!(registry.calls(), 2);
}
