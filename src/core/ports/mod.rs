//! Port traits (interfaces) for external dependencies
//!
//! The core depends only on these traits. Implementations live in the
//! `adapters` module, and tests substitute mocks.

mod registry;

#[cfg(test)]
pub(crate) use registry::MockIdentityRegistry;
pub use registry::{IdentityRegistry, RegistryError};
