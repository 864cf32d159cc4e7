//! Core domain logic for tckimlik
//!
//! This module contains pure business logic with no I/O dependencies.
//! The remote registry is abstracted through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`IdentityNumber`, `CitizenQuery`, `RegistryOutcome`)
//! - `services/` - Checksum algorithm and verification orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
