//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `nvi/` - SOAP client for the NVİ KPSPublic identity registry
//!
//! The HTTP transport is behind the `nvi` feature. Envelope building and
//! response parsing are always available.

pub mod nvi;
