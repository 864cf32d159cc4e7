//! Domain models for tckimlik
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`IdentityNumber`] - An 11-digit T.C. Kimlik No
//! - [`CitizenQuery`] - Name and birth year sent to the registry
//! - [`RegistryOutcome`] - What the registry said about a number

mod citizen;
mod identity_number;
mod outcome;

pub use citizen::{CitizenQuery, to_turkish_uppercase};
pub use identity_number::{
    DIGIT_COUNT, IdentityNumber, IdentityNumberError, MAX_VALUE, MIN_VALUE,
};
pub use outcome::RegistryOutcome;
