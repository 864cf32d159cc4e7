//! Citizen data sent to the identity registry
//!
//! The registry matches names in upper case only, using Turkish casing:
//! dotted `i` becomes `İ` and dotless `ı` becomes `I`.

/// Name and birth year to confirm against the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitizenQuery {
    /// Given name, normalized to upper case
    pub given_name: String,
    /// Surname, normalized to upper case
    pub surname: String,
    /// Year of birth
    pub birth_year: i32,
}

impl CitizenQuery {
    /// Create a query, normalizing both names for the registry
    #[must_use]
    pub fn new(given_name: &str, surname: &str, birth_year: i32) -> Self {
        Self {
            given_name: to_turkish_uppercase(given_name),
            surname: to_turkish_uppercase(surname),
            birth_year,
        }
    }
}

/// Upper-case a name with Turkish casing rules
///
/// Surrounding whitespace is trimmed.
#[must_use]
pub fn to_turkish_uppercase(name: &str) -> String {
    let mut upper = String::with_capacity(name.len());
    for c in name.trim().chars() {
        match c {
            'i' => upper.push('İ'),
            'ı' => upper.push('I'),
            _ => upper.extend(c.to_uppercase()),
        }
    }
    upper
}
