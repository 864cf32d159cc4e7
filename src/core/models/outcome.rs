//! Registry verification outcome

/// Result of confirming an identity number against the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryOutcome {
    /// The registry confirmed that number, names and birth year match a record
    Confirmed,
    /// The registry answered, but did not confirm the data
    NotConfirmed,
    /// The number failed the checksum; the registry was not contacted
    ChecksumFailed,
}

impl RegistryOutcome {
    /// Whether the registry confirmed the data
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl std::fmt::Display for RegistryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::NotConfirmed => write!(f, "not confirmed"),
            Self::ChecksumFailed => write!(f, "checksum failed"),
        }
    }
}
