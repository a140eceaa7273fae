use thiserror::Error;

/// Pre-flight validation failures, raised before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The input did not parse as a recognized Steam profile link
    #[error("INVALID_URL: not a recognized Steam profile link")]
    InvalidUrl,

    /// A profile link was recognized but its Steam ID is not 17 digits
    #[error("INVALID_STEAMID: '{0}' is not a 17-digit Steam ID")]
    InvalidIdentifier(String),

    /// A report link without a `steamid` query parameter
    #[error("No Steam ID provided in URL")]
    MissingIdentifier,
}

impl ReportError {
    pub fn invalid_identifier(value: impl Into<String>) -> Self {
        Self::InvalidIdentifier(value.into())
    }
}
