use std::fmt;

use steamstat_core::ReportError;

/// The remote resources a report is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Profile,
    Library,
    Recent,
    Achievements,
    Store,
}

impl Resource {
    /// Path relative to the API base.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Profile => "user/profile",
            Self::Library => "user/library",
            Self::Recent => "user/recent",
            Self::Achievements => "user/achievements",
            Self::Store => "store",
        }
    }

    /// Stable error code, e.g. `PROFILE_FETCH_FAILED`.
    pub fn failure_code(&self) -> &'static str {
        match self {
            Self::Profile => "PROFILE_FETCH_FAILED",
            Self::Library => "LIBRARY_FETCH_FAILED",
            Self::Recent => "RECENT_FETCH_FAILED",
            Self::Achievements => "ACHIEVEMENTS_FETCH_FAILED",
            Self::Store => "STORE_FETCH_FAILED",
        }
    }

    /// Whether a failure of this resource fails the whole report.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Profile | Self::Library | Self::Recent)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Profile => "profile",
            Self::Library => "library",
            Self::Recent => "recent activity",
            Self::Achievements => "achievements",
            Self::Store => "store",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while talking to the steamstat API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("{}: {reason}", .resource.failure_code())]
    FetchFailed { resource: Resource, reason: String },

    #[error("Failed to parse {resource} response: {source}")]
    Parse {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn fetch_failed(resource: Resource, reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            resource,
            reason: reason.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Message to show an end user for a failed report load.
    ///
    /// Any failure fetching the core report data collapses to one generic
    /// hint; validation errors keep their own wording.
    pub fn user_message(&self) -> String {
        match self {
            Self::Report(e) => e.to_string(),
            Self::FetchFailed { resource, .. } | Self::Parse { resource, .. }
                if resource.is_required() =>
            {
                "Couldn't load that profile. Make sure it's public and the link is valid."
                    .to_string()
            }
            Self::ProfileNotFound => {
                "Profile not found. Please check the Steam ID and try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}
