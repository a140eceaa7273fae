//! Profile link parsing and Steam ID validation.
//!
//! Accepts the two public profile link shapes:
//! - `https://steamcommunity.com/profiles/<17-digit id>`
//! - `https://steamcommunity.com/id/<vanity name>`
//!
//! plus report links (`/report?steamid=...`) and bare IDs for the CLI.

use url::Url;

use crate::error::ReportError;

const PROFILE_HOST: &str = "steamcommunity.com";
const STEAM_ID_LEN: usize = 17;
const REPORT_QUERY_KEY: &str = "steamid";

/// What a profile link identifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileIdentifier {
    /// Not a recognized profile link.
    None,
    /// `/profiles/<id>`: a numeric Steam ID (not yet validated).
    NumericId(String),
    /// `/id/<name>`: a custom vanity name.
    VanityName(String),
}

impl ProfileIdentifier {
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::NumericId(v) | Self::VanityName(v) => Some(v),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NumericId(_) => "steamid",
            Self::VanityName(_) => "vanity",
        }
    }
}

/// A validated target for loading a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeTarget {
    /// A Steam ID that passed [`validate_steam_id`].
    SteamId(String),
    /// A vanity name; resolving it to a Steam ID is up to the backing API.
    Vanity(String),
}

/// Extract the profile identifier from a Steam community URL.
///
/// Never fails: anything that isn't a recognized profile link yields
/// [`ProfileIdentifier::None`].
pub fn extract_identifier(url: &str) -> ProfileIdentifier {
    let Ok(parsed) = Url::parse(url) else {
        return ProfileIdentifier::None;
    };

    let host_matches = parsed
        .host_str()
        .is_some_and(|host| host.contains(PROFILE_HOST));
    if !host_matches {
        return ProfileIdentifier::None;
    }

    let parts: Vec<&str> = parsed.path().split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() < 2 {
        return ProfileIdentifier::None;
    }

    match parts[0] {
        "profiles" => ProfileIdentifier::NumericId(parts[1].to_string()),
        "id" => ProfileIdentifier::VanityName(parts[1].to_string()),
        _ => ProfileIdentifier::None,
    }
}

/// Check that a Steam ID is exactly 17 ASCII digits.
pub fn validate_steam_id(value: &str) -> Result<(), ReportError> {
    if value.len() == STEAM_ID_LEN && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ReportError::invalid_identifier(value))
    }
}

/// Turn a profile URL into something a report can be loaded for.
///
/// Numeric IDs are validated here so a bad link fails before any request
/// is made. Vanity names pass through untouched.
pub fn resolve_target(url: &str) -> Result<AnalyzeTarget, ReportError> {
    match extract_identifier(url) {
        ProfileIdentifier::None => Err(ReportError::InvalidUrl),
        ProfileIdentifier::NumericId(id) => {
            validate_steam_id(&id)?;
            Ok(AnalyzeTarget::SteamId(id))
        }
        ProfileIdentifier::VanityName(name) => Ok(AnalyzeTarget::Vanity(name)),
    }
}

/// Read the `steamid` query parameter from a report link.
///
/// Relative links (`/report?steamid=...`) are accepted. An absent or
/// empty parameter is [`ReportError::MissingIdentifier`]; the value itself
/// is returned unvalidated.
pub fn steam_id_from_report_link(link: &str) -> Result<String, ReportError> {
    let parsed = parse_maybe_relative(link).ok_or(ReportError::InvalidUrl)?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == REPORT_QUERY_KEY)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or(ReportError::MissingIdentifier)
}

/// Resolve free-form user input: a bare Steam ID, a profile URL, or a
/// report link.
pub fn resolve_input(input: &str) -> Result<AnalyzeTarget, ReportError> {
    let input = input.trim();

    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        validate_steam_id(input)?;
        return Ok(AnalyzeTarget::SteamId(input.to_string()));
    }

    if is_report_link(input) {
        let id = steam_id_from_report_link(input)?;
        validate_steam_id(&id)?;
        return Ok(AnalyzeTarget::SteamId(id));
    }

    resolve_target(input)
}

fn is_report_link(input: &str) -> bool {
    parse_maybe_relative(input).is_some_and(|u| {
        u.path()
            .split('/')
            .rfind(|s| !s.is_empty())
            .is_some_and(|last| last == "report")
    })
}

fn parse_maybe_relative(link: &str) -> Option<Url> {
    match Url::parse(link) {
        Ok(u) => Some(u),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("http://localhost/").ok()?;
            base.join(link).ok()
        }
        Err(_) => None,
    }
}

#[cfg(test)]
#[path = "tests/identifier_tests.rs"]
mod tests;
