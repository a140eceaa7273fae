//! Data model and report statistics for steamstat.
//!
//! Everything here is pure: no I/O, no shared state. The HTTP side lives in
//! `steamstat-client`.

pub mod error;
pub mod genre;
pub mod identifier;
pub mod metrics;
pub mod model;
pub mod report;
pub mod scale;
pub mod util;

pub use error::ReportError;
pub use genre::{Genre, GenreAggregate, aggregate_genres, classify, genre_style};
pub use identifier::{
    AnalyzeTarget, ProfileIdentifier, extract_identifier, resolve_input, resolve_target,
    steam_id_from_report_link, validate_steam_id,
};
pub use metrics::RankedGame;
pub use model::{AchievementEntry, AchievementSet, GameRecord, ProfileSummary};
pub use report::{AchievementSummary, ViewModel};
pub use scale::scale_bar_height;
