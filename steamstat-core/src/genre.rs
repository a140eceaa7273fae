//! Keyword-based genre tagging and per-genre playtime totals.
//!
//! Genre tags are a heuristic over game names, not store metadata. The rule
//! table is ordered and the first matching rule wins, so a title that
//! matches several families (e.g. "Elden Ring" is listed under both RPG and
//! Souls) takes whichever family comes first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::GameRecord;
use crate::scale::scale_bar_height;

/// Maximum number of genres shown in the breakdown.
pub const MAX_GENRES: usize = 5;

/// Titles under this many minutes fall back to `Indie` rather than `Other`.
const INDIE_MINUTES_CEILING: u64 = 1000;

/// Big mainstream titles that never count as indie, however little they were played.
const INDIE_EXCLUSIONS: &[&str] = &["counter-strike", "dota", "league"];

/// Coarse genre tag assigned by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Rpg,
    Fps,
    Sim,
    Strategy,
    Souls,
    Moba,
    Indie,
    Other,
}

/// Ordered keyword rules. Evaluated top to bottom.
const GENRE_RULES: &[(Genre, &[&str])] = &[
    (
        Genre::Rpg,
        &[
            "witcher",
            "skyrim",
            "fallout",
            "baldur",
            "elden ring",
            "dark souls",
            "dragon",
            "final fantasy",
            "persona",
        ],
    ),
    (
        Genre::Fps,
        &[
            "counter-strike",
            "cs:go",
            "cs2",
            "valorant",
            "overwatch",
            "call of duty",
            "battlefield",
            "apex",
            "warzone",
            "halo",
            "doom",
            "rainbow six",
        ],
    ),
    (
        Genre::Sim,
        &[
            "simulator",
            "farm",
            "city",
            "tycoon",
            "planet",
            "zoo",
            "sims",
            "stardew",
            "harvest",
        ],
    ),
    (
        Genre::Strategy,
        &[
            "civilization",
            "total war",
            "age of",
            "starcraft",
            "crusader kings",
            "europa",
            "hearts of iron",
            "xcom",
        ],
    ),
    (
        Genre::Souls,
        &[
            "dark souls",
            "bloodborne",
            "sekiro",
            "elden ring",
            "nioh",
            "lies of p",
        ],
    ),
    (Genre::Moba, &["dota", "league", "smite", "heroes of the storm"]),
];

/// Colour tag and flavour text per genre name.
const GENRE_STYLES: &[(&str, &str, &str)] = &[
    ("RPG", "bg-purple-500", "Exploring every corner"),
    ("FPS", "bg-red-500", "Aiming for nothing"),
    ("Indie", "bg-blue-400", "Artistic suffering"),
    ("Sim", "bg-green-500", "Virtual responsibility"),
    ("Souls", "bg-orange-500", "Pure masochism"),
    ("Strategy", "bg-yellow-500", "World domination"),
    ("MOBA", "bg-pink-500", "Toxic teammates"),
    ("Other", "bg-slate-500", "Misc adventures"),
];

const FALLBACK_COLOR: &str = "bg-slate-500";
const FALLBACK_LABEL: &str = "Gaming";

impl Genre {
    /// Display name, also the key into the style table.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rpg => "RPG",
            Self::Fps => "FPS",
            Self::Sim => "Sim",
            Self::Strategy => "Strategy",
            Self::Souls => "Souls",
            Self::Moba => "MOBA",
            Self::Indie => "Indie",
            Self::Other => "Other",
        }
    }

    /// Keywords that select this genre, empty for the fallback genres.
    pub fn keywords(&self) -> &'static [&'static str] {
        GENRE_RULES
            .iter()
            .find(|(genre, _)| genre == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the `(color, label)` pair for a genre name.
///
/// Unknown names get a neutral fallback.
pub fn genre_style(name: &str) -> (&'static str, &'static str) {
    GENRE_STYLES
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|(_, color, label)| (*color, *label))
        .unwrap_or((FALLBACK_COLOR, FALLBACK_LABEL))
}

/// Tag a game with a genre from its name (and, for the indie fallback,
/// its playtime).
pub fn classify(game: &GameRecord) -> Genre {
    let name = game.name.to_lowercase();

    for (genre, keywords) in GENRE_RULES {
        if keywords.iter().any(|k| name.contains(k)) {
            return *genre;
        }
    }

    if game.total_playtime_minutes < INDIE_MINUTES_CEILING
        && !INDIE_EXCLUSIONS.iter().any(|k| name.contains(k))
    {
        return Genre::Indie;
    }

    Genre::Other
}

/// Total playtime for one genre, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAggregate {
    pub genre_name: String,
    pub total_hours: u64,
    pub color_tag: String,
    pub flavor_label: String,
    /// Bar height in pixels relative to the largest genre
    pub bar_height: f64,
}

/// Sum playtime per genre and return the top [`MAX_GENRES`] by hours.
///
/// Hours are floored per genre after summing minutes. Ties keep the order
/// in which the genres first appear in the library.
pub fn aggregate_genres(library: &[GameRecord]) -> Vec<GenreAggregate> {
    let mut totals: Vec<(Genre, u64)> = Vec::new();
    for game in library {
        let genre = classify(game);
        match totals.iter_mut().find(|(g, _)| *g == genre) {
            Some((_, minutes)) => {
                *minutes = minutes.saturating_add(game.total_playtime_minutes)
            }
            None => totals.push((genre, game.total_playtime_minutes)),
        }
    }

    let mut hours: Vec<(Genre, u64)> = totals
        .into_iter()
        .map(|(genre, minutes)| (genre, minutes / 60))
        .collect();
    hours.sort_by(|a, b| b.1.cmp(&a.1));
    hours.truncate(MAX_GENRES);

    let max_hours = max_genre_hours_of(hours.iter().map(|(_, h)| *h));

    hours
        .into_iter()
        .map(|(genre, total_hours)| {
            let (color, label) = genre_style(genre.name());
            GenreAggregate {
                genre_name: genre.name().to_string(),
                total_hours,
                color_tag: color.to_string(),
                flavor_label: label.to_string(),
                bar_height: scale_bar_height(total_hours, max_hours),
            }
        })
        .collect()
}

/// Largest genre total, never less than 1 so it is safe to divide by.
pub fn max_genre_hours(genres: &[GenreAggregate]) -> u64 {
    max_genre_hours_of(genres.iter().map(|g| g.total_hours))
}

fn max_genre_hours_of(hours: impl Iterator<Item = u64>) -> u64 {
    hours.max().unwrap_or(0).max(1)
}

#[cfg(test)]
#[path = "tests/genre_tests.rs"]
mod tests;
