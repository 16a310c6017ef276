use serde::{Deserialize, Serialize};

pub mod omdb;
pub mod tmdb;

pub use omdb::OmdbRating;
pub use tmdb::TmdbMovie;

/// A text value carried in both supported languages.
///
/// The Portuguese slot falls back to the English value when the source has no
/// usable translation, so both slots are always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub pt: String,
}

impl LocalizedText {
    /// Same literal value in both slots; used for names, which TMDB does not
    /// translate.
    pub fn same(value: &str) -> Self {
        Self {
            en: value.to_string(),
            pt: value.to_string(),
        }
    }
}

/// One streaming platform a movie is watchable on in the requested region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchOption {
    /// Provider display name as reported by TMDB, trimmed
    pub platform_name: String,
    /// Canonical platform key for UI filters and translations
    pub platform_key: String,
    /// TMDB watch page for the region, shared by all providers of a movie
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_url: Option<String>,
}

/// Canonical movie record produced by the aggregation pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// TMDB numeric id, stringified
    pub id: String,
    pub title: LocalizedText,
    pub poster_url: String,
    pub release_year: i32,
    /// Uppercase ISO 3166-1 production country codes, deduplicated
    pub countries: Vec<String>,
    /// Uppercase ISO 639-1 spoken language codes, deduplicated
    pub languages: Vec<String>,
    /// Genre names in source order, deduplicated; a synthetic "Explicit" tag
    /// is appended when classification flags the content
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<LocalizedText>,
    /// Top-billed cast, capped at five entries
    pub actors: Vec<LocalizedText>,
    pub description: LocalizedText,
    /// Subscription availability in the requested region, one entry per
    /// platform name
    pub availability: Vec<WatchOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letterboxd_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<u64>,
}
