//! Raw TMDB movie-details payload, as returned by
//! `GET /movie/{id}?append_to_response=credits,translations,watch/providers`.
//!
//! These types mirror the wire shape and are handed to the aggregation
//! pipeline un-normalized; every collection defaults to empty so a sparse
//! payload still deserializes.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Source-provided adult-content flag, used as a fallback when
    /// classification is unavailable
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default)]
    pub translations: Option<TranslationList>,
    /// TMDB nests watch providers under a slash-separated key
    #[serde(rename = "watch/providers", default)]
    pub watch_providers: Option<WatchProviderResults>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpokenLanguage {
    pub iso_639_1: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationList {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    pub iso_639_1: String,
    #[serde(default)]
    pub data: Option<TranslationData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchProviderResults {
    /// Keyed by uppercase ISO 3166-1 region code
    #[serde(default)]
    pub results: HashMap<String, RegionListings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionListings {
    /// TMDB watch page for this movie and region
    #[serde(default)]
    pub link: Option<String>,
    /// Subscription ("flatrate") providers only; rental and purchase
    /// listings are ignored
    #[serde(default)]
    pub flatrate: Option<Vec<WatchProvider>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchProvider {
    #[serde(default)]
    pub provider_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload_deserialization() {
        let json = r#"{
            "id": 530385,
            "title": "Carol",
            "overview": "In 1950s New York, a department-store clerk falls for an older woman.",
            "poster_path": "/h8fOumtMhyzvrUfQDUbRnfBvrKN.jpg",
            "release_date": "2015-11-20",
            "adult": false,
            "imdb_id": "tt2402927",
            "original_language": "en",
            "genres": [{"id": 18, "name": "Drama"}, {"id": 10749, "name": "Romance"}],
            "production_countries": [{"iso_3166_1": "GB"}, {"iso_3166_1": "US"}],
            "spoken_languages": [{"iso_639_1": "en"}],
            "credits": {
                "cast": [{"name": "Cate Blanchett", "order": 0}, {"name": "Rooney Mara", "order": 1}],
                "crew": [{"name": "Todd Haynes", "job": "Director"}]
            },
            "translations": {
                "translations": [
                    {"iso_639_1": "pt", "data": {"title": "Carol", "overview": "Nos anos 1950..."}}
                ]
            },
            "watch/providers": {
                "results": {
                    "US": {
                        "link": "https://www.themoviedb.org/movie/530385/watch?locale=US",
                        "flatrate": [{"provider_id": 8, "provider_name": "Netflix"}]
                    }
                }
            }
        }"#;

        let movie: TmdbMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 530385);
        assert_eq!(movie.title.as_deref(), Some("Carol"));
        assert_eq!(movie.release_date.as_deref(), Some("2015-11-20"));
        assert_eq!(movie.genres.len(), 2);
        assert_eq!(movie.credits.as_ref().unwrap().crew[0].job, "Director");

        let us = &movie.watch_providers.as_ref().unwrap().results["US"];
        let flatrate = us.flatrate.as_ref().unwrap();
        assert_eq!(flatrate[0].provider_name.as_deref(), Some("Netflix"));
    }

    #[test]
    fn test_sparse_payload_deserialization() {
        // A delisted or barely-populated entry still parses
        let json = r#"{"id": 999999999}"#;
        let movie: TmdbMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 999999999);
        assert!(movie.title.is_none());
        assert!(movie.poster_path.is_none());
        assert!(!movie.adult);
        assert!(movie.genres.is_empty());
        assert!(movie.watch_providers.is_none());
    }

    #[test]
    fn test_translation_without_data_block() {
        let json = r#"{
            "id": 1,
            "translations": {"translations": [{"iso_639_1": "pt"}]}
        }"#;
        let movie: TmdbMovie = serde_json::from_str(json).unwrap();
        let translations = &movie.translations.as_ref().unwrap().translations;
        assert_eq!(translations[0].iso_639_1, "pt");
        assert!(translations[0].data.is_none());
    }
}
