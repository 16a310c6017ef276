//! Movie aggregation pipeline.
//!
//! For each curated id the pipeline fetches the raw catalog entry, validates
//! it, resolves bilingual text, classifies explicit content, extracts credits
//! and regional availability, enriches with an IMDb rating, and assembles the
//! canonical record. Ids are processed strictly in order, one at a time; a
//! failing id is skipped and the batch continues. The public entry point is
//! total: it returns a (possibly empty) list, never an error.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::{
    config::Config,
    models::{
        tmdb::RegionListings,
        LocalizedText, Movie, TmdbMovie, WatchOption,
    },
    services::{
        classifier::{ContentClassifier, StubClassifier},
        platforms::platform_key,
        providers::{CatalogProvider, OmdbProvider, RatingProvider, TmdbProvider},
    },
};

/// Cast list cap, source billing order
const MAX_ACTORS: usize = 5;

/// Description text when the source has no overview
const OVERVIEW_FALLBACK: &str = "Overview not available";

pub struct Aggregator {
    catalog: Option<Arc<dyn CatalogProvider>>,
    rating: Option<Arc<dyn RatingProvider>>,
    classifier: Arc<dyn ContentClassifier>,
    poster_base_url: String,
}

impl Aggregator {
    pub fn new(
        catalog: Option<Arc<dyn CatalogProvider>>,
        rating: Option<Arc<dyn RatingProvider>>,
        classifier: Arc<dyn ContentClassifier>,
        poster_base_url: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            rating,
            classifier,
            poster_base_url: poster_base_url.into(),
        }
    }

    /// Wires up real providers from configuration.
    ///
    /// A missing TMDB key disables the catalog source entirely (every run
    /// returns an empty batch); a missing OMDb key only disables rating
    /// enrichment.
    pub fn from_config(config: &Config) -> Self {
        let catalog: Option<Arc<dyn CatalogProvider>> = match config.tmdb_key() {
            Some(key) => Some(Arc::new(TmdbProvider::new(
                key.to_string(),
                config.tmdb_api_url.clone(),
            ))),
            None => {
                tracing::error!(
                    "TMDB_API_KEY is not set or empty; the catalog pipeline is disabled"
                );
                None
            }
        };

        let rating: Option<Arc<dyn RatingProvider>> = match config.omdb_key() {
            Some(key) => Some(Arc::new(OmdbProvider::new(
                key.to_string(),
                config.omdb_api_url.clone(),
            ))),
            None => {
                tracing::warn!("OMDB_API_KEY is not set; IMDb ratings will not be fetched");
                None
            }
        };

        Self::new(
            catalog,
            rating,
            Arc::new(StubClassifier),
            config.poster_base_url.clone(),
        )
    }

    /// Aggregates the given ids for one availability region.
    ///
    /// Output order follows input order; skipped ids are simply absent.
    pub async fn run(&self, ids: &[u64], region: &str) -> Vec<Movie> {
        let Some(catalog) = &self.catalog else {
            tracing::error!("No catalog source configured; returning an empty batch");
            return Vec::new();
        };

        let region = region.trim().to_uppercase();
        let mut movies = Vec::new();

        for &id in ids {
            let raw = match catalog.fetch_movie(id).await {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(movie_id = id, error = %e, "Catalog fetch failed, skipping");
                    continue;
                }
            };

            if let Some(movie) = self.assemble(raw, &region).await {
                movies.push(movie);
            }
        }

        tracing::info!(
            requested = ids.len(),
            assembled = movies.len(),
            region = %region,
            "Catalog aggregation complete"
        );

        movies
    }

    /// Normalizes one raw entry into a canonical record.
    ///
    /// `None` means the entry failed validation and the id is dropped.
    async fn assemble(&self, raw: TmdbMovie, region: &str) -> Option<Movie> {
        let (Some(poster_path), Some(en_title), Some(release_date)) = (
            non_empty(raw.poster_path.as_deref()),
            non_empty(raw.title.as_deref()),
            non_empty(raw.release_date.as_deref()),
        ) else {
            tracing::warn!(
                movie_id = raw.id,
                "Entry is missing poster, title, or release date; skipping"
            );
            return None;
        };
        let poster_path = poster_path.to_string();
        let en_title = en_title.to_string();

        let release_year = match NaiveDate::parse_from_str(release_date, "%Y-%m-%d") {
            Ok(date) => date.year(),
            Err(_) => {
                tracing::warn!(
                    movie_id = raw.id,
                    release_date = %release_date,
                    "Unparseable release date; skipping"
                );
                return None;
            }
        };

        let overview = non_empty(raw.overview.as_deref()).map(str::to_string);
        let en_overview = overview
            .clone()
            .unwrap_or_else(|| OVERVIEW_FALLBACK.to_string());

        // A Portuguese translation counts only when it carries both a title
        // and an overview; otherwise both fields fall back to English.
        let (pt_title, pt_overview) = raw
            .translations
            .iter()
            .flat_map(|list| list.translations.iter())
            .find_map(|translation| {
                if translation.iso_639_1 != "pt" {
                    return None;
                }
                let data = translation.data.as_ref()?;
                match (
                    non_empty(data.title.as_deref()),
                    non_empty(data.overview.as_deref()),
                ) {
                    (Some(title), Some(overview)) => {
                        Some((title.to_string(), overview.to_string()))
                    }
                    _ => None,
                }
            })
            .unwrap_or_else(|| (en_title.clone(), en_overview.clone()));

        let mut tags: Vec<String> = raw.genres.iter().map(|genre| genre.name.clone()).collect();

        // Classification wants real text; without an overview, fall back to
        // the source's own adult flag. A classifier error does the same.
        let is_explicit = match &overview {
            Some(overview_text) => {
                match self.classifier.classify(&en_title, overview_text).await {
                    Ok(verdict) => verdict.is_explicit,
                    Err(e) => {
                        tracing::warn!(
                            movie_id = raw.id,
                            error = %e,
                            "Explicit-content classification failed; using source adult flag"
                        );
                        raw.adult
                    }
                }
            }
            None => raw.adult,
        };
        if is_explicit {
            tags.push("Explicit".to_string());
        }
        let tags = dedup_strings(tags);

        let director = raw
            .credits
            .as_ref()
            .and_then(|credits| credits.crew.iter().find(|member| member.job == "Director"))
            .map(|member| LocalizedText::same(&member.name));

        let actors: Vec<LocalizedText> = raw
            .credits
            .as_ref()
            .map(|credits| {
                credits
                    .cast
                    .iter()
                    .take(MAX_ACTORS)
                    .map(|member| LocalizedText::same(&member.name))
                    .collect()
            })
            .unwrap_or_default();

        let availability = raw
            .watch_providers
            .as_ref()
            .and_then(|providers| providers.results.get(region))
            .map(flatrate_options)
            .unwrap_or_default();

        let imdb_id = non_empty(raw.imdb_id.as_deref()).map(str::to_string);
        let imdb_rating = match (&self.rating, &imdb_id) {
            (Some(provider), Some(id)) => provider.fetch_rating(id).await,
            _ => None,
        };

        let countries = dedup_strings(
            raw.production_countries
                .iter()
                .map(|country| country.iso_3166_1.to_uppercase())
                .collect(),
        );

        let mut languages: Vec<String> = raw
            .spoken_languages
            .iter()
            .map(|language| language.iso_639_1.to_uppercase())
            .collect();
        if languages.is_empty() {
            if let Some(original) = non_empty(raw.original_language.as_deref()) {
                languages.push(original.to_uppercase());
            }
        }
        let languages = dedup_strings(languages);

        Some(Movie {
            id: raw.id.to_string(),
            title: LocalizedText {
                en: en_title,
                pt: pt_title,
            },
            poster_url: format!("{}{}", self.poster_base_url, poster_path),
            release_year,
            countries,
            languages,
            tags,
            director,
            actors,
            description: LocalizedText {
                en: en_overview,
                pt: pt_overview,
            },
            availability,
            imdb_rating,
            letterboxd_url: imdb_id
                .as_deref()
                .map(|id| format!("https://letterboxd.com/imdb/{}/", id)),
            tmdb_id: Some(raw.id),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Order-preserving dedup
fn dedup_strings(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Subscription listings for one region, deduplicated by platform name.
fn flatrate_options(listings: &RegionListings) -> Vec<WatchOption> {
    let mut options = Vec::new();
    for provider in listings.flatrate.as_deref().unwrap_or(&[]) {
        let Some(name) = non_empty(provider.provider_name.as_deref()) else {
            continue;
        };
        options.push(WatchOption {
            platform_name: name.to_string(),
            platform_key: platform_key(name).to_string(),
            watch_url: listings.link.clone(),
        });
    }
    dedupe_watch_options(options)
}

/// Keeps one entry per platform name, first position, last occurrence's
/// value.
fn dedupe_watch_options(options: Vec<WatchOption>) -> Vec<WatchOption> {
    let mut deduped: Vec<WatchOption> = Vec::with_capacity(options.len());
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for option in options {
        match index_by_name.get(&option.platform_name) {
            Some(&existing) => deduped[existing] = option,
            None => {
                index_by_name.insert(option.platform_name.clone(), deduped.len());
                deduped.push(option);
            }
        }
    }

    deduped
}
