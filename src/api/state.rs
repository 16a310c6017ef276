use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::Movie;
use crate::services::Aggregator;

/// Shared application state
///
/// Owns the aggregation pipeline plus a single in-memory snapshot of its
/// last successful run. The snapshot is keyed by region: asking for a
/// different region invalidates it and re-runs the pipeline. The pipeline
/// itself stays stateless; all caching lives here, in the serving layer.
#[derive(Clone)]
pub struct AppState {
    aggregator: Arc<Aggregator>,
    catalog: Arc<RwLock<Option<CatalogSnapshot>>>,
    movie_ids: Arc<Vec<u64>>,
    pub default_region: String,
}

/// The last aggregated batch, with the region it was fetched for
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub region: String,
    pub movies: Vec<Movie>,
    pub refreshed_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(aggregator: Arc<Aggregator>, movie_ids: Vec<u64>, default_region: String) -> Self {
        Self {
            aggregator,
            catalog: Arc::new(RwLock::new(None)),
            movie_ids: Arc::new(movie_ids),
            default_region,
        }
    }

    /// Returns the cached snapshot when it matches `region`, otherwise runs
    /// the pipeline and replaces the cache.
    pub async fn catalog_for(&self, region: &str) -> CatalogSnapshot {
        {
            let cached = self.catalog.read().await;
            if let Some(snapshot) = cached.as_ref() {
                if snapshot.region == region {
                    tracing::debug!(region = %region, "Serving catalog from cache");
                    return snapshot.clone();
                }
            }
        }
        self.refresh(region).await
    }

    /// Re-runs the pipeline for `region` and replaces the cached snapshot.
    pub async fn refresh(&self, region: &str) -> CatalogSnapshot {
        let movies = self.aggregator.run(&self.movie_ids, region).await;
        let snapshot = CatalogSnapshot {
            region: region.to_string(),
            movies,
            refreshed_at: Utc::now(),
        };
        *self.catalog.write().await = Some(snapshot.clone());
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TmdbMovie;
    use crate::services::providers::{CatalogProvider, MockCatalogProvider};
    use crate::services::StubClassifier;

    fn raw_movie(id: u64) -> TmdbMovie {
        TmdbMovie {
            id,
            title: Some("Cached".to_string()),
            overview: Some("A synopsis.".to_string()),
            poster_path: Some("/poster.jpg".to_string()),
            release_date: Some("2020-01-01".to_string()),
            adult: false,
            imdb_id: None,
            original_language: None,
            genres: vec![],
            production_countries: vec![],
            spoken_languages: vec![],
            credits: None,
            translations: None,
            watch_providers: None,
        }
    }

    fn state_with_catalog(catalog: MockCatalogProvider) -> AppState {
        let aggregator = Aggregator::new(
            Some(Arc::new(catalog) as Arc<dyn CatalogProvider>),
            None,
            Arc::new(StubClassifier),
            "https://image.tmdb.org/t/p/w500",
        );
        AppState::new(Arc::new(aggregator), vec![1], "BR".to_string())
    }

    #[tokio::test]
    async fn test_same_region_is_served_from_cache() {
        let mut catalog = MockCatalogProvider::new();
        // Exactly one pipeline run for two requests
        catalog
            .expect_fetch_movie()
            .times(1)
            .returning(|id| Ok(raw_movie(id)));

        let state = state_with_catalog(catalog);
        let first = state.catalog_for("US").await;
        let second = state.catalog_for("US").await;
        assert_eq!(first.movies, second.movies);
        assert_eq!(second.region, "US");
    }

    #[tokio::test]
    async fn test_region_change_invalidates_cache() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_fetch_movie()
            .times(2)
            .returning(|id| Ok(raw_movie(id)));

        let state = state_with_catalog(catalog);
        let first = state.catalog_for("US").await;
        let second = state.catalog_for("BR").await;
        assert_eq!(first.region, "US");
        assert_eq!(second.region, "BR");
    }

    #[tokio::test]
    async fn test_refresh_always_reruns_the_pipeline() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_fetch_movie()
            .times(2)
            .returning(|id| Ok(raw_movie(id)));

        let state = state_with_catalog(catalog);
        state.catalog_for("US").await;
        let refreshed = state.refresh("US").await;
        assert_eq!(refreshed.region, "US");
        assert_eq!(refreshed.movies.len(), 1);
    }
}
