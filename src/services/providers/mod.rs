//! External metadata source abstractions.
//!
//! Each upstream API sits behind a small trait so the aggregation pipeline
//! can be exercised against mocks. The catalog source is authoritative and
//! surfaces errors; the rating source is best-effort enrichment and is total
//! by contract.

use crate::{error::AppResult, models::TmdbMovie};

pub mod omdb;
pub mod tmdb;

pub use omdb::OmdbProvider;
pub use tmdb::TmdbProvider;

/// Primary catalog source
///
/// One fetch per movie id returns the raw, un-normalized payload including
/// nested credits, translations, and regional watch providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_movie(&self, id: u64) -> AppResult<TmdbMovie>;
}

/// Secondary rating source
///
/// Strictly best-effort: transport failures, "not found" responses, and
/// unusable values all come back as `None`. Implementations log the reason
/// and never propagate an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RatingProvider: Send + Sync {
    async fn fetch_rating(&self, imdb_id: &str) -> Option<f32>;
}
