//! OMDb rating client.
//!
//! Looks up a single IMDb rating by cross-reference id. The lookup is pure
//! enrichment: every failure mode degrades to `None` so a flaky or
//! unconfigured ratings source never costs a catalog entry.

use crate::{
    error::AppResult,
    models::OmdbRating,
    services::providers::RatingProvider,
};
use reqwest::Client as HttpClient;

pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    async fn request_rating(&self, imdb_id: &str) -> AppResult<Option<f32>> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("i", imdb_id), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(
                imdb_id = %imdb_id,
                status = %response.status(),
                "OMDb request failed"
            );
            return Ok(None);
        }

        let payload: OmdbRating = response.json().await?;

        if let Some(error) = &payload.error {
            tracing::debug!(imdb_id = %imdb_id, error = %error, "OMDb reported an error");
        }

        Ok(payload.rating())
    }
}

#[async_trait::async_trait]
impl RatingProvider for OmdbProvider {
    async fn fetch_rating(&self, imdb_id: &str) -> Option<f32> {
        match self.request_rating(imdb_id).await {
            Ok(rating) => rating,
            Err(e) => {
                tracing::warn!(imdb_id = %imdb_id, error = %e, "IMDb rating lookup failed");
                None
            }
        }
    }
}
