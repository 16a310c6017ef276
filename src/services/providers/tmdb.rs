//! TMDB catalog client.
//!
//! Fetches full movie details in a single call by appending the nested
//! credits, translations, and watch-provider blocks to the details request.
//! The payload is returned as-is; normalization belongs to the aggregation
//! pipeline.

use crate::{
    error::{AppError, AppResult},
    models::TmdbMovie,
    services::providers::CatalogProvider,
};
use reqwest::Client as HttpClient;

pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn fetch_movie(&self, id: u64) -> AppResult<TmdbMovie> {
        let url = format!("{}/movie/{}", self.api_url, id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
                ("append_to_response", "credits,translations,watch/providers"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {} for movie {}: {}",
                status, id, body
            )));
        }

        let movie: TmdbMovie = response.json().await?;

        tracing::debug!(
            movie_id = id,
            title = movie.title.as_deref().unwrap_or("<untitled>"),
            "Fetched catalog entry"
        );

        Ok(movie)
    }
}
