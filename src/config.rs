use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key; without it the catalog pipeline is disabled
    pub tmdb_api_key: Option<String>,

    /// OMDb API key; without it IMDb rating enrichment is disabled
    pub omdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Base URL prepended to TMDB poster paths
    #[serde(default = "default_poster_base_url")]
    pub poster_base_url: String,

    /// Region used for watch-provider availability when none is requested
    #[serde(default = "default_region")]
    pub default_region: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_poster_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_region() -> String {
    "BR".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// TMDB key, treating a blank value the same as an unset one
    pub fn tmdb_key(&self) -> Option<&str> {
        self.tmdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// OMDb key, treating a blank value the same as an unset one
    pub fn omdb_key(&self) -> Option<&str> {
        self.omdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> Config {
        Config {
            tmdb_api_key: None,
            omdb_api_key: None,
            tmdb_api_url: default_tmdb_api_url(),
            omdb_api_url: default_omdb_api_url(),
            poster_base_url: default_poster_base_url(),
            default_region: default_region(),
            host: default_host(),
            port: default_port(),
        }
    }

    #[test]
    fn test_blank_keys_count_as_missing() {
        let mut config = bare_config();
        config.tmdb_api_key = Some("   ".to_string());
        config.omdb_api_key = Some(String::new());
        assert_eq!(config.tmdb_key(), None);
        assert_eq!(config.omdb_key(), None);
    }

    #[test]
    fn test_keys_are_trimmed() {
        let mut config = bare_config();
        config.tmdb_api_key = Some(" abc123 \n".to_string());
        assert_eq!(config.tmdb_key(), Some("abc123"));
    }
}
