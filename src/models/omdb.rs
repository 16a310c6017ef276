//! Raw OMDb lookup response for `GET /?i={imdb_id}`.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbRating {
    /// "True" when the lookup succeeded, "False" otherwise
    #[serde(rename = "Response", default)]
    pub response: String,

    /// Rating as a string, possibly "N/A"
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,

    /// Populated when `Response` is "False"
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbRating {
    /// Extracts a usable numeric rating, if the response carries one.
    ///
    /// "False" responses, "N/A" placeholders, and non-numeric values all
    /// yield `None`.
    pub fn rating(&self) -> Option<f32> {
        if self.response != "True" {
            return None;
        }
        let raw = self.imdb_rating.as_deref()?;
        if raw == "N/A" {
            return None;
        }
        raw.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_from_successful_response() {
        let payload: OmdbRating =
            serde_json::from_str(r#"{"Response": "True", "imdbRating": "7.2"}"#).unwrap();
        assert_eq!(payload.rating(), Some(7.2));
    }

    #[test]
    fn test_not_found_response_has_no_rating() {
        let payload: OmdbRating =
            serde_json::from_str(r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#)
                .unwrap();
        assert_eq!(payload.rating(), None);
        assert_eq!(payload.error.as_deref(), Some("Incorrect IMDb ID."));
    }

    #[test]
    fn test_na_placeholder_has_no_rating() {
        let payload: OmdbRating =
            serde_json::from_str(r#"{"Response": "True", "imdbRating": "N/A"}"#).unwrap();
        assert_eq!(payload.rating(), None);
    }

    #[test]
    fn test_non_numeric_rating_is_discarded() {
        let payload: OmdbRating =
            serde_json::from_str(r#"{"Response": "True", "imdbRating": "seven"}"#).unwrap();
        assert_eq!(payload.rating(), None);
    }

    #[test]
    fn test_missing_rating_field() {
        let payload: OmdbRating = serde_json::from_str(r#"{"Response": "True"}"#).unwrap();
        assert_eq!(payload.rating(), None);
    }
}
