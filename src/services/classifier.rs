//! Explicit-content classification.
//!
//! The pipeline asks a classifier whether a movie's title and synopsis read
//! as explicit (18+). The shipped implementation is a stub that always says
//! no; the trait is the seam where a policy-governed text classifier plugs
//! in later. Callers are expected to treat a classifier error as "fall back
//! to the source's adult flag", never as a reason to drop the movie.

use crate::error::AppResult;

/// Classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_explicit: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContentClassifier: Send + Sync {
    /// Judges whether the given title and description are explicit content.
    async fn classify(&self, title: &str, description: &str) -> AppResult<Verdict>;
}

/// Placeholder classifier that flags nothing.
pub struct StubClassifier;

#[async_trait::async_trait]
impl ContentClassifier for StubClassifier {
    async fn classify(&self, title: &str, _description: &str) -> AppResult<Verdict> {
        tracing::debug!(title = %title, "Content classifier is stubbed, returning not explicit");
        Ok(Verdict { is_explicit: false })
    }
}
