//! External collaborators
//!
//! The language model and the movie database sit behind these traits so the
//! orchestration can be exercised with mocks. Each trait has one HTTP-backed
//! implementation in this module.

use crate::{
    error::AppResult,
    models::{CandidateMovie, Movie, ThemeDiscoveryRequest, ThemeAnalysisResult},
};

pub mod llm;
pub mod prompts;
pub mod tmdb;

pub use llm::LlmClient;
pub use tmdb::TmdbClient;

/// Produces a theme analysis for a discovery request
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ThemeAnalyzer: Send + Sync {
    async fn analyze_themes(
        &self,
        request: &ThemeDiscoveryRequest,
    ) -> AppResult<ThemeAnalysisResult>;
}

/// Suggests movies, optionally tagged for theme scoring
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieRecommender: Send + Sync {
    /// Candidates for a theme discovery request
    ///
    /// Implementations should tag each candidate with the analysis' own theme
    /// names, need names and need categories so scoring can match them.
    async fn recommend_for_themes(
        &self,
        request: &ThemeDiscoveryRequest,
        analysis: &ThemeAnalysisResult,
    ) -> AppResult<Vec<CandidateMovie>>;

    async fn recommend_for_query(&self, query: &str) -> AppResult<Vec<Movie>>;

    async fn recommend_for_mood(&self, mood: &str, language: &str) -> AppResult<Vec<Movie>>;
}

/// Movie metadata source
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieDatabase: Send + Sync {
    async fn similar_movies(&self, movie_id: u64) -> AppResult<Vec<Movie>>;
}
