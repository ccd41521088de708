use std::sync::Arc;

use crate::{
    cache::{CacheKey, MovieCache},
    cached,
    error::{AppError, AppResult},
    models::Movie,
    services::providers::{MovieDatabase, MovieRecommender},
};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Cached recommendation lookups
///
/// Free-text queries and moods go to the language model, similar movies to
/// the movie database. Each result is cached under its own namespace and TTL.
/// Provider errors are returned as-is and never cached.
pub struct RecommendationService {
    recommender: Arc<dyn MovieRecommender>,
    database: Arc<dyn MovieDatabase>,
    cache: Arc<MovieCache>,
}

impl RecommendationService {
    pub fn new(
        recommender: Arc<dyn MovieRecommender>,
        database: Arc<dyn MovieDatabase>,
        cache: Arc<MovieCache>,
    ) -> Self {
        Self {
            recommender,
            database,
            cache,
        }
    }

    pub async fn recommend(&self, query: &str) -> AppResult<Vec<Movie>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Query cannot be empty".to_string(),
            ));
        }

        cached!(self.cache, CacheKey::recommendations(query), async move {
            let movies = self.recommender.recommend_for_query(query).await?;
            tracing::info!(
                query = %query,
                result_count = movies.len(),
                "Generated recommendations"
            );
            Ok::<_, AppError>(movies)
        })
    }

    /// Language falls back to English when missing or blank
    pub async fn recommend_for_mood(
        &self,
        mood: &str,
        language: Option<&str>,
    ) -> AppResult<Vec<Movie>> {
        let mood = mood.trim().to_lowercase();
        if mood.is_empty() {
            return Err(AppError::InvalidInput("Mood cannot be empty".to_string()));
        }
        let language = language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_lowercase();

        cached!(self.cache, CacheKey::mood(&mood, &language), async {
            self.recommender.recommend_for_mood(&mood, &language).await
        })
    }

    pub async fn similar_movies(&self, movie_id: u64) -> AppResult<Vec<Movie>> {
        cached!(self.cache, CacheKey::similar(movie_id), async move {
            self.database.similar_movies(movie_id).await
        })
    }
}
