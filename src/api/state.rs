use std::sync::Arc;

use crate::{
    cache::MovieCache,
    config::Config,
    services::{
        providers::{LlmClient, MovieDatabase, MovieRecommender, ThemeAnalyzer, TmdbClient},
        RecommendationService, ThemeDiscoveryService,
    },
};

/// Shared application state
///
/// The cache is created once here and handed to every service that uses it.
#[derive(Clone)]
pub struct AppState {
    pub discovery: Arc<ThemeDiscoveryService>,
    pub recommendations: Arc<RecommendationService>,
    pub cache: Arc<MovieCache>,
}

impl AppState {
    /// Wires services from explicit collaborators
    pub fn new(
        analyzer: Arc<dyn ThemeAnalyzer>,
        recommender: Arc<dyn MovieRecommender>,
        database: Arc<dyn MovieDatabase>,
        cache: Arc<MovieCache>,
    ) -> Self {
        let discovery = ThemeDiscoveryService::new(analyzer, recommender.clone())
            .with_cache(cache.clone());
        let recommendations = RecommendationService::new(recommender, database, cache.clone());

        Self {
            discovery: Arc::new(discovery),
            recommendations: Arc::new(recommendations),
            cache,
        }
    }

    /// Builds the production state with HTTP-backed providers
    pub fn from_config(config: &Config) -> Self {
        let llm = Arc::new(LlmClient::new(
            config.llm_api_key.clone(),
            config.llm_api_url.clone(),
            config.llm_model.clone(),
        ));
        let tmdb = Arc::new(TmdbClient::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
        ));
        let cache = Arc::new(MovieCache::new(config.cache_config()));

        Self::new(llm.clone(), llm, tmdb, cache)
    }
}
