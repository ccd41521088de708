use std::sync::Arc;
use std::time::Instant;

use crate::{
    cache::{CacheKey, MovieCache},
    error::{AppError, AppResult},
    models::{ThemeDiscoveryRequest, ThemeDiscoveryResponse},
    services::{
        insights::generate_insights,
        journey::{derive_journey, JourneyCatalog},
        providers::{MovieRecommender, ThemeAnalyzer},
        scoring::score_candidates,
    },
};

/// Runs a theme discovery request end to end
///
/// 1. Theme analysis (fatal on failure)
/// 2. Candidate generation (degrades to an empty list on failure)
/// 3. Scoring, journey and insights over the analysis
///
/// When a cache is attached, complete responses are read and written through it.
pub struct ThemeDiscoveryService {
    analyzer: Arc<dyn ThemeAnalyzer>,
    recommender: Arc<dyn MovieRecommender>,
    cache: Option<Arc<MovieCache>>,
    catalog: JourneyCatalog,
}

impl ThemeDiscoveryService {
    pub fn new(analyzer: Arc<dyn ThemeAnalyzer>, recommender: Arc<dyn MovieRecommender>) -> Self {
        Self {
            analyzer,
            recommender,
            cache: None,
            catalog: JourneyCatalog::default(),
        }
    }

    pub fn with_cache(mut self, cache: Arc<MovieCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_catalog(mut self, catalog: JourneyCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub async fn discover(
        &self,
        request: ThemeDiscoveryRequest,
    ) -> AppResult<ThemeDiscoveryResponse> {
        if request.query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Query cannot be empty".to_string(),
            ));
        }

        let start = Instant::now();
        let cache_key = CacheKey::theme_discovery(&request);

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get::<ThemeDiscoveryResponse>(&cache_key) {
                tracing::debug!(key = %cache_key, "Theme discovery cache hit");
                return Ok(cached);
            }
        }

        let analysis = self.analyzer.analyze_themes(&request).await.map_err(|e| {
            tracing::error!(error = %e, "Theme analysis failed");
            AppError::AnalysisFailed(e.to_string())
        })?;

        let (candidates, recommendations_ok) =
            match self.recommender.recommend_for_themes(&request, &analysis).await {
                Ok(candidates) => (candidates, true),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Recommendation generation failed, returning analysis only"
                    );
                    (Vec::new(), false)
                }
            };

        let response = ThemeDiscoveryResponse {
            recommended_movies: score_candidates(&analysis, &candidates),
            theme_journey: derive_journey(&self.catalog, &analysis),
            insights: generate_insights(&analysis),
            theme_analysis: analysis,
        };

        tracing::info!(
            recommendations = response.recommended_movies.len(),
            insights = response.insights.len(),
            phase = %response.theme_journey.current_phase,
            duration_ms = start.elapsed().as_millis() as u64,
            "Theme discovery completed"
        );

        // A degraded response should not hide a recovered upstream for a whole TTL
        if recommendations_ok {
            if let Some(cache) = &self.cache {
                cache.set(&cache_key, &response);
            }
        }

        Ok(response)
    }
}
