use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    cache::CacheStats,
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Movie, RecommendationRequest, ThemeDiscoveryRequest, ThemeDiscoveryResponse},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct MoodQuery {
    pub language: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Full theme discovery: analysis, scored movies, journey and insights
pub async fn discover_themes(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ThemeDiscoveryRequest>,
) -> AppResult<Json<ThemeDiscoveryResponse>> {
    tracing::info!(
        request_id = %request_id,
        needs = request.needs.len(),
        "Processing theme discovery request"
    );

    let response = state.discovery.discover(request).await?;
    Ok(Json(response))
}

/// Free-text movie recommendations
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.recommendations.recommend(&request.query).await?;
    Ok(Json(movies))
}

/// Recommendations for a mood, optionally in a given language
pub async fn mood_recommendations(
    State(state): State<AppState>,
    Path(mood): Path<String>,
    Query(params): Query<MoodQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state
        .recommendations
        .recommend_for_mood(&mood, params.language.as_deref())
        .await?;
    Ok(Json(movies))
}

pub async fn similar_movies(
    State(state): State<AppState>,
    Path(movie_id): Path<u64>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.recommendations.similar_movies(movie_id).await?;
    Ok(Json(movies))
}

pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

pub async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.cache.clear();
    StatusCode::NO_CONTENT
}
