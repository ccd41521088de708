//! Hosted language model provider
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint in JSON mode.
//! Every call sends one system and one user message and parses the first
//! choice's content into the expected shape.

use reqwest::Client as HttpClient;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::json;

use super::{prompts, MovieRecommender, ThemeAnalyzer};
use crate::{
    error::{AppError, AppResult},
    models::{CandidateMovie, Movie, ThemeAnalysisResult, ThemeDiscoveryRequest},
};

const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// JSON mode only allows objects at the top level
#[derive(Debug, Deserialize)]
struct MovieList<T> {
    #[serde(default = "Vec::new")]
    movies: Vec<T>,
}

#[derive(Clone)]
pub struct LlmClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }

    async fn complete_json<T: DeserializeOwned>(&self, user_prompt: String) -> AppResult<T> {
        let url = format!("{}/chat/completions", self.api_url.trim_end_matches('/'));

        let body = json!({
            "model": self.model,
            "temperature": TEMPERATURE,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": prompts::SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt },
            ],
        });

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "Language model request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "Language model returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        parse_completion(completion)
    }
}

/// Strips a Markdown code fence some models wrap JSON in
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn parse_completion<T: DeserializeOwned>(completion: ChatCompletionResponse) -> AppResult<T> {
    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::ExternalApi("Language model returned no content".to_string()))?;

    serde_json::from_str(strip_code_fence(&content)).map_err(|e| {
        tracing::warn!(error = %e, "Language model returned malformed JSON");
        AppError::ExternalApi(format!("Invalid language model response: {}", e))
    })
}

#[async_trait::async_trait]
impl ThemeAnalyzer for LlmClient {
    async fn analyze_themes(
        &self,
        request: &ThemeDiscoveryRequest,
    ) -> AppResult<ThemeAnalysisResult> {
        let analysis: ThemeAnalysisResult =
            self.complete_json(prompts::theme_analysis(request)).await?;

        tracing::info!(
            primary_themes = analysis.primary_themes.len(),
            needs = analysis.psychological_needs.len(),
            complexity = %analysis.thematic_complexity,
            "Theme analysis completed"
        );

        Ok(analysis)
    }
}

#[async_trait::async_trait]
impl MovieRecommender for LlmClient {
    async fn recommend_for_themes(
        &self,
        request: &ThemeDiscoveryRequest,
        analysis: &ThemeAnalysisResult,
    ) -> AppResult<Vec<CandidateMovie>> {
        let list: MovieList<CandidateMovie> = self
            .complete_json(prompts::theme_recommendations(request, analysis))
            .await?;
        Ok(list.movies)
    }

    async fn recommend_for_query(&self, query: &str) -> AppResult<Vec<Movie>> {
        let list: MovieList<Movie> = self
            .complete_json(prompts::query_recommendations(query))
            .await?;
        Ok(list.movies)
    }

    async fn recommend_for_mood(&self, mood: &str, language: &str) -> AppResult<Vec<Movie>> {
        let list: MovieList<Movie> = self
            .complete_json(prompts::mood_recommendations(mood, language))
            .await?;
        Ok(list.movies)
    }
}
