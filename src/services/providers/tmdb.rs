use reqwest::{Client as HttpClient, StatusCode};

use super::MovieDatabase;
use crate::{
    error::{AppError, AppResult},
    models::{Movie, TmdbPage},
};

/// TMDB movie database client
#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    fn similar_url(&self, movie_id: u64) -> String {
        format!(
            "{}/movie/{}/similar",
            self.api_url.trim_end_matches('/'),
            movie_id
        )
    }
}

#[async_trait::async_trait]
impl MovieDatabase for TmdbClient {
    async fn similar_movies(&self, movie_id: u64) -> AppResult<Vec<Movie>> {
        let response = self
            .http_client
            .get(self.similar_url(movie_id))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
                ("page", "1"),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Movie {} not found", movie_id)));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                movie_id = movie_id,
                status = %status,
                body = %body,
                "TMDB request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }

        let page: TmdbPage = response.json().await?;
        let movies: Vec<Movie> = page.results.into_iter().map(Movie::from).collect();

        tracing::info!(
            movie_id = movie_id,
            result_count = movies.len(),
            "Fetched similar movies from TMDB"
        );

        Ok(movies)
    }
}
