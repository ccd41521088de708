use serde::{Deserialize, Serialize};

/// A movie as returned to the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// TMDB id, when the source knows it
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// A movie suggested by the language model, tagged for scoring
///
/// Each tag set may be missing from the model output; a missing set is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMovie {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub psychological_elements: Vec<String>,
    #[serde(default)]
    pub therapeutic_elements: Vec<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl CandidateMovie {
    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }

    pub fn has_psychological_element(&self, element: &str) -> bool {
        self.psychological_elements.iter().any(|e| e == element)
    }

    pub fn has_therapeutic_element(&self, element: &str) -> bool {
        self.therapeutic_elements.iter().any(|e| e == element)
    }
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Paged list response from TMDB
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl From<TmdbMovie> for Movie {
    fn from(movie: TmdbMovie) -> Self {
        // release_date is "YYYY-MM-DD", sometimes an empty string
        let year = movie
            .release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .and_then(|y| y.parse().ok());

        Movie {
            id: Some(movie.id),
            title: movie.title,
            year,
            overview: movie.overview.filter(|o| !o.is_empty()),
            genres: Vec::new(),
            poster_path: movie.poster_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_without_tags_deserializes() {
        let candidate: CandidateMovie =
            serde_json::from_str(r#"{"title": "Amélie", "year": 2001}"#).unwrap();

        assert_eq!(candidate.movie.title, "Amélie");
        assert_eq!(candidate.movie.year, Some(2001));
        assert!(candidate.themes.is_empty());
        assert!(candidate.psychological_elements.is_empty());
        assert!(candidate.therapeutic_elements.is_empty());
    }

    #[test]
    fn test_candidate_tags_deserialize_camel_case() {
        let candidate: CandidateMovie = serde_json::from_str(
            r#"{
                "title": "Good Will Hunting",
                "themes": ["identity"],
                "psychologicalElements": ["belonging"],
                "therapeuticElements": ["healing"],
                "explanation": "A guarded genius learns to trust."
            }"#,
        )
        .unwrap();

        assert!(candidate.has_theme("identity"));
        assert!(!candidate.has_theme("Identity"));
        assert!(candidate.has_psychological_element("belonging"));
        assert!(candidate.has_therapeutic_element("healing"));
    }

    #[test]
    fn test_tmdb_movie_to_movie() {
        let tmdb = TmdbMovie {
            id: 27205,
            title: "Inception".to_string(),
            overview: Some("A thief who steals corporate secrets".to_string()),
            release_date: Some("2010-07-15".to_string()),
            poster_path: Some("/poster.jpg".to_string()),
        };

        let movie: Movie = tmdb.into();
        assert_eq!(movie.id, Some(27205));
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, Some(2010));
    }

    #[test]
    fn test_tmdb_movie_with_empty_release_date() {
        let tmdb = TmdbMovie {
            id: 1,
            title: "Untitled".to_string(),
            overview: Some(String::new()),
            release_date: Some(String::new()),
            poster_path: None,
        };

        let movie: Movie = tmdb.into();
        assert_eq!(movie.year, None);
        assert_eq!(movie.overview, None);
    }
}
