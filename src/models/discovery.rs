use serde::{Deserialize, Serialize};

use super::{Movie, ThemeAnalysisResult};

/// Theme discovery request from the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDiscoveryRequest {
    pub query: String,
    #[serde(default)]
    pub emotional_context: Option<String>,
    #[serde(default)]
    pub life_stage: Option<String>,
    #[serde(default)]
    pub needs: Vec<String>,
    #[serde(default)]
    pub cultural_background: Option<String>,
}

/// A scored candidate with the reasons it was picked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeBasedRecommendation {
    pub movie: Movie,
    pub theme_alignment: f64,
    pub matched_themes: Vec<String>,
    pub psychological_relevance: f64,
    pub therapeutic_value: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeJourney {
    pub current_phase: String,
    pub suggested_progression: Vec<String>,
    pub alternative_explorations: Vec<String>,
    /// Distinct, in first-seen order
    pub complementary_themes: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Psychological,
    Cultural,
    Archetypal,
    Therapeutic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeInsight {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub insight: String,
    pub relevance: f64,
    pub actionable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDiscoveryResponse {
    pub theme_analysis: ThemeAnalysisResult,
    pub recommended_movies: Vec<ThemeBasedRecommendation>,
    pub theme_journey: ThemeJourney,
    pub insights: Vec<ThemeInsight>,
}

/// Free-text recommendation request
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_minimal_body() {
        let request: ThemeDiscoveryRequest =
            serde_json::from_str(r#"{"query": "films about starting over"}"#).unwrap();
        assert_eq!(request.query, "films about starting over");
        assert!(request.needs.is_empty());
        assert_eq!(request.life_stage, None);
    }

    #[test]
    fn test_insight_type_serialization() {
        let insight = ThemeInsight {
            insight_type: InsightType::Archetypal,
            insight: "The hero's journey".to_string(),
            relevance: 0.8,
            actionable: true,
        };
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["type"], "archetypal");
        assert_eq!(json["actionable"], true);
    }
}
