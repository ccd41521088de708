use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A theme the analysis found in the user's query
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdentifiedTheme {
    pub theme: String,
    pub category: String,
    /// 0.0 - 1.0
    pub confidence: f64,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PsychologicalNeed {
    pub need: String,
    pub category: String,
    /// 0.0 - 1.0
    pub intensity: f64,
    /// 0.0 - 1.0
    #[serde(rename = "therapeutic_value")]
    pub therapeutic_value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypalPattern {
    pub pattern: String,
    /// 0.0 - 1.0
    pub relevance: f64,
    pub stage: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LifeStageAlignment {
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub relevance: f64,
    #[serde(default)]
    pub developmental_tasks: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CulturalContext {
    #[serde(default)]
    pub background: String,
    /// 0.0 - 1.0
    #[serde(default)]
    pub cross_cultural_relevance: f64,
    #[serde(default)]
    pub cultural_themes: Vec<String>,
}

/// Qualitative depth of the analysed query
///
/// Parsed leniently: labels are case-insensitive and anything unrecognised
/// reads as `Moderate`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ThematicComplexity {
    Simple,
    #[default]
    Moderate,
    Complex,
    Profound,
}

impl From<String> for ThematicComplexity {
    fn from(label: String) -> Self {
        match label.trim().to_lowercase().as_str() {
            "simple" => ThematicComplexity::Simple,
            "complex" => ThematicComplexity::Complex,
            "profound" => ThematicComplexity::Profound,
            _ => ThematicComplexity::Moderate,
        }
    }
}

impl Display for ThematicComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThematicComplexity::Simple => "simple",
            ThematicComplexity::Moderate => "moderate",
            ThematicComplexity::Complex => "complex",
            ThematicComplexity::Profound => "profound",
        };
        write!(f, "{}", label)
    }
}

/// Snapshot produced by the theme analyzer for one request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeAnalysisResult {
    #[serde(default)]
    pub primary_themes: Vec<IdentifiedTheme>,
    #[serde(default)]
    pub secondary_themes: Vec<IdentifiedTheme>,
    #[serde(default)]
    pub psychological_needs: Vec<PsychologicalNeed>,
    #[serde(default)]
    pub archetypal_patterns: Vec<ArchetypalPattern>,
    #[serde(default)]
    pub life_stage_alignment: LifeStageAlignment,
    #[serde(default)]
    pub cultural_context: CulturalContext,
    #[serde(default)]
    pub thematic_complexity: ThematicComplexity,
}

impl ThemeAnalysisResult {
    pub fn primary_theme(&self) -> Option<&IdentifiedTheme> {
        self.primary_themes.first()
    }

    /// Primary themes first, then secondary
    pub fn all_themes(&self) -> impl Iterator<Item = &IdentifiedTheme> {
        self.primary_themes.iter().chain(self.secondary_themes.iter())
    }
}
