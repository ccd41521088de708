use crate::models::{ThemeAnalysisResult, ThemeDiscoveryRequest};

/// System prompt shared by every completion request
pub const SYSTEM_PROMPT: &str = "You are a film expert and thoughtful guide who connects people \
with movies that speak to what they are going through. Always answer with a single JSON object \
and nothing else.";

/// How many movies each recommendation prompt asks for
pub const RECOMMENDATION_COUNT: usize = 8;

fn optional_line(label: &str, value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => format!("{}: {}\n", label, v),
        None => String::new(),
    }
}

pub fn theme_analysis(request: &ThemeDiscoveryRequest) -> String {
    let mut prompt = format!(
        "Analyze the themes behind this movie request.\n\nRequest: \"{}\"\n",
        request.query.trim()
    );
    prompt.push_str(&optional_line(
        "Emotional context",
        request.emotional_context.as_deref(),
    ));
    prompt.push_str(&optional_line("Life stage", request.life_stage.as_deref()));
    if !request.needs.is_empty() {
        prompt.push_str(&format!("Stated needs: {}\n", request.needs.join(", ")));
    }
    prompt.push_str(&optional_line(
        "Cultural background",
        request.cultural_background.as_deref(),
    ));

    prompt.push_str(
        r#"
Respond with JSON of this shape (all scores between 0 and 1):
{
  "primaryThemes": [{"theme": "", "category": "", "confidence": 0.0, "explanation": ""}],
  "secondaryThemes": [{"theme": "", "category": "", "confidence": 0.0, "explanation": ""}],
  "psychologicalNeeds": [{"need": "", "category": "", "intensity": 0.0, "therapeutic_value": 0.0}],
  "archetypalPatterns": [{"pattern": "", "relevance": 0.0, "stage": "", "description": ""}],
  "lifeStageAlignment": {"stage": "", "relevance": 0.0, "developmentalTasks": []},
  "culturalContext": {"background": "", "crossCulturalRelevance": 0.0, "culturalThemes": []},
  "thematicComplexity": "simple | moderate | complex | profound"
}
Use lower-case theme categories such as identity, relationships, growth, loss, existential, social, family, healing."#,
    );
    prompt
}

pub fn theme_recommendations(
    request: &ThemeDiscoveryRequest,
    analysis: &ThemeAnalysisResult,
) -> String {
    let themes: Vec<&str> = analysis.all_themes().map(|t| t.theme.as_str()).collect();
    let needs: Vec<&str> = analysis
        .psychological_needs
        .iter()
        .map(|n| n.need.as_str())
        .collect();
    let categories: Vec<&str> = analysis
        .psychological_needs
        .iter()
        .map(|n| n.category.as_str())
        .collect();

    format!(
        r#"Recommend {count} movies for this request: "{query}"

Identified themes: {themes}
Psychological needs: {needs}
Need categories: {categories}

Respond with JSON: {{"movies": [{{"title": "", "year": 0, "overview": "", "genres": [], "themes": [], "psychologicalElements": [], "therapeuticElements": [], "explanation": ""}}]}}
Tag "themes" only with names from the identified themes, "psychologicalElements" only with the psychological needs, and "therapeuticElements" only with the need categories. Copy them exactly."#,
        count = RECOMMENDATION_COUNT,
        query = request.query.trim(),
        themes = themes.join(", "),
        needs = needs.join(", "),
        categories = categories.join(", "),
    )
}

pub fn query_recommendations(query: &str) -> String {
    format!(
        r#"Recommend {count} movies for this request: "{query}"

Respond with JSON: {{"movies": [{{"title": "", "year": 0, "overview": "", "genres": []}}]}}"#,
        count = RECOMMENDATION_COUNT,
        query = query.trim(),
    )
}

pub fn mood_recommendations(mood: &str, language: &str) -> String {
    format!(
        r#"Recommend {count} movies for someone who is feeling {mood}. Prefer films originally in the language with code "{language}" when good options exist, and write the overviews in that language.

Respond with JSON: {{"movies": [{{"title": "", "year": 0, "overview": "", "genres": []}}]}}"#,
        count = RECOMMENDATION_COUNT,
        mood = mood,
        language = language,
    )
}
