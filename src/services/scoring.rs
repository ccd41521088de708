use crate::models::{CandidateMovie, ThemeAnalysisResult, ThemeBasedRecommendation};

/// Score given when the analysis has nothing to compare against
const NEUTRAL_SCORE: f64 = 0.5;

/// Mean confidence of the primary themes the candidate carries
///
/// Themes the candidate lacks count as zero. Neutral when there are no
/// primary themes.
pub fn theme_alignment(analysis: &ThemeAnalysisResult, candidate: &CandidateMovie) -> f64 {
    let themes = &analysis.primary_themes;
    if themes.is_empty() {
        return NEUTRAL_SCORE;
    }

    let total: f64 = themes
        .iter()
        .filter(|t| candidate.has_theme(&t.theme))
        .map(|t| t.confidence)
        .sum();

    (total / themes.len() as f64).clamp(0.0, 1.0)
}

/// Primary then secondary theme names found in the candidate's tags
pub fn matched_themes(analysis: &ThemeAnalysisResult, candidate: &CandidateMovie) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();
    for theme in analysis.all_themes() {
        if candidate.has_theme(&theme.theme) && !matched.contains(&theme.theme) {
            matched.push(theme.theme.clone());
        }
    }
    matched
}

/// Mean intensity of the psychological needs the candidate addresses
pub fn psychological_relevance(analysis: &ThemeAnalysisResult, candidate: &CandidateMovie) -> f64 {
    let needs = &analysis.psychological_needs;
    if needs.is_empty() {
        return NEUTRAL_SCORE;
    }

    let total: f64 = needs
        .iter()
        .filter(|n| candidate.has_psychological_element(&n.need))
        .map(|n| n.intensity)
        .sum();

    (total / needs.len() as f64).clamp(0.0, 1.0)
}

/// Saturating sum of therapeutic value over needs whose category the candidate targets
pub fn therapeutic_value(analysis: &ThemeAnalysisResult, candidate: &CandidateMovie) -> f64 {
    let total: f64 = analysis
        .psychological_needs
        .iter()
        .filter(|n| candidate.has_therapeutic_element(&n.category))
        .map(|n| n.therapeutic_value)
        .sum();

    total.clamp(0.0, 1.0)
}

fn explanation_for(candidate: &CandidateMovie, matched: &[String]) -> String {
    if let Some(explanation) = candidate
        .explanation
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
    {
        return explanation.to_string();
    }

    if matched.is_empty() {
        format!(
            "{} offers a different angle on what you are exploring.",
            candidate.movie.title
        )
    } else {
        format!(
            "{} explores {}.",
            candidate.movie.title,
            matched.join(", ")
        )
    }
}

/// Scores one candidate against the analysis
pub fn score_candidate(
    analysis: &ThemeAnalysisResult,
    candidate: &CandidateMovie,
) -> ThemeBasedRecommendation {
    let matched = matched_themes(analysis, candidate);
    let explanation = explanation_for(candidate, &matched);

    ThemeBasedRecommendation {
        movie: candidate.movie.clone(),
        theme_alignment: theme_alignment(analysis, candidate),
        psychological_relevance: psychological_relevance(analysis, candidate),
        therapeutic_value: therapeutic_value(analysis, candidate),
        matched_themes: matched,
        explanation,
    }
}

/// Scores every candidate, keeping the order the recommender returned them in
pub fn score_candidates(
    analysis: &ThemeAnalysisResult,
    candidates: &[CandidateMovie],
) -> Vec<ThemeBasedRecommendation> {
    candidates
        .iter()
        .map(|candidate| score_candidate(analysis, candidate))
        .collect()
}
