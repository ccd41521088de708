use crate::models::{InsightType, ThemeAnalysisResult, ThemeInsight};

/// Cross-cultural relevance above which a cultural insight is worth showing
pub const CULTURAL_RELEVANCE_THRESHOLD: f64 = 0.7;

/// Builds the short insight list shown next to the recommendations
///
/// At most one psychological, archetypal and cultural insight each, ordered
/// by relevance (ties keep that order). Therapeutic insights are not produced
/// here.
pub fn generate_insights(analysis: &ThemeAnalysisResult) -> Vec<ThemeInsight> {
    let mut insights = Vec::new();

    if let Some(need) = analysis.psychological_needs.first() {
        insights.push(ThemeInsight {
            insight_type: InsightType::Psychological,
            insight: format!(
                "Your search suggests a need for {}. Films that speak to {} may resonate most right now.",
                need.need, need.category
            ),
            relevance: need.intensity,
            actionable: true,
        });
    }

    if let Some(pattern) = analysis.archetypal_patterns.first() {
        insights.push(ThemeInsight {
            insight_type: InsightType::Archetypal,
            insight: format!(
                "You are drawn to the {} pattern, at the {} stage. Stories following this arc can mirror your own path.",
                pattern.pattern, pattern.stage
            ),
            relevance: pattern.relevance,
            actionable: true,
        });
    }

    let cultural = &analysis.cultural_context;
    if cultural.cross_cultural_relevance > CULTURAL_RELEVANCE_THRESHOLD {
        insights.push(ThemeInsight {
            insight_type: InsightType::Cultural,
            insight: "These themes travel well across cultures. Consider films from other \
                      countries and traditions."
                .to_string(),
            relevance: cultural.cross_cultural_relevance,
            actionable: true,
        });
    }

    insights.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArchetypalPattern, CulturalContext, PsychologicalNeed};

    fn need(name: &str, intensity: f64) -> PsychologicalNeed {
        PsychologicalNeed {
            need: name.to_string(),
            category: name.to_string(),
            intensity,
            therapeutic_value: 0.5,
        }
    }

    fn pattern(name: &str, relevance: f64) -> ArchetypalPattern {
        ArchetypalPattern {
            pattern: name.to_string(),
            relevance,
            stage: "call to adventure".to_string(),
            description: String::new(),
        }
    }

    fn cultural(relevance: f64) -> CulturalContext {
        CulturalContext {
            cross_cultural_relevance: relevance,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_analysis_yields_no_insights() {
        assert!(generate_insights(&ThemeAnalysisResult::default()).is_empty());
    }

    #[test]
    fn test_psychological_insight_uses_first_need() {
        let analysis = ThemeAnalysisResult {
            psychological_needs: vec![need("belonging", 0.8), need("purpose", 0.95)],
            ..Default::default()
        };
        let insights = generate_insights(&analysis);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].insight_type, InsightType::Psychological);
        assert_eq!(insights[0].relevance, 0.8);
        assert!(insights[0].insight.contains("belonging"));
        assert!(insights[0].actionable);
    }

    #[test]
    fn test_cultural_insight_requires_relevance_above_threshold() {
        let at_threshold = ThemeAnalysisResult {
            cultural_context: cultural(0.7),
            ..Default::default()
        };
        assert!(generate_insights(&at_threshold).is_empty());

        let above = ThemeAnalysisResult {
            cultural_context: cultural(0.75),
            ..Default::default()
        };
        let insights = generate_insights(&above);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].insight_type, InsightType::Cultural);
        assert_eq!(insights[0].relevance, 0.75);
    }

    #[test]
    fn test_all_categories_sorted_by_relevance() {
        let analysis = ThemeAnalysisResult {
            psychological_needs: vec![need("safety", 0.6)],
            archetypal_patterns: vec![pattern("hero's journey", 0.9)],
            cultural_context: cultural(0.8),
            ..Default::default()
        };
        let types: Vec<InsightType> = generate_insights(&analysis)
            .into_iter()
            .map(|i| i.insight_type)
            .collect();

        assert_eq!(
            types,
            vec![
                InsightType::Archetypal,
                InsightType::Cultural,
                InsightType::Psychological
            ]
        );
    }

    #[test]
    fn test_ties_keep_category_order() {
        let analysis = ThemeAnalysisResult {
            psychological_needs: vec![need("safety", 0.8)],
            archetypal_patterns: vec![pattern("mentor", 0.8)],
            cultural_context: cultural(0.8),
            ..Default::default()
        };
        let types: Vec<InsightType> = generate_insights(&analysis)
            .into_iter()
            .map(|i| i.insight_type)
            .collect();

        assert_eq!(
            types,
            vec![
                InsightType::Psychological,
                InsightType::Archetypal,
                InsightType::Cultural
            ]
        );
    }

    #[test]
    fn test_never_emits_therapeutic_insight() {
        let analysis = ThemeAnalysisResult {
            psychological_needs: vec![need("healing", 1.0)],
            archetypal_patterns: vec![pattern("rebirth", 1.0)],
            cultural_context: cultural(1.0),
            ..Default::default()
        };

        assert!(generate_insights(&analysis)
            .iter()
            .all(|i| i.insight_type != InsightType::Therapeutic));
    }
}
