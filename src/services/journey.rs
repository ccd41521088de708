use std::collections::HashMap;

use crate::models::{ThemeAnalysisResult, ThemeJourney};

/// Theme name used in the phase label when the analysis has no primary theme
const FALLBACK_THEME: &str = "exploration";

/// Lookup tables behind journey derivation
///
/// Keys are stored lower-cased and matched case-insensitively. Swap in a
/// custom catalog to grow the heuristics without touching the derivation code.
#[derive(Debug, Clone)]
pub struct JourneyCatalog {
    /// Primary theme category -> ordered next themes
    progressions: HashMap<String, Vec<String>>,
    /// Theme name -> themes that pair well with it
    complements: HashMap<String, Vec<String>>,
    pub fallback_progression: Vec<String>,
    /// Returned as-is for every query
    pub alternative_explorations: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn table(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(key, values)| (key.to_lowercase(), strings(values)))
        .collect()
}

impl Default for JourneyCatalog {
    fn default() -> Self {
        let progressions = table(&[
            ("identity", &["self_discovery", "authenticity", "belonging", "purpose"]),
            ("relationships", &["connection", "vulnerability", "intimacy", "commitment"]),
            ("growth", &["challenge", "struggle", "transformation", "mastery"]),
            ("loss", &["grief", "acceptance", "remembrance", "renewal"]),
            ("existential", &["questioning", "confrontation", "meaning_making", "transcendence"]),
            ("social", &["awareness", "conflict", "solidarity", "change"]),
            ("family", &["roots", "conflict", "reconciliation", "legacy"]),
            ("healing", &["acknowledgment", "processing", "integration", "resilience"]),
        ]);

        let complements = table(&[
            ("identity", &["belonging", "authenticity"]),
            ("belonging", &["identity", "community"]),
            ("love", &["loss", "sacrifice"]),
            ("loss", &["resilience", "memory"]),
            ("grief", &["healing", "memory"]),
            ("redemption", &["forgiveness", "guilt"]),
            ("forgiveness", &["redemption", "empathy"]),
            ("freedom", &["responsibility", "courage"]),
            ("isolation", &["connection", "self_reliance"]),
            ("ambition", &["sacrifice", "integrity"]),
            ("coming of age", &["identity", "friendship"]),
            ("family", &["legacy", "reconciliation"]),
        ]);

        Self {
            progressions,
            complements,
            fallback_progression: strings(&["exploration", "discovery", "integration"]),
            alternative_explorations: strings(&[
                "See the same theme through a different character's perspective",
                "Try a lighter or more intense take on the theme",
                "Explore how the theme plays out in another time period",
                "Look for the theme in a different genre",
            ]),
        }
    }
}

impl JourneyCatalog {
    pub fn insert_progression(&mut self, category: &str, progression: Vec<String>) {
        self.progressions.insert(category.to_lowercase(), progression);
    }

    pub fn insert_complements(&mut self, theme: &str, complements: Vec<String>) {
        self.complements.insert(theme.to_lowercase(), complements);
    }

    pub fn progression_for(&self, category: &str) -> &[String] {
        self.progressions
            .get(&category.to_lowercase())
            .unwrap_or(&self.fallback_progression)
    }

    pub fn complements_for(&self, theme: &str) -> &[String] {
        self.complements
            .get(&theme.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// `{complexity}_{primary theme}`, theme lower-cased with spaces as underscores
pub fn current_phase(analysis: &ThemeAnalysisResult) -> String {
    let theme = analysis
        .primary_theme()
        .map(|t| t.theme.to_lowercase().replace(' ', "_"))
        .unwrap_or_else(|| FALLBACK_THEME.to_string());

    format!("{}_{}", analysis.thematic_complexity, theme)
}

/// Derives where the user's exploration sits and where it could go next
pub fn derive_journey(catalog: &JourneyCatalog, analysis: &ThemeAnalysisResult) -> ThemeJourney {
    let suggested_progression = match analysis.primary_theme() {
        Some(primary) => catalog.progression_for(&primary.category).to_vec(),
        None => catalog.fallback_progression.clone(),
    };

    let mut complementary_themes: Vec<String> = Vec::new();
    for theme in analysis.all_themes() {
        for complement in catalog.complements_for(&theme.theme) {
            if !complementary_themes.contains(complement) {
                complementary_themes.push(complement.clone());
            }
        }
    }

    ThemeJourney {
        current_phase: current_phase(analysis),
        suggested_progression,
        alternative_explorations: catalog.alternative_explorations.clone(),
        complementary_themes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IdentifiedTheme, ThematicComplexity};

    fn theme(name: &str, category: &str) -> IdentifiedTheme {
        IdentifiedTheme {
            theme: name.to_string(),
            category: category.to_string(),
            confidence: 0.8,
            explanation: String::new(),
        }
    }

    #[test]
    fn test_current_phase_from_primary_theme() {
        let analysis = ThemeAnalysisResult {
            primary_themes: vec![theme("Coming of Age", "identity")],
            thematic_complexity: ThematicComplexity::Complex,
            ..Default::default()
        };
        assert_eq!(current_phase(&analysis), "complex_coming_of_age");
    }

    #[test]
    fn test_current_phase_without_primary_theme() {
        let analysis = ThemeAnalysisResult {
            thematic_complexity: ThematicComplexity::Simple,
            ..Default::default()
        };
        assert_eq!(current_phase(&analysis), "simple_exploration");
    }

    #[test]
    fn test_progression_from_category() {
        let analysis = ThemeAnalysisResult {
            primary_themes: vec![theme("who am I", "Identity")],
            ..Default::default()
        };
        let journey = derive_journey(&JourneyCatalog::default(), &analysis);

        assert_eq!(
            journey.suggested_progression,
            vec!["self_discovery", "authenticity", "belonging", "purpose"]
        );
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let analysis = ThemeAnalysisResult {
            primary_themes: vec![theme("heists", "crime")],
            ..Default::default()
        };
        let journey = derive_journey(&JourneyCatalog::default(), &analysis);

        assert_eq!(
            journey.suggested_progression,
            vec!["exploration", "discovery", "integration"]
        );
        assert!(journey.complementary_themes.is_empty());
    }

    #[test]
    fn test_complementary_themes_deduplicated_in_insertion_order() {
        let analysis = ThemeAnalysisResult {
            primary_themes: vec![theme("identity", "identity")],
            secondary_themes: vec![theme("belonging", "social"), theme("Grief", "loss")],
            ..Default::default()
        };
        let journey = derive_journey(&JourneyCatalog::default(), &analysis);

        // "identity" -> [belonging, authenticity]; "belonging" -> [identity, community]
        assert_eq!(
            journey.complementary_themes,
            vec!["belonging", "authenticity", "identity", "community", "healing", "memory"]
        );
    }

    #[test]
    fn test_alternative_explorations_are_constant() {
        let catalog = JourneyCatalog::default();
        let empty = derive_journey(&catalog, &ThemeAnalysisResult::default());
        let rich = derive_journey(
            &catalog,
            &ThemeAnalysisResult {
                primary_themes: vec![theme("love", "relationships")],
                ..Default::default()
            },
        );

        assert_eq!(empty.alternative_explorations.len(), 4);
        assert_eq!(empty.alternative_explorations, rich.alternative_explorations);
    }

    #[test]
    fn test_custom_catalog() {
        let mut catalog = JourneyCatalog::default();
        catalog.insert_progression("crime", strings(&["temptation", "consequence"]));

        let analysis = ThemeAnalysisResult {
            primary_themes: vec![theme("heists", "crime")],
            ..Default::default()
        };
        let journey = derive_journey(&catalog, &analysis);

        assert_eq!(journey.suggested_progression, vec!["temptation", "consequence"]);
    }

    #[test]
    fn test_custom_catalog_keys_are_case_insensitive() {
        let mut catalog = JourneyCatalog::default();
        catalog.insert_progression("Crime", strings(&["temptation", "consequence"]));
        catalog.insert_complements("Heists", strings(&["loyalty"]));

        let analysis = ThemeAnalysisResult {
            primary_themes: vec![theme("heists", "crime")],
            ..Default::default()
        };
        let journey = derive_journey(&catalog, &analysis);

        assert_eq!(journey.suggested_progression, vec!["temptation", "consequence"]);
        assert_eq!(journey.complementary_themes, vec!["loyalty"]);
    }
}
