pub mod discovery;
pub mod movie;
pub mod theme;

pub use discovery::{
    InsightType, RecommendationRequest, ThemeBasedRecommendation, ThemeDiscoveryRequest,
    ThemeDiscoveryResponse, ThemeInsight, ThemeJourney,
};
pub use movie::{CandidateMovie, Movie, TmdbMovie, TmdbPage};
pub use theme::{
    ArchetypalPattern, CulturalContext, IdentifiedTheme, LifeStageAlignment, PsychologicalNeed,
    ThemeAnalysisResult, ThematicComplexity,
};
