pub mod insights;
pub mod journey;
pub mod providers;
pub mod recommendations;
pub mod scoring;
pub mod theme_discovery;

pub use recommendations::RecommendationService;
pub use theme_discovery::ThemeDiscoveryService;
