use std::fmt::Display;
use std::time::Duration;

use crate::models::ThemeDiscoveryRequest;

/// Hashes a string into a short base-36 token
///
/// 32-bit rolling hash over UTF-16 code units (`h = h * 31 + unit`), wrapped to
/// an `i32` and made non-negative. Stable within a process; not meant to be
/// persisted.
pub fn query_hash(input: &str) -> String {
    let hash = input
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32));
    to_base36(hash.unsigned_abs())
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Free-text recommendation query
    Recommendations(String),
    Mood { mood: String, language: String },
    Similar(u64),
    /// Full theme discovery request, JSON-encoded so distinct requests never share a key
    ThemeDiscovery(String),
}

impl CacheKey {
    pub fn recommendations(query: &str) -> Self {
        CacheKey::Recommendations(query.to_string())
    }

    pub fn mood(mood: &str, language: &str) -> Self {
        CacheKey::Mood {
            mood: mood.to_string(),
            language: language.to_string(),
        }
    }

    pub fn similar(movie_id: u64) -> Self {
        CacheKey::Similar(movie_id)
    }

    /// Builds a key covering every field that influences the analysis
    pub fn theme_discovery(request: &ThemeDiscoveryRequest) -> Self {
        let canonical = serde_json::json!([
            normalize_query(&request.query),
            request.emotional_context,
            request.life_stage,
            request.needs,
            request.cultural_background,
        ]);
        CacheKey::ThemeDiscovery(canonical.to_string())
    }

    /// How much longer than the baseline TTL this kind of entry stays fresh
    pub fn ttl_multiplier(&self) -> u32 {
        match self {
            CacheKey::Recommendations(_) | CacheKey::ThemeDiscovery(_) => 1,
            CacheKey::Mood { .. } => 2,
            CacheKey::Similar(_) => 3,
        }
    }

    pub fn ttl(&self, baseline: Duration) -> Duration {
        baseline * self.ttl_multiplier()
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Recommendations(query) => {
                write!(f, "recommendations:{}", query_hash(&normalize_query(query)))
            }
            CacheKey::Mood { mood, language } => write!(f, "mood:{}:{}", mood, language),
            CacheKey::Similar(movie_id) => write!(f, "similar:{}", movie_id),
            CacheKey::ThemeDiscovery(canonical) => write!(f, "themes:{}", canonical),
        }
    }
}
