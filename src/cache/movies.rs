use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;

use super::keys::CacheKey;
use super::memory::{CacheConfig, CacheStats, Clock, TtlCache};
use crate::models::Movie;

/// Namespaced, typed cache for movie lookups
///
/// Values are stored as JSON so one cache instance can hold every response
/// type. Any (de)serialization problem is logged and treated as a miss.
pub struct MovieCache {
    inner: TtlCache<serde_json::Value>,
}

impl MovieCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            inner: TtlCache::new(config),
        }
    }

    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: TtlCache::with_clock(config, clock),
        }
    }

    fn baseline_ttl(&self) -> Duration {
        self.inner.config().default_ttl
    }

    /// Retrieves a value from the cache by key
    ///
    /// Returns `None` when the key is absent, expired, or holds a value of
    /// another shape.
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let value = self.inner.get(&key.to_string())?;

        match serde_json::from_value(value) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cache deserialization error");
                None
            }
        }
    }

    /// Stores a value using the TTL that belongs to the key's namespace
    pub fn set<T: Serialize>(&self, key: &CacheKey, value: &T) {
        let ttl = key.ttl(self.baseline_ttl());
        self.set_with_ttl(key, value, ttl);
    }

    pub fn set_with_ttl<T: Serialize>(&self, key: &CacheKey, value: &T, ttl: Duration) {
        let json = match serde_json::to_value(value) {
            Ok(j) => j,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Cache serialization error");
                return;
            }
        };

        self.inner.set(key.to_string(), json, Some(ttl));
        tracing::debug!(key = %key, ttl_secs = ttl.as_secs(), "Cached value");
    }

    pub fn cache_movie_recommendations(&self, query: &str, movies: &[Movie]) {
        self.set(&CacheKey::recommendations(query), &movies);
    }

    pub fn get_movie_recommendations(&self, query: &str) -> Option<Vec<Movie>> {
        self.get(&CacheKey::recommendations(query))
    }

    pub fn cache_mood_recommendations(&self, mood: &str, language: &str, movies: &[Movie]) {
        self.set(&CacheKey::mood(mood, language), &movies);
    }

    pub fn get_mood_recommendations(&self, mood: &str, language: &str) -> Option<Vec<Movie>> {
        self.get(&CacheKey::mood(mood, language))
    }

    pub fn cache_similar_movies(&self, movie_id: u64, movies: &[Movie]) {
        self.set(&CacheKey::similar(movie_id), &movies);
    }

    pub fn get_similar_movies(&self, movie_id: u64) -> Option<Vec<Movie>> {
        self.get(&CacheKey::similar(movie_id))
    }

    pub fn has(&self, key: &CacheKey) -> bool {
        self.inner.has(&key.to_string())
    }

    pub fn delete(&self, key: &CacheKey) -> bool {
        self.inner.delete(&key.to_string())
    }

    pub fn clear(&self) {
        self.inner.clear();
        tracing::info!("Cache cleared");
    }

    pub fn cleanup(&self) -> usize {
        self.inner.cleanup()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn test_cache() -> (MovieCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let cache = MovieCache::with_clock(
            CacheConfig {
                max_size: 20,
                default_ttl: Duration::from_secs(300),
            },
            clock.clone(),
        );
        (cache, clock)
    }

    #[test]
    fn test_movie_recommendations_roundtrip() {
        let (cache, _clock) = test_cache();
        let movies = vec![movie("Lost in Translation"), movie("Her")];

        cache.cache_movie_recommendations("lonely in a big city", &movies);

        assert_eq!(
            cache.get_movie_recommendations("Lonely in a big city"),
            Some(movies)
        );
    }

    #[test]
    fn test_recommendations_expire_after_baseline_ttl() {
        let (cache, clock) = test_cache();
        cache.cache_movie_recommendations("heist", &[movie("Heat")]);

        clock.advance(Duration::from_secs(301));

        assert_eq!(cache.get_movie_recommendations("heist"), None);
    }

    #[test]
    fn test_mood_results_live_twice_as_long() {
        let (cache, clock) = test_cache();
        cache.cache_mood_recommendations("melancholic", "en", &[movie("Blue Valentine")]);

        clock.advance(Duration::from_secs(599));
        assert!(cache.get_mood_recommendations("melancholic", "en").is_some());
        assert!(cache.get_mood_recommendations("melancholic", "es").is_none());

        clock.advance(Duration::from_secs(2));
        assert!(cache.get_mood_recommendations("melancholic", "en").is_none());
    }

    #[test]
    fn test_similar_results_live_three_times_as_long() {
        let (cache, clock) = test_cache();
        cache.cache_similar_movies(603, &[movie("Dark City")]);

        clock.advance(Duration::from_secs(899));
        assert_eq!(cache.get_similar_movies(603), Some(vec![movie("Dark City")]));

        clock.advance(Duration::from_secs(2));
        assert_eq!(cache.get_similar_movies(603), None);
    }

    #[test]
    fn test_shape_mismatch_is_a_miss() {
        let (cache, _clock) = test_cache();
        let key = CacheKey::similar(1);
        cache.set(&key, &"not a movie list");

        let retrieved: Option<Vec<Movie>> = cache.get(&key);
        assert_eq!(retrieved, None);
    }

    #[test]
    fn test_stats_use_namespaced_keys() {
        let (cache, _clock) = test_cache();
        cache.cache_similar_movies(42, &[]);
        cache.cache_mood_recommendations("happy", "en", &[]);

        let keys: Vec<String> = cache.stats().entries.into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["mood:happy:en", "similar:42"]);
    }

    #[test]
    fn test_delete_and_clear() {
        let (cache, _clock) = test_cache();
        cache.cache_similar_movies(1, &[]);
        cache.cache_similar_movies(2, &[]);

        assert!(cache.delete(&CacheKey::similar(1)));
        assert!(!cache.has(&CacheKey::similar(1)));

        cache.clear();
        assert!(!cache.has(&CacheKey::similar(2)));
    }
}
