/// Read-through helper for the in-process [`MovieCache`](crate::cache::MovieCache).
///
/// Returns the cached value when the key is fresh. Otherwise awaits `$block`,
/// propagates its error with `?`, stores the value under the key's namespace
/// TTL and returns it. Failed computations are never cached.
///
/// # Arguments
/// * `$cache`: The cache instance, exposing `get` and `set`.
/// * `$key`: The [`CacheKey`](crate::cache::CacheKey) to read and write.
/// * `$block`: A future computing the value on a miss.
///
/// # Example
/// ```rust,ignore
/// let movies: Vec<Movie> = cached!(self.cache, CacheKey::similar(id), async move {
///     self.database.similar_movies(id).await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $block:expr) => {{
        let key = $key;
        if let Some(cached) = $cache.get(&key) {
            tracing::debug!(key = %key, "Cache hit");
            Ok(cached)
        } else {
            tracing::debug!(key = %key, "Cache miss");
            let value = $block.await?;
            $cache.set(&key, &value);
            Ok(value)
        }
    }};
}
