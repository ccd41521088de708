pub mod keys;
pub mod memory;
pub mod movies;

mod macros;

pub use keys::{query_hash, CacheKey};
pub use memory::{
    CacheConfig, CacheEntryStats, CacheStats, Clock, ManualClock, SystemClock, TtlCache,
};
pub use movies::MovieCache;
