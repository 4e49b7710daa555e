//! Parsed-pattern caching.
//!
//! Workbooks apply the same handful of patterns to thousands of cells, so
//! the one-shot [`format`](crate::format) entry point keeps recently
//! parsed patterns in a small LRU cache. Parsing itself is pure;
//! [`NumberFormat::parse`](crate::NumberFormat::parse) never touches the
//! cache.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::ast::NumberFormat;
use crate::error::ParseError;

static CACHE: Mutex<Option<LruCache<String, NumberFormat>>> = Mutex::new(None);

const CACHE_SIZE: usize = 512;

/// Get a parsed pattern from the cache, parsing and inserting on a miss.
/// Parse failures are not cached.
pub fn get_or_parse(pattern: &str) -> Result<NumberFormat, ParseError> {
    let mut guard = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let cache = guard
        .get_or_insert_with(|| LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));

    if let Some(found) = cache.get(pattern) {
        return Ok(found.clone());
    }

    let parsed = NumberFormat::parse(pattern)?;
    cache.put(pattern.to_string(), parsed.clone());
    Ok(parsed)
}
