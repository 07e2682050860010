//! Caching decorator for breed fetchers
//!
//! Provides a `CachingBreedFetcher` that wraps another `BreedFetcher`, remembers
//! successful results by breed name, and counts how often it had to fall through
//! to the wrapped fetcher.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::data::{BreedFetcher, BreedNotFound};

/// Memoizing wrapper around a `BreedFetcher`
///
/// A lookup for a breed already in the cache is answered from memory. Any other
/// lookup is a miss: the call counter is incremented and the wrapped fetcher is
/// asked. Only successful results are stored; failures pass through unchanged.
#[derive(Debug)]
pub struct CachingBreedFetcher<F> {
    /// The wrapped fetcher consulted on cache misses
    inner: F,
    /// Sub-breeds by breed name, successful lookups only
    cache: HashMap<String, Vec<String>>,
    /// Number of misses forwarded to `inner`
    calls_made: u64,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wraps `inner` with an empty cache and a zero call counter
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
            calls_made: 0,
        }
    }

    /// Number of lookups forwarded to the wrapped fetcher since construction,
    /// including the ones that failed
    pub fn calls_made(&self) -> u64 {
        self.calls_made
    }

    /// Whether a successful result for `breed` is cached
    pub fn is_cached(&self, breed: &str) -> bool {
        self.cache.contains_key(breed)
    }

    /// Number of breeds with a cached result
    pub fn cached_breeds(&self) -> usize {
        self.cache.len()
    }

    /// The wrapped fetcher
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwraps the decorator, discarding the cache
    pub fn into_inner(self) -> F {
        self.inner
    }
}

#[async_trait]
impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    async fn sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        if let Some(cached) = self.cache.get(breed) {
            return Ok(cached.clone());
        }

        self.calls_made += 1;
        let sub_breeds = self.inner.sub_breeds(breed).await?;
        self.cache.insert(breed.to_string(), sub_breeds.clone());

        Ok(sub_breeds)
    }
}
