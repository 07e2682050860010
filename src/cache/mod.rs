//! Cache module for memoizing breed lookups in memory
//!
//! This module provides a caching decorator around any `BreedFetcher`. Successful
//! lookups are kept for the lifetime of the wrapper; failed lookups are never
//! cached, so a transient outage does not hide a breed permanently.

mod caching_fetcher;

pub use caching_fetcher::CachingBreedFetcher;
