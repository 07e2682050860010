//! Dog Breeds CLI Library
//!
//! Looks up dog sub-breeds from the dog.ceo API, with an in-memory caching
//! decorator that can wrap any breed fetcher.

pub mod app;
pub mod cache;
pub mod cli;
pub mod data;
pub mod logging;

pub use cache::CachingBreedFetcher;
pub use data::{BreedFetcher, BreedNotFound, DogApiBreedFetcher};
