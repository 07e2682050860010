//! Core breed lookup types for Dog Breeds CLI
//!
//! This module defines the `BreedFetcher` capability shared by every way of
//! looking up sub-breeds, along with the single error kind those lookups report.

pub mod dog_api;

pub use dog_api::{ClientBuildError, ClientConfig, DogApiBreedFetcher};

use async_trait::async_trait;
use thiserror::Error;

/// Placeholder breed name reported when no breed was supplied at all
pub const MISSING_BREED: &str = "null";

/// The only failure a breed lookup can report
///
/// Unknown breeds, invalid input and infrastructure faults (unreachable host,
/// unexpected payload) all surface as this error, carrying the breed that was
/// requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Breed not found: {breed}")]
pub struct BreedNotFound {
    breed: String,
}

impl BreedNotFound {
    /// Creates an error for the given breed name
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
        }
    }

    /// Creates an error for a lookup that was given no breed name
    pub fn missing() -> Self {
        Self::new(MISSING_BREED)
    }

    /// The breed name that was requested
    pub fn breed(&self) -> &str {
        &self.breed
    }
}

/// Capability for retrieving the sub-breeds of a named breed
///
/// Implementations return sub-breeds in the order the data source lists them.
/// An empty list is a successful result for a breed with no sub-breeds.
#[async_trait]
pub trait BreedFetcher: Send {
    /// Fetches the sub-breeds of `breed`
    ///
    /// # Arguments
    /// * `breed` - Breed name, case-sensitive as supplied by the caller
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - The sub-breeds, possibly empty
    /// * `Err(BreedNotFound)` - If the breed cannot be resolved for any reason
    async fn sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound>;
}

#[async_trait]
impl<F: BreedFetcher + ?Sized> BreedFetcher for Box<F> {
    async fn sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        (**self).sub_breeds(breed).await
    }
}

/// Returns true when `breed` stands for an absent name
pub(crate) fn is_missing(breed: &str) -> bool {
    breed.is_empty()
}

/// Returns true when `breed` is present but cannot name any breed
pub(crate) fn is_blank(breed: &str) -> bool {
    !breed.is_empty() && breed.trim().is_empty()
}
