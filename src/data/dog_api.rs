//! dog.ceo API client
//!
//! This module fetches sub-breed lists from the dog.ceo REST API. Every failure,
//! whether the breed is unknown or the API could not be reached, is reported to
//! callers as `BreedNotFound`; the underlying cause is only visible in the logs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::{is_blank, is_missing, BreedFetcher, BreedNotFound};

/// Base URL for the dog.ceo API
pub const DOG_API_BASE_URL: &str = "https://dog.ceo/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Status value the API uses for successful responses
const SUCCESS_STATUS: &str = "success";

/// Settings for building a `DogApiBreedFetcher`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API; `/breed/{breed}/list` is appended to it
    pub base_url: String,
    /// Overall timeout for a single request
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DOG_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Errors that can occur while building a `DogApiBreedFetcher`
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The base URL is not an absolute http(s)-style URL
    #[error("Invalid base URL: '{0}'")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Concrete reasons a lookup failed, before they collapse into `BreedNotFound`
#[derive(Debug, Error)]
enum FetchFault {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Empty response body")]
    EmptyBody,

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("API reported status '{0}'")]
    Unsuccessful(String),

    #[error("Cannot build request URL from base '{0}'")]
    InvalidUrl(String),
}

/// Response body of `GET /breed/{breed}/list`
///
/// `message` holds the sub-breed array on success and an error string otherwise,
/// so it is decoded only after `status` has been checked.
#[derive(Debug, Deserialize)]
struct SubBreedResponse {
    status: String,
    message: serde_json::Value,
}

/// Client for fetching sub-breeds from the dog.ceo API
#[derive(Debug, Clone)]
pub struct DogApiBreedFetcher {
    http_client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for DogApiBreedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DogApiBreedFetcher {
    /// Creates a new DogApiBreedFetcher pointed at the public dog.ceo API,
    /// with the default request timeout
    pub fn new() -> Self {
        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        Self {
            http_client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: DOG_API_BASE_URL.to_string(),
            timeout,
        }
    }

    /// Creates a DogApiBreedFetcher from explicit settings
    ///
    /// # Returns
    /// * `Ok(DogApiBreedFetcher)` - A fetcher using the configured URL and timeout
    /// * `Err(ClientBuildError)` - If the base URL is unusable or the client cannot be built
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|_| ClientBuildError::InvalidBaseUrl(config.base_url.clone()))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http_client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The timeout applied to each request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches the sub-breeds of `breed` without requiring exclusive access
    ///
    /// Same contract as `BreedFetcher::sub_breeds`: an empty name fails with
    /// `BreedNotFound("null")` and a whitespace-only name with `BreedNotFound(breed)`,
    /// both before any request is made. Every other fault is reported as
    /// `BreedNotFound(breed)`.
    pub async fn fetch_sub_breeds(&self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        if is_missing(breed) {
            debug!("no breed name supplied, skipping request");
            return Err(BreedNotFound::missing());
        }
        if is_blank(breed) {
            debug!(breed, "blank breed name, skipping request");
            return Err(BreedNotFound::new(breed));
        }

        self.fetch_from_api(breed).await.map_err(|fault| {
            debug!(breed, error = %fault, "sub-breed lookup failed");
            BreedNotFound::new(breed)
        })
    }

    /// Builds `{base_url}/breed/{breed}/list`, encoding `breed` as one path segment
    fn endpoint(&self, breed: &str) -> Result<Url, FetchFault> {
        let invalid = || FetchFault::InvalidUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["breed", breed, "list"]);
        Ok(url)
    }

    async fn fetch_from_api(&self, breed: &str) -> Result<Vec<String>, FetchFault> {
        let url = self.endpoint(breed)?;
        debug!(%url, "requesting sub-breeds");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchFault::UnexpectedStatus(status));
        }

        let text = response.text().await?;
        parse_sub_breeds(&text)
    }
}

#[async_trait]
impl BreedFetcher for DogApiBreedFetcher {
    async fn sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        self.fetch_sub_breeds(breed).await
    }
}

/// Parses a sub-breed response body into the list of sub-breeds
fn parse_sub_breeds(body: &str) -> Result<Vec<String>, FetchFault> {
    if body.trim().is_empty() {
        return Err(FetchFault::EmptyBody);
    }

    let api_response: SubBreedResponse = serde_json::from_str(body)?;
    if api_response.status != SUCCESS_STATUS {
        return Err(FetchFault::Unsuccessful(api_response.status));
    }

    Ok(serde_json::from_value(api_response.message)?)
}
