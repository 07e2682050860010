//! Lookup runner for Dog Breeds CLI
//!
//! Drives a set of breed lookups through a `BreedFetcher` and collects the
//! outcomes into a `Summary` that can be printed as text or JSON.

use serde::Serialize;
use tracing::{debug, info};

use crate::cache::CachingBreedFetcher;
use crate::cli::RunConfig;
use crate::data::{BreedFetcher, BreedNotFound, ClientBuildError, DogApiBreedFetcher};

/// Outcome of a single breed lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedReport {
    /// The breed that was requested
    pub breed: String,
    /// Sub-breeds, if the lookup succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_breeds: Option<Vec<String>>,
    /// Error message, if the lookup failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BreedReport {
    fn from_outcome(breed: &str, outcome: Result<Vec<String>, BreedNotFound>) -> Self {
        match outcome {
            Ok(sub_breeds) => Self {
                breed: breed.to_string(),
                sub_breeds: Some(sub_breeds),
                error: None,
            },
            Err(err) => Self {
                breed: breed.to_string(),
                sub_breeds: None,
                error: Some(err.to_string()),
            },
        }
    }

    /// Whether the lookup succeeded
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    fn render_line(&self) -> String {
        match (&self.sub_breeds, &self.error) {
            (_, Some(error)) => format!("{}: error: {}", self.breed, error),
            (Some(list), None) if list.is_empty() => format!("{}: (no sub-breeds)", self.breed),
            (Some(list), None) => format!("{}: {}", self.breed, list.join(", ")),
            (None, None) => format!("{}: (no result)", self.breed),
        }
    }
}

/// Results of a lookup run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// One report per lookup, in the order they were made
    pub lookups: Vec<BreedReport>,
    /// Calls that reached the API, present only when the cache was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calls_made: Option<u64>,
}

impl Summary {
    /// Whether any lookup failed
    pub fn has_failures(&self) -> bool {
        self.lookups.iter().any(|report| !report.is_success())
    }

    /// Renders one line per lookup, followed by the call count when caching
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = self.lookups.iter().map(BreedReport::render_line).collect();
        if let Some(calls) = self.calls_made {
            lines.push(format!("Calls made: {}", calls));
        }
        lines.join("\n")
    }

    /// Renders the summary as pretty-printed JSON
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Looks up every breed `rounds` times, in order, through `fetcher`
///
/// # Arguments
/// * `fetcher` - Any breed fetcher, cached or not
/// * `breeds` - Breeds to look up
/// * `rounds` - Number of passes over `breeds`
///
/// # Returns
/// One `BreedReport` per lookup (`breeds.len() * rounds` in total)
pub async fn lookup_all<F: BreedFetcher + ?Sized>(
    fetcher: &mut F,
    breeds: &[String],
    rounds: u32,
) -> Vec<BreedReport> {
    let mut reports = Vec::new();

    for round in 1..=rounds {
        for breed in breeds {
            debug!(round, breed = %breed, "looking up sub-breeds");
            let outcome = fetcher.sub_breeds(breed).await;
            match &outcome {
                Ok(list) => info!(breed = %breed, count = list.len(), "found sub-breeds"),
                Err(err) => info!(breed = %breed, error = %err, "lookup failed"),
            }
            reports.push(BreedReport::from_outcome(breed, outcome));
        }
    }

    reports
}

/// Runs the lookups described by `config` against the dog.ceo API
///
/// # Returns
/// * `Ok(Summary)` - The collected results; individual lookups may still have failed
/// * `Err(ClientBuildError)` - If the API client could not be set up
pub async fn run(config: &RunConfig) -> Result<Summary, ClientBuildError> {
    let remote = DogApiBreedFetcher::from_config(&config.client)?;

    if config.use_cache {
        let mut fetcher = CachingBreedFetcher::new(remote);
        let lookups = lookup_all(&mut fetcher, &config.breeds, config.rounds).await;
        info!(calls_made = fetcher.calls_made(), "lookups finished");
        Ok(Summary {
            lookups,
            calls_made: Some(fetcher.calls_made()),
        })
    } else {
        let mut fetcher = remote;
        let lookups = lookup_all(&mut fetcher, &config.breeds, config.rounds).await;
        Ok(Summary {
            lookups,
            calls_made: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Test double with a fixed answer per breed that counts every call
    #[derive(Debug, Default)]
    struct TableFetcher {
        table: HashMap<String, Vec<String>>,
        calls: usize,
    }

    impl TableFetcher {
        fn with(mut self, breed: &str, sub_breeds: &[&str]) -> Self {
            self.table.insert(
                breed.to_string(),
                sub_breeds.iter().map(|s| s.to_string()).collect(),
            );
            self
        }
    }

    #[async_trait]
    impl BreedFetcher for TableFetcher {
        async fn sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
            self.calls += 1;
            self.table
                .get(breed)
                .cloned()
                .ok_or_else(|| BreedNotFound::new(breed))
        }
    }

    fn breeds(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_lookup_all_reports_in_order() {
        let mut fetcher = TableFetcher::default()
            .with("hound", &["afghan", "basset"])
            .with("pug", &[]);

        let reports = lookup_all(&mut fetcher, &breeds(&["hound", "xyz", "pug"]), 1).await;

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].breed, "hound");
        assert_eq!(reports[0].sub_breeds, Some(breeds(&["afghan", "basset"])));
        assert_eq!(reports[1].breed, "xyz");
        assert_eq!(reports[1].error.as_deref(), Some("Breed not found: xyz"));
        assert!(!reports[1].is_success());
        assert_eq!(reports[2].sub_breeds, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_lookup_all_repeats_rounds_without_cache() {
        let mut fetcher = TableFetcher::default().with("hound", &["afghan"]);

        let reports = lookup_all(&mut fetcher, &breeds(&["hound"]), 3).await;

        assert_eq!(reports.len(), 3);
        assert_eq!(fetcher.calls, 3);
    }

    #[tokio::test]
    async fn test_lookup_all_through_cache_reuses_results() {
        let mut fetcher =
            CachingBreedFetcher::new(TableFetcher::default().with("hound", &["afghan"]));

        let reports = lookup_all(&mut fetcher, &breeds(&["hound", "xyz"]), 3).await;

        assert_eq!(reports.len(), 6);
        // hound is fetched once, xyz fails and is retried every round
        assert_eq!(fetcher.calls_made(), 4);
        assert_eq!(fetcher.inner().calls, 4);
    }

    #[test]
    fn test_render_text_with_calls_made() {
        let summary = Summary {
            lookups: vec![
                BreedReport::from_outcome("hound", Ok(breeds(&["afghan", "basset"]))),
                BreedReport::from_outcome("pug", Ok(Vec::new())),
                BreedReport::from_outcome("xyz", Err(BreedNotFound::new("xyz"))),
            ],
            calls_made: Some(3),
        };

        assert_eq!(
            summary.render_text(),
            "hound: afghan, basset\npug: (no sub-breeds)\nxyz: error: Breed not found: xyz\nCalls made: 3"
        );
        assert!(summary.has_failures());
    }

    #[test]
    fn test_render_text_without_cache_omits_calls_made() {
        let summary = Summary {
            lookups: vec![BreedReport::from_outcome("hound", Ok(breeds(&["afghan"])))],
            calls_made: None,
        };

        assert_eq!(summary.render_text(), "hound: afghan");
        assert!(!summary.has_failures());
    }

    #[test]
    fn test_render_json_shape() {
        let summary = Summary {
            lookups: vec![
                BreedReport::from_outcome("hound", Ok(breeds(&["afghan"]))),
                BreedReport::from_outcome("xyz", Err(BreedNotFound::new("xyz"))),
            ],
            calls_made: Some(2),
        };

        let json = summary.render_json().expect("Should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Should be valid JSON");

        assert_eq!(value["calls_made"], 2);
        assert_eq!(value["lookups"][0]["breed"], "hound");
        assert_eq!(value["lookups"][0]["sub_breeds"][0], "afghan");
        assert!(value["lookups"][0].get("error").is_none());
        assert_eq!(value["lookups"][1]["error"], "Breed not found: xyz");
        assert!(value["lookups"][1].get("sub_breeds").is_none());
    }

    #[test]
    fn test_render_json_without_cache_omits_calls_made() {
        let summary = Summary {
            lookups: Vec::new(),
            calls_made: None,
        };

        let value: serde_json::Value =
            serde_json::from_str(&summary.render_json().unwrap()).unwrap();
        assert!(value.get("calls_made").is_none());
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_base_url() {
        let config = RunConfig {
            breeds: breeds(&["hound"]),
            client: crate::data::ClientConfig {
                base_url: "not a url".to_string(),
                ..Default::default()
            },
            rounds: 1,
            use_cache: true,
            output: crate::cli::OutputFormat::Text,
        };

        let result = run(&config).await;

        assert!(matches!(result, Err(ClientBuildError::InvalidBaseUrl(_))));
    }
}
