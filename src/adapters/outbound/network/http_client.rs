use crate::adapters::outbound::json_descriptor::parse_repository_json;
use crate::dependency_resolution::domain::RepositoryDescriptor;
use crate::ports::outbound::{RepositoryLoader, RepositorySource};
use crate::shared::error::DepVizError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use std::io::Read;
use std::thread;
use std::time::Duration;

/// Maximum accepted response body size (100 MB)
const MAX_RESPONSE_SIZE: u64 = 100 * 1024 * 1024;

/// HttpRepositoryLoader adapter fetching a JSON repository over http(s)
///
/// Uses the blocking reqwest client: the descriptor is fetched exactly once,
/// before any graph work starts.
pub struct HttpRepositoryLoader {
    client: Client,
    max_retries: u32,
}

impl HttpRepositoryLoader {
    /// Creates a new loader with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("depviz/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: 3,
        })
    }

    /// Parses and validates the source location as an http(s) URL
    fn parse_url(location: &str) -> Result<Url> {
        let invalid = |reason: String| DepVizError::InvalidSource {
            location: location.to_string(),
            reason,
        };

        let url = Url::parse(location).map_err(|e| invalid(format!("not a valid URL ({})", e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!(
                "unsupported URL scheme '{}', only http and https are allowed",
                other
            ))
            .into()),
        }
    }

    /// Fetches the body with retry logic
    ///
    /// Transport errors and 5xx responses are retried with linear back-off;
    /// any other failure is returned after the first attempt.
    fn fetch_with_retry(&self, url: &Url) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch(url) {
                Ok(body) => return Ok(body),
                Err(FetchFailure::Fatal(e)) => {
                    last_error = Some(e);
                    break;
                }
                Err(FetchFailure::Retryable(e)) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        thread::sleep(Duration::from_millis(100 * attempt as u64));
                    }
                }
            }
        }

        let details = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempt was made".to_string());
        Err(DepVizError::RemoteFetchError {
            url: url.to_string(),
            details,
        }
        .into())
    }

    fn fetch(&self, url: &Url) -> std::result::Result<String, FetchFailure> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchFailure::Retryable(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let error = anyhow::anyhow!("Server returned status code {}", status);
            return Err(if is_retryable_status(status) {
                FetchFailure::Retryable(error)
            } else {
                FetchFailure::Fatal(error)
            });
        }

        if let Some(length) = response.content_length() {
            if length > MAX_RESPONSE_SIZE {
                return Err(FetchFailure::Fatal(too_large(length)));
            }
        }

        read_limited(response, MAX_RESPONSE_SIZE).map_err(FetchFailure::Fatal)
    }
}

/// Outcome of a failed attempt, split by whether another attempt may help
enum FetchFailure {
    Retryable(anyhow::Error),
    Fatal(anyhow::Error),
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error()
}

fn too_large(size: u64) -> anyhow::Error {
    anyhow::anyhow!(
        "Security: response is too large ({} bytes). Maximum allowed size is {} bytes.",
        size,
        MAX_RESPONSE_SIZE
    )
}

/// Reads at most `limit` bytes of UTF-8 text, failing if the body is longer
///
/// Applies whether or not the server announced a `Content-Length`.
fn read_limited<R: Read>(reader: R, limit: u64) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .take(limit + 1)
        .read_to_end(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read response body: {}", e))?;

    if buffer.len() as u64 > limit {
        anyhow::bail!(
            "Security: response exceeds the maximum allowed size of {} bytes.",
            limit
        );
    }

    String::from_utf8(buffer)
        .map_err(|e| anyhow::anyhow!("Response body is not valid UTF-8: {}", e))
}

// Note: no Default implementation. Client creation can fail, so callers
// must go through HttpRepositoryLoader::new() and handle the Result.

impl RepositoryLoader for HttpRepositoryLoader {
    fn load(&self, source: &RepositorySource) -> Result<RepositoryDescriptor> {
        let url = Self::parse_url(&source.location)?;
        let body = self.fetch_with_retry(&url)?;
        parse_repository_json(&body, url.as_str())
    }
}
