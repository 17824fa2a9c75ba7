mod response;
pub mod types;

pub use response::{Lookup, CONNECTION_ERROR, GENERIC_ERROR, NOT_FOUND, SERVER_ERROR};
pub use types::{Filter, HashType};

use std::time::Duration;

use reqwest::Url;

use crate::status;

pub const DEFAULT_BASE_URL: &str = "https://weakpass.com/api/v1";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid base URL '{0}': expected an absolute http(s) URL")]
    InvalidBaseUrl(String),
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Connection settings for the Weakpass API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. "https://weakpass.com/api/v1"
    pub base_url: String,
    /// Per-request timeout (None waits indefinitely)
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("weakpass/{}", env!("CARGO_PKG_VERSION"))
}

/// Blocking client for the three read-only endpoints.
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: Url,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = parse_base_url(&config.base_url)?;

        // The blocking client otherwise applies a 30s default.
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Hash/password pairs whose hash starts with `prefix`.
    pub fn range(&self, prefix: &str, filter: Option<Filter>, hash_type: HashType) -> Lookup {
        let mut query = Vec::with_capacity(2);
        if let Some(filter) = filter {
            query.push(("filter", filter.as_str()));
        }
        query.push(("type", hash_type.as_str()));

        self.get(&["range", prefix], &query)
    }

    /// Looks up a single hash. Returns `None` when the service has no match.
    pub fn search(&self, hash: &str) -> Option<Lookup> {
        self.search_hash(hash, true)
    }

    /// Same as `search`, without the per-request status line. Used while a
    /// progress spinner owns stderr.
    pub(crate) fn search_unlogged(&self, hash: &str) -> Option<Lookup> {
        self.search_hash(hash, false)
    }

    fn search_hash(&self, hash: &str, log: bool) -> Option<Lookup> {
        let lookup = self.execute(&["search", hash], &[], log);
        if lookup.is_absent() {
            None
        } else {
            Some(lookup)
        }
    }

    pub fn wordlists(&self) -> Lookup {
        self.get(&["wordlists"], &[])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> reqwest::Result<reqwest::blocking::Request> {
        let mut builder = self.http.get(self.endpoint(segments));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        builder.build()
    }

    fn get(&self, segments: &[&str], query: &[(&str, &str)]) -> Lookup {
        self.execute(segments, query, true)
    }

    fn execute(&self, segments: &[&str], query: &[(&str, &str)], log: bool) -> Lookup {
        let request = match self.request(segments, query) {
            Ok(request) => request,
            Err(e) => return Lookup::from_transport_error(&e),
        };
        if log {
            status!("GET {}", request.url());
        }

        let response = match self.http.execute(request) {
            Ok(response) => response,
            Err(e) => return Lookup::from_transport_error(&e),
        };

        let status = response.status();
        match response.bytes() {
            Ok(body) => Lookup::from_response(status, &body),
            Err(e) => Lookup::from_transport_error(&e),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|_| Error::InvalidBaseUrl(raw.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl(raw.to_string()));
    }

    Ok(url)
}
