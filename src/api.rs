// API client module: a small blocking HTTP client for the remote task
// service. One request and one response per process run; the 2-second
// timeout is the only bound on a stuck call.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use thiserror::Error;

use crate::task::Task;

/// Fixed location of the task service. Not configurable at runtime.
const BASE_URL: &str = "http://localhost:1643/t";

/// Client-side cap on one whole round trip, connect through body read.
const TIMEOUT: Duration = Duration::from_secs(2);

/// What went wrong talking to the task service. Every variant is terminal
/// for the request (there are no retries); whether it also ends the process
/// is the caller's call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The round trip exceeded the fixed client-side timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Request construction, connection, send, or body-read failure.
    #[error("network: {0}")]
    Network(#[source] reqwest::Error),

    /// The body was not a well-formed task document.
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err)
        } else {
            ApiError::Network(err)
        }
    }
}

/// Blocking client for the task service CRUD endpoints. Holds a reqwest
/// client and the base URL it targets.
///
/// The HTTP status code is never inspected: the service speaks JSON on
/// success and failure alike, and any response body that decodes as a task
/// is taken at face value.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the fixed service location.
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Create a client against an explicit base URL. The program always
    /// targets the fixed location; this seam lets tests aim the client at a
    /// local server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// POST the task to the collection endpoint and decode the stored task
    /// (id and timestamps filled in by the server) from the response.
    pub fn create_task(&self, task: &Task) -> Result<Task, ApiError> {
        let text = self
            .request(Method::POST, &self.collection_url())
            .json(task)
            .send()?
            .text()?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch one task by id.
    pub fn fetch_task(&self, id: i64) -> Result<Task, ApiError> {
        let text = self.request(Method::GET, &self.item_url(id)).send()?.text()?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Delete one task by id. The response body is read and discarded.
    pub fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        self.request(Method::DELETE, &self.item_url(id)).send()?.text()?;
        Ok(())
    }

    /// The collection endpoint: `<base>/`.
    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// A single item endpoint: `<base>/<id>`.
    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Start a request carrying the two fixed headers. All three verbs send
    /// both, the content type included on bodiless GET and DELETE. A later
    /// `json(..)` body only fills the content type in when unset, so the
    /// charset-qualified value set here is what goes out.
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(USER_AGENT, "topcat")
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
    }
}
