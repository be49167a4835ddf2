//! Outline generation service and its HTTP implementation.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::requirements::CourseForm;

/// Path of the generation endpoint relative to the server base URL.
pub const GENERATE_PATH: &str = "/api/generate_course";

/// Text shown when the server succeeds without returning an outline.
pub const EMPTY_OUTLINE: &str = "No course outline generated";

/// Default request timeout. Generation with web search is slow.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Failure modes of an outline request.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Server answered with `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// Request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Response body was not the expected JSON document.
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Server answered with an error status and no JSON body.
    #[error("server returned HTTP {0}")]
    Status(u16),
    /// Upload file could not be read.
    #[error("cannot read upload {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// JSON body returned by the generation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub final_outline: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Converts the response into outline text or a rejection.
    ///
    /// A successful response with a missing or empty outline yields
    /// [`EMPTY_OUTLINE`]. A failed response without a message yields
    /// `"Unknown error"`.
    pub fn into_outline(self) -> Result<String, GenerateError> {
        if self.success {
            Ok(self
                .final_outline
                .filter(|outline| !outline.is_empty())
                .unwrap_or_else(|| EMPTY_OUTLINE.to_string()))
        } else {
            Err(GenerateError::Rejected(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}

/// Source of generated course outlines.
#[async_trait]
pub trait OutlineService: Send + Sync {
    /// Requests an outline for the given form.
    async fn generate(&self, form: &CourseForm) -> Result<String, GenerateError>;
}

/// Generation endpoint client over HTTP multipart.
#[derive(Debug, Clone)]
pub struct HttpOutlineService {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpOutlineService {
    /// Creates client for server at `base_url` with the given timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, http))
    }

    /// Creates client reusing an existing reqwest client.
    pub fn with_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint_url(base_url),
            http,
        }
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn build_form(&self, form: &CourseForm) -> Result<Form, GenerateError> {
        let mut multipart = Form::new();

        if let Some(path) = &form.file {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| GenerateError::File {
                    path: path.display().to_string(),
                    source,
                })?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string());
            debug!(file = %file_name, bytes = bytes.len(), "attaching upload");
            multipart = multipart.part("file", Part::bytes(bytes).file_name(file_name));
        }

        Ok(multipart
            .text("requirements", form.requirements())
            .text("enable_search", form.enable_search.to_string()))
    }
}

#[async_trait]
impl OutlineService for HttpOutlineService {
    async fn generate(&self, form: &CourseForm) -> Result<String, GenerateError> {
        let multipart = self.build_form(form).await?;

        info!(endpoint = %self.endpoint, search = form.enable_search, "requesting course outline");
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(multipart)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        parse_response(status.as_u16(), &body)?.into_outline()
    }
}

/// Joins the server base URL and the generation path.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GENERATE_PATH)
}

/// Decodes a response body, reporting bare error statuses as such.
///
/// # Errors
///
/// Returns [`GenerateError::Status`] when the status is not 2xx and the body
/// is not JSON, otherwise [`GenerateError::Decode`] for malformed bodies.
pub fn parse_response(status: u16, body: &str) -> Result<GenerateResponse, GenerateError> {
    match serde_json::from_str::<GenerateResponse>(body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !(200..300).contains(&status) => Err(GenerateError::Status(status)),
        Err(e) => Err(GenerateError::Decode(e)),
    }
}
