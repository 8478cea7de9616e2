/// Surface realization: the annotated template text goes to the Geneea
/// generator, which resolves the `morph(...)` calls and returns the article.

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::core::lexicalizer::LexicalizedReport;

pub const DEFAULT_ENDPOINT: &str = "https://generator.geneea.com/generate";
pub const API_KEY_VAR: &str = "GENJA_API_KEY";
pub const ENDPOINT_VAR: &str = "GENEEA_ENDPOINT";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const TEMPLATE_ID: &str = "tmpl-2";
const TEMPLATE_NAME: &str = "body template";

#[derive(Debug, Error)]
pub enum RealizeError {
    #[error("environment variable {0} is not set")]
    MissingApiKey(&'static str),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("realizer answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("realizer response has no 'article'")]
    MissingArticle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateBody {
    pub id: String,
    pub name: String,
    pub body: String,
}

/// Request payload for the generator: one template and an empty data
/// object, since every value is already inlined in the template text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealizeRequest {
    pub templates: Vec<TemplateBody>,
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl RealizeRequest {
    pub fn from_report(report: &LexicalizedReport) -> Self {
        Self {
            templates: vec![TemplateBody {
                id: TEMPLATE_ID.to_string(),
                name: TEMPLATE_NAME.to_string(),
                body: report.template_body(),
            }],
            data: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RealizeResponse {
    article: Option<String>,
}

/// Extracts the article from a generator response body.
pub fn parse_response(body: &str) -> Result<String, RealizeError> {
    let response: RealizeResponse = serde_json::from_str(body)?;
    response.article.ok_or(RealizeError::MissingArticle)
}

/// Turns a lexicalized report into final text.
pub trait Realizer {
    fn realize(&self, request: &RealizeRequest) -> Result<String, RealizeError>;
}

/// Local rendering without the generator: title, a blank line, then one
/// sentence per line. Morphology annotations are left in place.
pub fn render_plain(report: &LexicalizedReport) -> String {
    format!("{}\n\n{}", report.title, report.body.join("\n"))
}

#[derive(Debug, Clone)]
pub struct RealizerConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl RealizerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the API key and optional endpoint override from the process
    /// environment.
    pub fn from_env() -> Result<Self, RealizeError> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| RealizeError::MissingApiKey(API_KEY_VAR))?;
        let mut config = Self::new(api_key);
        if let Ok(endpoint) = std::env::var(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking client for the Geneea generator.
pub struct GeneeaClient {
    client: Client,
    config: RealizerConfig,
}

impl GeneeaClient {
    pub fn new(config: RealizerConfig) -> Result<Self, RealizeError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl Realizer for GeneeaClient {
    fn realize(&self, request: &RealizeRequest) -> Result<String, RealizeError> {
        tracing::info!(endpoint = %self.config.endpoint, "calling realizer");
        let response = self
            .client
            .post(&self.config.endpoint)
            .header(AUTHORIZATION, &self.config.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(RealizeError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_response(&body)
    }
}
