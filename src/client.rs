use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;

use crate::client_logger::ClientLogger;
use crate::error::{Error, Result};
use crate::observability;
use crate::persona;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fallback reply when no API key is configured.
///
/// Success-typed: the terminal shows this as a normal assistant reply and
/// steers the visitor toward the manual commands.
pub const OFFLINE_FALLBACK: &str = "Protocol Error: Interview Engine Offline. \
     Please use manual override: 'hire' or 'resume' to proceed.";

/// Fallback reply when the service returns an empty body.
pub const EMPTY_FALLBACK: &str = "System Warning: Empty response from candidate database.";

/// Fallback reply when the request fails in transit.
pub const INTERRUPTED_FALLBACK: &str =
    "System Critical: Connection interrupted. Please proceed to 'hire' command manually.";

/// Text generation expected by the terminal session.
///
/// The contract is total: `generate` always resolves to displayable text,
/// mapping unavailability and failure to fixed fallback strings. Test stubs
/// implement this to drive the session without a network.
#[async_trait::async_trait]
pub trait GenerateText: Send + Sync {
    /// Returns true if a credential is configured and a call would be attempted.
    fn is_available(&self) -> bool {
        true
    }

    /// Generate a reply for a single freeform prompt.
    async fn generate(&self, prompt: &str) -> String;
}

/// Client for the generative-text service behind the interview terminal.
///
/// A missing credential is not an error: the client constructs in offline
/// mode and `generate` short-circuits to [`OFFLINE_FALLBACK`] without
/// touching the network.
#[derive(Clone)]
pub struct GenerationClient {
    api_key: Option<String>,
    client: ReqwestClient,
    base_url: String,
    model: String,
    system_instruction: String,
    timeout: Duration,
    logger: Option<Arc<dyn ClientLogger>>,
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("available", &self.is_available())
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GenerationClient {
    /// Create a new generation client.
    ///
    /// The API key can be provided directly or read from the DOSSIER_API_KEY
    /// environment variable. When neither is present the client is offline.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key.or_else(|| env::var("DOSSIER_API_KEY").ok());
        Self::with_api_key(api_key)
    }

    /// Create a new client from an explicit credential, bypassing the
    /// environment. `None` constructs an offline client.
    pub fn with_api_key(api_key: Option<String>) -> Result<Self> {
        let timeout = DEFAULT_TIMEOUT;
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            api_key,
            client,
            base_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_instruction: persona::SYSTEM_INSTRUCTION.to_string(),
            timeout,
            logger: None,
        })
    }

    /// Overrides the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the persona system instruction.
    pub fn with_system_instruction(mut self, system_instruction: impl Into<String>) -> Self {
        self.system_instruction = system_instruction.into();
        self
    }

    /// Installs a logger that captures round-trips and swallowed errors.
    pub fn with_logger(mut self, logger: Arc<dyn ClientLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Returns the configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Create and return default headers for API requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &self.api_key
            && let Ok(value) = HeaderValue::from_str(api_key)
        {
            headers.insert("x-goog-api-key", value);
        }
        headers
    }

    /// Process API response errors and convert to our Error type.
    async fn process_error_response(response: Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        // Try to parse error response body
        #[derive(Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(Deserialize)]
        struct ErrorDetail {
            status: Option<String>,
            message: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let parsed_error = serde_json::from_str::<ErrorResponse>(&error_body).ok();
        let error_type = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.status.clone());
        let error_message = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| error_body.clone());

        // Map HTTP status code to appropriate error type
        match status_code {
            400 => Error::bad_request(error_message, None),
            401 => Error::authentication(error_message),
            403 => Error::permission(error_message),
            404 => Error::not_found(error_message),
            408 => Error::timeout(error_message, None),
            429 => Error::rate_limit(error_message, retry_after),
            500 => Error::internal_server(error_message),
            502..=504 => Error::service_unavailable(error_message, retry_after),
            _ => Error::api(status_code, error_type, error_message),
        }
    }

    /// Issue one generateContent round-trip. No retries.
    async fn request(&self, prompt: &str) -> Result<String> {
        let url = format!("{}models/{}:generateContent", self.base_url, self.model);
        let params = GenerateContentRequest::single_shot(prompt, &self.system_instruction);

        observability::CLIENT_REQUESTS.click();
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .json(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(
                        format!("Request timed out: {}", e),
                        Some(self.timeout.as_secs_f64()),
                    )
                } else if e.is_connect() {
                    Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
                }
            })?;

        observability::CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }

        let body = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                Error::serialization(
                    format!("Failed to parse response: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(body.text())
    }
}

#[async_trait::async_trait]
impl GenerateText for GenerationClient {
    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a reply for a freeform prompt.
    ///
    /// Total: every failure mode degrades to fixed fallback text that steers
    /// the visitor toward the manual commands. Errors are reported to the
    /// installed [`ClientLogger`], never to the caller.
    async fn generate(&self, prompt: &str) -> String {
        if !self.is_available() {
            observability::CLIENT_OFFLINE.click();
            return OFFLINE_FALLBACK.to_string();
        }

        match self.request(prompt).await {
            Ok(text) => {
                if let Some(logger) = &self.logger {
                    logger.log_generation(prompt, &text);
                }
                if text.trim().is_empty() {
                    observability::CLIENT_FALLBACKS.click();
                    EMPTY_FALLBACK.to_string()
                } else {
                    text
                }
            }
            Err(err) => {
                observability::CLIENT_REQUEST_ERRORS.click();
                observability::CLIENT_FALLBACKS.click();
                if let Some(logger) = &self.logger {
                    logger.log_fallback(prompt, &err);
                }
                INTERRUPTED_FALLBACK.to_string()
            }
        }
    }
}
