//! Ollama API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GenerationOptions, OllamaConfig};
use crate::ports::CompletionClient;

/// Blocking HTTP client for a local Ollama server.
#[derive(Debug, Clone)]
pub struct HttpOllamaClient {
    base_url: Url,
    model: String,
    timeout_secs: u64,
    options: GenerationOptions,
    client: Client,
}

impl HttpOllamaClient {
    /// Create a new client bound to the given endpoint, model, and timeout.
    pub fn new(config: &OllamaConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
            options: GenerationOptions::default(),
            client,
        })
    }

    fn generate_url(&self) -> Result<Url, AppError> {
        self.base_url
            .join("api/generate")
            .map_err(|e| AppError::Configuration(format!("Invalid Ollama base URL: {}", e)))
    }

    fn classify(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Timeout { timeout_secs: self.timeout_secs }
        } else if error.is_connect() {
            AppError::Connection { base_url: self.base_url.clone() }
        } else {
            AppError::ModelRequest(error.to_string())
        }
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a GenerationOptions,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl CompletionClient for HttpOllamaClient {
    /// One synchronous generation request. The completion is returned as-is,
    /// with no trimming or validation of its structure.
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request =
            ApiRequest { model: &self.model, prompt, stream: false, options: &self.options };

        let response = self
            .client
            .post(self.generate_url()?)
            .json(&request)
            .send()
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ModelStatus { status: status.as_u16(), body });
        }

        let api_response: ApiResponse =
            response.json().map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        if let Some(error) = api_response.error {
            return Err(AppError::ModelStatus { status: status.as_u16(), body: error });
        }

        api_response
            .response
            .ok_or_else(|| AppError::MalformedResponse("no completion text in reply".into()))
    }
}
