//! Endpoint and sampling configuration for the Ollama client.

use serde::Serialize;
use url::Url;

/// Default Ollama endpoint on the loopback interface.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3.1:8b-64k";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Ollama endpoint configuration.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server.
    pub base_url: Url,
    /// Model identifier to run.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("Default base URL must be valid")
}

/// Sampling options sent with every generation request.
///
/// Temperature is kept low for deterministic-leaning output; GPU layers are
/// maxed out and adaptive sampling is disabled so inference stays off the CPU.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOptions {
    pub temperature: f64,
    pub num_gpu: u32,
    pub num_cpu: u32,
    pub mirostat: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self { temperature: 0.2, num_gpu: 999, num_cpu: 0, mirostat: 0 }
    }
}
