//! Completion client port definition.

use crate::domain::AppError;

/// Port for submitting a prompt to a language model and receiving its
/// completion.
pub trait CompletionClient {
    /// Submit one prompt and block until the completion arrives.
    fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

/// Mock client for testing without a model server.
#[derive(Debug, Clone)]
pub struct MockCompletionClient {
    /// Canned completion returned for every prompt.
    pub completion: String,
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self { completion: "A strong one sentence summary.".to_string() }
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(&self, _prompt: &str) -> Result<String, AppError> {
        Ok(self.completion.clone())
    }
}
