//! Pure types and logic: configuration, errors, escaping, prompt assembly.

pub mod config;
pub mod error;
pub mod escape;
pub mod prompt;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GenerationOptions, OllamaConfig,
};
pub use error::AppError;
pub use escape::escape_braces;
