use std::io;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Library-wide error type for cvtailor operations.
///
/// Every failure the model client or the renderer can hit is a distinct
/// variant so callers can branch without parsing message text.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The model endpoint refused the connection.
    #[error("Could not connect to Ollama at {base_url}. Is Ollama running?")]
    Connection { base_url: Url },

    /// The model request exceeded the configured timeout.
    #[error("Request to Ollama timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// Transport-level failure other than refusal or timeout.
    #[error("Error connecting to Ollama: {0}")]
    ModelRequest(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("Ollama returned HTTP {status}: {body}")]
    ModelStatus { status: u16, body: String },

    /// The reply did not carry a completion in the expected shape.
    #[error("Failed to parse Ollama response: {0}")]
    MalformedResponse(String),

    /// pdflatex exited nonzero or could not be invoked.
    #[error("LaTeX compilation failed on pass {pass}: {log}")]
    LatexCompilation { pass: u8, log: String },

    /// The compiler reported success but the PDF is not on disk.
    #[error("PDF file was not generated at {}", .0.display())]
    PdfMissing(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_carries_recognizable_marker() {
        let err = AppError::Connection {
            base_url: Url::parse("http://localhost:11434").unwrap(),
        };
        let message = err.to_string();
        assert!(message.contains("Could not connect to Ollama"));
        assert!(message.contains("http://localhost:11434"));
    }

    #[test]
    fn timeout_error_names_the_configured_limit() {
        let err = AppError::Timeout { timeout_secs: 600 };
        assert!(err.to_string().contains("timed out after 600 seconds"));
    }

    #[test]
    fn compilation_error_carries_pass_and_log() {
        let err =
            AppError::LatexCompilation { pass: 2, log: "! Undefined control sequence.".into() };
        let message = err.to_string();
        assert!(message.contains("pass 2"));
        assert!(message.contains("Undefined control sequence"));
    }
}
