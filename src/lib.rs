//! cvtailor: tailor a fixed LaTeX resume to a job posting with a local Ollama
//! model, and optionally compile the result to PDF.

pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};

use ports::{CompletionClient, DocumentRenderer};
use services::{HttpOllamaClient, PdfLatexRenderer};

pub use domain::{AppError, OllamaConfig};

/// Options for the combined tailor pipeline.
#[derive(Debug, Clone, Default)]
pub struct TailorOptions {
    /// Compile the completion as LaTeX after summarizing.
    pub render_pdf: bool,
    /// Directory for the produced PDF; a fresh temp directory when absent.
    pub output_dir: Option<PathBuf>,
}

/// Result of the combined tailor pipeline.
#[derive(Debug)]
pub struct TailorOutcome {
    /// The model's completion, untouched.
    pub completion: String,
    /// Path to the compiled PDF, when rendering was requested.
    pub pdf_path: Option<PathBuf>,
}

/// Compose the prompt for a job description without contacting the model.
pub fn compose_prompt(job_description: &str) -> String {
    domain::prompt::compose(job_description)
}

/// Request a tailored summary and skills section for a job description.
pub fn summarize(job_description: &str, config: &OllamaConfig) -> Result<String, AppError> {
    println!("Setting up Ollama model '{}' at {}", config.model, config.base_url);
    let client = HttpOllamaClient::new(config)?;

    println!("Generating summary using {}...", config.model);
    summarize_with(&client, job_description)
}

/// Compose the prompt and submit it through any completion client.
pub fn summarize_with(
    client: &impl CompletionClient,
    job_description: &str,
) -> Result<String, AppError> {
    let prompt = domain::prompt::compose(job_description);
    client.complete(&prompt)
}

/// Compile LaTeX source to a PDF and return the artifact's path.
pub fn render_pdf(latex_source: &str, output_dir: Option<&Path>) -> Result<PathBuf, AppError> {
    PdfLatexRenderer::new().render(latex_source, output_dir)
}

/// Full pipeline: summarize against the configured endpoint, then optionally
/// compile the completion to PDF.
pub fn tailor(
    job_description: &str,
    config: &OllamaConfig,
    options: &TailorOptions,
) -> Result<TailorOutcome, AppError> {
    println!("Setting up Ollama model '{}' at {}", config.model, config.base_url);
    let client = HttpOllamaClient::new(config)?;

    println!("Generating summary using {}...", config.model);
    tailor_with(&client, &PdfLatexRenderer::new(), job_description, options)
}

/// Pipeline over explicit port implementations.
pub fn tailor_with(
    client: &impl CompletionClient,
    renderer: &impl DocumentRenderer,
    job_description: &str,
    options: &TailorOptions,
) -> Result<TailorOutcome, AppError> {
    let completion = summarize_with(client, job_description)?;

    let pdf_path = if options.render_pdf {
        Some(renderer.render(&completion, options.output_dir.as_deref())?)
    } else {
        None
    };

    Ok(TailorOutcome { completion, pdf_path })
}
