use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cvtailor::domain::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use cvtailor::{AppError, OllamaConfig, TailorOptions};
use url::Url;

#[derive(Parser)]
#[command(name = "cvtailor")]
#[command(version)]
#[command(
    about = "Tailor a LaTeX resume to a job posting with a local Ollama model",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct EndpointArgs {
    /// Base URL of the Ollama server
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: Url,
    /// Model identifier to run
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

impl EndpointArgs {
    fn into_config(self) -> OllamaConfig {
        OllamaConfig { base_url: self.base_url, model: self.model, timeout_secs: self.timeout }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Request a tailored one-sentence summary and skills section
    #[clap(visible_alias = "s")]
    Summarize {
        /// File with the job description; reads stdin when omitted
        job_file: Option<PathBuf>,
        #[command(flatten)]
        endpoint: EndpointArgs,
        /// Print the composed prompt instead of contacting the model
        #[arg(long)]
        dry_run: bool,
    },
    /// Compile LaTeX source to a PDF with pdflatex
    #[clap(visible_alias = "r")]
    Render {
        /// File with the LaTeX source; reads stdin when omitted
        tex_file: Option<PathBuf>,
        /// Directory for the produced PDF; a fresh temp directory when omitted
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Summarize, then optionally compile the model output to a PDF
    #[clap(visible_alias = "t")]
    Tailor {
        /// File with the job description; reads stdin when omitted
        job_file: Option<PathBuf>,
        #[command(flatten)]
        endpoint: EndpointArgs,
        /// Compile the completion as LaTeX after summarizing
        #[arg(long)]
        pdf: bool,
        /// Directory for the produced PDF; a fresh temp directory when omitted
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

fn read_input(path: Option<&PathBuf>) -> Result<String, AppError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn summarize(
    job_file: Option<PathBuf>,
    endpoint: EndpointArgs,
    dry_run: bool,
) -> Result<(), AppError> {
    let job_description = read_input(job_file.as_ref())?;

    if dry_run {
        println!("{}", cvtailor::compose_prompt(&job_description));
        return Ok(());
    }

    println!("\nGenerating summary, please wait...");
    let summary = cvtailor::summarize(&job_description, &endpoint.into_config())?;
    println!("\nSummary:\n{}", summary);
    Ok(())
}

fn render(tex_file: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<(), AppError> {
    let source = read_input(tex_file.as_ref())?;
    let pdf_path = cvtailor::render_pdf(&source, output_dir.as_deref())?;
    println!("PDF generated at: {}", pdf_path.display());
    Ok(())
}

fn tailor(
    job_file: Option<PathBuf>,
    endpoint: EndpointArgs,
    pdf: bool,
    output_dir: Option<PathBuf>,
) -> Result<(), AppError> {
    let job_description = read_input(job_file.as_ref())?;

    println!("\nGenerating summary, please wait...");
    let options = TailorOptions { render_pdf: pdf, output_dir };
    let outcome = cvtailor::tailor(&job_description, &endpoint.into_config(), &options)?;

    println!("\nTailored LaTeX Code:\n{}", outcome.completion);
    if let Some(pdf_path) = outcome.pdf_path {
        println!("PDF generated at: {}", pdf_path.display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Summarize { job_file, endpoint, dry_run } => {
            summarize(job_file, endpoint, dry_run)
        }
        Commands::Render { tex_file, output_dir } => render(tex_file, output_dir),
        Commands::Tailor { job_file, endpoint, pdf, output_dir } => {
            tailor(job_file, endpoint, pdf, output_dir)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
