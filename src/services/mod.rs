mod ollama_http;
mod pdflatex;

pub use ollama_http::HttpOllamaClient;
pub use pdflatex::PdfLatexRenderer;
