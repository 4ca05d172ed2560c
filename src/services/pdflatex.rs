//! PDF rendering by shelling out to pdflatex.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;
use crate::ports::DocumentRenderer;

const TEX_FILE: &str = "document.tex";
const PDF_FILE: &str = "document.pdf";

/// Renderer invoking an external `pdflatex` executable.
#[derive(Debug, Clone)]
pub struct PdfLatexRenderer {
    program: String,
}

impl Default for PdfLatexRenderer {
    fn default() -> Self {
        Self { program: "pdflatex".to_string() }
    }
}

impl PdfLatexRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn run_pass(&self, pass: u8, output_dir: &Path, tex_path: &Path) -> Result<(), AppError> {
        let output = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg("-output-directory")
            .arg(output_dir)
            .arg(tex_path)
            .output()
            .map_err(|e| AppError::LatexCompilation {
                pass,
                log: format!("failed to invoke {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let log = if stderr.is_empty() { stdout } else { stderr };
            return Err(AppError::LatexCompilation {
                pass,
                log: if log.is_empty() { "Unknown error".to_string() } else { log },
            });
        }
        Ok(())
    }
}

impl DocumentRenderer for PdfLatexRenderer {
    /// Write `source` to `document.tex` and compile it twice, so pdflatex
    /// resolves cross-references on the second pass. Both passes run
    /// non-interactively with diagnostics captured rather than shown live.
    ///
    /// Without an explicit `output_dir` a fresh temp directory is created and
    /// kept; the caller owns its cleanup.
    fn render(&self, source: &str, output_dir: Option<&Path>) -> Result<PathBuf, AppError> {
        let output_dir = match output_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                dir.to_path_buf()
            }
            None => tempfile::Builder::new().prefix("cvtailor-").tempdir()?.keep(),
        };

        let tex_path = output_dir.join(TEX_FILE);
        let pdf_path = output_dir.join(PDF_FILE);

        fs::write(&tex_path, source)?;

        self.run_pass(1, &output_dir, &tex_path)?;
        self.run_pass(2, &output_dir, &tex_path)?;

        // pdflatex can exit zero without producing output, e.g. on an empty
        // source file.
        if !pdf_path.exists() {
            return Err(AppError::PdfMissing(pdf_path));
        }

        Ok(pdf_path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const MINIMAL_DOC: &str = "\\documentclass{article}\\begin{document}hi\\end{document}";

    fn pdflatex_available() -> bool {
        Command::new("pdflatex")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    #[test]
    fn render_produces_nonempty_pdf() {
        if !pdflatex_available() {
            eprintln!("skipping: pdflatex not on PATH");
            return;
        }
        let dir = TempDir::new().unwrap();
        let renderer = PdfLatexRenderer::new();

        let pdf_path = renderer.render(MINIMAL_DOC, Some(dir.path())).unwrap();

        assert_eq!(pdf_path.extension().unwrap(), "pdf");
        assert!(pdf_path.exists());
        assert!(fs::metadata(&pdf_path).unwrap().len() > 0);
    }

    #[test]
    fn render_rejects_broken_source() {
        if !pdflatex_available() {
            eprintln!("skipping: pdflatex not on PATH");
            return;
        }
        let dir = TempDir::new().unwrap();
        let renderer = PdfLatexRenderer::new();

        let err = renderer.render("\\badcommand{", Some(dir.path())).unwrap_err();

        assert!(matches!(err, AppError::LatexCompilation { pass: 1, .. }), "got {:?}", err);
    }

    #[test]
    fn render_twice_overwrites_previous_artifact() {
        if !pdflatex_available() {
            eprintln!("skipping: pdflatex not on PATH");
            return;
        }
        let dir = TempDir::new().unwrap();
        let renderer = PdfLatexRenderer::new();

        let first = renderer.render(MINIMAL_DOC, Some(dir.path())).unwrap();
        let second = renderer
            .render("\\documentclass{article}\\begin{document}bye\\end{document}", Some(dir.path()))
            .unwrap();

        assert_eq!(first, second);
        assert!(second.exists());
    }

    #[test]
    fn render_creates_missing_output_dir() {
        if !pdflatex_available() {
            eprintln!("skipping: pdflatex not on PATH");
            return;
        }
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("out");
        let renderer = PdfLatexRenderer::new();

        let pdf_path = renderer.render(MINIMAL_DOC, Some(&nested)).unwrap();

        assert!(pdf_path.starts_with(&nested));
        assert!(pdf_path.exists());
    }

    #[test]
    fn missing_artifact_is_a_distinct_error() {
        // `true` exits zero without producing a PDF, which exercises the
        // defensive check behind the compiler's back.
        let dir = TempDir::new().unwrap();
        let renderer = PdfLatexRenderer { program: "true".to_string() };

        let err = renderer.render(MINIMAL_DOC, Some(dir.path())).unwrap_err();

        assert!(matches!(err, AppError::PdfMissing(_)), "got {:?}", err);
        assert!(err.to_string().contains("document.pdf"));
    }

    #[test]
    fn unavailable_compiler_reports_invocation_failure() {
        let dir = TempDir::new().unwrap();
        let renderer = PdfLatexRenderer { program: "pdflatex-that-does-not-exist".to_string() };

        let err = renderer.render(MINIMAL_DOC, Some(dir.path())).unwrap_err();

        match err {
            AppError::LatexCompilation { pass, log } => {
                assert_eq!(pass, 1);
                assert!(log.contains("failed to invoke"));
            }
            other => panic!("expected LatexCompilation, got {:?}", other),
        }
    }

    #[test]
    fn source_is_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let renderer = PdfLatexRenderer { program: "true".to_string() };

        let _ = renderer.render(MINIMAL_DOC, Some(dir.path()));

        let written = fs::read_to_string(dir.path().join(TEX_FILE)).unwrap();
        assert_eq!(written, MINIMAL_DOC);
    }
}
