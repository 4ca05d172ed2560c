//! Document renderer port definition.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for compiling text markup into a paginated binary document.
pub trait DocumentRenderer {
    /// Compile `source` and return the path to the produced document.
    ///
    /// When `output_dir` is `None` the implementation picks a fresh directory
    /// that outlives the call; cleanup is the caller's responsibility.
    fn render(&self, source: &str, output_dir: Option<&Path>) -> Result<PathBuf, AppError>;
}
