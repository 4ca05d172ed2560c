//! Brace escaping for prompt templates.

/// Escape a multiline string so the prompt template does not interpret any
/// curly brace fields. Literal braces are spelled by doubling them, so LaTeX
/// text survives template rendering intact.
///
/// Doubling is not idempotent: applying this twice quadruples each brace.
pub fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}
