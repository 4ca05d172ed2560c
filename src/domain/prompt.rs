//! Prompt construction for resume tailoring.
//!
//! The instruction template uses `str.format`-style syntax: doubled braces
//! spell literal braces and `{job_description}` is the single placeholder.
//! The resume body is escaped when the template is built so its LaTeX braces
//! survive rendering; the job description is substituted raw.

use crate::domain::escape::escape_braces;

/// The fixed resume, embedded as an asset so content stays separate from
/// orchestration.
pub static RESUME_TEX: &str = include_str!("assets/resume.tex");

static INSTRUCTION: &str = "Given the following resume in latex, craft a STRONG one sentence summary adhering to the job description below that I can display in my resume. Also list a new technical skills section that adheres to the position overview below, including the name of the company and position if possible. The one sentence summary should be professional and advertise myself towards the position at hand.";

const PLACEHOLDER_NAME: &str = "job_description";

/// Build the full prompt for the embedded resume and the given job
/// description, ending with the `Summary:` cue that tells the model where to
/// begin its completion.
pub fn compose(job_description: &str) -> String {
    compose_with(RESUME_TEX, job_description)
}

/// Same as [`compose`] but against a caller-supplied resume body.
pub fn compose_with(resume: &str, job_description: &str) -> String {
    let head = format!("{INSTRUCTION}\n\nresume:\n{resume}\n\njob description:");
    let template = format!("{}{{{PLACEHOLDER_NAME}}}\n\nSummary:", escape_braces(&head));
    render(&template, job_description)
}

/// Render a template left to right: `{{`/`}}` collapse to literal braces, the
/// `{job_description}` field is replaced with the given value, and anything
/// else passes through unchanged.
///
/// The substituted value never re-enters the scanner, so it lands in the
/// prompt byte for byte. Tokenizing left to right also means a doubled brace
/// is consumed before it can be mistaken for the start of a field, so an
/// escaped literal `{{job_description}}` in the resume is never substituted.
fn render(template: &str, job_description: &str) -> String {
    let mut out = String::with_capacity(template.len() + job_description.len());
    let mut rest = template;

    while let Some(at) = rest.find(['{', '}']) {
        out.push_str(&rest[..at]);
        let brace = rest.as_bytes()[at];
        let after = &rest[at + 1..];

        if after.as_bytes().first() == Some(&brace) {
            // Doubled brace: emit one literal.
            out.push(brace as char);
            rest = &after[1..];
        } else if brace == b'{' {
            match after.find('}') {
                Some(end) => {
                    let name = &after[..end];
                    if name == PLACEHOLDER_NAME {
                        out.push_str(job_description);
                    } else {
                        // Unrecognized field: pass through unchanged.
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    // Unmatched opening brace: pass through unchanged.
                    out.push('{');
                    rest = after;
                }
            }
        } else {
            // Lone closing brace: pass through unchanged.
            out.push('}');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
