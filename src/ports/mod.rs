mod completion;
mod renderer;

pub use completion::{CompletionClient, MockCompletionClient};
pub use renderer::DocumentRenderer;
