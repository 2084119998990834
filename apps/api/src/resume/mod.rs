// Resume upload and analysis: PDF text extraction feeding one LLM call.

pub mod extract;
pub mod handlers;
pub mod prompts;
