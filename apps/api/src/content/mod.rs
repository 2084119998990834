// Content generation endpoints: posts, strategies, advanced formats.
// All LLM calls go through llm_client — no direct gateway calls here.

pub mod handlers;
pub mod post_type;
pub mod prompts;
