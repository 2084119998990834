// Prompt templates for the content endpoints.
// User-supplied fields are interpolated verbatim — no escaping, no
// sanitization. Each builder is a pure function of its inputs.

use crate::content::post_type::PostType;

/// Prompt for POST /generate_post/.
pub fn post_prompt(user_role: &str, industry: &str, topic: &str) -> String {
    format!(
        "Create a professional LinkedIn post about {topic} in the {industry} \
         industry for a person working as {user_role}."
    )
}

/// Prompt for POST /content_strategy/.
pub fn strategy_prompt(user_role: &str, industry: &str) -> String {
    format!(
        "You are a LinkedIn content strategist. Suggest 5 types of content a \
         {user_role} in the {industry} industry should post to grow their \
         personal brand.\n\
         Format each like:\n\
         1. [Content Type] - [Short Description]"
    )
}

/// Prompt for POST /generate_advanced_content/.
/// Format guidance lists all three supported post types; the model follows
/// the branch matching `post_type`.
pub fn advanced_content_prompt(
    post_type: PostType,
    user_role: &str,
    industry: &str,
    topic: &str,
) -> String {
    format!(
        "You are a professional LinkedIn content creator.\n\
         \n\
         Generate a {post_type} for a {user_role} in the {industry} industry \
         about the topic: \"{topic}\".\n\
         \n\
         Format guidelines:\n\
         - If 'article': Include a title and 3-5 detailed paragraphs.\n\
         - If 'update': Make it short, engaging, and suitable for a quick scroll (2-3 paragraphs).\n\
         - If 'carousel': Include 5-7 slide titles with one-line captions (Slide 1: Title - Caption)."
    )
}
