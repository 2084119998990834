// Prompt template for resume analysis.

/// Extracted resume text is cut to this many characters before interpolation.
/// Overflow is dropped silently.
pub const RESUME_TEXT_BUDGET: usize = 3000;

const RESUME_ANALYSIS_TEMPLATE: &str = "You are a resume parser. Extract the following details from the resume text:
- Key Skills
- Total Years of Experience
- Highest Education Qualification
Resume Text:
{resume_text}";

/// Prompt for POST /upload_resume/.
pub fn resume_analysis_prompt(text: &str) -> String {
    let excerpt: String = text.chars().take(RESUME_TEXT_BUDGET).collect();
    RESUME_ANALYSIS_TEMPLATE.replace("{resume_text}", &excerpt)
}
