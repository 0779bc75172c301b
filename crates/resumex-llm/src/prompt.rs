//! Prompt assembly for the extraction call.

pub(crate) const SYSTEM_PROMPT: &str = "You are an expert resume parser. Always return valid \
                                        JSON that strictly follows the provided schema.";

/// Prompt-friendly rendering of the payload schema.
pub(crate) fn schema_prompt() -> &'static str {
    r#"{
  "name": "string", // Full name of the candidate
  "email": "string", // Email address of the candidate
  "phone": "string", // Phone number of the candidate
  "years_of_experience": number, // Total years of experience (e.g., 5.2)
  "education": [ // List of education entries
    {
      "degree": "string",
      "school": "string",
      "year": integer
    }
  ],
  "skills": ["string"], // List of skills
  "work_experience": [ // List of work experience entries
    {
      "company": "string",
      "title": "string",
      "start_year": integer,
      "end_year": integer or null,
      "description": "string"
    }
  ]
}"#
}

pub(crate) fn extraction_prompt(resume_text: &str) -> String {
    format!(
        "Extract information from the resume below and return it as a JSON object that \
         strictly follows this schema:\n{schema}\n\n\
         Rules:\n\
         1. Email must be a valid email format\n\
         2. Phone number should be in a standard format\n\
         3. education.year and work_experience.start_year/end_year must be integers\n\
         4. If a work experience entry is ongoing, use null for end_year\n\
         5. skills must be an array of strings\n\
         6. If a field is missing, use null or an empty array as appropriate\n\
         7. If the resume is not in English, translate it to English first\n\
         8. Return only valid JSON, with property names and string values in double quotes\n\
         9. Do not wrap the JSON in triple backticks or any other formatting\n\
         10. Do not include trailing commas, comments, or additional properties\n\n\
         Resume:\n{resume_text}\n\n\
         JSON:",
        schema = schema_prompt(),
    )
}

/// Strip markdown fences and any prose around the JSON object. Models
/// wrap output in ```json fences often enough that this is the first
/// thing done to every completion.
pub(crate) fn clean_json_block(raw: &str) -> &str {
    let mut content = raw.trim();
    if let Some(stripped) = content.strip_prefix("```json") {
        content = stripped.strip_suffix("```").unwrap_or(stripped).trim();
    } else if let Some(stripped) = content.strip_prefix("```") {
        content = stripped.strip_suffix("```").unwrap_or(stripped).trim();
    }
    if let (Some(open), Some(close)) = (content.find('{'), content.rfind('}')) {
        if open < close {
            content = &content[open..=close];
        }
    }
    content
}
