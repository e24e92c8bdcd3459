// Prompt templates for structuring résumé text with the model.

pub const RESUME_PARSE_SYSTEM: &str = "\
You are a precise resume parser. \
Turn raw resume text into structured JSON for a resume builder form. \
You MUST respond with valid JSON only, with no markdown fences and no explanations. \
Never invent details that are not present in the text; use an empty string instead.";

pub const RESUME_PARSE_PROMPT: &str = r#"Parse the following resume text and extract structured information. Return a JSON object with exactly this structure:

{
  "personalInfo": {
    "fullName": "string",
    "email": "string",
    "phone": "string",
    "location": "string",
    "linkedIn": "string (URL or empty)",
    "portfolio": "string (URL or empty)"
  },
  "professionalSummary": "string",
  "workExperience": [
    {
      "company": "string",
      "position": "string",
      "startDate": "string (YYYY-MM format)",
      "endDate": "string (YYYY-MM format or empty)",
      "current": boolean,
      "description": "string"
    }
  ],
  "education": [
    {
      "institution": "string",
      "degree": "string",
      "field": "string",
      "graduationDate": "string (YYYY-MM format)"
    }
  ],
  "skills": {
    "technical": "string (comma-separated)",
    "soft": "string (comma-separated or empty)"
  }
}

FORMATTING RULES:
- Work experience descriptions: turn long paragraphs into bullet points, one per line, each starting with "- ". Split responsibilities and achievements into separate bullets.
- Professional summary: if it is a long paragraph, condense it into 2-3 bullet points, one per line, each starting with "- ".
- Keep the original meaning; reorganize, do not embellish.
- Every bullet must be a complete, meaningful statement.

RESUME TEXT:
{resume_text}

Return ONLY the JSON object."#;

pub fn build_parse_prompt(resume_text: &str) -> String {
    RESUME_PARSE_PROMPT.replace("{resume_text}", resume_text)
}
