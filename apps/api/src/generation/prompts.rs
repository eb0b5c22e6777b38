// All LLM prompt templates for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Initial generation prompt.
/// Replace: {user_prompt}, {format_instructions}
pub const GENERATE_PROMPT_TEMPLATE: &str = r#"You are an expert HR professional and job description writer. Create a comprehensive, engaging job description based on the user's requirements.

USER REQUIREMENTS:
{user_prompt}

GUIDELINES:
1. Keep the tone professional and engaging; write for top talent while staying realistic about requirements
2. Cover the standard sections in the narrative description: About Us, Role Description, Responsibilities, Requirements, Benefits
3. Pull the relevant technical skills out as short tags
4. Infer a plausible salary range from the role, location and experience level
5. Write a short company description when the user did not supply one
6. Use industry-standard wording and formatting

{format_instructions}

Generate the complete job description now."#;

/// Refinement prompt. The model regenerates the whole record with the original as context.
/// Replace: {job_title}, {job_description}, {requirements}, {responsibilities},
///          {refinement_prompt}, {format_instructions}
pub const REFINE_PROMPT_TEMPLATE: &str = r#"You are refining an existing job description based on user feedback.

ORIGINAL JOB DESCRIPTION:
Title: {job_title}
Description: {job_description}
Requirements: {requirements}
Responsibilities: {responsibilities}

USER'S REFINEMENT REQUEST:
{refinement_prompt}

Apply the requested changes while keeping the quality and structure of the original. Return the FULL updated job description, not only the changed parts.

{format_instructions}

Provide the updated job description now."#;

/// Search-filter derivation prompt.
/// Replace: {job_title}, {experience_level}, {skills}, {job_description}, {json_only}
pub const SEARCH_FILTERS_PROMPT_TEMPLATE: &str = r#"Based on this job description, suggest LinkedIn Sales Navigator search filters that would surface suitable candidates.

Job Title: {job_title}
Experience Level: {experience_level}
Skills: {skills}
Job Description: {job_description}

Suggest:
1. Alternative job titles that candidates might currently hold
2. Types of companies (or specific companies) where ideal candidates might work
3. Geographic locations to search in
4. Key skills and technologies to filter by
5. Experience/seniority levels to target

Return a JSON object with EXACTLY these keys, each an array of strings:
{
  "jobTitles": [],
  "companies": [],
  "locations": [],
  "skills": [],
  "experienceLevels": []
}

{json_only}"#;
