//! Job description record types. The serde shape IS the validation contract:
//! every field except `salary_range` is required and `work_type` is a closed set.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type of employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum WorkType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

/// Salary band. Values are free-form strings ("120000", "120k").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SalaryRange {
    /// Minimum salary
    pub min: String,
    /// Maximum salary
    pub max: String,
    /// Currency code
    pub currency: String,
}

/// A complete, schema-conformant job description.
///
/// Produced fresh by every generate or refine call; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    /// The job title/role
    pub job_title: String,
    /// Company name or type
    pub company: String,
    /// Job location
    pub location: String,
    /// Type of employment
    pub work_type: WorkType,
    /// Required experience level
    pub experience_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    /// Complete job description with sections
    pub job_description: String,
    /// List of key responsibilities
    pub key_responsibilities: Vec<String>,
    /// List of requirements and qualifications
    pub requirements: Vec<String>,
    /// Technical skills and technologies
    pub skills_tags: Vec<String>,
    /// Benefits and perks offered
    pub benefits: Vec<String>,
    /// Brief company description
    pub company_description: String,
}

/// Candidate-search filter ideas derived from a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilterSuggestions {
    pub job_titles: Vec<String>,
    pub companies: Vec<String>,
    pub locations: Vec<String>,
    pub skills: Vec<String>,
    pub experience_levels: Vec<String>,
}

/// Serialized JSON Schema of `JobDescription`, embedded in generation prompts.
pub fn job_description_schema() -> String {
    let schema = schemars::schema_for!(JobDescription);
    // RootSchema serialization is infallible.
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
