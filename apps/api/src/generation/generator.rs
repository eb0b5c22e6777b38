//! Job Description Generator: prompt construction, schema-constrained parsing,
//! and refinement-as-regeneration over an injected `ChatModel`.
//!
//! Flow (generate / refine): build prompt → one model call → strip code fence →
//! deserialize into `JobDescription` (reject on missing or mistyped fields).
//!
//! `derive_search_filters` shares the call path but never fails: any error is
//! logged and replaced with a fallback built from the input record.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::generation::models::{
    job_description_schema, JobDescription, SearchFilterSuggestions,
};
use crate::generation::prompts::{
    GENERATE_PROMPT_TEMPLATE, REFINE_PROMPT_TEMPLATE, SEARCH_FILTERS_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{fill_template, format_instructions, JSON_OBJECT_ONLY};
use crate::llm_client::{strip_code_fence, ChatModel, LlmError};

const FALLBACK_COMPANIES: [&str; 2] = ["Technology Companies", "Startups"];
const FALLBACK_LOCATIONS: [&str; 2] = ["Remote", "Major Tech Hubs"];

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("model reply does not match the job description schema: {0}")]
    InvalidReply(#[source] serde_json::Error),
}

/// Stateless generator; clones share the same model client.
#[derive(Clone)]
pub struct JobDescriptionGenerator {
    llm: Arc<dyn ChatModel>,
    format_instructions: Arc<str>,
}

impl JobDescriptionGenerator {
    pub fn new(llm: Arc<dyn ChatModel>) -> Self {
        Self {
            llm,
            format_instructions: format_instructions(&job_description_schema()).into(),
        }
    }

    /// Generates a complete job description from free-text requirements.
    pub async fn generate(&self, requirements: &str) -> Result<JobDescription, GenerationError> {
        if requirements.trim().is_empty() {
            return Err(GenerationError::EmptyInput("requirements"));
        }

        let prompt = fill_template(
            GENERATE_PROMPT_TEMPLATE,
            &[
                ("user_prompt", requirements),
                ("format_instructions", &*self.format_instructions),
            ],
        );

        let job = self.complete_record(&prompt).await?;
        info!(
            "Generated job description '{}' ({:?}) with model {}",
            job.job_title,
            job.work_type,
            self.llm.model()
        );
        Ok(job)
    }

    /// Produces a new, complete job description by re-prompting with the original
    /// as context. The result is never a partial patch of `original`.
    pub async fn refine(
        &self,
        original: &JobDescription,
        instruction: &str,
    ) -> Result<JobDescription, GenerationError> {
        if instruction.trim().is_empty() {
            return Err(GenerationError::EmptyInput("refinement instruction"));
        }

        let requirements = original.requirements.join(", ");
        let responsibilities = original.key_responsibilities.join(", ");
        let prompt = fill_template(
            REFINE_PROMPT_TEMPLATE,
            &[
                ("job_title", original.job_title.as_str()),
                ("job_description", original.job_description.as_str()),
                ("requirements", requirements.as_str()),
                ("responsibilities", responsibilities.as_str()),
                ("refinement_prompt", instruction),
                ("format_instructions", &*self.format_instructions),
            ],
        );

        let job = self.complete_record(&prompt).await?;
        info!(
            "Refined job description '{}' -> '{}'",
            original.job_title, job.job_title
        );
        Ok(job)
    }

    /// Suggests candidate-search filters for a job description.
    ///
    /// Best effort: a failed call or unparsable reply yields `fallback_filters(job)`.
    pub async fn derive_search_filters(&self, job: &JobDescription) -> SearchFilterSuggestions {
        let skills = job.skills_tags.join(", ");
        let prompt = fill_template(
            SEARCH_FILTERS_PROMPT_TEMPLATE,
            &[
                ("job_title", job.job_title.as_str()),
                ("experience_level", job.experience_level.as_str()),
                ("skills", skills.as_str()),
                ("job_description", job.job_description.as_str()),
                ("json_only", JSON_OBJECT_ONLY),
            ],
        );

        let reply = match self.llm.complete(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Search filter derivation call failed, using fallback: {e}");
                return fallback_filters(job);
            }
        };

        match serde_json::from_str::<SearchFilterSuggestions>(strip_code_fence(&reply)) {
            Ok(filters) => filters,
            Err(e) => {
                warn!("Search filter reply was not valid JSON, using fallback: {e}");
                fallback_filters(job)
            }
        }
    }

    async fn complete_record(&self, prompt: &str) -> Result<JobDescription, GenerationError> {
        let reply = self.llm.complete(prompt).await?;
        parse_job_description(&reply)
    }
}

/// Strips an optional code fence and validates the reply against `JobDescription`.
pub fn parse_job_description(reply: &str) -> Result<JobDescription, GenerationError> {
    serde_json::from_str(strip_code_fence(reply)).map_err(GenerationError::InvalidReply)
}

/// Deterministic filter set built purely from the input record.
pub fn fallback_filters(job: &JobDescription) -> SearchFilterSuggestions {
    SearchFilterSuggestions {
        job_titles: vec![job.job_title.clone()],
        companies: FALLBACK_COMPANIES.iter().map(|s| s.to_string()).collect(),
        locations: FALLBACK_LOCATIONS.iter().map(|s| s.to_string()).collect(),
        skills: job.skills_tags.clone(),
        experience_levels: vec![job.experience_level.clone()],
    }
}
