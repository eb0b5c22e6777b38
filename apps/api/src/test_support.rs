//! Scripted test doubles for the `ChatModel` and `CandidateSource` seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::{ChatModel, LlmError};
use crate::search::client::{CandidateSource, SearchError};
use crate::search::filters::{AppliedFilter, FilterCategory};
use crate::search::models::{Candidate, FilterSuggestion, Pagination, SearchResults};

/// Chat model that replays queued replies and records every prompt it receives.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn replying<const N: usize>(replies: [Result<String, LlmError>; N]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompt(&self, index: usize) -> String {
        self.prompts.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSearch {
    pub filters: Vec<AppliedFilter>,
    pub page: u32,
    pub account_number: u32,
}

/// Candidate source that echoes queries back as suggestions and returns one
/// candidate per search, or fails every call when built with `failing`.
pub struct ScriptedSource {
    fail: bool,
    suggestion_queries: Mutex<Vec<String>>,
    searches: Mutex<Vec<RecordedSearch>>,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Self::build(false)
    }

    pub fn failing() -> Arc<Self> {
        Self::build(true)
    }

    fn build(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            fail,
            suggestion_queries: Mutex::new(Vec::new()),
            searches: Mutex::new(Vec::new()),
        })
    }

    pub fn suggestion_queries(&self) -> Vec<String> {
        self.suggestion_queries.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<RecordedSearch> {
        self.searches.lock().unwrap().clone()
    }

    fn outage() -> SearchError {
        SearchError::Upstream {
            status: 503,
            body: "service unavailable".to_string(),
        }
    }
}

#[async_trait]
impl CandidateSource for ScriptedSource {
    async fn suggestions(
        &self,
        query: &str,
        category: FilterCategory,
    ) -> Result<Vec<FilterSuggestion>, SearchError> {
        self.suggestion_queries
            .lock()
            .unwrap()
            .push(query.to_string());
        if self.fail {
            return Err(Self::outage());
        }
        Ok(vec![FilterSuggestion {
            id: format!("{}-1", category.token()),
            display_value: query.to_string(),
            headline: String::new(),
        }])
    }

    async fn search(
        &self,
        filters: &[AppliedFilter],
        page: u32,
        account_number: u32,
    ) -> Result<SearchResults, SearchError> {
        self.searches.lock().unwrap().push(RecordedSearch {
            filters: filters.to_vec(),
            page,
            account_number,
        });
        if self.fail {
            return Err(Self::outage());
        }
        let candidate: Candidate = serde_json::from_value(serde_json::json!({
            "fullName": "Grace Hopper",
            "profileUrn": "urn:li:fs_salesProfile:1"
        }))
        .unwrap();
        Ok(SearchResults {
            candidates: vec![candidate],
            pagination: Pagination {
                total: 1,
                count: 1,
                start: u64::from(page).saturating_sub(1) * 25,
            },
        })
    }
}
