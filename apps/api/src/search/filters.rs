//! Filter vocabulary: maps internal filter categories to the upstream
//! suggestion endpoints and search filter type tokens.

use serde::{Deserialize, Serialize};

/// Weight sent with each search filter when the caller does not pick one.
pub const DEFAULT_SUB_FILTER: u32 = 50;

/// Filter category used for both suggestion lookup and search filter translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterCategory {
    JobTitle,
    Company,
    Location,
    Experience,
    School,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 5] = [
        FilterCategory::JobTitle,
        FilterCategory::Company,
        FilterCategory::Location,
        FilterCategory::Experience,
        FilterCategory::School,
    ];

    /// Wire token used by the browser client ("job-title", "company", ...).
    pub fn token(self) -> &'static str {
        match self {
            FilterCategory::JobTitle => "job-title",
            FilterCategory::Company => "company",
            FilterCategory::Location => "location",
            FilterCategory::Experience => "experience",
            FilterCategory::School => "school",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == token)
    }

    /// Upstream typeahead endpoint for this category.
    pub fn suggestion_endpoint(self) -> &'static str {
        match self {
            FilterCategory::JobTitle => "filter_job_title_suggestions",
            FilterCategory::Company => "filter_company_suggestions",
            FilterCategory::Location => "filter_geography_location_postal_code_suggestions",
            FilterCategory::Experience => "filter_seniority_level",
            FilterCategory::School => "filter_school_suggestions",
        }
    }

    /// Upstream search filter type token for this category.
    pub fn search_filter_type(self) -> &'static str {
        match self {
            FilterCategory::JobTitle => "CURRENT_TITLE",
            FilterCategory::Company => "CURRENT_COMPANY",
            FilterCategory::Location => "POSTAL_CODE",
            FilterCategory::Experience => "SENIORITY_LEVEL",
            FilterCategory::School => "SCHOOL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionType {
    Included,
    Excluded,
}

/// A user-chosen filter value as sent by the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilter {
    pub id: String,
    pub display_value: String,
    /// Category token. Kept as a string so unknown tokens can pass through upstream.
    #[serde(rename = "type")]
    pub filter_type: String,
    pub selection_type: SelectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_sub_filter: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamFilterValue {
    pub id: String,
    pub text: String,
    pub selection_type: SelectionType,
}

/// Filter object in the shape the search API expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamFilter {
    #[serde(rename = "type")]
    pub filter_type: String,
    pub values: Vec<UpstreamFilterValue>,
    pub selected_sub_filter: u32,
}

impl AppliedFilter {
    /// Translates into the upstream filter shape. A weight of zero counts as unset.
    pub fn to_upstream(&self) -> UpstreamFilter {
        let filter_type = FilterCategory::from_token(&self.filter_type)
            .map(|c| c.search_filter_type().to_string())
            .unwrap_or_else(|| self.filter_type.clone());

        UpstreamFilter {
            filter_type,
            values: vec![UpstreamFilterValue {
                id: self.id.clone(),
                text: self.display_value.clone(),
                selection_type: self.selection_type,
            }],
            selected_sub_filter: self
                .selected_sub_filter
                .filter(|w| *w != 0)
                .unwrap_or(DEFAULT_SUB_FILTER),
        }
    }
}
