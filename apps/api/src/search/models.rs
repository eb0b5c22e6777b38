//! Candidate-search response types. Candidates keep any upstream fields we do
//! not model so responses pass through largely unchanged. Upstream records are
//! sparse: a `null` or missing scalar decodes to its default rather than
//! failing the whole page.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One typeahead suggestion for a filter category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSuggestion {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_months: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCompany {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPosition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenure_at_position: Option<Tenure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_urn_resolution_result: Option<ResolvedCompany>,
    /// "2 years, 1 month"; filled when a search page is assembled.
    #[serde(default, skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub tenure_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub geo_region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<CurrentPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_display_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_urn: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub navigation_url: String,
    /// Upstream fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: u64,
}

/// Search page returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub candidates: Vec<Candidate>,
    pub pagination: Pagination,
}

/// Raw search envelope from the upstream API: `{success, status, response: {data, pagination}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamSearchEnvelope {
    #[serde(default)]
    pub response: Option<UpstreamSearchPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamSearchPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Candidate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Raw suggestion envelope: `{data: [...]}`; a missing `data` means no suggestions.
#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamSuggestions {
    #[serde(default)]
    pub data: Option<Vec<FilterSuggestion>>,
}

impl From<UpstreamSearchEnvelope> for SearchResults {
    fn from(envelope: UpstreamSearchEnvelope) -> Self {
        match envelope.response {
            Some(page) => SearchResults {
                candidates: page.data.into_iter().map(with_tenure_display).collect(),
                pagination: page.pagination,
            },
            None => SearchResults {
                candidates: Vec::new(),
                pagination: Pagination::default(),
            },
        }
    }
}

fn with_tenure_display(mut candidate: Candidate) -> Candidate {
    if let Some(position) = candidate.current_position.as_mut() {
        position.tenure_display = format_tenure(position.tenure_at_position.as_ref());
    }
    candidate
}

/// Human-readable tenure: "", "3 months", "1 year", "2 years, 1 month".
pub fn format_tenure(tenure: Option<&Tenure>) -> String {
    let Some(tenure) = tenure else {
        return String::new();
    };
    let years = tenure.num_years.unwrap_or(0);
    let months = tenure.num_months.unwrap_or(0);

    match (years, months) {
        (0, 0) => String::new(),
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{}, {}", plural(y, "year"), plural(m, "month")),
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_tenure() {
        let t = |y, m| Tenure {
            num_years: y,
            num_months: m,
        };
        assert_eq!(format_tenure(None), "");
        assert_eq!(format_tenure(Some(&t(None, None))), "");
        assert_eq!(format_tenure(Some(&t(Some(0), Some(1)))), "1 month");
        assert_eq!(format_tenure(Some(&t(None, Some(7)))), "7 months");
        assert_eq!(format_tenure(Some(&t(Some(1), None))), "1 year");
        assert_eq!(format_tenure(Some(&t(Some(2), Some(1)))), "2 years, 1 month");
        assert_eq!(format_tenure(Some(&t(Some(1), Some(11)))), "1 year, 11 months");
    }

    #[test]
    fn test_suggestion_accepts_numeric_id_and_missing_headline() {
        let s: FilterSuggestion =
            serde_json::from_value(json!({"id": 1441, "displayValue": "Google"})).unwrap();
        assert_eq!(s.id, "1441");
        assert_eq!(s.headline, "");
    }

    #[test]
    fn test_candidate_keeps_unmodelled_fields() {
        let raw = json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "fullName": "Ada Lovelace",
            "geoRegion": "London",
            "currentPosition": {
                "title": "Engineer",
                "companyName": "Analytical Engines",
                "tenureAtPosition": {"numYears": 2}
            },
            "profileUrn": "urn:li:1",
            "navigationUrl": "https://linkedin.com/in/ada",
            "openLink": true
        });
        let candidate: Candidate = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(candidate.extra["openLink"], json!(true));
        assert_eq!(
            format_tenure(
                candidate
                    .current_position
                    .as_ref()
                    .and_then(|p| p.tenure_at_position.as_ref())
            ),
            "2 years"
        );
        assert_eq!(serde_json::to_value(&candidate).unwrap(), raw);
    }

    #[test]
    fn test_search_envelope_maps_into_results() {
        let envelope: UpstreamSearchEnvelope = serde_json::from_value(json!({
            "success": true,
            "status": 200,
            "response": {
                "data": [{"fullName": "Grace Hopper", "profileUrn": "urn:li:2"}],
                "pagination": {"total": 120, "count": 25, "start": 25}
            }
        }))
        .unwrap();
        let results = SearchResults::from(envelope);
        assert_eq!(results.candidates.len(), 1);
        assert_eq!(results.candidates[0].full_name, "Grace Hopper");
        assert!(results.candidates[0].current_position.is_none());
        assert_eq!(
            results.pagination,
            Pagination {
                total: 120,
                count: 25,
                start: 25
            }
        );
    }

    #[test]
    fn test_sparse_candidate_does_not_fail_the_page() {
        let envelope: UpstreamSearchEnvelope = serde_json::from_value(json!({
            "response": {
                "data": [
                    {"fullName": "Grace Hopper", "geoRegion": "New York"},
                    {
                        "fullName": "Alan Turing",
                        "geoRegion": null,
                        "navigationUrl": null,
                        "currentPosition": {
                            "title": null,
                            "companyName": null,
                            "tenureAtPosition": {"numYears": 2, "numMonths": 1},
                            "companyUrnResolutionResult": {"name": null}
                        }
                    }
                ],
                "pagination": {"total": 2, "count": 2, "start": null}
            }
        }))
        .unwrap();

        let results = SearchResults::from(envelope);
        assert_eq!(results.candidates.len(), 2);
        let turing = &results.candidates[1];
        assert_eq!(turing.geo_region, "");
        let position = turing.current_position.as_ref().unwrap();
        assert_eq!(position.company_name, "");
        assert_eq!(position.tenure_display, "2 years, 1 month");
        assert_eq!(results.pagination.start, 0);

        let wire = serde_json::to_value(turing).unwrap();
        assert_eq!(wire["currentPosition"]["tenureDisplay"], "2 years, 1 month");
    }

    #[test]
    fn test_suggestion_tolerates_null_fields() {
        let s: FilterSuggestion =
            serde_json::from_value(json!({"id": null, "displayValue": null, "headline": null}))
                .unwrap();
        assert_eq!(s.id, "");
        assert_eq!(s.display_value, "");
        assert_eq!(s.headline, "");
    }

    #[test]
    fn test_search_envelope_without_response_is_empty_page() {
        let envelope: UpstreamSearchEnvelope =
            serde_json::from_value(json!({"success": false})).unwrap();
        let results = SearchResults::from(envelope);
        assert!(results.candidates.is_empty());
        assert_eq!(results.pagination, Pagination::default());
    }
}
