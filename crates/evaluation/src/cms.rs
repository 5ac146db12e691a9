//! Read-only client for the CMS that owns problem definitions.
//!
//! The pipeline never writes here; problems and test cases are authored
//! and edited by content editors.

use async_trait::async_trait;
use codeclub_core::domain::{BasePoints, Difficulty, Problem, ProblemSlug, TestCase};
use reqwest::Client;
use serde::Deserialize;

use crate::config::CmsConfig;
use crate::error::EvaluationError;

#[async_trait]
pub trait ProblemStore: Send + Sync {
    async fn find_by_slug(&self, slug: &ProblemSlug) -> Result<Option<Problem>, EvaluationError>;
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    items: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    fields: ProblemFields,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProblemFields {
    slug: String,
    difficulty: Option<String>,
    points: Option<u32>,
    optimal_loc: Option<u32>,
    #[serde(default)]
    test_cases: Vec<TestCaseFields>,
}

#[derive(Debug, Deserialize)]
struct TestCaseFields {
    #[serde(default)]
    input: String,
    #[serde(default)]
    output: String,
}

fn map_fields(fields: ProblemFields) -> Result<Problem, EvaluationError> {
    let slug = ProblemSlug::new(fields.slug)
        .map_err(|err| EvaluationError::Configuration(err.to_string()))?;

    let difficulty = match fields.difficulty {
        Some(raw) => raw
            .parse::<Difficulty>()
            .map_err(|err| EvaluationError::Configuration(err.to_string()))?,
        None => Difficulty::Medium,
    };

    let base_points = BasePoints::new(fields.points.unwrap_or(BasePoints::DEFAULT))
        .map_err(|err| EvaluationError::Configuration(err.to_string()))?;

    let test_cases = fields
        .test_cases
        .into_iter()
        .map(|case| TestCase {
            input: case.input,
            output: case.output,
        })
        .collect();

    Ok(Problem {
        slug,
        difficulty,
        base_points,
        optimal_loc: fields.optimal_loc,
        test_cases,
    })
}

/// Contentful-style delivery API client: entries filtered by content type
/// and slug, limit 1.
pub struct ContentfulProblemStore {
    client: Client,
    api_url: String,
    access_token: String,
}

impl ContentfulProblemStore {
    pub fn new(config: &CmsConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            access_token: config.access_token.clone(),
        }
    }
}

#[async_trait]
impl ProblemStore for ContentfulProblemStore {
    async fn find_by_slug(&self, slug: &ProblemSlug) -> Result<Option<Problem>, EvaluationError> {
        let url = format!("{}/entries", self.api_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("content_type", "codingProblem"),
                ("fields.slug", slug.as_str()),
                ("limit", "1"),
                ("access_token", self.access_token.as_str()),
            ])
            .send()
            .await
            .map_err(EvaluationError::ProblemFetch)?
            .error_for_status()
            .map_err(EvaluationError::ProblemFetch)?;

        let body: EntriesResponse = response
            .json()
            .await
            .map_err(EvaluationError::ProblemFetch)?;

        body.items
            .into_iter()
            .next()
            .map(|entry| map_fields(entry.fields))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use codeclub_core::domain::Difficulty;

    use super::{EntriesResponse, map_fields};
    use crate::error::EvaluationError;

    #[test]
    fn cms_entry_maps_into_a_problem() {
        let body: EntriesResponse = serde_json::from_str(
            r#"{
                "items": [{
                    "fields": {
                        "slug": "two-sum",
                        "difficulty": "Easy",
                        "points": 100,
                        "optimalLoc": 12,
                        "testCases": [{"input": "1 2", "output": "3"}]
                    }
                }]
            }"#,
        )
        .expect("payload should deserialize");

        let entry = body.items.into_iter().next().expect("one item");
        let problem = map_fields(entry.fields).expect("fields should map");

        assert_eq!(problem.slug.as_str(), "two-sum");
        assert_eq!(problem.difficulty, Difficulty::Easy);
        assert_eq!(problem.base_points.value(), 100);
        assert_eq!(problem.optimal_loc, Some(12));
        assert_eq!(problem.test_cases.len(), 1);
        assert_eq!(problem.test_cases[0].output, "3");
    }

    #[test]
    fn missing_points_and_difficulty_use_defaults() {
        let body: EntriesResponse = serde_json::from_str(
            r#"{"items": [{"fields": {"slug": "fizz-buzz", "testCases": []}}]}"#,
        )
        .expect("payload should deserialize");

        let entry = body.items.into_iter().next().expect("one item");
        let problem = map_fields(entry.fields).expect("fields should map");

        assert_eq!(problem.difficulty, Difficulty::Medium);
        assert_eq!(problem.base_points.value(), 100);
        assert!(problem.test_cases.is_empty());
    }

    #[test]
    fn unknown_difficulty_is_a_configuration_error() {
        let body: EntriesResponse = serde_json::from_str(
            r#"{"items": [{"fields": {"slug": "x", "difficulty": "impossible"}}]}"#,
        )
        .expect("payload should deserialize");

        let entry = body.items.into_iter().next().expect("one item");
        let err = map_fields(entry.fields).expect_err("must be rejected");

        assert!(matches!(err, EvaluationError::Configuration(_)));
    }
}
