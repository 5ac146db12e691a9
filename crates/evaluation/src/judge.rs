//! Thin adapter to the remote execution sandbox.
//!
//! One HTTP call per invocation, no batching. The sandbox is an external
//! black box with no SLA; every failure mode is surfaced as an
//! [`ExecutionError`] and severity is the caller's decision.

use async_trait::async_trait;
use codeclub_core::domain::Language;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::JudgeConfig;
use crate::error::ExecutionError;

/// Runtime/version pair plus source file name the sandbox expects for a
/// language. The table is closed; unsupported identifiers never reach
/// this module because `Language` itself cannot name them.
struct LanguageSpec {
    runtime: &'static str,
    version: &'static str,
    file_name: &'static str,
}

fn language_spec(language: Language) -> LanguageSpec {
    match language {
        Language::JavaScript => LanguageSpec {
            runtime: "javascript",
            version: "18.15.0",
            file_name: "main.js",
        },
        Language::Python => LanguageSpec {
            runtime: "python",
            version: "3.10.0",
            file_name: "main.py",
        },
        Language::Cpp => LanguageSpec {
            runtime: "c++",
            version: "10.2.0",
            file_name: "main.cpp",
        },
        Language::Java => LanguageSpec {
            runtime: "java",
            version: "15.0.2",
            file_name: "Main.java",
        },
    }
}

/// Outcome of one sandbox run, mirroring the `run` object of the wire
/// contract.
#[derive(Debug, Clone, Default)]
pub struct JudgeRun {
    pub stdout: String,
    pub stderr: String,
    pub signal: Option<String>,
}

#[async_trait]
pub trait JudgeClient: Send + Sync {
    async fn execute(
        &self,
        language: Language,
        source: &str,
        stdin: &str,
    ) -> Result<JudgeRun, ExecutionError>;
}

#[derive(Debug, Serialize)]
struct ExecutePayload<'a> {
    language: &'static str,
    version: &'static str,
    files: Vec<SourceFile<'a>>,
    stdin: &'a str,
}

#[derive(Debug, Serialize)]
struct SourceFile<'a> {
    name: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ExecuteResponse {
    #[serde(default)]
    run: RunOutput,
}

#[derive(Debug, Default, Deserialize)]
struct RunOutput {
    #[serde(default)]
    stdout: String,
    #[serde(default)]
    stderr: String,
    #[serde(default)]
    signal: Option<String>,
}

/// HTTP client for a Piston-compatible sandbox.
pub struct PistonClient {
    client: Client,
    api_url: String,
}

impl PistonClient {
    pub fn new(config: &JudgeConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
        }
    }
}

#[async_trait]
impl JudgeClient for PistonClient {
    async fn execute(
        &self,
        language: Language,
        source: &str,
        stdin: &str,
    ) -> Result<JudgeRun, ExecutionError> {
        let spec = language_spec(language);
        let payload = ExecutePayload {
            language: spec.runtime,
            version: spec.version,
            files: vec![SourceFile {
                name: spec.file_name,
                content: source,
            }],
            stdin,
        };

        let response = self.client.post(&self.api_url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExecutionError::Status(status));
        }

        let body: ExecuteResponse = response.json().await?;
        Ok(JudgeRun {
            stdout: body.run.stdout,
            stderr: body.run.stderr,
            signal: body.run.signal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ExecuteResponse, language_spec};
    use codeclub_core::domain::Language;

    #[test]
    fn every_language_has_a_runtime_and_version() {
        for language in [
            Language::JavaScript,
            Language::Python,
            Language::Cpp,
            Language::Java,
        ] {
            let spec = language_spec(language);
            assert!(!spec.runtime.is_empty());
            assert!(!spec.version.is_empty());
            assert!(!spec.file_name.is_empty());
        }
    }

    #[test]
    fn java_sources_are_named_for_the_main_class() {
        assert_eq!(language_spec(Language::Java).file_name, "Main.java");
    }

    #[test]
    fn sandbox_response_tolerates_missing_fields() {
        let body: ExecuteResponse =
            serde_json::from_str(r#"{"run": {"stdout": "3\n"}}"#).expect("should deserialize");

        assert_eq!(body.run.stdout, "3\n");
        assert_eq!(body.run.stderr, "");
        assert!(body.run.signal.is_none());
    }
}
