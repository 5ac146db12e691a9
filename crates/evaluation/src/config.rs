use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

type Result<T> = anyhow::Result<T>;

/// External-collaborator endpoints for one pipeline instance.
#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub judge: JudgeConfig,
    pub cms: CmsConfig,
}

impl PipelineConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize pipeline config")
    }
}

/// Remote execution sandbox. Defaults to the public Piston instance.
#[derive(Debug, Clone, Deserialize)]
pub struct JudgeConfig {
    #[serde(default = "default_judge_api_url")]
    pub api_url: String,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            api_url: default_judge_api_url(),
        }
    }
}

/// Content delivery API holding problem definitions and test cases.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsConfig {
    pub api_url: String,
    pub access_token: String,
}

fn default_judge_api_url() -> String {
    "https://emkc.org/api/v2/piston/execute".to_string()
}
