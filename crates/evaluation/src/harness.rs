//! Runs every test case of a problem through the judge client and folds
//! the per-case verdicts into one report.

use std::time::Instant;

use codeclub_core::domain::{Language, TestCase};
use tracing::warn;

use crate::error::EvaluationError;
use crate::judge::JudgeClient;

/// Verdict for one test case. `index` is 1-based for reporting.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub index: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
    pub stderr: String,
    pub runtime_ms: u32,
    /// Sandbox failure captured for this case, if any.
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HarnessReport {
    pub all_passed: bool,
    pub cases: Vec<CaseResult>,
    /// Mean wall-clock time of the sandbox calls that completed.
    pub avg_runtime_ms: u32,
}

impl HarnessReport {
    pub fn passed_count(&self) -> usize {
        self.cases.iter().filter(|case| case.passed).count()
    }
}

/// Executes all cases sequentially; the sandbox is rate limited and gets
/// one in-flight request at a time from a single evaluation.
///
/// A case whose sandbox call fails is recorded as failed with the error
/// captured, and the remaining cases still run. Output comparison trims
/// leading and trailing whitespace on both sides and is exact otherwise.
pub async fn run_all_cases(
    judge: &dyn JudgeClient,
    language: Language,
    source: &str,
    cases: &[TestCase],
) -> Result<HarnessReport, EvaluationError> {
    if cases.is_empty() {
        return Err(EvaluationError::Configuration(
            "no test cases found for this problem".to_string(),
        ));
    }

    let mut results = Vec::with_capacity(cases.len());
    let mut all_passed = true;
    let mut total_runtime: u64 = 0;
    let mut completed_calls: u64 = 0;

    for (position, case) in cases.iter().enumerate() {
        let index = position + 1;
        let expected = case.output.trim();
        let started = Instant::now();

        match judge.execute(language, source, &case.input).await {
            Ok(run) => {
                let runtime_ms = started.elapsed().as_millis() as u32;
                total_runtime += u64::from(runtime_ms);
                completed_calls += 1;

                let actual = run.stdout.trim();
                let passed = actual == expected;
                if !passed {
                    all_passed = false;
                }

                results.push(CaseResult {
                    index,
                    input: case.input.clone(),
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                    passed,
                    stderr: run.stderr,
                    runtime_ms,
                    error: None,
                });
            }
            Err(err) => {
                warn!(case = index, error = %err, "sandbox call failed, recording case as failed");
                all_passed = false;

                results.push(CaseResult {
                    index,
                    input: case.input.clone(),
                    expected: expected.to_string(),
                    actual: String::new(),
                    passed: false,
                    stderr: String::new(),
                    runtime_ms: started.elapsed().as_millis() as u32,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    let avg_runtime_ms = if completed_calls > 0 {
        (total_runtime / completed_calls) as u32
    } else {
        0
    };

    Ok(HarnessReport {
        all_passed,
        cases: results,
        avg_runtime_ms,
    })
}
