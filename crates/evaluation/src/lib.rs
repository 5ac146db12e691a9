pub mod cms;
pub mod config;
pub mod error;
pub mod harness;
pub mod judge;
pub mod loc;
pub mod score;

pub use cms::{ContentfulProblemStore, ProblemStore};
pub use config::{CmsConfig, JudgeConfig, PipelineConfig};
pub use error::{EvaluationError, ExecutionError};
pub use harness::{CaseResult, HarnessReport, run_all_cases};
pub use judge::{JudgeClient, JudgeRun, PistonClient};
