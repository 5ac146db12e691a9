use super::{BasePoints, Difficulty, ProblemSlug};

/// One input/expected-output pair. A submission must pass every case of
/// its problem to count as solved; order only affects reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub input: String,
    pub output: String,
}

/// Problem definition as read from the CMS. Immutable from the pipeline's
/// point of view; authoring and edits happen in the CMS.
#[derive(Debug, Clone)]
pub struct Problem {
    pub slug: ProblemSlug,
    pub difficulty: Difficulty,
    pub base_points: BasePoints,
    /// Effective-LOC baseline for efficiency grading, when curated.
    pub optimal_loc: Option<u32>,
    pub test_cases: Vec<TestCase>,
}
