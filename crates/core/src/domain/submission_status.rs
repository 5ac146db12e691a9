use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Passed,
    Failed,
}

impl SubmissionStatus {
    pub fn is_passed(self) -> bool {
        matches!(self, SubmissionStatus::Passed)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionStatus::Passed => "Passed",
            SubmissionStatus::Failed => "Failed",
        };
        f.write_str(name)
    }
}
