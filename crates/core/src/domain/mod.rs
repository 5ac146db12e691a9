mod difficulty;
mod error;
mod ids;
mod language;
mod points;
mod problem;
mod slug;
mod submission_status;

pub use difficulty::Difficulty;
pub use error::DomainError;
pub use ids::{SubmissionId, UserId};
pub use language::Language;
pub use points::BasePoints;
pub use problem::{Problem, TestCase};
pub use slug::ProblemSlug;
pub use submission_status::SubmissionStatus;
