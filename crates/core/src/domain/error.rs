use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    #[error("invalid difficulty: '{0}'. expected one of easy, medium, hard")]
    InvalidDifficulty(String),

    #[error("invalid base points: {0}. base points must be at least 1")]
    InvalidBasePoints(u32),

    #[error("problem slug must not be empty")]
    EmptySlug,
}
