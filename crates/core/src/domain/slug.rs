use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// CMS-assigned unique identifier for a problem, e.g. `two-sum`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProblemSlug(String);

impl ProblemSlug {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptySlug);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProblemSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProblemSlug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::ProblemSlug;

    #[test]
    fn slug_preserves_its_value() {
        let slug = ProblemSlug::new("two-sum").expect("slug should be valid");

        assert_eq!(slug.as_str(), "two-sum");
    }

    #[test]
    fn blank_slug_is_rejected() {
        let err = ProblemSlug::new("   ").expect_err("blank slug must be rejected");

        assert_eq!(err.to_string(), "problem slug must not be empty");
    }
}
