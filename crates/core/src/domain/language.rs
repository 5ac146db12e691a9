use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Languages the remote sandbox is configured for. The set is closed:
/// anything outside it is rejected before a network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Python,
    Cpp,
    Java,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Cpp => "c++",
            Language::Java => "java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    /// Accepts the same aliases the submission form sends (`js`, `py`,
    /// `cpp`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::JavaScript),
            "python" | "py" => Ok(Language::Python),
            "c++" | "cpp" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            _ => Err(DomainError::UnsupportedLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn aliases_resolve_to_the_same_language() {
        let js: Language = "JS".parse().expect("alias should parse");
        let full: Language = "javascript".parse().expect("name should parse");

        assert_eq!(js, full);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = "brainfuck".parse::<Language>().expect_err("must be rejected");

        assert_eq!(err.to_string(), "unsupported language: 'brainfuck'");
    }
}
