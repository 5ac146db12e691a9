/// Counts effective lines of code: non-blank lines that are not
/// single-line or block comments. Used as the efficiency proxy in the
/// submit-time grading.
///
/// A line is excluded when, after trimming, it is empty or starts with
/// `//`, `#`, `/*` or `*`.
pub fn effective_loc(code: &str) -> u32 {
    code.trim()
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !line.starts_with("//")
                && !line.starts_with('#')
                && !line.starts_with("/*")
                && !line.starts_with('*')
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::effective_loc;

    #[test]
    fn blank_and_comment_lines_are_excluded() {
        let code = "  // comment\n\nx=1\n  x=2  ";

        assert_eq!(effective_loc(code), 2);
    }

    #[test]
    fn block_comment_bodies_are_excluded() {
        let code = "/* header\n * continued\n */\nint main() {}\n";

        assert_eq!(effective_loc(code), 1);
    }

    #[test]
    fn python_comments_are_excluded() {
        let code = "# setup\nx = 1\n# done\n";

        assert_eq!(effective_loc(code), 1);
    }

    #[test]
    fn empty_source_has_zero_loc() {
        assert_eq!(effective_loc(""), 0);
        assert_eq!(effective_loc("   \n\n  "), 0);
    }
}
