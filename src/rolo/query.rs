//! Case-insensitive matching primitives.
//!
//! Both helpers fold case with a locale-independent, ASCII-only lowering.
//! Non-ASCII bytes pass through unchanged, so matching stays byte-stable
//! regardless of the active locale.

fn fold(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Whole-string equality, ignoring ASCII case.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Substring containment, ignoring ASCII case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_folds_ascii_case() {
        assert!(equals_ignore_case("Bob", "BOB"));
        assert!(equals_ignore_case("amy", "Amy"));
        assert!(!equals_ignore_case("Bob", "Bo"));
    }

    #[test]
    fn contains_folds_ascii_case() {
        assert!(contains_ignore_case("Robert", "BER"));
        assert!(contains_ignore_case("Work", "work"));
        assert!(!contains_ignore_case("Bob", "bobby"));
    }

    #[test]
    fn non_ascii_passes_through_unchanged() {
        // 'É' does not ASCII-fold to 'é'
        assert!(!contains_ignore_case("R\u{c9}SUM\u{c9}", "r\u{e9}sum\u{e9}"));
        assert!(contains_ignore_case("R\u{e9}sum\u{e9}", "r\u{e9}SUM\u{e9}"));
    }
}
