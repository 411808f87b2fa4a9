//! Title collation for the post feed.
//!
//! The ordering is meant to behave like a locale-aware comparison without
//! dragging in a locale database: titles are compared on a folded key that is
//! NFKD-normalized, stripped of combining marks, and lowercased. Two titles
//! with equal folded keys fall back to the plain string comparison, so the
//! ordering stays total and `Equal` is only returned for identical inputs.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Case- and accent-insensitive comparison of two titles.
pub fn compare(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

/// Fold a title into its comparison key.
fn fold(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_case_insensitive() {
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
        assert_eq!(compare("Banana", "apple"), Ordering::Greater);
        assert_eq!(compare("Apple", "apricot"), Ordering::Less);
    }

    #[test]
    fn test_compare_identical() {
        assert_eq!(compare("same title", "same title"), Ordering::Equal);
        assert_eq!(compare("", ""), Ordering::Equal);
    }

    #[test]
    fn test_compare_accent_folding() {
        // "Éclair" folds to "eclair", which sorts before "eggplant" even
        // though the raw byte order would put the accented char last.
        assert_eq!(compare("Éclair", "eggplant"), Ordering::Less);
        assert_eq!(compare("eggplant", "Éclair"), Ordering::Greater);
    }

    #[test]
    fn test_compare_distinct_strings_never_equal() {
        // Folded keys tie, the raw comparison breaks it.
        assert_ne!(compare("café", "CAFE"), Ordering::Equal);
        assert_ne!(compare("Title", "title"), Ordering::Equal);
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let pairs = [("café", "CAFE"), ("a", "b"), ("Zebra", "apple")];
        for (a, b) in pairs {
            assert_eq!(compare(a, b), compare(b, a).reverse());
        }
    }

    #[test]
    fn test_compare_empty_sorts_first() {
        assert_eq!(compare("", "anything"), Ordering::Less);
    }

    #[test]
    fn test_fold_strips_marks_and_case() {
        assert_eq!(fold("Àé ÎÕ"), "ae io");
        assert_eq!(fold("Hello"), "hello");
    }
}
