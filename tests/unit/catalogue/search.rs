//! Tests for search string sanitizing and name matching

#[cfg(test)]
mod tests {
    use lifecat::catalogue::search::{compare_names, matches, sanitize_search};
    use std::cmp::Ordering;

    // Tests permitted characters are kept in full
    // Verified by dropping the extra character set
    #[test]
    fn test_sanitize_keeps_permitted() {
        assert_eq!(sanitize_search("Gosper glider_gun-2.0"), "Gosper glider_gun-2.0");
    }

    // Tests filtering stops at the first forbidden character
    // Verified by filtering forbidden characters out instead of truncating
    #[test]
    fn test_sanitize_truncates_at_forbidden() {
        assert_eq!(sanitize_search("glider\" OR 1=1"), "glider");
        assert_eq!(sanitize_search("\"glider"), "");
        assert_eq!(sanitize_search("pufferé"), "puffer");
    }

    // Tests prefix matching ignores ASCII case
    // Verified by comparing the prefix with str::starts_with
    #[test]
    fn test_matches_prefix() {
        assert!(matches("Glider", "Gli"));
        assert!(matches("Glider", "Glider"));
        assert!(matches("Glider", "gli"));
        assert!(matches("glider gun", "GLIDER G"));
        assert!(!matches("Glider gun", "gun"));
        assert!(!matches("Gli", "Glider"));
    }

    // Tests a prefix ending inside a multibyte character does not match
    // Verified by slicing the name without a boundary check
    #[test]
    fn test_matches_multibyte_name() {
        assert!(!matches("éclair", "e"));
        assert!(matches("éclair", "%"));
    }

    // Tests names order case-insensitively with a stable tie-break
    // Verified by comparing names with str::cmp
    #[test]
    fn test_compare_names() {
        assert_eq!(compare_names("blinker", "Glider"), Ordering::Less);
        assert_eq!(compare_names("Glider", "glider"), Ordering::Less);
        assert_eq!(compare_names("glider", "glider"), Ordering::Equal);
        assert_eq!(compare_names("Glider gun", "glider"), Ordering::Greater);
    }

    // Tests empty and fully filtered searches select everything
    // Verified by returning false for an empty prefix
    #[test]
    fn test_empty_search_selects_all() {
        assert!(matches("Blinker", ""));
        assert!(matches("Blinker", "%%"));
    }
}
