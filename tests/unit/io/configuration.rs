//! Tests for codec constants and configuration defaults

#[cfg(test)]
mod tests {
    use lifecat::io::configuration::{
        ALIVE_MARKER, DEAD_MARKER, DEFAULT_SOUP_DENSITY, DEFAULT_SOUP_SIZE, FIRST_PATTERN_ID,
        LINE_SEPARATOR, MAX_BOARD_ARRAY_SIZE, SEARCH_EXTRA_CHARACTERS,
    };

    // Tests the grid text markers match the storage format
    // Verified by changing the alive marker
    #[test]
    fn test_markers() {
        assert_eq!(ALIVE_MARKER, 'O');
        assert_eq!(DEAD_MARKER, '.');
        assert_eq!(LINE_SEPARATOR, '\n');
        assert_ne!(ALIVE_MARKER, DEAD_MARKER);
    }

    // Tests defaults lie inside their accepted ranges
    // Verified by setting the soup size above the board limit
    #[test]
    fn test_defaults_within_limits() {
        assert!((1..=MAX_BOARD_ARRAY_SIZE).contains(&DEFAULT_SOUP_SIZE));
        assert!((0.0..=1.0).contains(&DEFAULT_SOUP_DENSITY));
        assert!(FIRST_PATTERN_ID > 0);
    }

    // Tests the search alphabet extras
    // Verified by removing the hyphen
    #[test]
    fn test_search_extra_characters() {
        assert_eq!(SEARCH_EXTRA_CHARACTERS, &[' ', '_', '.', '-']);
    }
}
