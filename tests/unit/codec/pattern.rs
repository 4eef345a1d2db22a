//! Tests for pattern types and their JSON field names

#[cfg(test)]
mod tests {
    use lifecat::codec::pattern::{LiveCell, PatternObject, PatternPackage, PatternRecord};
    use serde_json::json;

    // Tests pattern objects serialize with the client field names
    // Verified by removing the serde rename on live_cells
    #[test]
    fn test_pattern_object_field_names() {
        let pattern = PatternObject::new(2, vec![LiveCell::new(-1, 0)]);

        let value = serde_json::to_value(&pattern).unwrap();
        assert_eq!(
            value,
            json!({"boardArraySize": 2, "liveCells": [{"i": -1, "j": 0}]})
        );
    }

    // Tests packages deserialize from the submission shape
    // Verified by renaming pattern_object without camelCase
    #[test]
    fn test_package_from_json() {
        let package: PatternPackage = serde_json::from_value(json!({
            "name": "Glider",
            "username": "steven",
            "comments": "c/4 spaceship",
            "patternObject": {
                "boardArraySize": 3,
                "liveCells": [{"i": -1, "j": -1}, {"i": 0, "j": 0}]
            }
        }))
        .unwrap();

        assert_eq!(package.name, "Glider");
        assert_eq!(package.username, "steven");
        assert_eq!(package.pattern_object.board_array_size, 3);
        assert_eq!(package.pattern_object.live_cells.len(), 2);
    }

    // Tests lookup records carry camelCase keys
    // Verified by dropping rename_all on PatternRecord
    #[test]
    fn test_record_field_names() {
        let record = PatternRecord {
            username: "steven".to_string(),
            comments: String::new(),
            pattern_object: PatternObject::new(1, Vec::new()),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("patternObject").is_some());
        assert!(value.get("pattern_object").is_none());
    }

    // Tests canonical sorts by row then column and drops duplicates
    // Verified by sorting by column first
    #[test]
    fn test_canonical_sorts_and_dedups() {
        let pattern = PatternObject::new(
            3,
            vec![
                LiveCell::new(1, -1),
                LiveCell::new(-1, 2),
                LiveCell::new(1, -1),
                LiveCell::new(-1, -2),
                LiveCell::new(0, 0),
            ],
        );

        let canonical = pattern.canonical();
        assert_eq!(canonical.board_array_size, 3);
        assert_eq!(
            canonical.live_cells,
            vec![
                LiveCell::new(-1, -2),
                LiveCell::new(-1, 2),
                LiveCell::new(0, 0),
                LiveCell::new(1, -1),
            ]
        );
    }
}
