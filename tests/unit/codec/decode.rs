//! Tests for grid text decoding including ragged and degenerate input

#[cfg(test)]
mod tests {
    use lifecat::LifecatError;
    use lifecat::codec::decode::{MAX_BOARD_SIDE, board_side, deserialize, deserialize_bounded};
    use lifecat::spatial::CellState;

    fn live(text: &str) -> Vec<(i32, i32)> {
        deserialize(text).live_cells().collect()
    }

    // Tests the cross pattern decodes to a 3x3 board centred on the origin
    // Verified by starting rows at 0 instead of min
    #[test]
    fn test_decode_cross() {
        let board = deserialize(".O.\nO.O\n.O.");

        assert_eq!(board.min(), -1);
        assert_eq!(board.max(), 1);
        assert_eq!(board.board_array_size(), 2);
        assert_eq!(
            board.live_cells().collect::<Vec<_>>(),
            vec![(-1, 0), (0, -1), (0, 1), (1, 0)]
        );
    }

    // Tests empty input yields a single dead cell
    // Verified by returning max_line_length of 1 for no lines
    #[test]
    fn test_decode_empty() {
        let board = deserialize("");

        assert_eq!(board.board_array_size(), 1);
        assert_eq!(board.side(), 1);
        assert_eq!(board.get(0, 0), Some(CellState::Dead));
    }

    // Tests an even side is bumped to the next odd number
    // Verified by removing the even check
    #[test]
    fn test_decode_even_side_is_bumped() {
        let board = deserialize("OO\nO");

        assert_eq!(board.side(), 3);
        assert_eq!(board.min(), -1);
        assert_eq!(live("OO\nO"), vec![(-1, -1), (-1, 0), (0, -1)]);
        // Padding row and column stay dead
        assert_eq!(board.get(1, 1), Some(CellState::Dead));
    }

    // Tests a single wide line sizes the board by its length
    // Verified by sizing boards from line count only
    #[test]
    fn test_decode_wide_line() {
        let board = deserialize("OOOO");

        assert_eq!(board.board_array_size(), 3);
        assert_eq!(board.side(), 5);
        assert_eq!(
            board.live_cells().collect::<Vec<_>>(),
            vec![(-2, -2), (-2, -1), (-2, 0), (-2, 1)]
        );
    }

    // Tests a tall column sizes the board by its line count
    // Verified by sizing boards from line length only
    #[test]
    fn test_decode_tall_column() {
        let board = deserialize("O\nO\nO\nO\nO");

        assert_eq!(board.side(), 5);
        assert_eq!(
            board.live_cells().collect::<Vec<_>>(),
            vec![(-2, -2), (-1, -2), (0, -2), (1, -2), (2, -2)]
        );
    }

    // Tests a trailing newline counts as an extra empty line
    // Verified by trimming the input before splitting
    #[test]
    fn test_decode_trailing_newline_counts() {
        assert_eq!(deserialize("O").side(), 1);
        assert_eq!(deserialize("O\n").side(), 3);
        assert_eq!(deserialize("\n").board_array_size(), 2);
        assert!(live("\n").is_empty());
    }

    // Tests only the alive marker sets cells
    // Verified by treating any non-dot character as alive
    #[test]
    fn test_decode_other_characters_are_dead() {
        assert_eq!(live("o*X\n#O.\n0 @"), vec![(0, 0)]);
    }

    // Tests line length counts characters rather than bytes
    // Verified by using str::len for line length
    #[test]
    fn test_decode_multibyte_characters() {
        let board = deserialize("éO");

        assert_eq!(board.side(), 3);
        assert_eq!(board.live_cells().collect::<Vec<_>>(), vec![(-1, 0)]);
    }

    // Tests the board side is the longer of line count and line length, made odd
    // Verified by counting bytes instead of lines for the side
    #[test]
    fn test_board_side() {
        assert_eq!(board_side(""), 1);
        assert_eq!(board_side("OO"), 3);
        assert_eq!(board_side("O\nO\nO"), 3);
        assert_eq!(board_side(&"O".repeat(10)), 11);
    }

    // Tests grids at the limit decode and larger ones are refused
    // Verified by skipping the side check in deserialize_bounded
    #[test]
    fn test_deserialize_bounded_limit() {
        let widest = "O".repeat(MAX_BOARD_SIDE);
        let board = deserialize_bounded(&widest).unwrap();
        assert_eq!(board.side(), MAX_BOARD_SIDE);
        assert_eq!(board.population(), MAX_BOARD_SIDE);

        let wide = "O".repeat(300_000);
        assert!(matches!(
            deserialize_bounded(&wide),
            Err(LifecatError::MalformedPattern { .. })
        ));

        let tall = "\n".repeat(MAX_BOARD_SIDE);
        assert!(matches!(
            deserialize_bounded(&tall),
            Err(LifecatError::MalformedPattern { .. })
        ));
    }
}
