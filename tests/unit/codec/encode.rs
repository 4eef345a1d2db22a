//! Tests for board encoding into sparse pattern objects

#[cfg(test)]
mod tests {
    use lifecat::codec::decode::deserialize;
    use lifecat::codec::encode::serialize;
    use lifecat::codec::pattern::LiveCell;
    use lifecat::spatial::Board;

    // Tests the cross pattern encodes in canonical order
    // Verified by scanning columns in the outer loop
    #[test]
    fn test_encode_cross() {
        let pattern = serialize(&deserialize(".O.\nO.O\n.O."));

        assert_eq!(pattern.board_array_size, 2);
        assert_eq!(
            pattern.live_cells,
            vec![
                LiveCell::new(-1, 0),
                LiveCell::new(0, -1),
                LiveCell::new(0, 1),
                LiveCell::new(1, 0),
            ]
        );
    }

    // Tests the empty board encodes with no live cells
    // Verified by reporting board_array_size as max instead of max + 1
    #[test]
    fn test_encode_empty_board() {
        let pattern = serialize(&deserialize(""));

        assert_eq!(pattern.board_array_size, 1);
        assert!(pattern.live_cells.is_empty());
    }

    // Tests write order does not affect output order
    // Verified by collecting cells in insertion order
    #[test]
    fn test_encode_order_independent_of_writes() {
        let mut board = Board::new(3);
        board.set(true, 2, 2);
        board.set(true, -2, 0);
        board.set(true, 0, -1);
        board.set(true, -2, -2);

        let pattern = serialize(&board);
        assert_eq!(pattern.board_array_size, 3);
        assert_eq!(
            pattern.live_cells,
            vec![
                LiveCell::new(-2, -2),
                LiveCell::new(-2, 0),
                LiveCell::new(0, -1),
                LiveCell::new(2, 2),
            ]
        );
    }
}
