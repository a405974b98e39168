//! Tests for board construction, boundary semantics, and placement

#[cfg(test)]
mod tests {
    use pentile::spatial::board::{Board, Cell};
    use pentile::spatial::figure::Figure;
    use pentile::spatial::point::Point;

    const fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn horizontal_i() -> Figure {
        Figure::canonical([p(0, 0), p(1, 0), p(2, 0), p(3, 0), p(4, 0)])
    }

    // Tests the boundary sentinel: any read outside the board yields a mark
    // equal to neither the empty mark nor any piece identifier
    // Verified by returning Empty for negative coordinates
    #[test]
    fn test_out_of_bounds_reads_are_border() {
        let board = Board::new(6, 10);
        assert_eq!(board.at(-1, 0), Cell::Border);
        assert_eq!(board.at(0, -1), Cell::Border);
        assert_eq!(board.at(6, 0), Cell::Border);
        assert_eq!(board.at(0, 10), Cell::Border);
        assert_eq!(board.at(0, 0), Cell::Empty);
        assert_eq!(board.at(5, 9), Cell::Empty);
    }

    // Tests the area invariant for a 60-cell board: all cells start empty
    #[test]
    fn test_60_cell_board_starts_fully_empty() {
        let board = Board::new(3, 20);
        assert_eq!(board.empty_cells(), 60);
    }

    // Tests the area invariant for the holed variant: the central 2x2 hole
    // is pre-blocked, leaving exactly 60 playable cells
    #[test]
    fn test_64_cell_board_gets_central_hole() {
        let board = Board::new(8, 8);
        assert_eq!(board.empty_cells(), 60);
        for (x, y) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
            assert_eq!(board.at(x, y), Cell::Blocked);
        }
        assert_eq!(board.at(2, 3), Cell::Empty);
        assert_eq!(board.at(5, 4), Cell::Empty);
    }

    // Tests that check accepts an in-bounds empty region and rejects
    // placements crossing the border without separate bounds tests
    #[test]
    fn test_check_rejects_out_of_bounds_anchor() {
        let board = Board::new(6, 10);
        let figure = horizontal_i();
        assert!(board.check(p(0, 0), &figure));
        assert!(board.check(p(1, 9), &figure));
        assert!(!board.check(p(2, 0), &figure), "figure would cross x = 6");
        assert!(!board.check(p(-1, 0), &figure));
    }

    // Tests that check rejects overlap with an existing placement
    #[test]
    fn test_check_rejects_overlap() {
        let mut board = Board::new(6, 10);
        let figure = horizontal_i();
        board.place(p(0, 0), &figure, Cell::Piece('I'));
        assert!(!board.check(p(0, 0), &figure));
        assert!(!board.check(p(1, 0), &figure));
        assert!(board.check(p(0, 1), &figure));
    }

    // Tests place/unplace as exact inverses
    // Verified by leaving one cell marked during the undo
    #[test]
    fn test_place_and_unplace_roundtrip() {
        let mut board = Board::new(6, 10);
        let figure = horizontal_i();

        board.place(p(1, 2), &figure, Cell::Piece('I'));
        assert_eq!(board.empty_cells(), 55);
        assert_eq!(board.at(3, 2), Cell::Piece('I'));

        board.place(p(1, 2), &figure, Cell::Empty);
        assert_eq!(board.empty_cells(), 60);
        assert_eq!(board.at(3, 2), Cell::Empty);
    }

    // Tests the row-major scan: the first empty cell after a placement is
    // the cell right of it, and the scan starts at `from`, not the origin
    #[test]
    fn test_first_empty_from_scans_row_major() {
        let mut board = Board::new(6, 10);
        assert_eq!(board.first_empty_from(p(0, 0)), Some(p(0, 0)));

        board.place(p(0, 0), &horizontal_i(), Cell::Piece('I'));
        assert_eq!(board.first_empty_from(p(0, 0)), Some(p(5, 0)));
        assert_eq!(board.first_empty_from(p(2, 3)), Some(p(2, 3)));
    }

    // Tests that the scan skips blocked hole cells
    #[test]
    fn test_first_empty_from_skips_blocked() {
        let board = Board::new(8, 8);
        assert_eq!(board.first_empty_from(p(3, 3)), Some(p(5, 3)));
        assert_eq!(board.first_empty_from(p(4, 4)), Some(p(5, 4)));
    }

    // Tests exhaustion: a fully covered scan range yields no anchor
    #[test]
    fn test_first_empty_from_exhausted() {
        let mut board = Board::new(5, 1);
        board.place(p(0, 0), &horizontal_i(), Cell::Piece('I'));
        assert_eq!(board.first_empty_from(p(0, 0)), None);
    }
}
