//! Tests for constant consistency

#[cfg(test)]
mod tests {
    use pentile::io::configuration::{
        CELLS_PER_PIECE, DEFAULT_HEIGHT, DEFAULT_WIDTH, HOLED_BOARD_CELLS, MIN_BOARD_SIDE,
        PIECE_COUNT, PIECE_IDS, PLAYABLE_CELLS,
    };

    // The whole search rests on the combined piece area matching the
    // playable cell count
    #[test]
    fn test_area_invariant() {
        assert_eq!(PIECE_COUNT * CELLS_PER_PIECE, PLAYABLE_CELLS as usize);
        assert_eq!(HOLED_BOARD_CELLS - PLAYABLE_CELLS, 4);
    }

    // Tests that the fallback board is itself a supported size
    #[test]
    fn test_default_board_is_supported() {
        assert_eq!(DEFAULT_WIDTH * DEFAULT_HEIGHT, PLAYABLE_CELLS);
        assert!(DEFAULT_WIDTH >= MIN_BOARD_SIDE);
        assert!(DEFAULT_HEIGHT >= MIN_BOARD_SIDE);
    }

    // Tests the identifier string against the piece count, with no repeats
    #[test]
    fn test_piece_ids_are_distinct() {
        assert_eq!(PIECE_IDS.chars().count(), PIECE_COUNT);
        for (index, id) in PIECE_IDS.chars().enumerate() {
            assert_eq!(
                PIECE_IDS.chars().position(|other| other == id),
                Some(index),
                "duplicate identifier '{id}'"
            );
        }
    }

    // The anchor rule relies on F leading the search order
    #[test]
    fn test_anchor_piece_leads() {
        assert_eq!(PIECE_IDS.chars().next(), Some('F'));
    }
}
