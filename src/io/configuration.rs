//! Board and piece constants plus runtime defaults

/// Piece identifiers in search order
///
/// F leads so the symmetry-breaking anchor rule can truncate the orientation
/// set of the first piece before the search begins.
pub const PIECE_IDS: &str = "FLINPTUVWXYZ";

/// Number of pieces in a full set
pub const PIECE_COUNT: usize = 12;

/// Cells covered by every piece
pub const CELLS_PER_PIECE: usize = 5;

/// Playable cells on every supported board
pub const PLAYABLE_CELLS: i32 = 60;

/// Total cells on the board variant with a blocked central 2x2 hole
pub const HOLED_BOARD_CELLS: i32 = 64;

/// Smallest supported board side
pub const MIN_BOARD_SIDE: i32 = 3;

// Invalid or unrecognized sizes silently select this board
/// Default board width
pub const DEFAULT_WIDTH: i32 = 6;
/// Default board height
pub const DEFAULT_HEIGHT: i32 = 10;

// Square boards admit quarter-turn symmetry of the full solution set in
// addition to mirror symmetry; rectangular boards admit mirror symmetry only
/// Orientations kept for the anchor piece on square boards
pub const SQUARE_ANCHOR_ORIENTATIONS: usize = 1;
/// Orientations kept for the anchor piece on rectangular boards
pub const RECTANGULAR_ANCHOR_ORIENTATIONS: usize = 2;

/// Spinner refresh interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 100;
