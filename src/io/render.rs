//! Box-drawing renderer for boards

use crate::spatial::board::Board;

// A corner glyph is selected by a four-bit index built from the mark
// transitions around the lattice point:
//
//             2
//     (-1,-1) | (0,-1)
//         4 --+-- 1
//     (-1, 0) | (0, 0)
//             8
//
// Odd transition counts around a corner occur only where three marks meet,
// so several indices are unreachable and map to empty glyphs.
const UPPER: [&str; 16] = [
    "    ", "", "", "+---", "", "----", "+   ", "+---", "", "+---", "|   ", "+---", "+   ",
    "+---", "+   ", "+---",
];
const LOWER: [&str; 16] = [
    "    ", "", "", "    ", "", "    ", "    ", "    ", "", "|   ", "|   ", "|   ", "|   ",
    "|   ", "|   ", "|   ",
];

/// Render a board as box-drawing text
///
/// Walks every lattice corner, compares the four surrounding marks, and emits
/// the matching glyph for the upper and lower half of each cell row. Border
/// cells participate like any other mark, which draws the outer frame without
/// special cases. Each call returns a freshly owned string.
#[must_use]
pub fn render(board: &Board) -> String {
    let mut rows = Vec::with_capacity((board.height() as usize + 1) * 2);
    for y in 0..=board.height() {
        for table in [&UPPER, &LOWER] {
            let mut line = String::new();
            for x in 0..=board.width() {
                let mut index: usize = 0;
                if board.at(x, y) != board.at(x, y - 1) {
                    index |= 1;
                }
                if board.at(x, y - 1) != board.at(x - 1, y - 1) {
                    index |= 2;
                }
                if board.at(x - 1, y - 1) != board.at(x - 1, y) {
                    index |= 4;
                }
                if board.at(x - 1, y) != board.at(x, y) {
                    index |= 8;
                }
                line.push_str(table.get(index).copied().unwrap_or(""));
            }
            rows.push(line);
        }
    }
    rows.join("\n")
}

/// Number of text lines produced by [`render`] for a board of this height
#[must_use]
pub const fn rendered_lines(board_height: i32) -> i32 {
    (board_height + 1) * 2
}
