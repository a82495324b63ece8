//! Board-to-text rendering.
//!
//! A pure read-only view: everything here goes through the row-major
//! [`Position::cells`] accessor and never touches bit layout. Callers pick
//! the glyph set; the engine's own `Display` impls use [`Glyphs::ASCII`].

use crate::game::Player;
use crate::location::{Location, MoveList};
use crate::position::Position;
use crate::utils;
use crate::EDGE_LENGTH;
use std::fmt;

/// Symbol mapping used to draw a board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyphs {
    pub black: char,
    pub white: char,
    pub legal: char,
    pub empty: char,
}

impl Glyphs {
    /// Plain ASCII glyphs, as used by the engine's `Display` impls.
    pub const ASCII: Glyphs = Glyphs {
        black: '#',
        white: 'O',
        legal: '*',
        empty: '.',
    };
}

impl Default for Glyphs {
    /// Solid/hollow stone glyphs for terminals with unicode fonts.
    fn default() -> Self {
        Glyphs {
            black: '●',
            white: '○',
            legal: '×',
            empty: '☐',
        }
    }
}

type Grid = [[char; EDGE_LENGTH]; EDGE_LENGTH];

/// Render the bare board.
pub fn board_text(position: Position, glyphs: &Glyphs) -> String {
    GridText(&glyph_grid(position, None, glyphs)).to_string()
}

/// Render the board with `player`'s legal moves marked on empty cells.
pub fn board_text_with_moves(position: Position, player: Player, glyphs: &Glyphs) -> String {
    let moves = position.legal_moves(player);
    GridText(&glyph_grid(position, Some(moves), glyphs)).to_string()
}

/// Render all eight dihedral orientations of the board: each quarter-turn
/// counterclockwise, followed by its left-right mirror. When `overlay` is
/// given, that player's legal moves are marked before transforming.
pub fn symmetry_texts(position: Position, overlay: Option<Player>, glyphs: &Glyphs) -> Vec<String> {
    let moves = overlay.map(|player| position.legal_moves(player));
    let grid = glyph_grid(position, moves, glyphs);

    let mut texts = Vec::with_capacity(8);
    let mut rotated = grid;
    for turn in 0..4 {
        if turn != 0 {
            rotated = rotate_ccw(&rotated);
        }
        texts.push(GridText(&rotated).to_string());
        texts.push(GridText(&mirror(&rotated)).to_string());
    }
    texts
}

fn glyph_grid(position: Position, overlay: Option<MoveList>, glyphs: &Glyphs) -> Grid {
    let legal = overlay.unwrap_or_default();
    let mut grid = [[glyphs.empty; EDGE_LENGTH]; EDGE_LENGTH];

    for (index, cell) in position.cells().enumerate() {
        let glyph = match cell {
            Some(Player::Black) => glyphs.black,
            Some(Player::White) => glyphs.white,
            None if legal.contains(Location::from_index(index as u8)) => glyphs.legal,
            None => glyphs.empty,
        };
        grid[index / EDGE_LENGTH][index % EDGE_LENGTH] = glyph;
    }
    grid
}

fn rotate_ccw(grid: &Grid) -> Grid {
    let mut out = *grid;
    for (row, out_row) in out.iter_mut().enumerate() {
        for (col, cell) in out_row.iter_mut().enumerate() {
            *cell = grid[col][EDGE_LENGTH - 1 - row];
        }
    }
    out
}

fn mirror(grid: &Grid) -> Grid {
    let mut out = *grid;
    for row in out.iter_mut() {
        row.reverse();
    }
    out
}

/// Adapter formatting a glyph grid through [`utils::format_grid`].
struct GridText<'a>(&'a Grid);

impl fmt::Display for GridText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.0.iter().flatten().copied(), f)
    }
}
