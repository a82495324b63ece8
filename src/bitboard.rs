//! Low-level bitboard operations.
//!
//! For efficiency, [`Bitboard`] operations are unchecked and may return
//! nonsense if handed overlapping stone sets or moves that are not legal.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! bit `i` holds the cell at row `i / 8`, column `i % 8`, so the LSB is the
//! upper-left of the board and bits proceed in row-major order.
//!
//! Legal moves and flips are found with a whole-board parallel search: in
//! each compass direction, a frontier of rival stones is extended bitwise
//! from a seed set, fenced against board-edge wraparound, then stepped once
//! past the far end of the run. All 64 cells are evaluated simultaneously.

use crate::utils;
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

use crate::NUM_SPACES;

/// Holds a single bit per location on the board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: the standard central diagonal (D5 and E4).
pub const BLACK_START: Bitboard = Bitboard(0x0000_0008_1000_0000);

/// Starting bitboard for White: the other central diagonal (D4 and E5).
pub const WHITE_START: Bitboard = Bitboard(0x0000_0010_0800_0000);

/// Clears columns A and H. Fences east/west walks against row wraparound.
pub const LEFT_RIGHT_MASK: Bitboard = Bitboard(0x7e7e_7e7e_7e7e_7e7e);

/// Clears rows 1 and 8. Fences north/south walks.
pub const TOP_BOTTOM_MASK: Bitboard = Bitboard(0x00ff_ffff_ffff_ff00);

/// Intersection of [`LEFT_RIGHT_MASK`] and [`TOP_BOTTOM_MASK`].
/// Fences diagonal walks.
pub const INNER_MASK: Bitboard = Bitboard(0x007e_7e7e_7e7e_7e00);

/// The ring of edge cells; complement of [`INNER_MASK`].
pub const BORDER_MASK: Bitboard = Bitboard(0xff81_8181_8181_81ff);

/// Frontier extensions needed to cover the longest rival run: six stones
/// between two endpoints on an eight-cell line, five steps past the first.
const RUN_EXTENSION_STEPS: usize = 5;

/// One of the eight compass directions a capture line can run along.
///
/// Opposite compass pairs are symmetric under the shift sense: each pair
/// shares a bit-index offset (E/W: 1, N/S: 8, NE/SW: 7, NW/SE: 9) and
/// differs only in whether a step moves toward higher or lower indices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Bit-index distance between adjacent cells along this direction.
    #[inline]
    pub const fn offset(self) -> u32 {
        match self {
            Direction::East | Direction::West => 1,
            Direction::North | Direction::South => 8,
            Direction::NorthEast | Direction::SouthWest => 7,
            Direction::NorthWest | Direction::SouthEast => 9,
        }
    }

    /// True when a step along this direction moves toward higher bit indices.
    #[inline]
    pub const fn is_increasing(self) -> bool {
        matches!(
            self,
            Direction::East | Direction::South | Direction::SouthEast | Direction::SouthWest
        )
    }

    /// Mask fencing walks along this direction against edge wraparound.
    #[inline]
    pub const fn edge_mask(self) -> Bitboard {
        match self {
            Direction::East | Direction::West => LEFT_RIGHT_MASK,
            Direction::North | Direction::South => TOP_BOTTOM_MASK,
            _ => INNER_MASK,
        }
    }
}

impl Bitboard {
    /// Count the number of occupied cells in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty cells in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Step every bit one cell along `dir`, dropping bits that would wrap
/// across a board edge.
#[inline]
pub fn shift(word: Bitboard, dir: Direction) -> Bitboard {
    shift_unfenced(word & dir.edge_mask(), dir)
}

/// One raw step along `dir`. Callers fence the operand themselves.
#[inline]
fn shift_unfenced(word: Bitboard, dir: Direction) -> Bitboard {
    if dir.is_increasing() {
        Bitboard(word.0 << dir.offset())
    } else {
        Bitboard(word.0 >> dir.offset())
    }
}

/// The contiguous run of rival stones reachable by walking along `dir` from
/// the stones in `seed`. The rival set is fenced to the direction's edge
/// mask, so a run never crosses a board edge.
fn rival_run(seed: Bitboard, rival: Bitboard, dir: Direction) -> Bitboard {
    let fenced = rival & dir.edge_mask();
    let mut run = fenced & shift_unfenced(seed, dir);
    for _ in 0..RUN_EXTENSION_STEPS {
        run |= fenced & shift_unfenced(run, dir);
    }
    run
}

/// Compute a mask of the legal moves for `own` against `rival`.
/// Returns nonsense if the stone sets overlap.
pub fn legal_moves(own: Bitboard, rival: Bitboard) -> Bitboard {
    let mut moves = Bitboard::default();
    for dir in Direction::ALL {
        moves |= shift_unfenced(rival_run(own, rival, dir), dir);
    }
    moves & !(own | rival)
}

/// Compute the rival stones flipped by playing the one-hot `mv`.
/// A directional run only counts when one further step along the same
/// direction lands on an own stone; an unbounded run flips nothing.
pub fn flipped_stones(mv: Bitboard, own: Bitboard, rival: Bitboard) -> Bitboard {
    let mut flipped = Bitboard::default();
    for dir in Direction::ALL {
        let run = rival_run(mv, rival, dir);
        if !(own & shift_unfenced(run, dir)).is_empty() {
            flipped |= run;
        }
    }
    flipped
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

/// Iterator for the bits in a [`Bitboard`], in row-major cell order.
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    index: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == NUM_SPACES {
            return None;
        }

        let bitmask = Bitboard(1u64 << self.index);
        self.index += 1;

        Some(!(self.bitboard & bitmask).is_empty())
    }
}

impl ExactSizeIterator for Bits {
    fn len(&self) -> usize {
        NUM_SPACES - self.index
    }
}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            index: 0,
            bitboard: self,
        }
    }
}
